use anyhow::{ensure, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::source::GridSource;
use crate::format::format_value;
use crate::grid::CellGrid;
use crate::matrix::AugmentedMatrix;

/// Random `size`-variable system with integer solutions in -9..=9.
///
/// Coefficients are integers in -9..=9 and each diagonal entry outweighs the
/// rest of its row, so the system always has exactly one solution.
pub fn random_system<G: Rng>(rng: &mut G, size: usize) -> (AugmentedMatrix, Vec<f64>) {
    let solution: Vec<f64> = (0..size).map(|_| rng.gen_range(-9..=9) as f64).collect();
    let mut system = AugmentedMatrix::zeroes(size, size + 1);
    for r in 0..size {
        let mut off_diagonal = 0.0;
        for c in (0..size).filter(|c| *c != r) {
            let v = rng.gen_range(-9..=9) as f64;
            off_diagonal += v.abs();
            system.set(r, c, v);
        }
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        system.set(r, r, sign * (off_diagonal + rng.gen_range(1..=9) as f64));
        let constant: f64 = (0..size).map(|c| system.get(r, c) * solution[c]).sum();
        system.set(r, size, constant);
    }
    (system, solution)
}

pub struct RandomSource {
    size: usize,
    rng: StdRng,
}

impl RandomSource {
    pub fn new(size: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { size, rng }
    }
}

impl GridSource for RandomSource {
    fn load(&mut self) -> Result<CellGrid> {
        ensure!(self.size > 0, "a random system needs at least one variable");
        let (system, solution) = random_system(&mut self.rng, self.size);
        log::debug!("generated {}-variable system with solution {solution:?}", self.size);
        let mut grid = CellGrid::new(system.number_of_rows(), system.number_of_columns());
        for (r, row) in system.rows().enumerate() {
            for (c, v) in row.iter().enumerate() {
                grid.set(r, c, format_value(*v))?;
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rows_are_diagonally_dominant() {
        let mut rng = StdRng::seed_from_u64(3);
        let (system, _) = random_system(&mut rng, 5);
        for (r, row) in system.rows().enumerate() {
            let rest: f64 = row[..5]
                .iter()
                .enumerate()
                .filter(|(c, _)| *c != r)
                .map(|(_, v)| v.abs())
                .sum();
            assert!(row[r].abs() > rest);
        }
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let a = RandomSource::new(4, Some(11)).load().unwrap();
        let b = RandomSource::new(4, Some(11)).load().unwrap();
        assert_eq!(a, b);
        assert_eq!((a.number_of_rows(), a.number_of_columns()), (4, 5));
        assert!(a.to_matrix().is_ok());
    }

    #[test]
    fn zero_size_is_refused() {
        assert!(RandomSource::new(0, Some(1)).load().is_err());
    }
}
