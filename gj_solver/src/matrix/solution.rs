use super::augmented::AugmentedMatrix;

/// Variable assignments read off the constants column of a reduced matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    values: Vec<f64>,
}

impl Solution {
    pub fn from_reduced(m: &AugmentedMatrix) -> Self {
        Self {
            values: m.last_column().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// `(variable index, value)` pairs, indices start at 1.
    pub fn labeled(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values().enumerate().map(|(i, v)| (i + 1, v))
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn columnless_matrix_gives_empty_solution() {
        let solution = Solution::from_reduced(&AugmentedMatrix::zeroes(3, 0));
        assert!(solution.is_empty());
    }

    #[test]
    fn labels_start_at_one() {
        let m = AugmentedMatrix::from_rows(vec![vec![1.0, 0.0, 4.0], vec![0.0, 1.0, -2.0]]).unwrap();
        let solution = Solution::from_reduced(&m);
        assert_eq!(solution.len(), 2);
        assert_eq!(solution.labeled().collect_vec(), vec![(1, 4.0), (2, -2.0)]);
    }
}
