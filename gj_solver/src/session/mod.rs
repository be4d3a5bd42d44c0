use std::io::Write;

use anyhow::{Context, Result};

use crate::format::{render_matrix, render_solution};
use crate::grid::CellGrid;
use crate::matrix::{solve, SolveError};

/// What the session currently shows. There is never more than one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved {
        matrix_text: String,
        solution_text: String,
    },
    Failed {
        message: String,
    },
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved { .. })
    }

    pub fn to_text(&self) -> String {
        match self {
            Outcome::Solved {
                matrix_text,
                solution_text,
            } => format!("{matrix_text}\n\n{solution_text}"),
            Outcome::Failed { message } => message.clone(),
        }
    }
}

impl From<SolveError> for Outcome {
    fn from(err: SolveError) -> Self {
        Outcome::Failed {
            message: err.to_string(),
        }
    }
}

/// Owns the cell grid and the displayed outcome. The solver itself is
/// stateless and never sees either.
pub struct Session {
    grid: CellGrid,
    outcome: Option<Outcome>,
}

impl Session {
    pub fn new(grid: CellGrid) -> Self {
        Self {
            grid,
            outcome: None,
        }
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut CellGrid {
        &mut self.grid
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn resize(&mut self, rows: usize, columns: usize) {
        log::debug!("resizing grid to {rows}x{columns}");
        self.grid.resize(rows, columns);
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.outcome = None;
    }

    /// Parses the grid, solves, and replaces whatever was shown before.
    pub fn solve(&mut self) -> &Outcome {
        let outcome = match self.grid.to_matrix().and_then(solve) {
            Ok(reduced) => {
                log::info!(
                    "solved {}-variable system",
                    reduced.matrix.number_of_rows()
                );
                Outcome::Solved {
                    matrix_text: render_matrix(&reduced.matrix),
                    solution_text: render_solution(&reduced.solution()),
                }
            }
            Err(err) => {
                log::info!("solve failed: {err:?}");
                Outcome::from(err)
            }
        };
        self.outcome.insert(outcome)
    }

    pub fn export<W: Write>(&self, mut writer: W) -> Result<()> {
        if let Some(outcome) = &self.outcome {
            writeln!(writer, "{}", outcome.to_text()).context("writing outcome")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sources::text_source::parse_grid_text;

    fn session(text: &str) -> Session {
        Session::new(parse_grid_text(text))
    }

    #[test]
    fn solves_and_renders() {
        let mut s = session("2 1 -1 8\n-3 -1 2 -11\n-2 1 2 -3");
        let outcome = s.solve().clone();
        assert_eq!(
            outcome,
            Outcome::Solved {
                matrix_text: "1.00\t0.00\t0.00\t2.00\n0.00\t1.00\t0.00\t3.00\n0.00\t0.00\t1.00\t-1.00"
                    .to_string(),
                solution_text: "x1 = 2.00\nx2 = 3.00\nx3 = -1.00".to_string(),
            }
        );
    }

    #[test]
    fn singular_system_shows_one_message() {
        let mut s = session("1 1 2\n2 2 4");
        assert_eq!(
            s.solve(),
            &Outcome::Failed {
                message: "matrix is singular or system has no unique solution".to_string()
            }
        );
    }

    #[test]
    fn shape_error_is_reported() {
        let mut s = session("1 2 3");
        assert_eq!(
            s.solve().to_text(),
            "matrix must include one additional column for constant terms"
        );
    }

    #[test]
    fn overflow_is_shown_as_an_error() {
        let mut s = session("1 0 1e308\n-1 1 1e308");
        assert_eq!(
            s.solve().to_text(),
            "elimination overflowed at row 1, column 3"
        );
    }

    #[test]
    fn error_replaces_previous_result() {
        let mut s = session("2 4");
        assert!(s.solve().is_solved());
        s.grid_mut().set(0, 0, "zero").unwrap();
        assert_eq!(
            s.solve().to_text(),
            "row 1, column 1: cannot convert \"zero\" to a number"
        );
        s.grid_mut().set(0, 0, "4").unwrap();
        assert_eq!(s.solve().to_text(), "1.00\t1.00\n\nx1 = 1.00");
    }

    #[test]
    fn clear_drops_cells_and_outcome() {
        let mut s = session("2 4");
        s.solve();
        s.clear();
        assert_eq!(s.outcome(), None);
        assert_eq!(s.grid().get(0, 0), Some(""));
    }

    #[test]
    fn resize_then_fill_and_solve() {
        let mut s = Session::new(CellGrid::default());
        s.resize(2, 3);
        for (r, row) in [["1", "1", "3"], ["1", "-1", "1"]].iter().enumerate() {
            for (c, text) in row.iter().enumerate() {
                s.grid_mut().set(r, c, *text).unwrap();
            }
        }
        assert_eq!(s.solve().to_text(), "1.00\t0.00\t2.00\n0.00\t1.00\t1.00\n\nx1 = 2.00\nx2 = 1.00");
    }

    #[test]
    fn export_writes_the_current_outcome() {
        let mut s = session("2 4");
        let mut out = Vec::new();
        s.export(&mut out).unwrap();
        assert!(out.is_empty());
        s.solve();
        s.export(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1.00\t2.00\n\nx1 = 2.00\n");
    }
}
