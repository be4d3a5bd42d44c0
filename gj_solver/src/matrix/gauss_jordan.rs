use strum_macros::{Display, EnumIter};

use super::augmented::AugmentedMatrix;
use super::error::SolveError;
use super::solution::Solution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SolverPhase {
    Validate,
    ForwardEliminate,
    BackwardEliminate,
    Normalize,
    Done,
    Failed,
}

impl SolverPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, SolverPhase::Done | SolverPhase::Failed)
    }
}

/// Gauss-Jordan elimination with partial pivoting over an owned augmented
/// matrix. A solver runs once: every phase moves forward and a failure is
/// terminal.
pub struct GaussJordan {
    matrix: AugmentedMatrix,
    phase: SolverPhase,
    active_pivot: usize,
    failure: Option<SolveError>,
}

/// Output of a successful solve: identity on the left, solution on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedMatrix {
    pub matrix: AugmentedMatrix,
}

impl ReducedMatrix {
    pub fn solution(&self) -> Solution {
        Solution::from_reduced(&self.matrix)
    }
}

/// Solves the system held in `matrix`.
pub fn solve(matrix: AugmentedMatrix) -> Result<ReducedMatrix, SolveError> {
    GaussJordan::new(matrix).run()
}

impl GaussJordan {
    pub fn new(matrix: AugmentedMatrix) -> Self {
        Self {
            matrix,
            phase: SolverPhase::Validate,
            active_pivot: 0,
            failure: None,
        }
    }

    pub fn phase(&self) -> SolverPhase {
        self.phase
    }

    pub fn matrix(&self) -> &AugmentedMatrix {
        &self.matrix
    }

    pub fn run(mut self) -> Result<ReducedMatrix, SolveError> {
        self.drive()?;
        Ok(ReducedMatrix {
            matrix: self.matrix,
        })
    }

    /// Runs every remaining phase in place. On error the solver is left in
    /// `SolverPhase::Failed` with the partially reduced matrix, and every
    /// later call returns the same error.
    pub fn drive(&mut self) -> Result<(), SolveError> {
        let outcome = self.step_through_phases();
        if let Err(err) = &outcome {
            self.phase = SolverPhase::Failed;
            self.failure = Some(err.clone());
        }
        outcome
    }

    fn step_through_phases(&mut self) -> Result<(), SolveError> {
        loop {
            match self.phase {
                SolverPhase::Validate => {
                    self.validate()?;
                    self.phase = SolverPhase::ForwardEliminate;
                }
                SolverPhase::ForwardEliminate => {
                    while self.has_pivots_left() {
                        self.pivot_active_column()?;
                        self.eliminate_below_active_pivot();
                        self.go_to_next_pivot();
                    }
                    self.phase = SolverPhase::BackwardEliminate;
                }
                SolverPhase::BackwardEliminate => {
                    for pivot in (0..self.matrix.number_of_rows()).rev() {
                        self.eliminate_above(pivot);
                    }
                    self.phase = SolverPhase::Normalize;
                }
                SolverPhase::Normalize => {
                    self.normalize_rows();
                    self.check_for_overflow()?;
                    self.phase = SolverPhase::Done;
                }
                SolverPhase::Done => return Ok(()),
                SolverPhase::Failed => {
                    return match &self.failure {
                        Some(err) => Err(err.clone()),
                        None => Ok(()),
                    }
                }
            }
        }
    }

    fn validate(&self) -> Result<(), SolveError> {
        let rows = self.matrix.number_of_rows();
        let columns = self.matrix.number_of_columns();
        if rows == 0 || columns != rows + 1 {
            return Err(SolveError::Shape { rows, columns });
        }
        if let Some((row, column)) = self.matrix.first_non_finite() {
            return Err(SolveError::NonFiniteEntry { row, column });
        }
        Ok(())
    }

    fn has_pivots_left(&self) -> bool {
        self.active_pivot < self.matrix.number_of_rows()
    }

    fn pivot_active_column(&mut self) -> Result<(), SolveError> {
        let p = self.active_pivot;
        let pivot_row = self.matrix.row_of_max_abs_in_column(p, p);
        self.matrix.swap_rows(p, pivot_row);
        // exact comparison, a tiny pivot is still a pivot
        if self.matrix.get(p, p) == 0.0 {
            return Err(SolveError::Singular { pivot: p });
        }
        Ok(())
    }

    fn eliminate_below_active_pivot(&mut self) {
        let p = self.active_pivot;
        for i in p + 1..self.matrix.number_of_rows() {
            self.zero_entry_with_pivot(i, p);
        }
    }

    fn eliminate_above(&mut self, pivot: usize) {
        for i in (0..pivot).rev() {
            self.zero_entry_with_pivot(i, pivot);
        }
    }

    fn zero_entry_with_pivot(&mut self, row: usize, pivot: usize) {
        let factor = self.matrix.get(row, pivot) / self.matrix.get(pivot, pivot);
        self.matrix.subtract_scaled_row(row, pivot, factor);
    }

    fn normalize_rows(&mut self) {
        for i in 0..self.matrix.number_of_rows() {
            let diag = self.matrix.get(i, i);
            self.matrix.divide_row(i, diag);
        }
    }

    // finite input can still blow up to inf/NaN through the row updates
    fn check_for_overflow(&self) -> Result<(), SolveError> {
        match self.matrix.first_non_finite() {
            Some((row, column)) => Err(SolveError::Overflow { row, column }),
            None => Ok(()),
        }
    }

    fn go_to_next_pivot(&mut self) {
        self.active_pivot += 1;
    }
}
