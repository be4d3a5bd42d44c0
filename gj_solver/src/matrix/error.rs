use thiserror::Error;

/// A grid cell whose text is not a finite number.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("cannot convert {text:?} to a number")]
pub struct ParseError {
    pub text: String,
}

/// Everything that can stop a solve. All variants are terminal for the call,
/// row and column indices are zero based.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("matrix must include one additional column for constant terms")]
    Shape { rows: usize, columns: usize },

    #[error("matrix is singular or system has no unique solution")]
    Singular { pivot: usize },

    #[error("entry at row {}, column {} is not a finite number", .row + 1, .column + 1)]
    NonFiniteEntry { row: usize, column: usize },

    #[error("elimination overflowed at row {}, column {}", .row + 1, .column + 1)]
    Overflow { row: usize, column: usize },

    #[error("row {}, column {}: {}", .row + 1, .column + 1, .source)]
    Parse {
        row: usize,
        column: usize,
        #[source]
        source: ParseError,
    },
}
