pub mod augmented;
pub mod error;
pub mod gauss_jordan;
pub mod solution;

pub use augmented::AugmentedMatrix;
pub use error::{ParseError, SolveError};
pub use gauss_jordan::{solve, GaussJordan, ReducedMatrix, SolverPhase};
pub use solution::Solution;
