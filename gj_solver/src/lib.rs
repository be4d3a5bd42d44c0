pub mod format;
pub mod grid;
pub mod matrix;
pub mod session;
pub mod sources;
