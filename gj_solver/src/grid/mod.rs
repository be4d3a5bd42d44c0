use anyhow::{ensure, Result};

use crate::matrix::{AugmentedMatrix, ParseError, SolveError};

/// Default grid dimensions: three equations, three unknowns plus constants.
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 4,
        }
    }
}

/// Raw text cells as typed by the user. Nothing is validated until
/// [`CellGrid::to_matrix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: Vec<Vec<String>>,
    number_of_columns: usize,
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::from_config(&GridConfig::default())
    }
}

/// Converts one cell's text to a finite number.
pub fn parse_cell(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError {
            text: text.to_string(),
        }),
    }
}

impl CellGrid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: (0..rows).map(|_| vec![String::new(); columns]).collect(),
            number_of_columns: columns,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.rows, config.columns)
    }

    /// Builds a grid from rows of text, padding short rows with empty cells.
    pub fn from_text_rows(rows: Vec<Vec<String>>) -> Self {
        let number_of_columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = Self {
            cells: rows,
            number_of_columns: 0,
        };
        grid.resize(grid.cells.len(), number_of_columns);
        grid
    }

    pub fn number_of_rows(&self) -> usize {
        self.cells.len()
    }

    pub fn number_of_columns(&self) -> usize {
        self.number_of_columns
    }

    /// Grows with empty cells or drops trailing rows and columns. Text in
    /// surviving cells is kept.
    pub fn resize(&mut self, new_rows: usize, new_columns: usize) {
        self.cells
            .resize_with(new_rows, || vec![String::new(); new_columns]);
        for row in self.cells.iter_mut() {
            row.resize_with(new_columns, String::new);
        }
        self.number_of_columns = new_columns;
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.clear();
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&str> {
        self.cells.get(row)?.get(column).map(String::as_str)
    }

    pub fn set(&mut self, row: usize, column: usize, text: impl Into<String>) -> Result<()> {
        ensure!(
            row < self.number_of_rows() && column < self.number_of_columns,
            "cell ({}, {}) is outside a {}x{} grid",
            row + 1,
            column + 1,
            self.number_of_rows(),
            self.number_of_columns
        );
        self.cells[row][column] = text.into();
        Ok(())
    }

    /// Parses every cell in row-major order. The first bad cell wins.
    pub fn to_matrix(&self) -> Result<AugmentedMatrix, SolveError> {
        let rows = self
            .cells
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(column, text)| {
                        parse_cell(text).map_err(|source| SolveError::Parse {
                            row,
                            column,
                            source,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        AugmentedMatrix::from_rows(rows)
    }

    #[cfg(test)]
    pub fn to_text(&self) -> String {
        use itertools::Itertools;
        self.cells.iter().map(|row| row.join(" ")).join("\n")
    }
}
