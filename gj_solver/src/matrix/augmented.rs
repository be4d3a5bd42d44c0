use super::error::SolveError;

/// Dense row-major matrix whose last column holds the constant terms.
///
/// Rows are always the same length; the R x (R + 1) shape is only checked
/// when the matrix is handed to the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    number_of_columns: usize,
    rows: Vec<Vec<f64>>,
}

impl AugmentedMatrix {
    pub fn zeroes(rows: usize, cols: usize) -> Self {
        Self {
            number_of_columns: cols,
            rows: (0..rows).map(|_| vec![0.0; cols]).collect(),
        }
    }

    /// Builds a matrix from parsed rows, rejecting empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SolveError> {
        let number_of_columns = rows.first().map(Vec::len).unwrap_or(0);
        if number_of_columns == 0 {
            return Err(SolveError::Shape {
                rows: rows.len(),
                columns: 0,
            });
        }
        if let Some(ragged) = rows.iter().find(|row| row.len() != number_of_columns) {
            return Err(SolveError::Shape {
                rows: rows.len(),
                columns: ragged.len(),
            });
        }
        Ok(Self {
            number_of_columns,
            rows,
        })
    }

    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn number_of_columns(&self) -> usize {
        self.number_of_columns
    }

    pub fn last_col_idx(&self) -> Option<usize> {
        self.number_of_columns.checked_sub(1)
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.rows[r][c]
    }

    pub fn set(&mut self, r: usize, c: usize, v: f64) {
        self.rows[r][c] = v;
    }

    pub fn row(&self, r: usize) -> &[f64] {
        &self.rows[r]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Empty when the matrix has no columns.
    pub fn last_column(&self) -> impl Iterator<Item = f64> + '_ {
        let last = self.last_col_idx();
        self.rows
            .iter()
            .filter_map(move |row| last.map(|c| row[c]))
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            self.rows.swap(a, b);
        }
    }

    /// `rows[target] -= factor * rows[source]`, over the whole row.
    pub fn subtract_scaled_row(&mut self, target: usize, source: usize, factor: f64) {
        debug_assert_ne!(target, source);
        let (src, dst) = if source < target {
            let (head, tail) = self.rows.split_at_mut(target);
            (&head[source], &mut tail[0])
        } else {
            let (head, tail) = self.rows.split_at_mut(source);
            (&tail[0], &mut head[target])
        };
        for (d, s) in dst.iter_mut().zip(src.iter()) {
            *d -= factor * s;
        }
    }

    pub fn divide_row(&mut self, r: usize, divisor: f64) {
        for v in self.rows[r].iter_mut() {
            *v /= divisor;
        }
    }

    /// Row in `from..` holding the largest |value| in column `c`. Ties go to
    /// the first such row.
    pub fn row_of_max_abs_in_column(&self, c: usize, from: usize) -> usize {
        let mut best = from;
        for r in from + 1..self.rows.len() {
            if self.rows[r][c].abs() > self.rows[best][c].abs() {
                best = r;
            }
        }
        best
    }

    /// First non-finite entry in row-major order.
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|v| !v.is_finite())
                .map(|c| (r, c))
        })
    }
}
