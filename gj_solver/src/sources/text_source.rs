use std::io::Read;

use anyhow::{Context, Result};
use itertools::Itertools;

use super::source::GridSource;
use crate::grid::CellGrid;

/// Reads a grid from plain text: one row per line, cells split on
/// whitespace and commas. Blank lines and `#` comments are skipped.
pub struct TextSource<R> {
    reader: R,
    name: String,
}

impl<R: Read> TextSource<R> {
    pub fn new(reader: R, name: impl Into<String>) -> Self {
        Self {
            reader,
            name: name.into(),
        }
    }
}

pub fn parse_grid_text(text: &str) -> CellGrid {
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
                .collect_vec()
        })
        .collect_vec();
    CellGrid::from_text_rows(rows)
}

impl<R: Read> GridSource for TextSource<R> {
    fn load(&mut self) -> Result<CellGrid> {
        let mut text = String::new();
        self.reader
            .read_to_string(&mut text)
            .with_context(|| format!("reading matrix from {}", self.name))?;
        let grid = parse_grid_text(&text);
        log::debug!(
            "loaded {}x{} grid from {}",
            grid.number_of_rows(),
            grid.number_of_columns(),
            self.name
        );
        Ok(grid)
    }
}
