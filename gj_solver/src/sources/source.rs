use anyhow::Result;

use crate::grid::CellGrid;

pub trait GridSource {
    fn load(&mut self) -> Result<CellGrid>;
}
