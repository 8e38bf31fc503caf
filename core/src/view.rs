use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only snapshot of what a renderer may show.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    cells: Array2<VisibleCell>,
}

impl BoardView {
    pub fn new(grid: &Grid, reveal_mines: bool) -> Self {
        let mut cells = Array2::from_elem(grid.size().to_nd_index(), VisibleCell::Hidden);
        for coords in grid.positions() {
            cells[coords.to_nd_index()] = VisibleCell::from_cell(grid[coords], reveal_mines);
        }
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn cell_at(&self, coords: Coord2) -> VisibleCell {
        self.cells[coords.to_nd_index()]
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, VisibleCell>> {
        self.cells.rows().into_iter()
    }
}
