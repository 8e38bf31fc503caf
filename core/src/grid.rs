use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular board of cells, indexed by `(row, col)`.
///
/// Accessing a position outside the board is a contract violation and panics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Creates a board with every cell [`Cell::Hidden`].
    pub fn new(size: Coord2) -> Result<Self> {
        if size.0 < 1 || size.1 < 1 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self {
            cells: Array2::default(size.to_nd_index()),
        })
    }

    /// Creates a board with mines at the given positions and everything else hidden.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Self::new(size)?;
        for &coords in mine_coords {
            grid.set(coords, Cell::Mine);
        }
        Ok(grid)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // dimensions come from a `Coord2`, so they always fit
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn in_bounds(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        self.check_bounds(coords);
        NeighborIter::new(coords, self.size())
    }

    pub fn get(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    pub fn set(&mut self, coords: Coord2, cell: Cell) {
        self[coords] = cell;
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_matching(Cell::is_mine)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_matching(Cell::is_revealed)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.neighbors(coords)
            .filter(|&pos| self[pos].is_mine())
            .count() as u8
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    fn count_matching(&self, predicate: impl Fn(Cell) -> bool) -> CellCount {
        // bounded by `Coord::MAX * Coord::MAX`
        self.cells.iter().filter(|&&cell| predicate(cell)).count() as CellCount
    }

    fn check_bounds(&self, coords: Coord2) {
        assert!(
            self.in_bounds(coords),
            "coordinates {:?} outside of board of size {:?}",
            coords,
            self.size()
        );
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        self.check_bounds(coords);
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        self.check_bounds(coords);
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_hidden() {
        let grid = Grid::new((3, 4)).unwrap();

        assert_eq!(grid.size(), (3, 4));
        assert_eq!(grid.total_cells(), 12);
        assert!(grid.positions().all(|pos| grid.get(pos) == Cell::Hidden));
    }

    #[test]
    fn empty_dimensions_are_rejected() {
        assert_eq!(Grid::new((0, 5)), Err(GameError::InvalidSize));
        assert_eq!(Grid::new((5, 0)), Err(GameError::InvalidSize));
    }

    #[test]
    fn bounds_checks() {
        let grid = Grid::new((2, 3)).unwrap();

        assert!(grid.in_bounds((0, 0)));
        assert!(grid.in_bounds((1, 2)));
        assert!(!grid.in_bounds((2, 0)));
        assert!(!grid.in_bounds((0, 3)));
    }

    #[test]
    #[should_panic(expected = "outside of board")]
    fn out_of_bounds_access_panics() {
        let grid = Grid::new((2, 2)).unwrap();
        grid.get((2, 0));
    }

    #[test]
    fn counts_adjacent_mines() {
        let grid = Grid::from_mine_coords((3, 3), &[(0, 0), (0, 2), (2, 1)]).unwrap();

        assert_eq!(grid.mine_count(), 3);
        assert_eq!(grid.adjacent_mine_count((1, 1)), 3);
        assert_eq!(grid.adjacent_mine_count((0, 1)), 2);
        assert_eq!(grid.adjacent_mine_count((2, 2)), 1);
    }

    #[test]
    fn positions_are_row_major() {
        let grid = Grid::new((2, 2)).unwrap();
        let positions: Vec<_> = grid.positions().collect();

        assert_eq!(positions, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn serializes_cells_by_variant_name() {
        let mut grid = Grid::from_mine_coords((1, 3), &[(0, 0)]).unwrap();
        grid.set((0, 2), Cell::Revealed(0));

        let json = serde_json::to_value(&grid).unwrap();

        assert_eq!(json["cells"]["data"][0], "Mine");
        assert_eq!(json["cells"]["data"][1], "Hidden");
        assert_eq!(json["cells"]["data"][2], serde_json::json!({ "Revealed": 0 }));
    }
}
