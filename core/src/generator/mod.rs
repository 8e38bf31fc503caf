use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Source of mine positions for a session.
pub trait MinefieldGenerator {
    /// Marks `count` distinct hidden cells of `grid` as mines.
    fn place_mines(&mut self, grid: &mut Grid, count: CellCount);

    /// Moves the mine at `coords` to another hidden cell and clears `coords`, returning the new mine position.
    fn relocate_mine(&mut self, grid: &mut Grid, coords: Coord2) -> Coord2;
}

fn check_placement(grid: &Grid, count: CellCount) {
    let free_cells = grid
        .positions()
        .filter(|&pos| grid[pos] == Cell::Hidden)
        .count();
    assert!(
        usize::from(count) < free_cells,
        "cannot place {} mines on {} free cells and keep one safe",
        count,
        free_cells
    );
}

fn check_relocation(grid: &Grid, coords: Coord2) {
    assert!(
        grid[coords].is_mine(),
        "relocation requested for {:?}, which holds no mine",
        coords
    );
    assert!(
        grid.positions().any(|pos| grid[pos] == Cell::Hidden),
        "no free cell left to relocate the mine at {:?}",
        coords
    );
}
