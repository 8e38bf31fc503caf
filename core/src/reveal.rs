use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Reveals `origin` and every cell its flood-fill reaches, returning the newly revealed positions in reveal order.
///
/// Cells with no adjacent mines spread to their hidden neighbors. A numbered cell reached by the flood is a dead end;
/// only a numbered origin also opens its hidden neighbors. Mines are never revealed.
///
/// Panics when `origin` is not [`Cell::Hidden`].
pub fn reveal(grid: &mut Grid, origin: Coord2) -> Vec<Coord2> {
    assert_eq!(
        grid[origin],
        Cell::Hidden,
        "reveal origin {:?} is not a hidden safe cell",
        origin
    );

    let mut visited: Array2<bool> = Array2::default(grid.size().to_nd_index());
    visited[origin.to_nd_index()] = true;
    let mut to_visit = vec![origin];
    let mut revealed = Vec::new();

    while let Some(coords) = to_visit.pop() {
        let adjacent_mines = grid.adjacent_mine_count(coords);
        grid[coords] = Cell::Revealed(adjacent_mines);
        revealed.push(coords);
        log::trace!("Revealed {:?}, adjacent mines: {}", coords, adjacent_mines);

        if adjacent_mines != 0 && coords != origin {
            continue;
        }

        for pos in grid.neighbors(coords) {
            if grid[pos] == Cell::Hidden && !visited[pos.to_nd_index()] {
                visited[pos.to_nd_index()] = true;
                to_visit.push(pos);
            }
        }
    }

    log::debug!("Reveal at {:?} opened {} cells", origin, revealed.len());
    revealed
}
