use alloc::vec::Vec;

use super::*;

/// Places mines at fixed positions; relocation picks the first free cell in row-major order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PresetMinefieldGenerator {
    mines: Vec<Coord2>,
}

impl PresetMinefieldGenerator {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }
}

impl MinefieldGenerator for PresetMinefieldGenerator {
    fn place_mines(&mut self, grid: &mut Grid, count: CellCount) {
        check_placement(grid, count);
        assert!(
            usize::from(count) <= self.mines.len(),
            "preset holds {} mines but {} were requested",
            self.mines.len(),
            count
        );

        for &coords in &self.mines[..usize::from(count)] {
            assert_eq!(
                grid[coords],
                Cell::Hidden,
                "preset mine at {:?} is listed twice or lands on a taken cell",
                coords
            );
            grid[coords] = Cell::Mine;
        }
    }

    fn relocate_mine(&mut self, grid: &mut Grid, coords: Coord2) -> Coord2 {
        check_relocation(grid, coords);

        let target = grid
            .positions()
            .find(|&pos| grid[pos] == Cell::Hidden)
            .expect("relocation checks guarantee a hidden cell");
        grid[target] = Cell::Mine;
        grid[coords] = Cell::Hidden;
        target
    }
}
