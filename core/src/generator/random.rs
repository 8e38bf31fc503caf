use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniformly random placement by rejection sampling: draw a position, retry when it is taken.
#[derive(Clone, Debug)]
pub struct RandomMinefieldGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomMinefieldGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws until a hidden cell comes up, returning it with the number of draws spent.
    fn draw_hidden(&mut self, grid: &Grid) -> (Coord2, u32) {
        let (rows, cols) = grid.size();
        let mut draws = 0;
        loop {
            draws += 1;
            let coords = (self.rng.random_range(0..rows), self.rng.random_range(0..cols));
            if grid[coords] == Cell::Hidden {
                return (coords, draws);
            }
        }
    }
}

impl RandomMinefieldGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MinefieldGenerator for RandomMinefieldGenerator<R> {
    fn place_mines(&mut self, grid: &mut Grid, count: CellCount) {
        check_placement(grid, count);

        let mut total_draws = 0;
        for _ in 0..count {
            let (coords, draws) = self.draw_hidden(grid);
            grid[coords] = Cell::Mine;
            total_draws += draws;
        }
        log::debug!("Placed {} mines in {} draws", count, total_draws);
    }

    fn relocate_mine(&mut self, grid: &mut Grid, coords: Coord2) -> Coord2 {
        check_relocation(grid, coords);

        let (target, draws) = self.draw_hidden(grid);
        grid[target] = Cell::Mine;
        grid[coords] = Cell::Hidden;
        log::trace!("Relocation target found after {} draws", draws);
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(seed: u64, size: Coord2, count: CellCount) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        RandomMinefieldGenerator::from_seed(seed).place_mines(&mut grid, count);
        grid
    }

    #[test]
    fn places_exact_mine_count() {
        for (seed, size, count) in [(1, (9, 9), 10), (2, (15, 15), 40), (3, (20, 20), 99)] {
            let grid = placed(seed, size, count);

            assert_eq!(grid.mine_count(), count);
            assert!(
                grid.positions()
                    .all(|pos| matches!(grid[pos], Cell::Mine | Cell::Hidden))
            );
        }
    }

    #[test]
    fn fills_all_but_one_cell() {
        let grid = placed(7, (4, 5), 19);

        assert_eq!(grid.mine_count(), 19);
        let free: Vec<_> = grid
            .positions()
            .filter(|&pos| grid[pos] == Cell::Hidden)
            .collect();
        assert_eq!(free.len(), 1);
    }

    #[test]
    fn same_seed_gives_same_board() {
        assert_eq!(placed(42, (16, 16), 40), placed(42, (16, 16), 40));
    }

    #[test]
    fn relocation_preserves_mine_count() {
        let mut grid = placed(5, (6, 6), 20);
        let mut generator = RandomMinefieldGenerator::from_seed(99);
        let mines: Vec<_> = grid.positions().filter(|&pos| grid[pos].is_mine()).collect();

        for coords in mines {
            let target = generator.relocate_mine(&mut grid, coords);

            assert_ne!(target, coords);
            assert_eq!(grid[coords], Cell::Hidden);
            assert_eq!(grid[target], Cell::Mine);
            assert_eq!(grid.mine_count(), 20);
        }
    }

    #[test]
    fn relocation_into_last_free_cell() {
        let mut grid = Grid::from_mine_coords((1, 3), &[(0, 0), (0, 1)]).unwrap();

        let target = RandomMinefieldGenerator::from_seed(0).relocate_mine(&mut grid, (0, 0));

        assert_eq!(target, (0, 2));
        assert_eq!(grid[(0, 0)], Cell::Hidden);
        assert_eq!(grid.mine_count(), 2);
    }

    #[test]
    fn seeded_relocation_is_deterministic() {
        let relocate = || {
            let mut grid = placed(11, (8, 8), 30);
            let first_mine = grid.positions().find(|&pos| grid[pos].is_mine()).unwrap();
            let mut generator = RandomMinefieldGenerator::from_seed(12);
            generator.relocate_mine(&mut grid, first_mine);
            grid
        };

        assert_eq!(relocate(), relocate());
    }

    #[test]
    #[should_panic(expected = "holds no mine")]
    fn relocating_a_safe_cell_panics() {
        let mut grid = Grid::new((3, 3)).unwrap();
        RandomMinefieldGenerator::from_seed(0).relocate_mine(&mut grid, (1, 1));
    }

    #[test]
    #[should_panic(expected = "keep one safe")]
    fn full_board_is_rejected() {
        placed(0, (2, 2), 4);
    }
}
