use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - AwaitingFirstMove -> Playing
/// - AwaitingFirstMove -> Won
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    AwaitingFirstMove,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_awaiting_first_move(self) -> bool {
        matches!(self, Self::AwaitingFirstMove)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::AwaitingFirstMove
    }
}

/// A single game from mine placement to win or loss.
#[derive(Clone, Debug)]
pub struct Game<G> {
    grid: Grid,
    generator: G,
    mine_count: CellCount,
    cells_remaining: Saturating<CellCount>,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl<G: MinefieldGenerator> Game<G> {
    /// Creates an empty board for `config` and lets `generator` place the mines.
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        let config = config.validate()?;
        let mut grid = Grid::new(config.size)?;
        generator.place_mines(&mut grid, config.mines);
        Self::from_grid(grid, generator)
    }

    /// Wraps a board whose mines are already placed.
    pub fn from_grid(grid: Grid, generator: G) -> Result<Self> {
        let config = GameConfig::new(grid.size(), grid.mine_count())?;
        let hidden = grid
            .positions()
            .filter(|&pos| grid[pos] == Cell::Hidden)
            .count();
        log::debug!(
            "New game, size: {:?}, mines: {}",
            config.size,
            config.mines
        );
        Ok(Self {
            grid,
            generator,
            mine_count: config.mines,
            // bounded by the board size
            cells_remaining: Saturating(hidden as CellCount),
            state: Default::default(),
            triggered_mine: None,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_count
    }

    /// Safe cells that still have to be revealed to win.
    pub fn cells_remaining(&self) -> CellCount {
        self.cells_remaining.0
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords]
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Read-only snapshot for rendering, showing mines only when `reveal_mines` is set.
    pub fn view(&self, reveal_mines: bool) -> BoardView {
        BoardView::new(&self.grid, reveal_mines)
    }

    /// Plays the cell at `coords`.
    ///
    /// The first move never loses: a mine under it is moved elsewhere before revealing. Panics if `coords` is outside
    /// the board, since callers validate input first.
    pub fn submit_move(&mut self, coords: Coord2) -> Result<MoveResult> {
        self.check_not_finished()?;
        assert!(
            self.grid.in_bounds(coords),
            "move at {:?} outside of board of size {:?}",
            coords,
            self.grid.size()
        );

        match self.grid[coords] {
            Cell::Revealed(_) => return Ok(MoveResult::AlreadyRevealed),
            Cell::Mine if self.state.is_awaiting_first_move() => {
                let target = self.generator.relocate_mine(&mut self.grid, coords);
                log::debug!("First move on a mine at {:?}, moved it to {:?}", coords, target);
            }
            Cell::Mine => {
                self.triggered_mine = Some(coords);
                self.end_game(false);
                return Ok(MoveResult::HitMine);
            }
            Cell::Hidden => {}
        }

        // bounded by the board size
        let revealed = reveal(&mut self.grid, coords).len() as CellCount;
        self.cells_remaining -= Saturating(revealed);

        if self.cells_remaining.0 == 0 {
            self.end_game(true);
        } else {
            self.mark_started();
        }
        Ok(MoveResult::Revealed(revealed))
    }

    fn mark_started(&mut self) {
        if self.state.is_awaiting_first_move() {
            log::debug!("Game started");
            self.state = GameState::Playing;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            GameState::Won
        } else {
            GameState::Lost
        };
        log::debug!("Game ended: {:?}", self.state);
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
