#![cfg_attr(not(test), no_std)]

extern crate alloc;

use core::ops::RangeInclusive;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use reveal::*;
pub use types::*;
pub use view::*;

mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod reveal;
mod types;
mod view;

/// Rows and columns accepted for a custom board.
pub const CUSTOM_SIZE_RANGE: RangeInclusive<Coord> = 3..=20;

/// Mines accepted for a custom board, further capped below the cell count.
pub const CUSTOM_MINES_RANGE: RangeInclusive<CellCount> = 1..=99;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Checks that the board is non-empty and that at least one cell stays free of mines.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(size, mines).validate()
    }

    pub fn validate(self) -> Result<Self> {
        if self.size.0 < 1 || self.size.1 < 1 {
            Err(GameError::InvalidSize)
        } else if self.mines < 1 {
            Err(GameError::NoMines)
        } else if self.mines >= self.total_cells() {
            Err(GameError::TooManyMines)
        } else {
            Ok(self)
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
    Custom { size: Coord2, mines: CellCount },
}

impl Difficulty {
    pub fn config(self) -> Result<GameConfig> {
        use Difficulty::*;
        match self {
            Beginner => GameConfig::new((9, 9), 10),
            Intermediate => GameConfig::new((15, 15), 40),
            Expert => GameConfig::new((20, 20), 99),
            Custom { size, mines } => GameConfig::new(size, mines),
        }
    }

    /// Mines a player may ask for on a custom board of `size`, always leaving one safe cell.
    pub fn custom_mines_range(size: Coord2) -> RangeInclusive<CellCount> {
        let most = (*CUSTOM_MINES_RANGE.end()).min(mult(size.0, size.1).saturating_sub(1));
        *CUSTOM_MINES_RANGE.start()..=most
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// The cell was revealed before; nothing changed.
    AlreadyRevealed,
    /// Safe move, with the number of newly revealed cells.
    Revealed(CellCount),
    HitMine,
}
