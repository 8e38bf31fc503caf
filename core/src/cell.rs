use serde::{Deserialize, Serialize};

/// State of a single grid position, owned by the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Unrevealed and safe.
    Hidden,
    /// Unrevealed mine.
    Mine,
    /// Revealed, with the number of adjacent mines.
    Revealed(u8),
}

impl Cell {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Hidden
    }
}

/// What the player is allowed to see of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    Hidden,
    Mine,
    Empty,
    Number(u8),
}

impl VisibleCell {
    pub const fn from_cell(cell: Cell, reveal_mines: bool) -> Self {
        match cell {
            Cell::Hidden => Self::Hidden,
            Cell::Mine if reveal_mines => Self::Mine,
            Cell::Mine => Self::Hidden,
            Cell::Revealed(0) => Self::Empty,
            Cell::Revealed(count) => Self::Number(count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mines_stay_hidden_unless_requested() {
        assert_eq!(VisibleCell::from_cell(Cell::Mine, false), VisibleCell::Hidden);
        assert_eq!(VisibleCell::from_cell(Cell::Mine, true), VisibleCell::Mine);
    }

    #[test]
    fn revealed_zero_is_empty() {
        assert_eq!(
            VisibleCell::from_cell(Cell::Revealed(0), true),
            VisibleCell::Empty
        );
        assert_eq!(
            VisibleCell::from_cell(Cell::Revealed(3), false),
            VisibleCell::Number(3)
        );
    }
}
