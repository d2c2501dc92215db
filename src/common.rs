//! Common types for the engine: coordinates, cells, guess outcomes and errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;

/// A position on the board, zero-based.
///
/// Displayed in the `A5` notation used by the text front end: the letter
/// names the row (`A` is the top row) and the number the column (`1` is the
/// leftmost column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` when the coordinate lies on the standard board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.row < 26 {
            write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Ground truth held by one board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// `true` once the position has been fired upon.
    pub fn is_guessed(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// What the presentation layer is allowed to see of a cell.
///
/// Un-hit ship cells and empty water both show as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CellView {
    Unknown,
    Miss,
    Hit,
    /// A hit cell belonging to a ship that has been sunk.
    Sunk,
}

/// Result of resolving a guess against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GuessOutcome {
    /// The cell was already hit or missed; nothing changed.
    AlreadyGuessed,
    Miss,
    /// Guess hit a ship that still has intact segments.
    Hit,
    /// Guess hit the last intact segment of the ship at index `ship`.
    HitAndSunk { ship: usize },
}

/// Errors returned by board and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Ship size list is empty, holds a size outside `1..=BOARD_SIZE`, or
    /// does not fit on the board.
    InvalidConfiguration,
    /// Coordinate lies outside the board.
    OutOfBounds(Coord),
    /// A manually placed ship would run past the board edge.
    ShipOutOfBounds,
    /// A manually placed ship would overlap another ship.
    ShipOverlaps,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidConfiguration => write!(f, "Invalid ship size configuration"),
            BoardError::OutOfBounds(c) => {
                write!(f, "Coordinate (row {}, col {}) is off the board", c.row, c.col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
