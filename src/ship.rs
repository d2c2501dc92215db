//! Ship definitions: fleet entries and placed ships.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coord};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell `i` steps along this orientation from `origin`.
    fn step(self, origin: Coord, i: usize) -> Coord {
        match self {
            Orientation::Horizontal => Coord::new(origin.row, origin.col + i),
            Orientation::Vertical => Coord::new(origin.row + i, origin.col),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on an N×N board, with hits tracked in a `BitBoard`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    name: Option<&'static str>,
    length: usize,
    orientation: Orientation,
    origin: Coord,
    mask: BitBoard<T, N>,
    hits: BitBoard<T, N>,
    sunk: bool,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Lay a ship of `length` cells starting at `origin`.
    ///
    /// Fails with `BitBoardError(SizeTooLarge)` if `T` cannot hold an N×N
    /// grid.
    pub fn new(length: usize, orientation: Orientation, origin: Coord) -> Result<Self, BoardError> {
        if length == 0 || length > N {
            return Err(BoardError::InvalidConfiguration);
        }
        if origin.row >= N || origin.col >= N {
            return Err(BoardError::ShipOutOfBounds);
        }
        let end = orientation.step(origin, length - 1);
        if end.row >= N || end.col >= N {
            return Err(BoardError::ShipOutOfBounds);
        }
        let mask = BitBoard::from_coords((0..length).map(|i| orientation.step(origin, i)))?;
        Ok(Ship {
            name: None,
            length,
            orientation,
            origin,
            mask,
            hits: BitBoard::new(),
            sunk: false,
        })
    }

    /// The same ship carrying a fleet name.
    pub fn named(self, name: &'static str) -> Self {
        Self {
            name: Some(name),
            ..self
        }
    }

    /// Fleet name, if the ship was dealt from a named fleet.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Record a hit at `coord`. Returns `true` if the ship covers it.
    ///
    /// The sunk flag is latched the first time every segment is hit.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        if !self.mask.contains(coord) {
            return false;
        }
        // mask.contains() already vetted the bounds
        let _ = self.hits.insert(coord);
        if self.hits == self.mask {
            self.sunk = true;
        }
        true
    }

    /// `true` once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// `true` if the ship occupies `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.mask.contains(coord)
    }

    /// Cells covered by the ship, in order from the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        // a straight run reads the same row-major as from its origin
        self.mask.coords()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: {}, origin: {}, length: {}, orientation: {:?}, hits: {}, sunk: {} }}",
            self.name.unwrap_or("-"),
            self.origin,
            self.length,
            self.orientation,
            self.hits.count_ones(),
            self.sunk,
        )
    }
}
