//! A fixed-size occupancy mask using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `N×N` grid
//! is packed into an unsigned integer `T`; ships use it to track the cells
//! they cover and the cells that have been hit.

use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coord;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create a new empty bitboard without size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if N * N > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Number of marked cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// `true` if `coord` is marked. Off-board coordinates are never marked.
    pub fn contains(&self, coord: Coord) -> bool {
        if coord.row >= N || coord.col >= N {
            return false;
        }
        ((self.bits >> Self::index(coord)) & T::one()) != T::zero()
    }

    /// Marks `coord`.
    pub fn insert(&mut self, coord: Coord) -> Result<(), BitBoardError> {
        if coord.row >= N || coord.col >= N {
            return Err(BitBoardError::IndexOutOfBounds {
                row: coord.row,
                col: coord.col,
            });
        }
        self.bits = self.bits | (T::one() << Self::index(coord));
        Ok(())
    }

    /// Creates a bitboard from an iterator over coordinates, checking that
    /// `T` is wide enough first.
    pub fn from_coords<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut board = Self::try_new()?;
        for coord in iter {
            board.insert(coord)?;
        }
        Ok(board)
    }

    /// Iterator over marked cells in row-major order.
    pub fn coords(&self) -> Coords<'_, T, N> {
        Coords {
            board: self,
            idx: 0,
        }
    }

    #[inline]
    fn index(coord: Coord) -> usize {
        coord.row * N + coord.col
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(Coord::new(r, c)) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the marked cells of a bitboard.
#[derive(Clone, Copy)]
pub struct Coords<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<T, const N: usize> Iterator for Coords<'_, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(Coord::new(idx / N, idx % N));
            }
        }
        None
    }
}
