//! Board model: the hidden grid, the fleet placed on it, and guess resolution.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, Cell, CellView, Coord, GuessOutcome};
use crate::config::{fleet_for, BOARD_SIZE};
use crate::ship::{Orientation, Ship};

/// A ship as laid out on the standard board.
pub type PlacedShip = Ship<u128, BOARD_SIZE>;

/// Main board state: per-cell truth plus the ships covering it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<PlacedShip>,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
        }
    }

    /// Lay out one ship per entry of `sizes`, in order, at random.
    ///
    /// Each ship is placed by rejection sampling: draw an origin anywhere on
    /// the grid and a random orientation, keep the draw only if the whole run
    /// fits and touches no other ship. The same seed and sizes always yield
    /// the same layout. Ships of the standard fleet take their names from
    /// the fleet table.
    pub fn place_ships<R: Rng>(sizes: &[usize], rng: &mut R) -> Result<Self, BoardError> {
        validate_sizes(sizes)?;
        let fleet = fleet_for(sizes);
        let mut board = Board::empty();
        for (i, &length) in sizes.iter().enumerate() {
            let mut attempts = 0usize;
            loop {
                attempts += 1;
                let origin = Coord::new(
                    rng.random_range(0..BOARD_SIZE),
                    rng.random_range(0..BOARD_SIZE),
                );
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                match board.place(origin, length, orientation) {
                    Ok(index) => {
                        if let Some(def) = fleet.and_then(|f| f.get(i)) {
                            board.ships[index] = board.ships[index].named(def.name());
                        }
                        log::trace!(
                            "ship {} (length {}) at {} {:?} after {} draws",
                            index,
                            length,
                            origin,
                            orientation,
                            attempts
                        );
                        break;
                    }
                    Err(BoardError::ShipOutOfBounds | BoardError::ShipOverlaps) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        log::debug!(
            "placed {} ships covering {} cells",
            board.ships.len(),
            board.total_ship_cells()
        );
        Ok(board)
    }

    /// Place a single ship at `origin`, returning its index.
    pub fn place(
        &mut self,
        origin: Coord,
        length: usize,
        orientation: Orientation,
    ) -> Result<usize, BoardError> {
        let ship = PlacedShip::new(length, orientation, origin)?;
        // scan the candidate run for anything but open water
        if ship.cells().any(|c| self.cells[c.row][c.col] != Cell::Empty) {
            return Err(BoardError::ShipOverlaps);
        }
        for c in ship.cells() {
            self.cells[c.row][c.col] = Cell::Ship;
        }
        self.ships.push(ship);
        Ok(self.ships.len() - 1)
    }

    /// Fire at `coord`.
    ///
    /// Exactly one cell changes state per successful call, and at most one
    /// ship can become sunk.
    pub fn resolve_guess(&mut self, coord: Coord) -> Result<GuessOutcome, BoardError> {
        let cell = self.cell(coord)?;
        let outcome = match cell {
            Cell::Hit | Cell::Miss => GuessOutcome::AlreadyGuessed,
            Cell::Empty => {
                self.cells[coord.row][coord.col] = Cell::Miss;
                GuessOutcome::Miss
            }
            Cell::Ship => {
                self.cells[coord.row][coord.col] = Cell::Hit;
                let owner = self
                    .ships
                    .iter_mut()
                    .enumerate()
                    .find(|(_, ship)| ship.contains(coord));
                match owner {
                    Some((index, ship)) => {
                        ship.register_hit(coord);
                        if ship.is_sunk() {
                            GuessOutcome::HitAndSunk { ship: index }
                        } else {
                            GuessOutcome::Hit
                        }
                    }
                    // every Ship cell is written by place(), which records the owner
                    None => GuessOutcome::Hit,
                }
            }
        };
        log::trace!("guess {} -> {:?}", coord, outcome);
        Ok(outcome)
    }

    /// `true` iff `coord` belongs to a ship that has been sunk.
    pub fn is_cell_revealed_sunk(&self, coord: Coord) -> bool {
        self.ship_at(coord).is_some_and(|(_, ship)| ship.is_sunk())
    }

    /// Ground truth at `coord`.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        if !coord.in_bounds() {
            return Err(BoardError::OutOfBounds(coord));
        }
        Ok(self.cells[coord.row][coord.col])
    }

    /// Ground truth of every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// What a player may see at `coord`. Intact ship segments read as
    /// `Unknown`, exactly like open water.
    pub fn view(&self, coord: Coord) -> Result<CellView, BoardError> {
        Ok(match self.cell(coord)? {
            Cell::Empty | Cell::Ship => CellView::Unknown,
            Cell::Miss => CellView::Miss,
            Cell::Hit if self.is_cell_revealed_sunk(coord) => CellView::Sunk,
            Cell::Hit => CellView::Hit,
        })
    }

    /// Ship covering `coord` along with its index.
    pub fn ship_at(&self, coord: Coord) -> Option<(usize, &PlacedShip)> {
        self.ships
            .iter()
            .enumerate()
            .find(|(_, ship)| ship.contains(coord))
    }

    /// Immutable view of the placed ships, in placement order.
    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Number of cells covered by ships.
    pub fn total_ship_cells(&self) -> usize {
        self.ships.iter().map(|s| s.length()).sum()
    }

    pub fn ships_sunk(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

fn validate_sizes(sizes: &[usize]) -> Result<(), BoardError> {
    if sizes.is_empty() || sizes.iter().any(|&s| s == 0 || s > BOARD_SIZE) {
        return Err(BoardError::InvalidConfiguration);
    }
    if sizes.iter().sum::<usize>() > BOARD_SIZE * BOARD_SIZE {
        return Err(BoardError::InvalidConfiguration);
    }
    Ok(())
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in &self.cells {
            write!(f, "  ")?;
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Ship => 'S',
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  ships: {:?}", self.ships)?;
        write!(f, "}}")
    }
}
