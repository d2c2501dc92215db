//! Game controller: counters, cursor and the win/loss/replay state machine
//! layered over a [`Board`].

use alloc::vec::Vec;
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, Cell, CellView, Coord, GuessOutcome},
    config::{BOARD_SIZE, MISS_BUDGET, SHIP_SIZES},
};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Discrete input consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Event {
    Move(Direction),
    Submit,
    Restart,
    Quit,
}

/// Where the game is in its lifecycle.
///
/// Placement happens inside the constructor and on restart, so a live
/// controller is never observed mid-placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Phase {
    Playing,
    Won,
    Lost,
    Exited,
}

impl Phase {
    /// `true` for `Won` and `Lost`.
    pub fn is_over(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// What handling one event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    CursorMoved(Coord),
    Guessed { coord: Coord, outcome: GuessOutcome },
    Restarted,
    Exited,
    /// The event has no meaning in the current phase; nothing changed.
    Ignored,
}

/// Counters and cursor for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameState {
    pub hits: usize,
    pub misses: usize,
    pub ships_sunk: usize,
    pub cursor: Coord,
    /// Hits needed to win.
    pub target_hits: usize,
    pub miss_budget: usize,
}

impl GameState {
    /// Fresh counters for a board with `target_hits` ship cells.
    pub fn new(target_hits: usize) -> Self {
        Self {
            hits: 0,
            misses: 0,
            ships_sunk: 0,
            cursor: Coord::new(0, 0),
            target_hits,
            miss_budget: MISS_BUDGET,
        }
    }

    pub fn is_won(&self) -> bool {
        self.hits == self.target_hits
    }

    pub fn is_lost(&self) -> bool {
        self.misses == self.miss_budget
    }

    /// Misses left before the game is lost.
    pub fn misses_remaining(&self) -> usize {
        self.miss_budget.saturating_sub(self.misses)
    }

    /// State after moving the cursor one cell, clamped to the board.
    pub fn moved(self, direction: Direction) -> Self {
        let Coord { row, col } = self.cursor;
        let last = BOARD_SIZE - 1;
        let cursor = match direction {
            Direction::Up => Coord::new(row.saturating_sub(1), col),
            Direction::Down => Coord::new((row + 1).min(last), col),
            Direction::Left => Coord::new(row, col.saturating_sub(1)),
            Direction::Right => Coord::new(row, (col + 1).min(last)),
        };
        Self { cursor, ..self }
    }

    /// State after a resolved guess. `AlreadyGuessed` leaves it unchanged.
    pub fn record(self, outcome: GuessOutcome) -> Self {
        match outcome {
            GuessOutcome::AlreadyGuessed => self,
            GuessOutcome::Miss => Self {
                misses: self.misses + 1,
                ..self
            },
            GuessOutcome::Hit => Self {
                hits: self.hits + 1,
                ..self
            },
            GuessOutcome::HitAndSunk { .. } => Self {
                hits: self.hits + 1,
                ships_sunk: self.ships_sunk + 1,
                ..self
            },
        }
    }
}

/// Single-player game: one hidden board, one cursor, one miss budget.
pub struct Game<R: Rng> {
    rng: R,
    sizes: Vec<usize>,
    board: Board,
    state: GameState,
    phase: Phase,
}

impl<R: Rng> Game<R> {
    /// Start a game with the standard fleet.
    ///
    /// Fails with `InvalidConfiguration` only if the fleet table is broken.
    pub fn new(rng: R) -> Result<Self, BoardError> {
        Self::with_sizes(rng, &SHIP_SIZES)
    }

    /// Start a game with ships of the given lengths.
    pub fn with_sizes(mut rng: R, sizes: &[usize]) -> Result<Self, BoardError> {
        let board = Board::place_ships(sizes, &mut rng)?;
        Ok(Self::start(rng, sizes.to_vec(), board))
    }

    /// Start from an already laid out board. Restarting re-deals ships of
    /// the same lengths at random.
    ///
    /// Shots already on the board count: the counters start from its `Hit`
    /// and `Miss` cells, and a board that is already won or lost starts in
    /// that phase. More misses than the budget allows is rejected.
    pub fn from_board(rng: R, board: Board) -> Result<Self, BoardError> {
        let sizes: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
        if sizes.is_empty() {
            return Err(BoardError::InvalidConfiguration);
        }
        let mut game = Self::start(rng, sizes, board);
        let (hits, misses) = game.board.cells().fold((0, 0), |(h, m), cell| match cell {
            Cell::Hit => (h + 1, m),
            Cell::Miss => (h, m + 1),
            _ => (h, m),
        });
        if misses > game.state.miss_budget {
            return Err(BoardError::InvalidConfiguration);
        }
        game.state = GameState {
            hits,
            misses,
            ships_sunk: game.board.ships_sunk(),
            ..game.state
        };
        game.phase = if game.state.is_won() {
            Phase::Won
        } else if game.state.is_lost() {
            Phase::Lost
        } else {
            Phase::Playing
        };
        if hits + misses > 0 {
            log::debug!(
                "resumed with {} hits and {} misses: {:?}",
                hits,
                misses,
                game.phase
            );
        }
        Ok(game)
    }

    fn start(rng: R, sizes: Vec<usize>, board: Board) -> Self {
        let state = GameState::new(board.total_ship_cells());
        log::info!(
            "new game: {} ships, {} cells to find, {} misses allowed",
            sizes.len(),
            state.target_hits,
            state.miss_budget
        );
        Self {
            rng,
            sizes,
            board,
            state,
            phase: Phase::Playing,
        }
    }

    /// Apply one input event.
    ///
    /// An `Err` means the event was rejected and nothing changed.
    pub fn handle(&mut self, event: Event) -> Result<Response, BoardError> {
        log::debug!("{:?} in {:?}", event, self.phase);
        match (self.phase, event) {
            (Phase::Exited, _) => Ok(Response::Ignored),
            (_, Event::Quit) => {
                self.phase = Phase::Exited;
                log::info!("player quit");
                Ok(Response::Exited)
            }
            (Phase::Playing, Event::Move(direction)) => {
                self.state = self.state.moved(direction);
                Ok(Response::CursorMoved(self.state.cursor))
            }
            (Phase::Playing, Event::Submit) => self.submit(),
            (Phase::Won | Phase::Lost, Event::Restart) => {
                self.restart()?;
                Ok(Response::Restarted)
            }
            _ => Ok(Response::Ignored),
        }
    }

    fn submit(&mut self) -> Result<Response, BoardError> {
        let coord = self.state.cursor;
        let outcome = self.board.resolve_guess(coord)?;
        self.state = self.state.record(outcome);
        if self.state.is_won() {
            self.phase = Phase::Won;
            log::info!(
                "won with {} misses to spare",
                self.state.misses_remaining()
            );
        } else if self.state.is_lost() {
            self.phase = Phase::Lost;
            log::info!(
                "lost with {} of {} ship cells found",
                self.state.hits,
                self.state.target_hits
            );
        }
        Ok(Response::Guessed { coord, outcome })
    }

    fn restart(&mut self) -> Result<(), BoardError> {
        let board = Board::place_ships(&self.sizes, &mut self.rng)?;
        self.state = GameState::new(board.total_ship_cells());
        self.board = board;
        self.phase = Phase::Playing;
        log::info!("restarted");
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Snapshot of counters and cursor.
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn cursor(&self) -> Coord {
        self.state.cursor
    }

    pub fn hits(&self) -> usize {
        self.state.hits
    }

    pub fn misses(&self) -> usize {
        self.state.misses
    }

    pub fn ships_sunk(&self) -> usize {
        self.state.ships_sunk
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn is_lost(&self) -> bool {
        self.state.is_lost()
    }

    /// Fogged view of `coord` for rendering.
    pub fn view(&self, coord: Coord) -> Result<CellView, BoardError> {
        self.board.view(coord)
    }

    /// Number of ships in play.
    pub fn fleet_size(&self) -> usize {
        self.sizes.len()
    }

    /// Fleet name of ship `index`, for ships dealt from the standard fleet.
    pub fn ship_name(&self, index: usize) -> Option<&'static str> {
        self.board.ships().get(index).and_then(|ship| ship.name())
    }

    /// The underlying board. Exposes ground truth; renderers should use
    /// [`Game::view`] instead.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Events that walk the cursor from `from` to `to` and fire there.
///
/// Lets a coordinate-driven front end speak the same event contract as a
/// cursor-driven one.
pub fn path_to(from: Coord, to: Coord) -> Vec<Event> {
    let mut events = Vec::new();
    let vertical = if to.row < from.row { Direction::Up } else { Direction::Down };
    let horizontal = if to.col < from.col { Direction::Left } else { Direction::Right };
    events.extend((0..from.row.abs_diff(to.row)).map(|_| Event::Move(vertical)));
    events.extend((0..from.col.abs_diff(to.col)).map(|_| Event::Move(horizontal)));
    events.push(Event::Submit);
    events
}
