#![cfg(feature = "std")]

//! Input adapters: turn key presses or typed lines into engine [`Event`]s.
//!
//! | Key | Event |
//! |-----|-------|
//! | ← → ↑ ↓, WASD, HJKL (either case) | move cursor |
//! | Enter, Space | submit |
//! | R | restart |
//! | Q, Esc, Ctrl+C | quit |

use std::collections::VecDeque;
use std::io::BufRead;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::common::Coord;
use crate::config::BOARD_SIZE;
use crate::game::{path_to, Direction, Event};

/// One unit of player input as seen by the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Event(Event),
    /// The player typed something that means nothing; carry the reason.
    Invalid(String),
    /// The input stream ended.
    Closed,
}

/// A blocking source of player input.
pub trait EventSource {
    /// Wait for the next input. `cursor` is the current cursor position, for
    /// sources that address cells directly.
    fn next_input(&mut self, cursor: Coord) -> anyhow::Result<Input>;

    /// `true` if events are already queued, so a redraw can be skipped.
    fn has_pending(&self) -> bool {
        false
    }
}

/// Map a key press to an engine event. Releases and unbound keys map to
/// `None`.
pub fn key_to_event(key: &KeyEvent) -> Option<Event> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Event::Quit),
            _ => None,
        };
    }
    let event = match key.code {
        KeyCode::Up => Event::Move(Direction::Up),
        KeyCode::Down => Event::Move(Direction::Down),
        KeyCode::Left => Event::Move(Direction::Left),
        KeyCode::Right => Event::Move(Direction::Right),
        KeyCode::Enter => Event::Submit,
        KeyCode::Esc => Event::Quit,
        // letter bindings ignore case
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'w' | 'k' => Event::Move(Direction::Up),
            's' | 'j' => Event::Move(Direction::Down),
            'a' | 'h' => Event::Move(Direction::Left),
            'd' | 'l' => Event::Move(Direction::Right),
            ' ' => Event::Submit,
            'r' => Event::Restart,
            'q' => Event::Quit,
            _ => return None,
        },
        _ => return None,
    };
    Some(event)
}

/// Parse a cell name like `A5` or `j10`: row letter, then column number.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need a row letter and column number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let row_ch = chars.next().ok_or("No row letter")?.to_ascii_uppercase();
    let last_row = (b'A' + BOARD_SIZE as u8 - 1) as char;
    if !row_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid row '{}' - must be a letter A-{}", row_ch, last_row));
    }
    let row = (row_ch as u8 - b'A') as usize;
    if row >= BOARD_SIZE {
        return Err(format!("Row '{}' out of bounds - must be A-{}", row_ch, last_row));
    }
    let col_str: String = chars.collect();
    let col: usize = col_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number 1-{}", col_str, BOARD_SIZE))?;
    if col == 0 || col > BOARD_SIZE {
        return Err(format!("Column {} out of bounds - must be 1-{}", col, BOARD_SIZE));
    }
    Ok(Coord::new(row, col - 1))
}

/// A typed line: a target cell or a command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Target(Coord),
    Restart,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }
    if line.eq_ignore_ascii_case("r") || line.eq_ignore_ascii_case("restart") {
        return Ok(Command::Restart);
    }
    parse_coord(line).map(Command::Target)
}

/// Raw-mode keyboard input read through crossterm.
pub struct KeyboardSource;

impl EventSource for KeyboardSource {
    fn next_input(&mut self, _cursor: Coord) -> anyhow::Result<Input> {
        loop {
            if let TermEvent::Key(key) = event::read()? {
                if let Some(ev) = key_to_event(&key) {
                    return Ok(Input::Event(ev));
                }
                log::trace!("unbound key {:?}", key.code);
            }
        }
    }
}

/// Line-oriented input: each line names a cell or a command.
///
/// A cell becomes the cursor moves needed to reach it followed by a submit,
/// so the engine sees the same events as with the keyboard.
pub struct LineSource<B: BufRead> {
    reader: B,
    pending: VecDeque<Event>,
}

impl<B: BufRead> LineSource<B> {
    pub fn new(reader: B) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<B: BufRead> EventSource for LineSource<B> {
    fn next_input(&mut self, cursor: Coord) -> anyhow::Result<Input> {
        if let Some(ev) = self.pending.pop_front() {
            return Ok(Input::Event(ev));
        }
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(Input::Closed);
        }
        match parse_command(&line) {
            Ok(Command::Quit) => Ok(Input::Event(Event::Quit)),
            Ok(Command::Restart) => Ok(Input::Event(Event::Restart)),
            Ok(Command::Target(target)) => {
                self.pending.extend(path_to(cursor, target));
                // path_to always ends with a submit
                Ok(self
                    .pending
                    .pop_front()
                    .map_or(Input::Event(Event::Submit), Input::Event))
            }
            Err(reason) => Ok(Input::Invalid(reason)),
        }
    }

    fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
