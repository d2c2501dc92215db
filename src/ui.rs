#![cfg(feature = "std")]

//! Terminal drawing of the fogged board and game status.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, MoveToNextLine, Show},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::Rng;

use crate::common::{CellView, Coord};
use crate::config::BOARD_SIZE;
use crate::game::{Game, Phase};

/// How the board is put on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Full-screen redraw with colors and a highlighted cursor, for raw-mode
    /// keyboard play.
    Cursor,
    /// Plain scrolling text, for typed coordinates or piped output.
    Text,
}

/// Raw mode plus alternate screen for the lifetime of the guard.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter<W: Write>(out: &mut W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        queue!(out, EnterAlternateScreen, Hide)?;
        out.flush()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = queue!(out, Show, LeaveAlternateScreen);
        let _ = out.flush();
        let _ = terminal::disable_raw_mode();
    }
}

fn glyph(view: CellView) -> (char, Color) {
    match view {
        CellView::Unknown => ('.', Color::DarkGrey),
        CellView::Miss => ('o', Color::Blue),
        CellView::Hit => ('X', Color::Red),
        CellView::Sunk => ('#', Color::Yellow),
    }
}

fn newline<W: Write>(out: &mut W, mode: RenderMode) -> io::Result<()> {
    match mode {
        RenderMode::Cursor => queue!(out, MoveToNextLine(1)),
        RenderMode::Text => writeln!(out),
    }
}

/// Draw the board, counters and `message`.
pub fn render<R: Rng, W: Write>(
    out: &mut W,
    game: &Game<R>,
    message: &str,
    mode: RenderMode,
) -> io::Result<()> {
    if mode == RenderMode::Cursor {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    queue!(out, Print("    "))?;
    for c in 1..=BOARD_SIZE {
        queue!(out, Print(format!("{:>2} ", c)))?;
    }
    newline(out, mode)?;

    let cursor = game.cursor();
    for r in 0..BOARD_SIZE {
        queue!(out, Print(format!("  {} ", (b'A' + r as u8) as char)))?;
        for c in 0..BOARD_SIZE {
            let coord = Coord::new(r, c);
            let view = game.view(coord).unwrap_or(CellView::Unknown);
            let (ch, color) = glyph(view);
            match mode {
                RenderMode::Text => queue!(out, Print(format!(" {} ", ch)))?,
                RenderMode::Cursor => {
                    let selected = coord == cursor && game.phase() == Phase::Playing;
                    if selected {
                        queue!(out, SetAttribute(Attribute::Reverse))?;
                    }
                    queue!(
                        out,
                        SetForegroundColor(color),
                        Print(format!(" {} ", ch)),
                        ResetColor,
                        SetAttribute(Attribute::Reset)
                    )?;
                }
            }
        }
        newline(out, mode)?;
    }
    newline(out, mode)?;

    let state = game.state();
    queue!(
        out,
        Print(format!(
            "Hits: {}/{}   Misses: {}/{}   Ships sunk: {}/{}",
            state.hits,
            state.target_hits,
            state.misses,
            state.miss_budget,
            state.ships_sunk,
            game.fleet_size()
        ))
    )?;
    newline(out, mode)?;
    let help = match (mode, game.phase()) {
        (_, Phase::Won | Phase::Lost) => "r: play again   q: quit",
        (RenderMode::Cursor, _) => "arrows/wasd/hjkl: move   enter/space: fire   q: quit",
        (RenderMode::Text, _) => "enter a cell like A5 to fire, q to quit",
    };
    queue!(out, Print(help))?;
    newline(out, mode)?;
    if !message.is_empty() {
        queue!(out, Print(message))?;
        newline(out, mode)?;
    }
    if mode == RenderMode::Text && game.phase() != Phase::Exited {
        queue!(out, Print("> "))?;
    }
    out.flush()
}
