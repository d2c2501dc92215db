#![cfg(feature = "std")]

//! The blocking read-one-event loop tying an input source, a game and the
//! renderer together.

use std::io::Write;

use rand::Rng;

use crate::common::GuessOutcome;
use crate::game::{Event, Game, Phase, Response};
use crate::input::{EventSource, Input};
use crate::ui::{render, RenderMode};

/// Status line for the result of one event.
pub fn describe<R: Rng>(response: &Response, game: &Game<R>) -> Option<String> {
    let text = match *response {
        Response::CursorMoved(_) => return None,
        Response::Guessed { coord, outcome } => {
            let mut text = match outcome {
                GuessOutcome::AlreadyGuessed => format!("{}: already tried that one.", coord),
                GuessOutcome::Miss => format!(
                    "{}: miss. {} misses left.",
                    coord,
                    game.state().misses_remaining()
                ),
                GuessOutcome::Hit => format!("{}: hit!", coord),
                GuessOutcome::HitAndSunk { ship } => match game.ship_name(ship) {
                    Some(name) => format!("{}: hit! You sank the {}!", coord, name),
                    None => format!("{}: hit! You sank a ship!", coord),
                },
            };
            match game.phase() {
                Phase::Won => text.push_str(" All ships sunk. You win!"),
                Phase::Lost => text.push_str(" Out of misses. Game over."),
                _ => {}
            }
            text
        }
        Response::Restarted => "New board. Good hunting.".to_string(),
        Response::Exited => "Goodbye.".to_string(),
        Response::Ignored if game.phase().is_over() => {
            "The game is over: r to play again, q to quit.".to_string()
        }
        Response::Ignored if game.phase() == Phase::Exited => return None,
        Response::Ignored => "Restart is only available once the game is over.".to_string(),
    };
    Some(text)
}

/// Run until the player quits or the input ends. Returns the phase the game
/// was in when the session ended, before the quit.
pub fn run<R, S, W>(
    game: &mut Game<R>,
    source: &mut S,
    out: &mut W,
    mode: RenderMode,
) -> anyhow::Result<Phase>
where
    R: Rng,
    S: EventSource,
    W: Write,
{
    let mut message = String::from("Find the fleet.");
    let mut last_phase = game.phase();
    loop {
        if !source.has_pending() {
            render(out, game, &message, mode)?;
        }
        if game.phase() == Phase::Exited {
            return Ok(last_phase);
        }
        let event = match source.next_input(game.cursor())? {
            Input::Event(ev) => ev,
            Input::Invalid(reason) => {
                message = reason;
                continue;
            }
            Input::Closed => {
                log::debug!("input closed");
                Event::Quit
            }
        };
        last_phase = game.phase();
        match game.handle(event) {
            Ok(response) => {
                if let Some(text) = describe(&response, game) {
                    message = text;
                }
            }
            Err(e) => {
                log::warn!("rejected {:?}: {}", event, e);
                message = e.to_string();
            }
        }
    }
}
