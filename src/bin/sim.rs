use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;
use solo_battleship::{path_to, Coord, Event, Game, Response, BOARD_SIZE};

/// Plays one game by firing at every cell in a seed-shuffled order and
/// prints a JSON summary.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    solo_battleship::init_logging();

    let mut game = Game::new(SmallRng::seed_from_u64(seed)).map_err(|e| anyhow::anyhow!(e))?;
    let mut order: Vec<Coord> = (0..BOARD_SIZE * BOARD_SIZE)
        .map(|i| Coord::new(i / BOARD_SIZE, i % BOARD_SIZE))
        .collect();
    order.shuffle(&mut SmallRng::seed_from_u64(seed.wrapping_add(1)));

    let mut guesses = 0;
    for target in order {
        if game.phase().is_over() {
            break;
        }
        for event in path_to(game.cursor(), target) {
            let response = game.handle(event).map_err(|e| anyhow::anyhow!(e))?;
            if let Response::Guessed { .. } = response {
                guesses += 1;
            }
        }
    }
    game.handle(Event::Quit).map_err(|e| anyhow::anyhow!(e))?;

    let result = json!({
        "seed": seed,
        "result": if game.is_won() { "won" } else if game.is_lost() { "lost" } else { "unfinished" },
        "hits": game.hits(),
        "misses": game.misses(),
        "ships_sunk": game.ships_sunk(),
        "guesses": guesses,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
