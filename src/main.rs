#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use solo_battleship::{
    init_logging,
    input::{KeyboardSource, LineSource},
    session,
    ui::{RenderMode, TerminalGuard},
    Game, Phase, MISS_BUDGET, TOTAL_SHIP_CELLS,
};

/// Find and sink the hidden fleet before you run out of misses.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Type cell names like A5 instead of steering a cursor")]
    text: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut game = Game::new(rng).map_err(|e| anyhow::anyhow!(e))?;

    let mut stdout = std::io::stdout();
    let last = if cli.text {
        println!(
            "Sink all {} ship cells before you miss {} times.",
            TOTAL_SHIP_CELLS, MISS_BUDGET
        );
        let mut source = LineSource::new(std::io::stdin().lock());
        session::run(&mut game, &mut source, &mut stdout, RenderMode::Text)?
    } else {
        let _guard = TerminalGuard::enter(&mut stdout)?;
        session::run(&mut game, &mut KeyboardSource, &mut stdout, RenderMode::Cursor)?
    };

    let verdict = match last {
        Phase::Won => "You won.",
        Phase::Lost => "You lost.",
        _ => "Game abandoned.",
    };
    println!(
        "{} Hits: {}  Misses: {}  Ships sunk: {}",
        verdict,
        game.hits(),
        game.misses(),
        game.ships_sunk()
    );
    Ok(())
}
