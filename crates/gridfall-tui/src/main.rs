use std::time::Duration;

use clap::Parser;
use gridfall_engine::{Game, PieceSpawner};

use crate::{app::PlayApp, runtime::Runtime};

mod app;
mod event;
mod runtime;
mod ui;

/// Terminal falling-block puzzle game.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for the piece sequence (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Milliseconds between gravity steps
    #[arg(long, default_value_t = 1000)]
    gravity_ms: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let spawner = args
        .seed
        .map_or_else(PieceSpawner::new, PieceSpawner::from_seed);
    let mut app = PlayApp::new(
        Game::new(spawner),
        Duration::from_millis(args.gravity_ms),
    );

    Runtime::new().run(&mut app)?;
    Ok(())
}
