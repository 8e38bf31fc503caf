use anyhow::Result;
use clap::Parser;
use std::io;
use sweeper_core::{Game, GameState, RandomMinefieldGenerator};

mod game;
mod input;
mod prompt;
mod render;
mod setup;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip the difficulty menu
    #[arg(short, long, value_enum)]
    level: Option<setup::Level>,

    /// Print mine counts without colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let difficulty = match args.level {
        Some(level) => level.into(),
        None => setup::choose_difficulty(&mut input, &mut output)?,
    };
    let config = difficulty.config()?;
    let mut game = Game::new(config, RandomMinefieldGenerator::from_seed(seed))?;

    let state = game::play(&mut game, &mut input, &mut output, !args.no_color)?;
    log::debug!("game over: {:?}", state);
    if state == GameState::Lost {
        log::info!("mine triggered at {:?}", game.triggered_mine());
    }
    Ok(())
}
