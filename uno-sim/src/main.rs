mod cli;
mod driver;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Args;
use driver::Driver;
use uno::game::Game;
use uno::shuffler::StandardShuffler;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let shuffler = args
        .seed
        .map_or_else(StandardShuffler::new, StandardShuffler::seeded);
    let mut game = Game::new(args.players.clone(), args.game_config(), shuffler)
        .wrap_err("invalid match settings")?;
    info!(players = game.player_count(), seed = ?args.seed, "match started");

    let driver = Driver {
        max_turns: args.max_turns,
        forgetful: args.forgetful,
    };
    driver.play_match(&mut game)?;

    if let Some(winner) = game.winner() {
        println!("Winner: {}", game.player(winner)?);
    }
    for (index, score) in game.scores().iter().enumerate() {
        println!("{:>12}: {score}", game.player(index)?);
    }
    println!("Hands played: {}", game.history().len());

    Ok(())
}
