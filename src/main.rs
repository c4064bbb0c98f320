//! Strictly Reversi - two-player console game.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use strictly_reversi_cli::{Cli, Command, Console, GameConfig, describe, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the game
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match cli.command {
        Command::Play {
            config,
            player_one,
            player_two,
            no_hints,
        } => run_play(config, player_one, player_two, no_hints),
        Command::Replay { moves, json } => run_replay(moves, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(player_one, player_two))]
fn run_play(
    config: Option<PathBuf>,
    player_one: Option<String>,
    player_two: Option<String>,
    no_hints: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    }
    .with_overrides(player_one, player_two, no_hints);

    let stdin = io::stdin();
    let mut console = Console::new(&config, stdin.lock(), io::stdout());
    let finished = console.run()?;

    info!(finished, "Session ended");
    Ok(())
}

/// Replay a move list and print the final state
#[instrument(skip(moves), fields(count = moves.len()))]
fn run_replay(moves: Vec<String>, json: bool) -> Result<()> {
    let session = replay(&moves, &GameConfig::default())?;

    if json {
        let snapshot = serde_json::to_string_pretty(&session.snapshot())
            .context("Failed to serialize snapshot")?;
        println!("{}", snapshot);
    } else {
        print!("{}", describe(&session, true));
    }
    Ok(())
}
