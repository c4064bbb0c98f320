//! Command-line interface for the reversi console.

use clap::{Parser, Subcommand};

/// Strictly Reversi - two-player Reversi in the terminal
#[derive(Parser, Debug)]
#[command(name = "reversi")]
#[command(about = "Play Reversi on one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Name for Player One (X)
        #[arg(long)]
        player_one: Option<String>,

        /// Name for Player Two (O)
        #[arg(long)]
        player_two: Option<String>,

        /// Don't mark legal moves on the board
        #[arg(long)]
        no_hints: bool,
    },

    /// Replay a move list from the opening and print the result
    Replay {
        /// Moves in order, e.g. `e3 f3 f4`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}
