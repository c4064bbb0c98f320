//! Strictly Reversi console - play the strictly_reversi engine in a terminal
//!
//! # Architecture
//!
//! - **Config**: player names and hint display, loaded from TOML
//! - **Render**: plain-text board, score and turn lines
//! - **Console**: line-oriented play loop and scripted replay
//!
//! # Example
//!
//! ```
//! use strictly_reversi_cli::{GameConfig, replay};
//!
//! # fn example() -> anyhow::Result<()> {
//! let moves = vec!["e3".to_string(), "f3".to_string()];
//! let session = replay(&moves, &GameConfig::default())?;
//! assert_eq!(session.phase().history().len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod render;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console
pub use console::{Console, describe, replay};

// Crate-level exports - Rendering
pub use render::{HINT, render_board, render_score, render_turn};
