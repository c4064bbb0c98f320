//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_reversi::PlayerNames;
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display name for Player One (X).
    #[serde(default)]
    player_one: String,

    /// Display name for Player Two (O).
    #[serde(default)]
    player_two: String,

    /// Mark legal destinations on the board.
    #[serde(default = "default_show_hints")]
    show_hints: bool,
}

#[instrument]
fn default_show_hints() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: String::new(),
            player_two: String::new(),
            show_hints: default_show_hints(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_one = %config.player_one,
            player_two = %config.player_two,
            show_hints = config.show_hints,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_one: Option<String>,
        player_two: Option<String>,
        no_hints: bool,
    ) -> Self {
        if let Some(name) = player_one {
            self.player_one = name;
        }
        if let Some(name) = player_two {
            self.player_two = name;
        }
        if no_hints {
            self.show_hints = false;
        }
        self
    }

    /// Names to bind to the players; blanks fall back to placeholders.
    pub fn names(&self) -> PlayerNames {
        PlayerNames::new(self.player_one.clone(), self.player_two.clone())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
