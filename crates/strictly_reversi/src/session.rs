//! Mutable game session driven by a presentation layer.
//!
//! A [`Session`] owns one game between two named players. The collaborator
//! submits positions, queries squares and hints for rendering, and calls
//! [`Session::restart`] to play again after the game ends.

use super::action::{Move, MoveError};
use super::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use super::{Board, Outcome, Player, Position, Score, Square, rules};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Display names bound to the two players for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    one: String,
    two: String,
}

impl PlayerNames {
    /// Binds names to Player One and Player Two.
    ///
    /// Blank names fall back to "Player One" / "Player Two".
    pub fn new(one: impl Into<String>, two: impl Into<String>) -> Self {
        let pick = |name: String, player: Player| {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                player.to_string()
            } else {
                trimmed.to_string()
            }
        };
        Self {
            one: pick(one.into(), Player::One),
            two: pick(two.into(), Player::Two),
        }
    }

    /// Returns the name bound to `player`.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// Serializable view of the board after a move, recomputed from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Board occupancy.
    pub board: Board,
    /// Player to move, or `None` once the game has finished.
    pub to_move: Option<Player>,
    /// Legal destinations for the player to move (empty once finished).
    pub legal_moves: Vec<Position>,
    /// Pieces flipped by the most recent move.
    pub flipped: Vec<Position>,
    /// Current piece counts.
    pub score: Score,
}

/// Terminal notification: who won and by how much.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    /// Outcome computed from the final counts.
    pub outcome: Outcome,
    /// Final piece counts.
    pub score: Score,
    /// Name of the winner, `None` on a draw.
    pub winner_name: Option<String>,
}

impl GameOver {
    /// Human-readable result, e.g. `"Ada wins! (40 - 24)"`.
    pub fn message(&self) -> String {
        match &self.winner_name {
            Some(name) => format!("{} wins! ({})", name, self.score),
            None => format!("It's a draw! ({})", self.score),
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveReport {
    /// Move applied; the game continues.
    Applied(BoardSnapshot),
    /// Move applied and the game is over.
    Finished {
        /// Final board.
        snapshot: BoardSnapshot,
        /// Outcome notification.
        game_over: GameOver,
    },
}

impl MoveReport {
    /// The board after the move.
    pub fn snapshot(&self) -> &BoardSnapshot {
        match self {
            MoveReport::Applied(snapshot) => snapshot,
            MoveReport::Finished { snapshot, .. } => snapshot,
        }
    }
}

/// The game in either of its playable phases.
#[derive(Debug, Clone)]
pub enum GamePhase {
    /// Moves are accepted.
    InProgress(GameInProgress),
    /// Terminal; only a restart leaves this phase.
    Finished(GameFinished),
}

impl GamePhase {
    /// Returns the board for either phase.
    pub fn board(&self) -> &Board {
        match self {
            GamePhase::InProgress(game) => game.board(),
            GamePhase::Finished(game) => game.board(),
        }
    }

    /// Returns the move history for either phase.
    pub fn history(&self) -> &[Move] {
        match self {
            GamePhase::InProgress(game) => game.history(),
            GamePhase::Finished(game) => game.history(),
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Finished(_))
    }
}

impl From<GameResult> for GamePhase {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => GamePhase::InProgress(g),
            GameResult::Finished(g) => GamePhase::Finished(g),
        }
    }
}

/// One game between two named players.
#[derive(Debug, Clone)]
pub struct Session {
    names: PlayerNames,
    phase: GamePhase,
}

impl Session {
    /// Creates a session at the opening position with Player One to move.
    #[instrument(skip(names), fields(one = names.name(Player::One), two = names.name(Player::Two)))]
    pub fn new(names: PlayerNames) -> Self {
        info!("Creating new game session");
        Self {
            names,
            phase: GamePhase::InProgress(GameSetup::new().start()),
        }
    }

    /// Resets to the opening position with Player One to move.
    ///
    /// Works from any phase and always yields the same state.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.phase.history().len(), "Restarting game");
        self.phase = GamePhase::InProgress(GameSetup::new().start());
    }

    /// Plays a piece for the player to move.
    ///
    /// On any error the session is left exactly as it was.
    #[instrument(skip(self, position), fields(position = %position))]
    pub fn submit_move(&mut self, position: Position) -> Result<MoveReport, MoveError> {
        let game = match &self.phase {
            GamePhase::InProgress(game) => game,
            GamePhase::Finished(_) => {
                warn!("Move submitted after game over");
                return Err(MoveError::GameOver);
            }
        };

        let result = game.clone().play(position).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;
        self.phase = result.into();

        let snapshot = self.snapshot();
        Ok(match self.game_over() {
            Some(game_over) => {
                info!(message = %game_over.message(), "Game over");
                MoveReport::Finished {
                    snapshot,
                    game_over,
                }
            }
            None => MoveReport::Applied(snapshot),
        })
    }

    /// Returns the square at `position` for rendering.
    pub fn square(&self, position: Position) -> Square {
        self.phase.board().get(position)
    }

    /// Checks whether `position` is a legal destination for the player to move.
    ///
    /// Always false once the game is over.
    pub fn is_legal_destination(&self, position: Position) -> bool {
        match &self.phase {
            GamePhase::InProgress(game) => game.is_legal(position),
            GamePhase::Finished(_) => false,
        }
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn active_player(&self) -> Option<Player> {
        match &self.phase {
            GamePhase::InProgress(game) => Some(game.to_move()),
            GamePhase::Finished(_) => None,
        }
    }

    /// Returns the current board view.
    pub fn snapshot(&self) -> BoardSnapshot {
        let board = *self.phase.board();
        let (to_move, legal_moves, flipped) = match &self.phase {
            GamePhase::InProgress(game) => (
                Some(game.to_move()),
                rules::legal_moves(&board, game.to_move()),
                game.last_flipped().to_vec(),
            ),
            GamePhase::Finished(game) => (None, Vec::new(), game.last_flipped().to_vec()),
        };
        BoardSnapshot {
            board,
            to_move,
            legal_moves,
            flipped,
            score: Score::of(&board),
        }
    }

    /// Returns the terminal notification if the game is over.
    pub fn game_over(&self) -> Option<GameOver> {
        match &self.phase {
            GamePhase::InProgress(_) => None,
            GamePhase::Finished(game) => {
                let outcome = *game.outcome();
                Some(GameOver {
                    outcome,
                    score: game.score(),
                    winner_name: outcome.winner().map(|p| self.names.name(p).to_string()),
                })
            }
        }
    }

    /// Returns the player names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Returns the current phase.
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }
}
