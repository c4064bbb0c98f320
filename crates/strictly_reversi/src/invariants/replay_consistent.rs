//! Replay consistency invariant: the board is what the history produces.

use super::super::{GameInProgress, rules};
use super::Invariant;

/// Invariant: Replaying the history from the origin reproduces the board.
///
/// Every recorded move must have been legal at the time it was played, and
/// no square may have changed outside a move's captures.
pub struct ReplayConsistentInvariant;

impl Invariant<GameInProgress> for ReplayConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = *game.origin();

        for mov in game.history() {
            if !rules::is_legal(&reconstructed, mov.position, mov.player) {
                return false;
            }
            rules::apply_move(&mut reconstructed, mov.position, mov.player);
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board matches a replay of the move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameResult, GameSetup, Player, Position, Square};

    #[test]
    fn test_new_game_holds() {
        let game = GameSetup::new().start();
        assert!(ReplayConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_moves_hold() {
        let game = GameSetup::new().start();
        let game = match game.play(Position::new(4, 2).unwrap()) {
            Ok(GameResult::InProgress(g)) => g,
            other => panic!("Expected in-progress game, got {other:?}"),
        };
        assert!(ReplayConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_unflipped_capture_violates() {
        let game = GameSetup::new().start();
        let mut game = match game.play(Position::new(4, 2).unwrap()) {
            Ok(GameResult::InProgress(g)) => g,
            other => panic!("Expected in-progress game, got {other:?}"),
        };
        // Undo the flip of d5 without touching the history.
        game.board.set(Position::new(4, 3).unwrap(), Square::Occupied(Player::Two));
        assert!(!ReplayConsistentInvariant::holds(&game));
    }
}
