//! Alternating turn invariant: players alternate One, Two, One, ...

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The first recorded move belongs to the player who started, no player
/// moves twice in a row, and the player to move follows the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != game.first_to_move()
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            game.first_to_move()
        } else {
            game.first_to_move().opponent()
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (One, Two, One, ...)"
    }
}
