//! Piece count invariant: every move adds exactly one piece.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: Pieces on the board equal the origin's pieces plus moves played.
///
/// Pieces are flipped, never removed, so the count only grows and grows by
/// one per move.
pub struct PieceCountInvariant;

impl Invariant<GameInProgress> for PieceCountInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.board().piece_count() == game.origin().piece_count() + game.history().len()
    }

    fn description() -> &'static str {
        "Each move adds exactly one piece"
    }
}
