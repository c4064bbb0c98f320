//! Capture resolution: placing a piece and flipping bracketed runs.

use super::super::{Board, Direction, Player, Position, Square};
use super::legality::{is_legal, run_length};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Positions that flip to `player` if a piece is placed at `pos`.
///
/// Each direction is resolved independently; the closing `player` piece of
/// a run is not included.
pub fn flips(board: &Board, pos: Position, player: Player) -> Vec<Position> {
    let mut flipped = Vec::new();
    for direction in Direction::iter() {
        let len = run_length(board, pos, player, direction);
        let mut cursor = pos.step(direction);
        for _ in 0..len {
            let Some(cell) = cursor else { break };
            flipped.push(cell);
            cursor = cell.step(direction);
        }
    }
    flipped
}

/// Places `player`'s piece at `pos` and flips every captured run.
///
/// Returns the flipped positions. The caller must have checked
/// [`is_legal`]; the turn is not switched here.
#[instrument(skip(board), fields(position = %pos, ?player))]
pub fn apply_move(board: &mut Board, pos: Position, player: Player) -> Vec<Position> {
    debug_assert!(is_legal(board, pos, player), "apply_move on an illegal square");

    let flipped = flips(board, pos, player);
    board.set(pos, Square::Occupied(player));
    for cell in &flipped {
        board.set(*cell, Square::Occupied(player));
    }

    debug!(flipped = flipped.len(), "Move applied");
    flipped
}
