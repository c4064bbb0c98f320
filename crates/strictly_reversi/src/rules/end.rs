//! End-of-game evaluation.

use super::super::{Board, Outcome, Player, Score};
use super::legality::has_any_legal_move;
use tracing::{info, instrument};

/// Checks whether the game is over with `to_move` about to play.
///
/// Only the mobility of `to_move` is considered. There is no pass: if the
/// player about to move is stuck the game ends, even when the opponent
/// could still move.
pub fn is_terminal(board: &Board, to_move: Player) -> bool {
    !has_any_legal_move(board, to_move)
}

/// Returns the outcome and final counts if the game is over, `None` otherwise.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, to_move: Player) -> Option<(Outcome, Score)> {
    if !is_terminal(board, to_move) {
        return None;
    }
    let score = Score::of(board);
    let outcome = score.outcome();
    info!(%outcome, %score, "Game finished");
    Some((outcome, score))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A full board with `ones` Player One pieces followed by Player Two pieces.
    fn full_board(ones: usize) -> Board {
        let text: String = (0..64)
            .map(|i| if i < ones { 'X' } else { 'O' })
            .collect::<Vec<_>>()
            .chunks(8)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        text.parse().unwrap()
    }

    #[test]
    fn test_opening_not_terminal() {
        let board = Board::opening();
        assert!(!is_terminal(&board, Player::One));
        assert_eq!(evaluate(&board, Player::One), None);
    }

    #[test]
    fn test_player_one_wins_33_to_31() {
        let board = full_board(33);
        let (outcome, score) = evaluate(&board, Player::Two).expect("full board is terminal");
        assert_eq!(score, Score { player_one: 33, player_two: 31 });
        assert_eq!(outcome, Outcome::Winner(Player::One));
    }

    #[test]
    fn test_player_two_wins_on_more_pieces() {
        let board = full_board(20);
        let (outcome, _) = evaluate(&board, Player::One).expect("full board is terminal");
        assert_eq!(outcome, Outcome::Winner(Player::Two));
    }

    #[test]
    fn test_draw_32_to_32() {
        let board = full_board(32);
        let (outcome, score) = evaluate(&board, Player::One).expect("full board is terminal");
        assert_eq!(score.pieces(Player::One), 32);
        assert_eq!(score.pieces(Player::Two), 32);
        assert!(outcome.is_draw());
    }

    #[test]
    fn test_only_player_to_move_is_checked() {
        // Player Two is stuck; Player One could still play f8.
        let board: Board = "\
            XXX.....\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ......OX"
            .parse()
            .unwrap();
        assert!(has_any_legal_move(&board, Player::One));
        assert!(is_terminal(&board, Player::Two));

        let (outcome, score) = evaluate(&board, Player::Two).expect("terminal");
        assert_eq!(score, Score { player_one: 4, player_two: 1 });
        assert_eq!(outcome, Outcome::Winner(Player::One));
    }
}
