//! Move legality: the bracketing rule scanned in all eight directions.

use super::super::{Board, Direction, Player, Position, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Length of the capturing run starting next to `origin` in `direction`.
///
/// Counts the unbroken opponent pieces stepping away from `origin`. The run
/// qualifies only when a `player` piece closes it; running off the board,
/// reaching an empty square, or meeting a `player` piece immediately
/// all yield 0.
pub fn run_length(board: &Board, origin: Position, player: Player, direction: Direction) -> usize {
    let mut len = 0;
    let mut cursor = origin.step(direction);
    while let Some(pos) = cursor {
        match board.get(pos) {
            Square::Occupied(owner) if owner == player => return len,
            Square::Occupied(_) => len += 1,
            Square::Empty => return 0,
        }
        cursor = pos.step(direction);
    }
    0
}

/// Checks whether `player` may place a piece at `pos`.
///
/// The square must be empty and at least one direction must hold a
/// capturing run.
pub fn is_legal(board: &Board, pos: Position, player: Player) -> bool {
    board.is_empty(pos) && Direction::iter().any(|d| run_length(board, pos, player, d) > 0)
}

/// Returns every legal destination for `player`, in row-major order.
#[instrument(level = "trace", skip(board))]
pub fn legal_moves(board: &Board, player: Player) -> Vec<Position> {
    Position::all().filter(|pos| is_legal(board, *pos, player)).collect()
}

/// Checks whether `player` has at least one legal move anywhere on the board.
#[instrument(level = "trace", skip(board))]
pub fn has_any_legal_move(board: &Board, player: Player) -> bool {
    Position::all().any(|pos| is_legal(board, pos, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_opening_moves_for_player_one() {
        let board = Board::opening();
        assert_eq!(
            legal_moves(&board, Player::One),
            vec![at(2, 4), at(3, 5), at(4, 2), at(5, 3)]
        );
    }

    #[test]
    fn test_opening_moves_for_player_two() {
        let board = Board::opening();
        assert_eq!(
            legal_moves(&board, Player::Two),
            vec![at(2, 3), at(3, 2), at(4, 5), at(5, 4)]
        );
    }

    #[test]
    fn test_adjacent_own_piece_does_not_qualify() {
        // d3 sits directly above Player One's d4.
        let board = Board::opening();
        assert_eq!(run_length(&board, at(2, 3), Player::One, Direction::South), 0);
        assert!(!is_legal(&board, at(2, 3), Player::One));
    }

    #[test]
    fn test_run_hitting_empty_does_not_qualify() {
        let board: Board = "\
            .OO.....\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........"
            .parse()
            .unwrap();
        assert_eq!(run_length(&board, at(0, 0), Player::One, Direction::East), 0);
    }

    #[test]
    fn test_run_off_board_does_not_qualify() {
        let board: Board = "\
            .OOOOOOO\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........"
            .parse()
            .unwrap();
        assert_eq!(run_length(&board, at(0, 0), Player::One, Direction::East), 0);
        assert!(!has_any_legal_move(&board, Player::One));
    }

    #[test]
    fn test_long_run_counts_every_opponent_piece() {
        let board: Board = "\
            .OOOOOOX\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........"
            .parse()
            .unwrap();
        assert_eq!(run_length(&board, at(0, 0), Player::One, Direction::East), 6);
        assert!(is_legal(&board, at(0, 0), Player::One));
    }

    #[test]
    fn test_occupied_squares_never_legal() {
        let board = Board::opening();
        for player in [Player::One, Player::Two] {
            for pos in Position::all().filter(|p| !board.is_empty(*p)) {
                assert!(!is_legal(&board, pos, player), "{pos} should not be legal");
            }
        }
    }

    #[test]
    fn test_empty_board_has_no_moves() {
        let board = Board::new();
        assert!(!has_any_legal_move(&board, Player::One));
        assert!(!has_any_legal_move(&board, Player::Two));
    }
}
