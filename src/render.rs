//! Plain-text rendering of the board for the console.

use strictly_reversi::{BOARD_SIZE, BoardSnapshot, Player, PlayerNames, Position, Square};

/// Marker for an empty square the player to move may play on.
pub const HINT: char = '*';

/// Renders the board with column letters and row numbers.
///
/// ```text
///   a b c d e f g h
/// 1 . . . . . . . .
/// 2 . . . . . . . .
/// 3 . . . . * . . .
/// ```
pub fn render_board(snapshot: &BoardSnapshot, show_hints: bool) -> String {
    let mut out = String::from(" ");
    for col in 0..BOARD_SIZE {
        out.push(' ');
        out.push((b'a' + col as u8) as char);
    }
    out.push('\n');

    for (row, squares) in snapshot.board.rows().iter().enumerate() {
        out.push_str(&(row + 1).to_string());
        for (col, square) in squares.iter().enumerate() {
            out.push(' ');
            let hinted = show_hints
                && Position::new(row, col).is_some_and(|p| snapshot.legal_moves.contains(&p));
            out.push(match square {
                Square::Occupied(player) => player.symbol(),
                Square::Empty if hinted => HINT,
                Square::Empty => '.',
            });
        }
        out.push('\n');
    }
    out
}

/// Renders the piece counts with player names, e.g. `X Ada: 2  O Grace: 2`.
pub fn render_score(snapshot: &BoardSnapshot, names: &PlayerNames) -> String {
    [Player::One, Player::Two]
        .iter()
        .map(|p| {
            format!(
                "{} {}: {}",
                p.symbol(),
                names.name(*p),
                snapshot.score.pieces(*p)
            )
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Prompt line for the player to move, or `None` once the game is over.
pub fn render_turn(snapshot: &BoardSnapshot, names: &PlayerNames) -> Option<String> {
    snapshot
        .to_move
        .map(|p| format!("{} ({}) to move", names.name(p), p.symbol()))
}
