//! Core domain types for Reversi.

use super::position::{BOARD_SIZE, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// First player (dark pieces, moves first).
    One,
    /// Second player (light pieces).
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Symbol used in the text form of the board.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player One"),
            Player::Two => write!(f, "Player Two"),
        }
    }
}

/// A square on the Reversi board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a player's piece.
    Occupied(Player),
}

impl Square {
    /// Returns the owner of the piece on this square, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        self.owner().map_or('.', Player::symbol)
    }
}

/// 8x8 Reversi board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares as rows, top row first.
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with every square empty.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the standard opening position.
    ///
    /// The four centre squares hold two pieces per player on the diagonals,
    /// with Player One on d4 and e5.
    pub fn opening() -> Self {
        let mut board = Self::new();
        board.initialize();
        board
    }

    /// Resets every square, then places the four centre pieces.
    pub fn initialize(&mut self) {
        *self = Self::new();
        for (row, col, player) in [
            (3, 3, Player::One),
            (3, 4, Player::Two),
            (4, 3, Player::Two),
            (4, 4, Player::One),
        ] {
            if let Some(pos) = Position::new(row, col) {
                self.set(pos, Square::Occupied(player));
            }
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.row()][pos.col()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.row()][pos.col()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as rows.
    pub fn rows(&self) -> &[[Square; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Counts the pieces belonging to a player.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Counts all pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|s| **s != Square::Empty)
            .count()
    }

    /// Formats the board as eight lines of `X`, `O` and `.`.
    pub fn display(&self) -> String {
        self.squares
            .iter()
            .map(|row| row.iter().map(|s| s.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Error parsing the text form of a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not contain exactly eight rows.
    #[display("Expected 8 rows, found {}", _0)]
    RowCount(usize),

    /// A row did not contain exactly eight squares.
    #[display("Row {} has {} squares, expected 8", row, len)]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of squares found.
        len: usize,
    },

    /// A character other than `X`, `O` or `.` was found.
    #[display("Unexpected character {:?} in row {}", symbol, row)]
    Symbol {
        /// Zero-based row index.
        row: usize,
        /// The offending character.
        symbol: char,
    },
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses eight non-empty lines of eight symbols; whitespace inside a line is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (row, symbols) in rows.iter().enumerate() {
            if symbols.len() != BOARD_SIZE {
                return Err(BoardParseError::RowLength {
                    row,
                    len: symbols.len(),
                });
            }
            for (col, symbol) in symbols.iter().enumerate() {
                board.squares[row][col] = match symbol {
                    'X' | 'x' => Square::Occupied(Player::One),
                    'O' | 'o' => Square::Occupied(Player::Two),
                    '.' => Square::Empty,
                    other => {
                        return Err(BoardParseError::Symbol {
                            row,
                            symbol: *other,
                        });
                    }
                };
            }
        }
        Ok(board)
    }
}
