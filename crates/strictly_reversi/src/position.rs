//! Bounded board coordinates and the eight scan directions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A square on the 8x8 board.
///
/// Row and column are always in `0..8`; the only constructors are checked,
/// so an out-of-range coordinate cannot be represented. Serialized as the
/// row-major index `0..64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from zero-based row and column.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Creates a position from its row-major index (0-63).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SQUARE_COUNT).then(|| Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        })
    }

    /// Zero-based row, top to bottom.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Zero-based column, left to right.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index (0-63).
    pub fn to_index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Iterates over all 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SQUARE_COUNT).filter_map(Self::from_index)
    }

    /// The neighbouring position in `direction`, or `None` past the edge.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as usize, col as usize)
    }

    /// Algebraic label: column letter then row number (`a1` is the top-left square).
    pub fn label(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, self.row + 1)
    }

    /// Parses a label (`d3`), a `row,col` pair, or a linear index (`0`-`63`).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Result<Self, PositionParseError> {
        s.parse()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<u8> for Position {
    type Error = PositionParseError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index as usize).ok_or(PositionParseError::OutOfRange(index.to_string()))
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        pos.to_index() as u8
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(PositionParseError::Empty);
        }

        // "row,col"
        if let Some((row, col)) = input.split_once(',') {
            let row: usize = row
                .trim()
                .parse()
                .map_err(|_| PositionParseError::Unrecognized(input.to_string()))?;
            let col: usize = col
                .trim()
                .parse()
                .map_err(|_| PositionParseError::Unrecognized(input.to_string()))?;
            return Self::new(row, col).ok_or(PositionParseError::OutOfRange(input.to_string()));
        }

        // Linear index
        if let Ok(index) = input.parse::<usize>() {
            return Self::from_index(index).ok_or(PositionParseError::OutOfRange(input.to_string()));
        }

        // Label such as "d3"
        let mut chars = input.chars();
        let letter = chars
            .next()
            .map(|c| c.to_ascii_lowercase())
            .ok_or(PositionParseError::Empty)?;
        let number: usize = chars
            .as_str()
            .parse()
            .map_err(|_| PositionParseError::Unrecognized(input.to_string()))?;
        if !letter.is_ascii_lowercase() {
            return Err(PositionParseError::Unrecognized(input.to_string()));
        }
        let col = (letter as u8 - b'a') as usize;
        number
            .checked_sub(1)
            .and_then(|row| Self::new(row, col))
            .ok_or(PositionParseError::OutOfRange(input.to_string()))
    }
}

/// Error parsing a position from user input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PositionParseError {
    /// Nothing was entered.
    #[display("No position given")]
    Empty,

    /// The input names a square off the board.
    #[display("Position {} is off the board", _0)]
    OutOfRange(String),

    /// The input is not a label, pair, or index.
    #[display("Cannot read {:?} as a position (try d3, 2,3 or 19)", _0)]
    Unrecognized(String),
}

impl std::error::Error for PositionParseError {}

/// One of the eight compass directions scanned from a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// Up.
    North,
    /// Up and right.
    NorthEast,
    /// Right.
    East,
    /// Down and right.
    SouthEast,
    /// Down.
    South,
    /// Down and left.
    SouthWest,
    /// Left.
    West,
    /// Up and left.
    NorthWest,
}

impl Direction {
    /// Row and column offset of one step.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}
