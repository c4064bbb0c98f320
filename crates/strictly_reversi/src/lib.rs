//! Strictly Reversi - type-safe Reversi/Othello rules engine
//!
//! Tracks the 8x8 board, enforces the bracketing rule, flips captured
//! pieces, and ends the game when the player to move is stuck.
//!
//! # Architecture
//!
//! - **Types**: board, squares, players, bounded positions
//! - **Rules**: legality, capture resolution, end-of-game evaluation
//! - **Typestate**: `GameSetup` -> `GameInProgress` -> `GameFinished`
//! - **Contracts**: move preconditions and invariant postconditions
//! - **Session**: mutable, UI-facing wrapper with player names
//!
//! # Example
//!
//! ```
//! use strictly_reversi::{MoveReport, PlayerNames, Position, Session};
//!
//! let mut session = Session::new(PlayerNames::new("Ada", "Grace"));
//! let report = session.submit_move("e3".parse().unwrap()).unwrap();
//! assert!(matches!(report, MoveReport::Applied(_)));
//!
//! // Occupied squares are rejected without changing anything.
//! assert!(session.submit_move(Position::new(3, 3).unwrap()).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod invariants;
mod outcome;
mod position;
pub mod rules;
mod session;
mod types;
mod typestate;

// Crate-level exports - Core types
pub use position::{BOARD_SIZE, Direction, Position, PositionParseError, SQUARE_COUNT};
pub use types::{Board, BoardParseError, Player, Square};

// Crate-level exports - Actions and results
pub use action::{IllegalReason, Move, MoveError};
pub use outcome::{Outcome, Score};

// Crate-level exports - Typestate phases
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};

// Crate-level exports - Contracts and invariants
pub use contracts::{CapturesPieces, Contract, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, PieceCountInvariant,
    ReplayConsistentInvariant, ReversiInvariants,
};

// Crate-level exports - Session
pub use session::{BoardSnapshot, GameOver, GamePhase, MoveReport, PlayerNames, Session};
