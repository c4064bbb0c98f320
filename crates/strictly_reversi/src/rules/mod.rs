//! Game rules for Reversi.
//!
//! This module contains pure functions for evaluating game state
//! according to Reversi rules. Rules are separated from board
//! storage to enable composition into contract systems.

pub mod capture;
pub mod end;
pub mod legality;

pub use capture::{apply_move, flips};
pub use end::{evaluate, is_terminal};
pub use legality::{has_any_legal_move, is_legal, legal_moves, run_length};
