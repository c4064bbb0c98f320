//! Phase-specific typestate structs for Reversi.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! This encodes invariants at compile time - a `GameFinished` game
//! ALWAYS has an outcome, not `Option<Outcome>`.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules;
use super::{Board, Outcome, Player, Position, Score};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
///
/// The board always holds the opening position.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::opening(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with Player One to move (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self) -> GameInProgress {
        GameInProgress::from_position(self.board, Player::One)
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
///
/// Invariants enforced by type:
/// - `to_move` has at least one legal move
/// - No outcome yet (outcome is in GameFinished)
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) origin: Board,
    pub(crate) first_to_move: Player,
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
    pub(crate) last_flipped: Vec<Position>,
}

impl GameInProgress {
    /// Starts a game from an arbitrary position.
    ///
    /// The position becomes the origin that history is replayed from.
    #[instrument(skip(board))]
    pub fn from_position(board: Board, to_move: Player) -> Self {
        Self {
            origin: board,
            first_to_move: to_move,
            board,
            history: Vec::new(),
            to_move,
            last_flipped: Vec::new(),
        }
    }

    /// Makes a move, consuming self and transitioning to next state.
    ///
    /// Returns either a new InProgress or a Finished state. The game
    /// finishes as soon as the player who would move next has no legal
    /// move.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (LegalMove)
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self, action), fields(action = %action))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.last_flipped = rules::apply_move(&mut game.board, action.position, action.player);
        game.history.push(action);
        game.to_move = action.player.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        if let Some((outcome, score)) = rules::evaluate(&game.board, game.to_move) {
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome,
                score,
                stuck: game.to_move,
                last_flipped: game.last_flipped,
            }));
        }

        debug!(to_move = ?game.to_move, "Turn passes");
        Ok(GameResult::InProgress(game))
    }

    /// Places a piece for the player to move.
    pub fn play(self, position: Position) -> Result<GameResult, MoveError> {
        let action = Move::new(self.to_move, position);
        self.make_move(action)
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the position the game started from.
    pub fn origin(&self) -> &Board {
        &self.origin
    }

    /// Returns the player who moved first.
    pub fn first_to_move(&self) -> Player {
        self.first_to_move
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the pieces flipped by the most recent move.
    pub fn last_flipped(&self) -> &[Position] {
        &self.last_flipped
    }

    /// Returns the current piece counts.
    pub fn score(&self) -> Score {
        Score::of(&self.board)
    }

    /// Checks whether the player to move may play at `position`.
    pub fn is_legal(&self, position: Position) -> bool {
        rules::is_legal(&self.board, position, self.to_move)
    }

    /// Returns the legal destinations for the player to move.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        rules::legal_moves(&self.board, self.to_move)
    }

    /// Replays moves from the opening position.
    ///
    /// Fails if any move is illegal or if moves remain after the game ended.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start();

        for (index, action) in moves.iter().enumerate() {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) if index + 1 == moves.len() => {
                    return Ok(GameResult::Finished(g));
                }
                GameResult::Finished(_) => return Err(MoveError::GameOver),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
///
/// The outcome is ALWAYS present (not Option).
/// This struct encodes the invariant at the type level.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
    score: Score,
    stuck: Player,
    last_flipped: Vec<Position>,
}

impl GameFinished {
    /// Returns the outcome.
    ///
    /// Never returns Option - outcome is guaranteed.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the final piece counts.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the player who had no legal move when the game ended.
    pub fn stuck_player(&self) -> Player {
        self.stuck
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the pieces flipped by the final move.
    pub fn last_flipped(&self) -> &[Position] {
        &self.last_flipped
    }

    /// Restarts the game (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IllegalReason, Square};

    fn at(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn in_progress(result: GameResult) -> GameInProgress {
        match result {
            GameResult::InProgress(g) => g,
            GameResult::Finished(g) => panic!("Game finished early: {}", g.outcome()),
        }
    }

    #[test]
    fn test_start_state() {
        let game = GameSetup::new().start();
        assert_eq!(game.to_move(), Player::One);
        assert_eq!(*game.board(), Board::opening());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_turns_alternate() {
        let game = GameSetup::new().start();
        let game = in_progress(game.play(at(2, 4)).unwrap());
        assert_eq!(game.to_move(), Player::Two);
        let game = in_progress(game.play(at(2, 5)).unwrap());
        assert_eq!(game.to_move(), Player::One);
        assert_eq!(game.history()[0].player, Player::One);
        assert_eq!(game.history()[1].player, Player::Two);
    }

    #[test]
    fn test_illegal_move_reports_reason() {
        let game = GameSetup::new().start();
        assert_eq!(
            game.clone().play(at(3, 3)).unwrap_err(),
            MoveError::IllegalMove {
                position: at(3, 3),
                reason: IllegalReason::Occupied,
            }
        );
        assert_eq!(
            game.play(at(2, 3)).unwrap_err(),
            MoveError::IllegalMove {
                position: at(2, 3),
                reason: IllegalReason::NoCapture,
            }
        );
    }

    #[test]
    fn test_finishes_when_next_player_is_stuck() {
        let board: Board = "\
            XO......\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........"
            .parse()
            .unwrap();
        let game = GameInProgress::from_position(board, Player::One);

        match game.play(at(0, 2)).unwrap() {
            GameResult::Finished(done) => {
                assert_eq!(done.outcome(), &Outcome::Winner(Player::One));
                assert_eq!(done.score(), Score { player_one: 3, player_two: 0 });
                assert_eq!(done.stuck_player(), Player::Two);
                assert_eq!(done.last_flipped(), &[at(0, 1)]);
                assert_eq!(done.board().get(at(0, 1)), Square::Occupied(Player::One));
            }
            GameResult::InProgress(_) => panic!("Player Two has no pieces left"),
        }
    }

    #[test]
    fn test_replay_stops_at_illegal_move() {
        let moves = [Move::new(Player::One, at(2, 4)), Move::new(Player::Two, at(2, 4))];
        assert!(matches!(
            GameInProgress::replay(&moves),
            Err(MoveError::IllegalMove { .. })
        ));
    }
}
