use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::coord::Square;
use crate::pieces::Color;
use crate::rules::is_legal_move;

/// Whether a game has been decided, derived solely from king presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    WonBy(Color),
}

impl Outcome {
    /// Decide the game from king presence alone.
    ///
    /// The black king's absence is checked first, so a board missing both
    /// kings reports a white win. That ordering is part of the contract,
    /// even though the state is unreachable through `try_move`.
    pub fn of_board(board: &Board) -> Outcome {
        if !board.has_king(Color::Black) {
            return Outcome::WonBy(Color::White);
        }
        if !board.has_king(Color::White) {
            return Outcome::WonBy(Color::Black);
        }
        Outcome::InProgress
    }

    #[inline]
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Why a move request was rejected. The board and the turn are left
/// untouched whenever [`Game::try_move`] returns one of these.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,
    #[error("no piece on the origin square")]
    EmptyOrigin,
    #[error("it is {0}'s turn to move")]
    NotYourTurn(Color),
    #[error("move violates the movement rules")]
    IllegalMove,
}

/// One game session: the board plus whose turn it is.
///
/// Owned by the caller; restarting means dropping the session and creating
/// a fresh one. Transient interaction state (which square is currently
/// selected) stays with the caller as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Color,
    outcome: Outcome,
}

impl Game {
    /// A fresh game from the standard initial layout, white to move.
    pub fn new() -> Game {
        Game {
            board: Board::new(),
            to_move: Color::White,
            outcome: Outcome::InProgress,
        }
    }

    /// Resume from an arbitrary position.
    pub fn from_position(board: Board, to_move: Color) -> Game {
        let outcome = Outcome::of_board(&board);
        Game {
            board,
            to_move,
            outcome,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Validate and apply one move for the side to move.
    ///
    /// On success the board is updated, the outcome recomputed, and the
    /// turn handed to the other side — unless the move just captured a
    /// king, in which case the turn stays where it is and every later
    /// request is answered with [`MoveError::GameOver`]. Rejection leaves
    /// the session exactly as it was.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<Outcome, MoveError> {
        if self.outcome.is_decided() {
            return Err(MoveError::GameOver);
        }
        let piece = self.board.piece_at(from).ok_or(MoveError::EmptyOrigin)?;
        if piece.color != self.to_move {
            return Err(MoveError::NotYourTurn(self.to_move));
        }
        if !is_legal_move(piece, from, to, &self.board) {
            return Err(MoveError::IllegalMove);
        }

        self.board.apply_move(from, to);
        self.outcome = Outcome::of_board(&self.board);
        if self.outcome == Outcome::InProgress {
            self.to_move = self.to_move.other();
        }
        Ok(self.outcome)
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
