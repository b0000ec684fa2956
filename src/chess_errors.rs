//! Errors used throughout the rules engine.
//!
//! `ChessErrors` names every way a move request or a coordinate can be
//! rejected. The public turn API still reports failures as a plain `false`;
//! these variants exist so callers and logs can say *why*.

use thiserror::Error;

use crate::game_state::chess_types::{Outcome, Side, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// The game has a winner; no further moves are accepted.
    #[error("game is already over ({0})")]
    GameAlreadyOver(Outcome),

    /// Nothing stands on the origin square.
    #[error("no piece on {0}")]
    EmptyFromSquare(Square),

    /// The origin square holds a piece of the side not on move.
    #[error("piece on {square} does not belong to {side}")]
    NotYourPiece { square: Square, side: Side },

    /// The piece-specific movement or collision rules reject the move.
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// A square string that is not exactly a file letter and a rank digit.
    ///
    /// Payload: the original string.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicString(String),

    /// A move line that is not of the form `"a2 a4"`.
    #[error("invalid move format: {0:?}")]
    InvalidMoveFormat(String),
}
