//! Game session: the single owner of an atomic chess game.
//!
//! `GameSession` holds the board, the side on move, the outcome and the two
//! players. `request_move` is the only path that mutates it; every rejection
//! leaves the session exactly as it was.

use log::{debug, info};

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{back_row, KING_START_COL};
use crate::game_state::chess_types::*;
use crate::move_application::legal_move_apply::{apply_move, MoveReport};
use crate::move_validation::legal_move_checks::is_legal;
use crate::move_validation::legal_move_generator::legal_moves_for_side;
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) active_side: Side,
    pub(crate) outcome: Outcome,
    // Last known king squares. A hint only; `king_square` re-checks the board.
    pub(crate) king_squares: [Option<Square>; 2],
    players: [Player; 2],
}

impl GameSession {
    /// Standard starting layout with `first_player` on Light, to move.
    pub fn new(first_player: impl Into<String>, second_player: impl Into<String>) -> Self {
        let king_squares = [Side::Light, Side::Dark]
            .map(|side| Square::new(back_row(side), KING_START_COL));
        Self {
            board: Board::starting_position(),
            active_side: Side::Light,
            outcome: Outcome::InProgress,
            king_squares,
            players: [
                Player::new(first_player, Side::Light),
                Player::new(second_player, Side::Dark),
            ],
        }
    }

    /// Session over an arbitrary position, for puzzles and tests.
    pub fn from_position(board: Board, active_side: Side) -> Self {
        let king_squares = [Side::Light, Side::Dark].map(|side| board.find_king(side));
        Self {
            board,
            active_side,
            outcome: Outcome::InProgress,
            king_squares,
            players: [
                Player::new(Side::Light.color_name(), Side::Light),
                Player::new(Side::Dark.color_name(), Side::Dark),
            ],
        }
    }

    /// Read-only view for renderers.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn active_side(&self) -> Side {
        self.active_side
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn active_player(&self) -> &Player {
        self.player(self.active_side)
    }

    /// The winning player once a king has exploded.
    pub fn winner(&self) -> Option<&Player> {
        self.outcome.winner().map(|side| self.player(side))
    }

    /// Where `side`'s king stands, trusting the cache only if the board agrees.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        let cached = self.king_squares[side.index()].filter(|&square| {
            self.board
                .get(square)
                .is_some_and(|piece| piece.is_king() && piece.side == side)
        });
        cached.or_else(|| self.board.find_king(side))
    }

    /// Moves available to the side on move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        if self.outcome.is_terminal() {
            return Vec::new();
        }
        legal_moves_for_side(&self.board, self.active_side)
    }

    /// Validate and play `from -> to`, reporting why a rejected move failed.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveReport, ChessErrors> {
        if self.outcome.is_terminal() {
            return Err(ChessErrors::GameAlreadyOver(self.outcome));
        }
        let piece = self
            .board
            .get(from)
            .ok_or(ChessErrors::EmptyFromSquare(from))?;
        if piece.side != self.active_side {
            return Err(ChessErrors::NotYourPiece {
                square: from,
                side: self.active_side,
            });
        }
        if !is_legal(&self.board, self.active_side, from, to) {
            return Err(ChessErrors::IllegalMove { from, to });
        }

        let report =
            apply_move(self, from, to).ok_or(ChessErrors::EmptyFromSquare(from))?;

        if self.outcome.is_terminal() {
            if let Some(winner) = self.winner() {
                info!("{} ({}) wins after {}", winner.name, winner.side, report.mv);
            }
        } else {
            self.active_side = self.active_side.opposite();
        }
        Ok(report)
    }

    /// Boolean form of `try_move`: `true` when the move was played.
    pub fn request_move(&mut self, from: Square, to: Square) -> bool {
        match self.try_move(from, to) {
            Ok(_) => true,
            Err(err) => {
                debug!("rejected {from} -> {to}: {err}");
                false
            }
        }
    }

    /// `request_move` over algebraic squares; malformed input is a rejection.
    pub fn request_move_algebraic(&mut self, from: &str, to: &str) -> bool {
        match (algebraic_to_square(from), algebraic_to_square(to)) {
            (Ok(from), Ok(to)) => self.request_move(from, to),
            (Err(err), _) | (_, Err(err)) => {
                debug!("rejected {from:?} -> {to:?}: {err}");
                false
            }
        }
    }
}
