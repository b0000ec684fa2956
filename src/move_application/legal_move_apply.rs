//! Board mutation for an already validated move.
//!
//! A quiet move relocates the piece. A capture detonates the target square
//! first and then removes the capturing piece from its origin: in atomic
//! chess the capturer never survives, even a slider that fired from outside
//! the blast or a pawn next to the centre.

use crate::game_state::chess_types::*;
use crate::game_state::game_session::GameSession;
use crate::move_application::explosion::{explode, resolve_blast, BlastReport};

/// Everything a single applied move did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: ChessMove,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub blast: Option<BlastReport>,
    pub outcome: Outcome,
}

/// Apply `from -> to` for the side on move. Callers validate first; an empty
/// origin square yields `None` and leaves the session untouched.
pub(crate) fn apply_move(session: &mut GameSession, from: Square, to: Square) -> Option<MoveReport> {
    let mover = session.active_side;
    let moved = session.board.get(from)?;
    let captured = session.board.get(to);

    let blast = match captured {
        Some(_) => {
            let report = explode(&mut session.board, to);
            session.board.clear(from);
            for side in &report.destroyed_kings {
                session.king_squares[side.index()] = None;
            }
            session.outcome = resolve_blast(mover, &report);
            Some(report)
        }
        None => {
            session.board.clear(from);
            session.board.set(to, moved);
            if moved.is_king() {
                session.king_squares[mover.index()] = Some(to);
            }
            None
        }
    };

    Some(MoveReport {
        mv: ChessMove::new(from, to),
        moved,
        captured,
        blast,
        outcome: session.outcome,
    })
}
