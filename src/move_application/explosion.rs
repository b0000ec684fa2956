//! The atomic blast.
//!
//! A capture detonates the 3x3 block around the capture square. Every piece
//! in the block is removed except pawns off the centre square; the centre is
//! always cleared, pawn or not. The block is clipped to the board.

use log::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BLAST_RADIUS;
use crate::game_state::chess_types::*;

/// What a single explosion removed, in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlastReport {
    pub center: Option<Square>,
    pub cleared: Vec<(Square, Piece)>,
    pub destroyed_kings: Vec<Side>,
}

impl BlastReport {
    pub fn destroyed_king_of(&self, side: Side) -> bool {
        self.destroyed_kings.contains(&side)
    }
}

/// In-bounds squares of the blast block around `center`, row-major.
pub fn blast_squares(center: Square) -> impl Iterator<Item = Square> {
    (-BLAST_RADIUS..=BLAST_RADIUS).flat_map(move |d_row| {
        (-BLAST_RADIUS..=BLAST_RADIUS).filter_map(move |d_col| center.offset(d_row, d_col))
    })
}

pub fn explode(board: &mut Board, center: Square) -> BlastReport {
    let mut report = BlastReport {
        center: Some(center),
        ..BlastReport::default()
    };

    for square in blast_squares(center) {
        let Some(piece) = board.get(square) else {
            continue;
        };
        if piece.is_pawn() && square != center {
            continue;
        }
        if piece.is_king() {
            report.destroyed_kings.push(piece.side);
        }
        board.clear(square);
        report.cleared.push((square, piece));
    }

    debug!(
        "explosion at {center} cleared {} piece(s){}",
        report.cleared.len(),
        if report.destroyed_kings.is_empty() {
            String::new()
        } else {
            format!(", kings lost: {:?}", report.destroyed_kings)
        }
    );
    report
}

/// Outcome after `mover` set off `report`.
///
/// Losing your own king loses the game, even when the enemy king goes up in
/// the same blast.
pub fn resolve_blast(mover: Side, report: &BlastReport) -> Outcome {
    if report.destroyed_king_of(mover) {
        Outcome::win_for(mover.opposite())
    } else if report.destroyed_king_of(mover.opposite()) {
        Outcome::win_for(mover)
    } else {
        Outcome::InProgress
    }
}
