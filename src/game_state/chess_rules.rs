//! Canonical rule constants.
//!
//! Board geometry, pawn home rows, the standard starting layout and the blast
//! radius of a capture.

use crate::game_state::chess_types::{PieceKind, Side};

pub const BOARD_SIZE: usize = 8;

/// Half-width of the explosion block: 1 gives the 3x3 neighbourhood.
pub const BLAST_RADIUS: i8 = 1;

/// Back-rank layout from file `a` to file `h`.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Row holding a side's pieces in the starting layout.
pub const fn back_row(side: Side) -> u8 {
    match side {
        Side::Light => 7,
        Side::Dark => 0,
    }
}

/// Row a side's pawns start on; the only row they may double-step from.
pub const fn pawn_home_row(side: Side) -> u8 {
    match side {
        Side::Light => 6,
        Side::Dark => 1,
    }
}

/// Column of the king in the starting layout (file `e`).
pub const KING_START_COL: u8 = 4;
