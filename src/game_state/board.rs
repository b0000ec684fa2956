//! Mailbox board representation.
//!
//! `Board` is a fixed 8x8 grid of `Option<Piece>`. Indexing goes through
//! `Square`, which can only be built in range, so no access can fall off the
//! board.

use crate::game_state::chess_rules::{back_row, pawn_home_row, BACK_RANK, BOARD_SIZE};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard chess starting layout, Dark on rows 0-1 and Light on rows 6-7.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for side in [Side::Light, Side::Dark] {
            let back = back_row(side) as usize;
            let pawns = pawn_home_row(side) as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(side, *kind));
                board.squares[pawns][col] = Some(Piece::new(side, PieceKind::Pawn));
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Piece) {
        self.squares[square.row() as usize][square.col() as usize] = Some(piece);
    }

    /// Empties `square`, returning what stood there.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.side == side)
    }

    /// Scan for `side`'s king. This is the authority on king presence.
    pub fn find_king(&self, side: Side) -> Option<Square> {
        self.pieces_of(side)
            .find(|(_, piece)| piece.is_king())
            .map(|(square, _)| square)
    }

    /// Raw rows, rank 8 first, for renderers.
    pub fn rows(&self) -> &[[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }
}
