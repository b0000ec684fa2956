//! Value types shared by every layer of the rules engine.
//!
//! Sides, piece kinds, pieces, board squares, game outcomes and player
//! metadata. All of them are small `Copy` values except `Player`, which
//! carries an owned name.

use std::fmt;

use crate::game_state::chess_rules::BOARD_SIZE;

/// One of the two competing sides. `Light` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Light => 0,
            Side::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Row step taken by this side's pawns.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::Light => -1,
            Side::Dark => 1,
        }
    }

    /// Colour name used in transcripts and prompts.
    pub const fn color_name(self) -> &'static str {
        match self {
            Side::Light => "white",
            Side::Dark => "black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Single-letter tag, lowercase `p` for pawns as in the classic transcripts.
    pub const fn tag(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A piece is identified by what it is and who owns it; it carries no identity
/// across moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }
}

/// Board coordinate. Row 0 is Dark's back rank (rank 8), column 0 is file `a`.
///
/// The fields are private so that a `Square` can only exist inside the board;
/// every constructor fails closed with `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Square displaced by `(d_row, d_col)`, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Signed `(d_row, d_col)` from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Square) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }

    /// Every square of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

/// A `(from, to)` request. Carries no piece information; the board decides
/// what actually moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
}

impl ChessMove {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// Status of a game. There is no draw: a game either runs or a king exploded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    LightWins,
    DarkWins,
}

impl Outcome {
    pub const fn win_for(side: Side) -> Self {
        match side {
            Side::Light => Outcome::LightWins,
            Side::Dark => Outcome::DarkWins,
        }
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::InProgress => None,
            Outcome::LightWins => Some(Side::Light),
            Outcome::DarkWins => Some(Side::Dark),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::InProgress => "UNFINISHED",
            Outcome::LightWins => "WHITE_WON",
            Outcome::DarkWins => "BLACK_WON",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub side: Side,
}

impl Player {
    pub fn new(name: impl Into<String>, side: Side) -> Self {
        Self {
            name: name.into(),
            side,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_constructors_fail_closed() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        let corner = Square::new(0, 0).expect("a8 is on the board");
        assert!(corner.offset(-1, 0).is_none());
        assert!(corner.offset(0, -1).is_none());
        assert_eq!(corner.offset(7, 7), Square::new(7, 7));
        assert!(corner.offset(8, 0).is_none());
    }

    #[test]
    fn all_squares_are_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0).unwrap());
        assert_eq!(squares[9], Square::new(1, 1).unwrap());
        assert_eq!(squares[63], Square::new(7, 7).unwrap());
    }

    #[test]
    fn outcome_winner_mapping() {
        assert_eq!(Outcome::win_for(Side::Light).winner(), Some(Side::Light));
        assert_eq!(Outcome::win_for(Side::Dark).winner(), Some(Side::Dark));
        assert!(!Outcome::InProgress.is_terminal());
        assert_eq!(Outcome::InProgress.to_string(), "UNFINISHED");
    }
}
