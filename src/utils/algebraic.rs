//! Conversions between algebraic coordinates and board squares.
//!
//! Files `a..h` map to columns 0..7 and rank digits map to rows with
//! `row = 8 - rank`, so rank 8 is row 0. Existing game transcripts depend on
//! this mapping.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{ChessMove, Square};

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let col = file - b'a';
    let row = BOARD_SIZE as u8 - (rank - b'0');
    Square::new(row, col).ok_or_else(|| ChessErrors::InvalidAlgebraicString(square.to_owned()))
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file = char::from(b'a' + square.col());
    let rank = char::from(b'0' + (BOARD_SIZE as u8 - square.row()));
    format!("{file}{rank}")
}

/// Split a move line of the form `"a2 a4"` into its two square strings.
///
/// Only the shape is checked: five bytes with a space in the middle. The
/// squares themselves are left for the caller to parse.
pub fn split_move_line(line: &str) -> Result<(&str, &str), ChessErrors> {
    let line = line.trim();
    if line.len() != 5 || line.as_bytes()[2] != b' ' {
        return Err(ChessErrors::InvalidMoveFormat(line.to_owned()));
    }
    Ok((&line[..2], &line[3..]))
}

/// Parse a move line of the form `"a2 a4"`: two squares separated by one space.
pub fn parse_move_line(line: &str) -> Result<ChessMove, ChessErrors> {
    let (from, to) = split_move_line(line)?;
    Ok(ChessMove::new(algebraic_to_square(from)?, algebraic_to_square(to)?))
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_eight_is_row_zero() {
        let a8 = algebraic_to_square("a8").expect("a8 should parse");
        assert_eq!((a8.row(), a8.col()), (0, 0));
        let h1 = algebraic_to_square("h1").expect("h1 should parse");
        assert_eq!((h1.row(), h1.col()), (7, 7));
        let e4 = algebraic_to_square("e4").expect("e4 should parse");
        assert_eq!((e4.row(), e4.col()), (4, 4));
        assert_eq!(square_to_algebraic(e4), "e4");
    }

    #[test]
    fn display_and_from_str_agree() {
        for square in Square::all() {
            let text = square.to_string();
            assert_eq!(text.parse::<Square>(), Ok(square));
        }
    }

    #[test]
    fn malformed_squares_are_rejected() {
        for bad in ["", "e", "e9", "e0", "i4", "E4", "e44", "4e"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessErrors::InvalidAlgebraicString(bad.to_owned())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn split_checks_shape_only() {
        assert_eq!(split_move_line(" a2 a4\n"), Ok(("a2", "a4")));
        assert_eq!(split_move_line("z2 a4"), Ok(("z2", "a4")));
        assert!(matches!(
            split_move_line("a2  a4"),
            Err(ChessErrors::InvalidMoveFormat(_))
        ));
        assert!(matches!(
            split_move_line("a2"),
            Err(ChessErrors::InvalidMoveFormat(_))
        ));
    }

    #[test]
    fn move_line_format() {
        let mv = parse_move_line("a2 a4").expect("well-formed line");
        assert_eq!(mv.from.to_string(), "a2");
        assert_eq!(mv.to.to_string(), "a4");
        assert!(matches!(
            parse_move_line("a2a4"),
            Err(ChessErrors::InvalidMoveFormat(_))
        ));
        assert!(matches!(
            parse_move_line("a2-a4"),
            Err(ChessErrors::InvalidMoveFormat(_))
        ));
        assert!(matches!(
            parse_move_line("z2 a4"),
            Err(ChessErrors::InvalidAlgebraicString(_))
        ));
    }
}
