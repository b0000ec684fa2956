//! Terminal board renderer.
//!
//! Rank 8 is printed first with file letters above and below. Two styles:
//! the two-letter tags of the classic transcripts (`wK`, `bp`, `__`) and
//! Unicode chess glyphs.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    #[default]
    Tags,
    Unicode,
}

pub fn render_board(board: &Board, style: RenderStyle) -> String {
    let header = match style {
        RenderStyle::Tags => "  a  b  c  d  e  f  g  h",
        RenderStyle::Unicode => "  a b c d e f g h",
    };

    let mut out = String::new();
    out.push_str(header);
    out.push('\n');

    for (row, cells) in board.rows().iter().enumerate() {
        let rank = BOARD_SIZE - row;
        out.push_str(&rank.to_string());
        out.push(' ');
        for cell in cells {
            match style {
                RenderStyle::Tags => out.push_str(&piece_tag(*cell)),
                RenderStyle::Unicode => out.push(cell.map_or('·', piece_to_unicode)),
            }
            out.push(' ');
        }
        out.push_str(&rank.to_string());
        out.push('\n');
    }

    out.push_str(header);
    out
}

/// `wK`, `bp`, ... or `__` for an empty square.
pub fn piece_tag(cell: Option<Piece>) -> String {
    match cell {
        None => "__".to_owned(),
        Some(piece) => {
            let side = match piece.side {
                Side::Light => 'w',
                Side::Dark => 'b',
            };
            format!("{side}{}", piece.kind.tag())
        }
    }
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.side, piece.kind) {
        (Side::Light, PieceKind::Pawn) => '♙',
        (Side::Light, PieceKind::Knight) => '♘',
        (Side::Light, PieceKind::Bishop) => '♗',
        (Side::Light, PieceKind::Rook) => '♖',
        (Side::Light, PieceKind::Queen) => '♕',
        (Side::Light, PieceKind::King) => '♔',
        (Side::Dark, PieceKind::Pawn) => '♟',
        (Side::Dark, PieceKind::Knight) => '♞',
        (Side::Dark, PieceKind::Bishop) => '♝',
        (Side::Dark, PieceKind::Rook) => '♜',
        (Side::Dark, PieceKind::Queen) => '♛',
        (Side::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_rendering_of_start_position() {
        let text = render_board(&Board::starting_position(), RenderStyle::Tags);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a  b  c  d  e  f  g  h");
        assert_eq!(lines[1], "8 bR bN bB bQ bK bB bN bR 8");
        assert_eq!(lines[2], "7 bp bp bp bp bp bp bp bp 7");
        assert_eq!(lines[4], "5 __ __ __ __ __ __ __ __ 5");
        assert_eq!(lines[5], "4 __ __ __ __ __ __ __ __ 4");
        assert_eq!(lines[8], "1 wR wN wB wQ wK wB wN wR 1");
        assert_eq!(lines[9], lines[0]);
    }

    #[test]
    fn unicode_rendering_marks_empties() {
        let text = render_board(&Board::empty(), RenderStyle::Unicode);
        assert_eq!(text.lines().nth(4), Some("5 · · · · · · · · 5"));
        let start = render_board(&Board::starting_position(), RenderStyle::Unicode);
        assert_eq!(start.lines().nth(8), Some("1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1"));
    }
}
