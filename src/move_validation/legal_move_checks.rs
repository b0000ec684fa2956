//! Move legality for atomic chess.
//!
//! `is_legal` is a pure predicate over a board: it checks ownership of the
//! origin square, forbids landing on a friendly piece and then dispatches to
//! the per-piece movement rule. It never inspects check; leaving your own
//! king exposed is allowed.

use log::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::is_bishop_move;
use crate::moves::king_moves::is_king_move;
use crate::moves::knight_moves::is_knight_move;
use crate::moves::pawn_moves::is_pawn_move;
use crate::moves::queen_moves::is_queen_move;
use crate::moves::rook_moves::is_rook_move;

pub fn is_legal(board: &Board, active_side: Side, from: Square, to: Square) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    if piece.side != active_side {
        return false;
    }
    // Also rejects the null move, since `from` holds a friendly piece.
    if board.get(to).is_some_and(|target| target.side == active_side) {
        return false;
    }

    let legal = match piece.kind {
        PieceKind::King => is_king_move(from, to),
        PieceKind::Pawn => is_pawn_move(board, piece.side, from, to),
        PieceKind::Rook => is_rook_move(board, from, to),
        PieceKind::Bishop => is_bishop_move(board, from, to),
        PieceKind::Queen => is_queen_move(board, from, to),
        PieceKind::Knight => is_knight_move(from, to),
    };
    trace!("{:?} {from} -> {to}: legal={legal}", piece.kind);
    legal
}

#[cfg(test)]
mod tests {
    use super::is_legal;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn lone(piece: Piece, at: &str) -> Board {
        let mut board = Board::empty();
        board.set(sq(at), piece);
        board
    }

    #[test]
    fn null_move_is_never_legal() {
        let board = Board::starting_position();
        for side in [Side::Light, Side::Dark] {
            for square in Square::all() {
                assert!(!is_legal(&board, side, square, square), "{square}");
            }
        }
    }

    #[test]
    fn origin_must_hold_an_active_piece() {
        let board = Board::starting_position();
        assert!(!is_legal(&board, Side::Light, sq("e4"), sq("e5")));
        assert!(!is_legal(&board, Side::Light, sq("e7"), sq("e5")));
        assert!(is_legal(&board, Side::Dark, sq("e7"), sq("e5")));
    }

    #[test]
    fn friendly_targets_are_forbidden() {
        let board = Board::starting_position();
        assert!(!is_legal(&board, Side::Light, sq("e1"), sq("e2")));
        assert!(!is_legal(&board, Side::Light, sq("b1"), sq("d2")));
        assert!(is_legal(&board, Side::Light, sq("b1"), sq("c3")));
    }

    #[test]
    fn rook_is_blocked_at_every_intermediate_square() {
        let rook = Piece::new(Side::Light, PieceKind::Rook);
        let blocker = Piece::new(Side::Dark, PieceKind::Pawn);
        let from = sq("a1");
        let to = sq("a8");
        assert!(is_legal(&lone(rook, "a1"), Side::Light, from, to));
        for row in 1..7u8 {
            let mut board = lone(rook, "a1");
            board.set(Square::new(row, 0).unwrap(), blocker);
            assert!(!is_legal(&board, Side::Light, from, to), "blocker at row {row}");
        }
    }

    #[test]
    fn bishop_is_blocked_at_every_intermediate_square() {
        let bishop = Piece::new(Side::Dark, PieceKind::Bishop);
        let from = sq("a8");
        let to = sq("h1");
        assert!(is_legal(&lone(bishop, "a8"), Side::Dark, from, to));
        for i in 1..7u8 {
            let mut board = lone(bishop, "a8");
            board.set(
                Square::new(i, i).unwrap(),
                Piece::new(Side::Light, PieceKind::Knight),
            );
            assert!(!is_legal(&board, Side::Dark, from, to), "blocker at {i}");
        }
    }

    #[test]
    fn queen_combines_rook_and_bishop_lines() {
        let queen = Piece::new(Side::Light, PieceKind::Queen);
        let board = lone(queen, "d4");
        assert!(is_legal(&board, Side::Light, sq("d4"), sq("d8")));
        assert!(is_legal(&board, Side::Light, sq("d4"), sq("a4")));
        assert!(is_legal(&board, Side::Light, sq("d4"), sq("g7")));
        assert!(is_legal(&board, Side::Light, sq("d4"), sq("a1")));
        assert!(!is_legal(&board, Side::Light, sq("d4"), sq("e6")));

        let mut blocked = board.clone();
        blocked.set(sq("e5"), Piece::new(Side::Light, PieceKind::Pawn));
        assert!(!is_legal(&blocked, Side::Light, sq("d4"), sq("g7")));
        for side_blocker in ["d5", "d6", "d7"] {
            let mut blocked = board.clone();
            blocked.set(sq(side_blocker), Piece::new(Side::Dark, PieceKind::Pawn));
            assert!(!is_legal(&blocked, Side::Light, sq("d4"), sq("d8")));
        }
    }

    #[test]
    fn knight_ignores_blockers_and_board_contents() {
        let board = Board::starting_position();
        assert!(is_legal(&board, Side::Light, sq("g1"), sq("f3")));
        assert!(is_legal(&board, Side::Light, sq("g1"), sq("h3")));

        let mut crowded = lone(Piece::new(Side::Light, PieceKind::Knight), "d4");
        for ring in ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"] {
            crowded.set(sq(ring), Piece::new(Side::Dark, PieceKind::Pawn));
        }
        for target in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
            assert!(is_legal(&crowded, Side::Light, sq("d4"), sq(target)), "{target}");
        }
        crowded.set(sq("f5"), Piece::new(Side::Dark, PieceKind::Queen));
        assert!(is_legal(&crowded, Side::Light, sq("d4"), sq("f5")));
        assert!(!is_legal(&crowded, Side::Light, sq("d4"), sq("f6")));
        assert!(!is_legal(&crowded, Side::Light, sq("d4"), sq("b6")));
    }

    #[test]
    fn king_may_step_next_to_danger_and_capture() {
        let mut board = lone(Piece::new(Side::Light, PieceKind::King), "e4");
        board.set(sq("e5"), Piece::new(Side::Dark, PieceKind::Queen));
        assert!(is_legal(&board, Side::Light, sq("e4"), sq("e5")));
        assert!(is_legal(&board, Side::Light, sq("e4"), sq("d3")));
        assert!(!is_legal(&board, Side::Light, sq("e4"), sq("e6")));
    }

    #[test]
    fn validator_does_not_mutate() {
        let board = Board::starting_position();
        let before = board.clone();
        for from in Square::all() {
            for to in Square::all() {
                let _ = is_legal(&board, Side::Light, from, to);
            }
        }
        assert_eq!(board, before);
    }
}
