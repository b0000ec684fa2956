use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

/// True when every square strictly between `from` and `to` is empty.
///
/// Only meaningful for squares on a shared row, column or diagonal; callers
/// check alignment first. Adjacent squares trivially have a clear path.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    let step_row = d_row.signum();
    let step_col = d_col.signum();
    let distance = d_row.abs().max(d_col.abs());

    (1..distance).all(|i| {
        from.offset(step_row * i, step_col * i)
            .is_some_and(|between| board.is_empty(between))
    })
}

#[cfg(test)]
mod tests {
    use super::path_is_clear;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn blockers_only_count_strictly_between() {
        let mut board = Board::empty();
        board.set(sq("a1"), Piece::new(Side::Light, PieceKind::Rook));
        board.set(sq("a8"), Piece::new(Side::Dark, PieceKind::Rook));
        assert!(path_is_clear(&board, sq("a1"), sq("a8")));
        board.set(sq("a5"), Piece::new(Side::Dark, PieceKind::Pawn));
        assert!(!path_is_clear(&board, sq("a1"), sq("a8")));
        assert!(path_is_clear(&board, sq("a1"), sq("a5")));
    }

    #[test]
    fn adjacent_squares_are_clear() {
        let board = Board::starting_position();
        assert!(path_is_clear(&board, sq("d1"), sq("d2")));
        assert!(path_is_clear(&board, sq("d1"), sq("e2")));
    }
}
