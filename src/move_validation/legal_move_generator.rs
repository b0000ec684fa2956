//! Exhaustive legal move enumeration.
//!
//! The board is small enough that testing every (from, to) pair against the
//! legality predicate is the simplest correct generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_validation::legal_move_checks::is_legal;

pub fn legal_moves_for_side(board: &Board, side: Side) -> Vec<ChessMove> {
    let mut out = Vec::new();
    for (from, _) in board.pieces_of(side) {
        out.extend(
            Square::all()
                .filter(|&to| is_legal(board, side, from, to))
                .map(|to| ChessMove::new(from, to)),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::legal_moves_for_side;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Side;

    #[test]
    fn twenty_moves_from_the_start() {
        let board = Board::starting_position();
        assert_eq!(legal_moves_for_side(&board, Side::Light).len(), 20);
        assert_eq!(legal_moves_for_side(&board, Side::Dark).len(), 20);
    }

    #[test]
    fn empty_board_has_no_moves() {
        assert!(legal_moves_for_side(&Board::empty(), Side::Light).is_empty());
    }
}
