use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_validation::legal_move_shared::path_is_clear;

/// Same row or same column with nothing standing strictly between.
pub fn is_rook_move(board: &Board, from: Square, to: Square) -> bool {
    if from.row() != to.row() && from.col() != to.col() {
        return false;
    }
    path_is_clear(board, from, to)
}
