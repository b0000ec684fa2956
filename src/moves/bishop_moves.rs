use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_validation::legal_move_shared::path_is_clear;

/// Equal absolute row and column deltas with an empty diagonal in between.
pub fn is_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    if d_row.abs() != d_col.abs() {
        return false;
    }
    path_is_clear(board, from, to)
}
