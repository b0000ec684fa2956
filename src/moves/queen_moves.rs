use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::is_bishop_move;
use crate::moves::rook_moves::is_rook_move;

#[inline]
pub fn is_queen_move(board: &Board, from: Square, to: Square) -> bool {
    is_rook_move(board, from, to) || is_bishop_move(board, from, to)
}
