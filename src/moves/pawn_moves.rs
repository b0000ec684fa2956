//! Pawn movement. Direction depends on the side: Light pawns walk toward row
//! 0, Dark pawns toward row 7. There is no en-passant and no promotion.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_home_row;
use crate::game_state::chess_types::{Side, Square};

pub fn is_pawn_move(board: &Board, side: Side, from: Square, to: Square) -> bool {
    let direction = side.pawn_direction();
    let (d_row, d_col) = from.delta_to(to);

    match (d_col.abs(), d_row) {
        (0, d) if d == direction => board.is_empty(to),
        (0, d) if d == 2 * direction => {
            if from.row() != pawn_home_row(side) {
                return false;
            }
            let Some(middle) = from.offset(direction, 0) else {
                return false;
            };
            board.is_empty(middle) && board.is_empty(to)
        }
        // Diagonal steps only capture; an empty diagonal is never legal.
        (1, d) if d == direction => !board.is_empty(to),
        _ => false,
    }
}
