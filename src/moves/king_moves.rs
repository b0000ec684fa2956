use crate::game_state::chess_types::Square;

/// One step in any direction. Check safety is not part of atomic legality.
#[inline]
pub fn is_king_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    d_row.abs() <= 1 && d_col.abs() <= 1
}
