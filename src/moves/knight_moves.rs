use crate::game_state::chess_types::Square;

/// The absolute deltas are a permutation of (1, 2). Knights jump, so nothing
/// else on the board matters.
#[inline]
pub fn is_knight_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}
