//! Player abstraction for automated games.
//!
//! The match harness and the self-play binary drive any `Engine` the same
//! way: hand it the session, get back a move or `None` when it has none.

use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_session::GameSession;

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, session: &GameSession) -> Option<ChessMove>;
}
