//! Crate root module declarations for the atomic chess rules engine.
//!
//! The core is `game_state` (board, session, turn machine), `move_validation`
//! (pure legality predicate), `move_application` (board mutation and the
//! capture explosion) and the per-piece rules in `moves`. `engines` and
//! `utils` hold the thin collaborators: random player, match harness,
//! algebraic coordinates, rendering and logger setup.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_session;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_validation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
}

pub mod move_application {
    pub mod explosion;
    pub mod legal_move_apply;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod log_init;
    pub mod match_harness;
    pub mod render_game_state;
}

pub use chess_errors::ChessErrors;
pub use game_state::board::Board;
pub use game_state::chess_types::{ChessMove, Outcome, Piece, PieceKind, Player, Side, Square};
pub use game_state::game_session::GameSession;
