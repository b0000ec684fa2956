//! Random-move player.
//!
//! Picks uniformly among the legal moves of the side on move. Seeded
//! construction makes whole games reproducible, which the self-play harness
//! and the benchmarks rely on.

use log::trace;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_session::GameSession;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Atomic Random"
    }

    fn choose_move(&mut self, session: &GameSession) -> Option<ChessMove> {
        let legal_moves = session.legal_moves();
        trace!("random_engine legal_moves {}", legal_moves.len());
        legal_moves.as_slice().choose(&mut self.rng).copied()
    }
}
