//! Head-to-head engine match harness.
//!
//! Plays two `Engine`s against each other through the same `request_move`
//! path a human uses, with no text I/O. Series runs swap colours per game
//! from a seeded coin so results are reproducible.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{Outcome, Side};
use crate::game_state::game_session::GameSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWins,
    DarkWins,
    /// The side on move had no legal move at all.
    NoLegalMoves(Side),
    MaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, side: Side },
    Unfinished,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 300 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_session: GameSession,
    pub plies: u16,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

impl MatchSeriesConfig {
    pub fn log(&self) {
        info!("[MatchSeriesConfig]");
        info!("| games: {}", self.games);
        info!("| base_seed: {}", self.base_seed);
        info!("| max_plies: {}", self.per_game.max_plies);
        info!("| verbose: {}", self.verbose);
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub unfinished: u16,
    pub total_plies: u32,
    pub outcomes: Vec<SeriesOutcome>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        let avg_plies = if self.games == 0 {
            0.0
        } else {
            f64::from(self.total_plies) / f64::from(self.games)
        };
        format!(
            "games={} player1_wins={} player2_wins={} unfinished={} avg_plies={:.1}",
            self.games, self.player1_wins, self.player2_wins, self.unfinished, avg_plies
        )
    }
}

/// Play one game from the standard start. `light` moves first.
pub fn play_match(
    light: &mut dyn Engine,
    dark: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    let session = GameSession::new(light.name().to_owned(), dark.name().to_owned());
    play_match_from_session(session, light, dark, config)
}

/// Play one game from a caller-provided session.
pub fn play_match_from_session(
    mut session: GameSession,
    light: &mut dyn Engine,
    dark: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    light.new_game();
    dark.new_game();

    let mut plies = 0u16;
    while plies < config.max_plies {
        let mover = session.active_side();
        let engine: &mut dyn Engine = match mover {
            Side::Light => &mut *light,
            Side::Dark => &mut *dark,
        };

        let Some(chosen) = engine.choose_move(&session) else {
            return Ok(MatchResult {
                outcome: MatchOutcome::NoLegalMoves(mover),
                final_session: session,
                plies,
            });
        };
        if !session.request_move(chosen.from, chosen.to) {
            return Err(format!("{} returned illegal move {chosen}", engine.name()));
        }
        debug!("ply {plies}: {mover} plays {chosen}");
        plies += 1;

        match session.outcome() {
            Outcome::InProgress => {}
            Outcome::LightWins => {
                return Ok(MatchResult {
                    outcome: MatchOutcome::LightWins,
                    final_session: session,
                    plies,
                })
            }
            Outcome::DarkWins => {
                return Ok(MatchResult {
                    outcome: MatchOutcome::DarkWins,
                    final_session: session,
                    plies,
                })
            }
        }
    }

    Ok(MatchResult {
        outcome: MatchOutcome::MaxPlies,
        final_session: session,
        plies,
    })
}

/// Play a series and aggregate results. Factories receive the per-game seed.
pub fn play_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_light = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory(seed);
        let mut player2 = player2_factory(seed.wrapping_mul(31).wrapping_add(17));

        let result = if player1_is_light {
            play_match(player1.as_mut(), player2.as_mut(), &config.per_game)?
        } else {
            play_match(player2.as_mut(), player1.as_mut(), &config.per_game)?
        };
        stats.total_plies = stats.total_plies.saturating_add(u32::from(result.plies));

        let winner_side = match result.outcome {
            MatchOutcome::LightWins => Some(Side::Light),
            MatchOutcome::DarkWins => Some(Side::Dark),
            MatchOutcome::NoLegalMoves(_) | MatchOutcome::MaxPlies => None,
        };
        let mapped = match winner_side {
            Some(side) => {
                let player = if (side == Side::Light) == player1_is_light {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, side }
            }
            None => {
                stats.unfinished += 1;
                SeriesOutcome::Unfinished
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            info!(
                "[series] game {}/{} seed={} player1={} result={:?} plies={}",
                i + 1,
                config.games,
                seed,
                if player1_is_light { "white" } else { "black" },
                mapped,
                result.plies
            );
        }
    }

    Ok(stats)
}
