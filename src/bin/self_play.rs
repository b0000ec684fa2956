//! Random-vs-random atomic chess series.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --games 100 --seed 7`

use clap::Parser;
use log::LevelFilter;

use atomic_chess::engines::engine_random::RandomEngine;
use atomic_chess::engines::engine_trait::Engine;
use atomic_chess::utils::log_init;
use atomic_chess::utils::match_harness::{play_match_series, MatchConfig, MatchSeriesConfig};

#[derive(Debug, Parser)]
#[command(version, about = "Play seeded random-vs-random atomic chess games")]
struct Cli {
    #[arg(long, default_value_t = 10)]
    games: u16,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    #[arg(long, default_value_t = 300)]
    max_plies: u16,

    /// Log every finished game.
    #[arg(short, long)]
    verbose: bool,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();
    log_init::init(cli.log_level).map_err(|err| err.to_string())?;

    let config = MatchSeriesConfig {
        games: cli.games,
        base_seed: cli.seed,
        per_game: MatchConfig {
            max_plies: cli.max_plies,
        },
        verbose: cli.verbose,
    };
    config.log();

    let stats = play_match_series(
        |seed| Box::new(RandomEngine::with_seed(seed)) as Box<dyn Engine>,
        |seed| Box::new(RandomEngine::with_seed(seed)) as Box<dyn Engine>,
        &config,
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
