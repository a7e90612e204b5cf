//! Headless simulation: plays all-computer games and reports win counts.
//!
//! Usage: `ludo_autoplay [GAMES] [SEED] [CONFIG_JSON_PATH]`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ludo_engine::core::{LudoConfig, SeatMap};
use ludo_engine::session::{GameSession, TracingObserver};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let games: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(42);

    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(message) => {
                error!("{}", message);
                return ExitCode::FAILURE;
            }
        },
        None => LudoConfig::all_computer(),
    };

    // Every seat has to be computer-driven for a headless run.
    let config = config.with_controllers(LudoConfig::all_computer().controllers);

    let mut session = match GameSession::new(config.with_seed(seed)) {
        Ok(session) => session,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    session.add_observer(TracingObserver);

    info!("Playing {} game(s) from seed {}", games, seed);

    let mut wins: SeatMap<u32> = SeatMap::default();
    let mut total_steps: u64 = 0;

    for game in 0..games {
        session.restart(seed.wrapping_add(game as u64));
        match session.play_to_completion() {
            Ok(winner) => {
                wins[winner] += 1;
                total_steps += session.steps() as u64;
            }
            Err(err) => {
                error!("game {} failed: {}", game + 1, err);
                return ExitCode::FAILURE;
            }
        }
    }

    println!("games played: {}", games);
    for (seat, count) in wins.iter() {
        println!("{:>6}: {}", seat, count);
    }
    if games > 0 {
        println!("average steps: {:.1}", total_steps as f64 / games as f64);
    }

    ExitCode::SUCCESS
}

fn load_config(path: &str) -> Result<LudoConfig, String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path, e))?;
    LudoConfig::from_json(&text).map_err(|e| format!("bad config {}: {}", path, e))
}
