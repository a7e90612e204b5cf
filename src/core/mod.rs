//! Core engine types: seats, token positions, state, log, RNG, configuration.
//!
//! These are the building blocks the rules, the computer player and the
//! session driver all share. None of them encode game rules.

pub mod seat;
pub mod position;
pub mod log;
pub mod rng;
pub mod config;
pub mod state;

pub use seat::{Seat, SeatMap, SEAT_COUNT};
pub use position::{TokenPosition, FINAL_OFFSET, HOME_STRETCH_LENGTH, TOKENS_PER_SEAT, TRACK_LENGTH};
pub use log::{EventLog, LogError, DEFAULT_LOG_CAPACITY};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng, DIE_FACES};
pub use config::{ConfigError, Controller, LudoConfig};
pub use state::{GameState, GameStatus, TokenRow};
