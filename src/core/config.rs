//! Game configuration.
//!
//! `LudoConfig` is consumed by the session driver and by
//! [`GameState::with_config`](super::GameState::with_config):
//! - `seed`: seeds the session's `GameRng`
//! - `log_capacity`: how many log entries each state retains
//! - `controllers`: which seats are driven by the heuristic player
//! - `max_steps`: safety bound for fully automated play
//!
//! Configurations can be built in code or loaded from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::log::DEFAULT_LOG_CAPACITY;
use super::seat::{Seat, SeatMap};

/// Who makes decisions for a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// Moves arrive as intents from the presentation layer.
    Human,
    /// Moves are chosen by the computer player.
    Computer,
}

/// Errors from building or loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("log capacity must be at least 1")]
    ZeroLogCapacity,

    #[error("step limit must be at least 1")]
    ZeroStepLimit,

    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LudoConfig {
    /// Seed for the session RNG.
    pub seed: u64,

    /// Retained log entries per state.
    pub log_capacity: usize,

    /// Controller for each seat.
    pub controllers: SeatMap<Controller>,

    /// Maximum driver steps for `play_to_completion`.
    pub max_steps: u32,
}

impl Default for LudoConfig {
    /// Red is the human player, the other three seats are computer-driven.
    fn default() -> Self {
        Self {
            seed: 0,
            log_capacity: DEFAULT_LOG_CAPACITY,
            controllers: SeatMap::new(|seat| match seat {
                Seat::Red => Controller::Human,
                _ => Controller::Computer,
            }),
            max_steps: 10_000,
        }
    }
}

impl LudoConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Config where every seat is computer-driven.
    pub fn all_computer() -> Self {
        Self::default().with_controllers(SeatMap::with_value(Controller::Computer))
    }

    /// Load and validate a config from JSON. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_capacity == 0 {
            return Err(ConfigError::ZeroLogCapacity);
        }
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroStepLimit);
        }
        Ok(())
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the log capacity.
    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    /// Set every seat's controller.
    #[must_use]
    pub fn with_controllers(mut self, controllers: SeatMap<Controller>) -> Self {
        self.controllers = controllers;
        self
    }

    /// Set one seat's controller.
    #[must_use]
    pub fn with_controller(mut self, seat: Seat, controller: Controller) -> Self {
        self.controllers[seat] = controller;
        self
    }

    /// Set the automated-play step limit.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Is this seat driven by the computer player?
    #[must_use]
    pub fn is_computer(&self, seat: Seat) -> bool {
        self.controllers[seat] == Controller::Computer
    }
}
