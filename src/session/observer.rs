//! Collaborators notified by a session.
//!
//! Sound, animation and statistics live outside the engine. They see the
//! game only through these callbacks.

use tracing::{debug, info};

use crate::core::Seat;

/// Receives session events. Both callbacks default to doing nothing.
pub trait GameObserver {
    /// A new log entry was appended. Each entry is delivered once, in order.
    fn on_log_entry(&mut self, _entry: &str) {}

    /// The game finished. Called exactly once per game.
    fn on_game_finished(&mut self, _winner: Seat) {}
}

/// Forwards session events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_log_entry(&mut self, entry: &str) {
        debug!("{}", entry);
    }

    fn on_game_finished(&mut self, winner: Seat) {
        info!("Game over, {} wins", winner);
    }
}
