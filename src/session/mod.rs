//! Game sessions.
//!
//! The external driver around the pure rules: holds the current state and
//! RNG, applies human intents, plays computer seats, resolves stuck turns
//! and notifies observers (log subscribers, the win/loss tally).

pub mod driver;
pub mod observer;

pub use driver::{GameSession, SessionError};
pub use observer::{GameObserver, TracingObserver};
