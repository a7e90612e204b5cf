//! Game state.
//!
//! `GameState` is a value: rules transitions take `&GameState` and return
//! a new one. The token table is a fixed array copied by value and the log
//! is an `im` persistent vector, so cloning is cheap and two states never
//! alias each other.

use serde::{Deserialize, Serialize};

use super::config::LudoConfig;
use super::log::EventLog;
use super::position::{TokenPosition, TOKENS_PER_SEAT};
use super::seat::{Seat, SeatMap};

/// The four tokens of one seat, in token-index order.
pub type TokenRow = [TokenPosition; TOKENS_PER_SEAT];

/// Whether the game is still running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Finished,
}

/// Complete game state.
///
/// ## Invariants
///
/// - `dice_value` is `Some` iff `dice_rolled`
/// - `bonus_turn` is only set right after a roll of 6
/// - `winner` is `Some` iff `status == Finished`, and then all four of
///   the winner's tokens are `AtHome`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seat whose turn it is.
    pub active_seat: Seat,

    /// Value of the last roll this turn.
    pub dice_value: Option<u8>,

    /// Has the active seat rolled this turn.
    pub dice_rolled: bool,

    /// Has the active seat moved since the last roll.
    pub token_moved: bool,

    /// The last roll was a 6, so another roll is owed.
    pub bonus_turn: bool,

    /// Token positions per seat.
    pub tokens: SeatMap<TokenRow>,

    pub status: GameStatus,

    pub winner: Option<Seat>,

    /// Advisory event log. Never read by the rules.
    pub log: EventLog,
}

impl GameState {
    /// Create the starting state: every token at start, Red to roll.
    #[must_use]
    pub fn new() -> Self {
        Self::with_log(EventLog::default())
    }

    /// Create the starting state using the config's log capacity.
    #[must_use]
    pub fn with_config(config: &LudoConfig) -> Self {
        Self::with_log(EventLog::new(config.log_capacity))
    }

    fn with_log(log: EventLog) -> Self {
        Self {
            active_seat: Seat::Red,
            dice_value: None,
            dice_rolled: false,
            token_moved: false,
            bonus_turn: false,
            tokens: SeatMap::with_value([TokenPosition::AtStart; TOKENS_PER_SEAT]),
            status: GameStatus::Playing,
            winner: None,
            log,
        }
    }

    /// Index of the active seat in the rotation.
    #[must_use]
    pub fn active_seat_index(&self) -> usize {
        self.active_seat.index()
    }

    /// The active seat's tokens.
    #[must_use]
    pub fn active_tokens(&self) -> &TokenRow {
        &self.tokens[self.active_seat]
    }

    /// Position of one token.
    #[must_use]
    pub fn token(&self, seat: Seat, index: usize) -> Option<TokenPosition> {
        self.tokens[seat].get(index).copied()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Have all of this seat's tokens reached home?
    #[must_use]
    pub fn all_home(&self, seat: Seat) -> bool {
        self.tokens[seat].iter().all(|p| p.is_at_home())
    }

    // === Setup helpers ===

    /// Return a copy with one seat's tokens replaced.
    ///
    /// Intended for setting up positions (puzzles, tests, resumed games);
    /// normal play changes tokens only through the rules.
    #[must_use]
    pub fn with_tokens(mut self, seat: Seat, row: TokenRow) -> Self {
        self.tokens[seat] = row;
        self
    }

    /// Return a copy with a different active seat and a fresh turn.
    #[must_use]
    pub fn with_active_seat(mut self, seat: Seat) -> Self {
        self.active_seat = seat;
        self.dice_value = None;
        self.dice_rolled = false;
        self.token_moved = false;
        self.bonus_turn = false;
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
