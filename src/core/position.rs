//! Token positions.
//!
//! A token is either waiting in its yard (`AtStart`), travelling
//! (`Track(offset)`), or finished (`AtHome`). Track offsets are relative
//! to the owning seat's entry cell:
//!
//! - `0..52`: the shared ring, where captures happen
//! - `52..=57`: the seat's private home stretch

use serde::{Deserialize, Serialize};

/// Tokens owned by each seat.
pub const TOKENS_PER_SEAT: usize = 4;

/// Number of cells on the shared ring.
pub const TRACK_LENGTH: u8 = 52;

/// Number of cells in each seat's private home stretch.
pub const HOME_STRETCH_LENGTH: u8 = 6;

/// Last home-stretch offset. Reaching it finishes the token.
pub const FINAL_OFFSET: u8 = TRACK_LENGTH + HOME_STRETCH_LENGTH - 1;

/// Where a single token currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenPosition {
    /// Not yet entered the board.
    #[default]
    AtStart,
    /// Seat-relative offset along the ring and home stretch.
    Track(u8),
    /// Finished.
    AtHome,
}

impl TokenPosition {
    #[must_use]
    pub const fn is_at_start(self) -> bool {
        matches!(self, TokenPosition::AtStart)
    }

    #[must_use]
    pub const fn is_at_home(self) -> bool {
        matches!(self, TokenPosition::AtHome)
    }

    /// The seat-relative offset, if the token is on the board.
    #[must_use]
    pub const fn offset(self) -> Option<u8> {
        match self {
            TokenPosition::Track(offset) => Some(offset),
            _ => None,
        }
    }

    /// True while the token sits on the shared ring (and so can be captured).
    #[must_use]
    pub const fn is_on_shared_ring(self) -> bool {
        matches!(self, TokenPosition::Track(offset) if offset < TRACK_LENGTH)
    }

    /// True while the token is in its seat's private home stretch.
    #[must_use]
    pub const fn is_in_home_stretch(self) -> bool {
        matches!(self, TokenPosition::Track(offset) if offset >= TRACK_LENGTH)
    }
}

impl std::fmt::Display for TokenPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenPosition::AtStart => f.write_str("start"),
            TokenPosition::Track(offset) => write!(f, "{}", offset),
            TokenPosition::AtHome => f.write_str("home"),
        }
    }
}
