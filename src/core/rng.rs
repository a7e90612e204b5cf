//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Injectable**: Rules and AI code draw only through [`RandomSource`]
//! - **Deterministic**: Same seed produces identical games
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use ludo_engine::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//!
//! for _ in 0..20 {
//!     assert_eq!(rng.roll_die(), replay.roll_die());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Faces on the die.
pub const DIE_FACES: u8 = 6;

/// The only source of randomness in the engine.
///
/// Die rolls and heuristic tie-breaks go through this trait so that callers
/// can plug in a seeded generator or a fixed script.
pub trait RandomSource {
    /// Roll a six-sided die, returning a value in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Pick an index uniformly from `0..len`. Callers never pass zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Seeded, checkpointable RNG.
///
/// Uses ChaCha8 for speed while keeping a stable, portable stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len.max(1))
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// A fixed script of die rolls and picks, replayed cyclically.
///
/// Rolls outside `1..=6` are clamped. An empty roll script rolls 1; an
/// empty pick script always picks index 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    rolls: Vec<u8>,
    picks: Vec<usize>,
    next_roll: usize,
    next_pick: usize,
}

impl ScriptedRng {
    /// Script that replays the given rolls.
    #[must_use]
    pub fn rolls(rolls: impl Into<Vec<u8>>) -> Self {
        Self {
            rolls: rolls.into(),
            ..Self::default()
        }
    }

    /// Also script the tie-break picks.
    #[must_use]
    pub fn with_picks(mut self, picks: impl Into<Vec<usize>>) -> Self {
        self.picks = picks.into();
        self
    }

    /// Number of rolls drawn so far.
    #[must_use]
    pub fn rolls_drawn(&self) -> usize {
        self.next_roll
    }
}

impl RandomSource for ScriptedRng {
    fn roll_die(&mut self) -> u8 {
        if self.rolls.is_empty() {
            return 1;
        }
        let value = self.rolls[self.next_roll % self.rolls.len()];
        self.next_roll += 1;
        value.clamp(1, DIE_FACES)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if self.picks.is_empty() || len == 0 {
            return 0;
        }
        let value = self.picks[self.next_pick % self.picks.len()];
        self.next_pick += 1;
        value % len
    }
}
