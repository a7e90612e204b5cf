//! # ludo-engine
//!
//! A deterministic rules engine for four-seat Ludo with a heuristic
//! computer player.
//!
//! ## Design Principles
//!
//! 1. **States Are Values**: Every transition takes `&GameState` and returns
//!    a new state. Nothing is mutated in place, and cloning is cheap
//!    (fixed token table, persistent `im` log).
//!
//! 2. **Total Operations**: Rolling out of turn or moving a token that
//!    cannot move leaves the state unchanged. `try_move_token` is the
//!    checked variant that says why.
//!
//! 3. **Injected Randomness**: Dice and tie-breaks draw from a
//!    `RandomSource`, so a seed (or a script) reproduces a game exactly.
//!
//! ## Modules
//!
//! - `core`: Seats, token positions, state, bounded log, RNG, configuration
//! - `board`: Projection from seat-relative offsets to shared board cells
//! - `rules`: Dice, legal moves, movement, captures, wins, turn rotation
//! - `ai`: Heuristic move selection and the computer turn step
//! - `session`: The driver that owns the current state and notifies observers
//!
//! ## Example
//!
//! ```
//! use ludo_engine::core::{ScriptedRng, Seat, TokenPosition};
//! use ludo_engine::rules::{create_initial_state, move_token, roll_dice, valid_moves};
//!
//! let mut dice = ScriptedRng::rolls([6]);
//! let state = roll_dice(&create_initial_state(), &mut dice);
//! assert_eq!(valid_moves(&state).len(), 4);
//!
//! let state = move_token(&state, 0);
//! assert_eq!(state.token(Seat::Red, 0), Some(TokenPosition::Track(0)));
//! assert_eq!(state.active_seat, Seat::Red); // a 6 earns another roll
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod ai;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Seat, SeatMap, TokenPosition, TokenRow,
    GameState, GameStatus, EventLog,
    GameRng, GameRngState, RandomSource, ScriptedRng,
    LudoConfig, Controller, ConfigError,
};

pub use crate::board::{project_to_board_cell, Cell};

pub use crate::rules::{
    create_initial_state, roll_dice, valid_moves, check_for_captures, destination,
    move_token, try_move_token, end_turn, turn_phase,
    Capture, CaptureSet, MoveSet, MoveError, TurnPhase,
};

pub use crate::ai::{
    choose_move, take_computer_turn, take_computer_turn_with,
    MovePolicy, HeuristicPolicy, RandomPolicy,
};

pub use crate::session::{GameSession, SessionError, GameObserver, TracingObserver};
