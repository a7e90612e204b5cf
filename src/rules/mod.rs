//! Rules engine.
//!
//! Owns dice semantics, legal-move computation, movement, captures, win
//! detection and turn rotation. All operations are total: requests the
//! rules do not allow leave the state unchanged. [`try_move_token`] is the
//! checked variant for callers that want to know why.

pub mod engine;
pub mod error;

pub use engine::{
    check_for_captures, create_initial_state, destination, end_turn, move_token, roll_dice,
    try_move_token, turn_phase, valid_moves, Capture, CaptureSet, MoveSet, TurnPhase,
};
pub use error::MoveError;
