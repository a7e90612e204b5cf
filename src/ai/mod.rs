//! Computer player.
//!
//! - `heuristic`: the move-selection heuristic and the single-step turn
//!   driver for computer seats
//! - `policy`: the `MovePolicy` seam and its implementations

pub mod heuristic;
pub mod policy;

pub use heuristic::{choose_move, take_computer_turn, take_computer_turn_with};
pub use policy::{HeuristicPolicy, MovePolicy, RandomPolicy};
