//! Reasons a move request can be refused.

use thiserror::Error;

use crate::core::Seat;

/// Why [`try_move_token`](super::try_move_token) refused a move.
///
/// [`move_token`](super::move_token) maps every variant to returning the
/// state unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is already finished")]
    GameFinished,

    #[error("token index {0} is out of range")]
    TokenOutOfRange(usize),

    #[error("the dice have not been rolled this turn")]
    DiceNotRolled,

    #[error("{seat} cannot move token {token} with the current roll")]
    IllegalMove { seat: Seat, token: usize },
}
