//! Heuristic computer player.
//!
//! Only reads the rules' query surface and applies moves through the rules'
//! own transitions, so it can never make an illegal move.

use tracing::debug;

use super::policy::{HeuristicPolicy, MovePolicy};
use crate::core::{GameState, RandomSource, Seat, TokenPosition};
use crate::rules::{check_for_captures, destination, move_token, roll_dice, valid_moves, MoveSet};

/// Pick a token to move from `moves`.
///
/// Priority:
/// 1. the only legal move
/// 2. a move that captures (random among several)
/// 3. the on-board token furthest along (lowest index on ties)
/// 4. random among tokens waiting at start
#[must_use]
pub fn choose_move(state: &GameState, moves: &[usize], rng: &mut dyn RandomSource) -> Option<usize> {
    match moves {
        [] => return None,
        [only] => return Some(*only),
        _ => {}
    }

    let seat = state.active_seat;
    let capturing: MoveSet = moves
        .iter()
        .copied()
        .filter(|&token| captures_on_landing(state, seat, token))
        .collect();
    if !capturing.is_empty() {
        return Some(capturing[rng.pick_index(capturing.len())]);
    }

    let tokens = state.active_tokens();
    let leader = moves
        .iter()
        .copied()
        .filter_map(|token| tokens.get(token)?.offset().map(|offset| (token, offset)))
        .fold(None, |best: Option<(usize, u8)>, (token, offset)| match best {
            Some((_, best_offset)) if best_offset >= offset => best,
            _ => Some((token, offset)),
        });
    if let Some((token, _)) = leader {
        return Some(token);
    }

    Some(moves[rng.pick_index(moves.len())])
}

fn captures_on_landing(state: &GameState, seat: Seat, token: usize) -> bool {
    match destination(state, token) {
        Some(TokenPosition::Track(offset)) => !check_for_captures(state, seat, offset).is_empty(),
        _ => false,
    }
}

/// Advance a computer seat's turn by one step using the heuristic.
///
/// See [`take_computer_turn_with`].
#[must_use]
pub fn take_computer_turn(state: &GameState, rng: &mut dyn RandomSource) -> GameState {
    take_computer_turn_with(state, &HeuristicPolicy, rng)
}

/// Advance a computer seat's turn by one step.
///
/// Rolls if no roll has been made; moves if a move is available and none
/// was made since the roll; rolls again if a bonus roll is owed. Otherwise
/// the turn is complete and the state comes back unchanged; ending the
/// turn is up to the caller.
#[must_use]
pub fn take_computer_turn_with(
    state: &GameState,
    policy: &dyn MovePolicy,
    rng: &mut dyn RandomSource,
) -> GameState {
    if state.is_finished() {
        return state.clone();
    }
    if !state.dice_rolled {
        return roll_dice(state, rng);
    }

    let moves = valid_moves(state);
    if !state.token_moved && !moves.is_empty() {
        return match policy.choose_move(state, &moves, rng) {
            Some(token) => {
                debug!("{} chooses token {} from {:?}", state.active_seat, token, moves.as_slice());
                move_token(state, token)
            }
            None => state.clone(),
        };
    }

    if state.bonus_turn {
        return roll_dice(state, rng);
    }
    state.clone()
}
