//! Ludo rules: dice, legal moves, movement, captures, wins and turn rotation.
//!
//! Every transition takes the current state by reference and returns the
//! next state. Calls that the rules do not allow (rolling twice, moving a
//! token that cannot move, acting after the game ended) return the state
//! unchanged instead of failing.
//!
//! ## Turn state machine
//!
//! ```text
//! AwaitingRoll --roll_dice--> AwaitingMove --move_token--> AwaitingRoll (rolled a 6)
//!                                                      \-> next seat's AwaitingRoll
//! AwaitingMove with no legal move = Stuck: the caller ends the turn.
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::error::MoveError;
use crate::board::ring_index;
use crate::core::{
    GameState, GameStatus, RandomSource, Seat, TokenPosition, DIE_FACES, FINAL_OFFSET,
    TOKENS_PER_SEAT,
};

/// Indices of the active seat's tokens that may move.
pub type MoveSet = SmallVec<[usize; TOKENS_PER_SEAT]>;

/// Tokens that would be sent back to start.
pub type CaptureSet = SmallVec<[Capture; 4]>;

/// An opponent token sitting on a contested cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    pub seat: Seat,
    pub token: usize,
}

/// Where the active seat is within its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// A roll is expected (start of turn, or a bonus roll is owed).
    AwaitingRoll,
    /// Rolled, and at least one token can move.
    AwaitingMove,
    /// Rolled, nothing can move and no bonus roll is owed. The caller
    /// must end the turn.
    Stuck,
    Finished,
}

/// All tokens at start, Red to roll.
#[must_use]
pub fn create_initial_state() -> GameState {
    GameState::new()
}

/// Roll the die for the active seat.
///
/// Refused (state returned unchanged) when the seat already rolled and no
/// bonus roll is owed, or when the game is over.
#[must_use]
pub fn roll_dice(state: &GameState, rng: &mut dyn RandomSource) -> GameState {
    if state.is_finished() || (state.dice_rolled && !state.bonus_turn) {
        return state.clone();
    }

    let seat = state.active_seat;
    let value = rng.roll_die();
    let bonus = value == DIE_FACES;

    let mut next = state.clone();
    next.dice_value = Some(value);
    next.dice_rolled = true;
    next.bonus_turn = bonus;
    next.token_moved = false;

    if bonus {
        next.log.push(format!("{} rolled a {} and gets an extra turn!", seat, value));
    } else {
        next.log.push(format!("{} rolled a {}.", seat, value));
    }
    debug!("{} rolled {}", seat, value);

    next
}

/// Tokens of the active seat that may move with the current roll.
#[must_use]
pub fn valid_moves(state: &GameState) -> MoveSet {
    let Some(dice) = state.dice_value else {
        return MoveSet::new();
    };
    if state.is_finished() || !state.dice_rolled || (state.token_moved && !state.bonus_turn) {
        return MoveSet::new();
    }

    state
        .active_tokens()
        .iter()
        .enumerate()
        .filter(|(_, position)| can_advance(**position, dice))
        .map(|(index, _)| index)
        .collect()
}

fn can_advance(position: TokenPosition, dice: u8) -> bool {
    match position {
        TokenPosition::AtStart => dice == DIE_FACES,
        TokenPosition::Track(offset) => offset.saturating_add(dice) <= FINAL_OFFSET,
        TokenPosition::AtHome => false,
    }
}

/// Opponent tokens on the same shared cell as `seat`'s track `offset`.
///
/// Positions are compared on the shared ring, not by raw offset. Home
/// stretch offsets (52 and up) never capture and are never captured.
#[must_use]
pub fn check_for_captures(state: &GameState, seat: Seat, offset: u8) -> CaptureSet {
    let Some(target) = ring_index(seat, offset) else {
        return CaptureSet::new();
    };

    state
        .tokens
        .iter()
        .filter(|(other, _)| *other != seat)
        .flat_map(|(other, row)| {
            row.iter().enumerate().filter_map(move |(token, position)| {
                let index = position.offset().and_then(|o| ring_index(other, o))?;
                (index == target).then_some(Capture { seat: other, token })
            })
        })
        .collect()
}

/// Where `token` would land if moved now, or `None` if it cannot move.
#[must_use]
pub fn destination(state: &GameState, token: usize) -> Option<TokenPosition> {
    if !valid_moves(state).contains(&token) {
        return None;
    }
    let dice = state.dice_value?;

    match state.active_tokens()[token] {
        TokenPosition::AtStart => Some(TokenPosition::Track(0)),
        TokenPosition::Track(offset) => {
            let landed = offset + dice;
            if landed >= FINAL_OFFSET {
                Some(TokenPosition::AtHome)
            } else {
                Some(TokenPosition::Track(landed))
            }
        }
        TokenPosition::AtHome => None,
    }
}

/// Move one of the active seat's tokens, or explain why not.
///
/// Applies captures, checks for a win, and rotates the turn unless a
/// bonus roll is still owed.
pub fn try_move_token(state: &GameState, token: usize) -> Result<GameState, MoveError> {
    if state.is_finished() {
        return Err(MoveError::GameFinished);
    }
    if token >= TOKENS_PER_SEAT {
        return Err(MoveError::TokenOutOfRange(token));
    }
    if !state.dice_rolled {
        return Err(MoveError::DiceNotRolled);
    }

    let seat = state.active_seat;
    let target = destination(state, token).ok_or(MoveError::IllegalMove { seat, token })?;

    let mut next = state.clone();
    next.tokens[seat][token] = target;

    if let TokenPosition::Track(offset) = target {
        for capture in check_for_captures(&next, seat, offset) {
            next.tokens[capture.seat][capture.token] = TokenPosition::AtStart;
            next.log.push(format!("{} captured {}'s token!", seat, capture.seat));
            debug!("{} captured {} token {}", seat, capture.seat, capture.token);
        }
    }

    if target.is_at_home() {
        next.log.push(format!("{} moved token {} to home!", seat, token + 1));
    } else {
        next.log.push(format!("{} moved token {}.", seat, token + 1));
    }
    debug!("{} moved token {} to {}", seat, token, target);

    next.token_moved = true;

    if next.all_home(seat) {
        next.status = GameStatus::Finished;
        next.winner = Some(seat);
        next.log.push(format!("{} has won the game!", seat));
        debug!("{} has won the game", seat);
        return Ok(next);
    }

    // A 6 earns one more roll; a second move on the same 6 uses it up.
    if !state.bonus_turn || state.token_moved {
        return Ok(end_turn(&next));
    }
    Ok(next)
}

/// Move one of the active seat's tokens.
///
/// Any request [`try_move_token`] would refuse returns the state unchanged.
#[must_use]
pub fn move_token(state: &GameState, token: usize) -> GameState {
    try_move_token(state, token).unwrap_or_else(|err| {
        debug!("move refused: {}", err);
        state.clone()
    })
}

/// Pass the turn to the next seat and reset the dice.
#[must_use]
pub fn end_turn(state: &GameState) -> GameState {
    if state.is_finished() {
        return state.clone();
    }

    let next_seat = state.active_seat.next();
    let mut next = state.clone().with_active_seat(next_seat);
    next.log.push(format!("It's {}'s turn.", next_seat));
    debug!("turn passes to {}", next_seat);

    next
}

/// Classify the state within the per-turn state machine.
#[must_use]
pub fn turn_phase(state: &GameState) -> TurnPhase {
    if state.is_finished() {
        return TurnPhase::Finished;
    }
    if !state.dice_rolled {
        return TurnPhase::AwaitingRoll;
    }

    let can_move = !valid_moves(state).is_empty();
    if state.bonus_turn && (state.token_moved || !can_move) {
        TurnPhase::AwaitingRoll
    } else if !state.token_moved && can_move {
        TurnPhase::AwaitingMove
    } else {
        TurnPhase::Stuck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;
    use TokenPosition::{AtHome, AtStart, Track};

    fn rolled(state: &GameState, value: u8) -> GameState {
        roll_dice(state, &mut ScriptedRng::rolls([value]))
    }

    #[test]
    fn test_roll_sets_dice() {
        let state = rolled(&create_initial_state(), 4);

        assert_eq!(state.dice_value, Some(4));
        assert!(state.dice_rolled);
        assert!(!state.bonus_turn);
        assert!(!state.token_moved);
        assert_eq!(state.log.last(), Some("Red rolled a 4."));
    }

    #[test]
    fn test_roll_six_grants_bonus() {
        let state = rolled(&create_initial_state(), 6);

        assert!(state.bonus_turn);
        assert_eq!(state.log.last(), Some("Red rolled a 6 and gets an extra turn!"));
    }

    #[test]
    fn test_second_roll_refused_without_bonus() {
        let state = rolled(&create_initial_state(), 3);
        let again = rolled(&state, 5);

        assert_eq!(again, state);
    }

    #[test]
    fn test_roll_allowed_with_bonus() {
        let state = rolled(&create_initial_state(), 6);
        let again = rolled(&state, 2);

        assert_eq!(again.dice_value, Some(2));
        assert!(!again.bonus_turn);
    }

    #[test]
    fn test_no_moves_before_roll() {
        assert!(valid_moves(&create_initial_state()).is_empty());
    }

    #[test]
    fn test_start_tokens_need_six() {
        let state = create_initial_state();
        assert!(valid_moves(&rolled(&state, 5)).is_empty());
        assert_eq!(valid_moves(&rolled(&state, 6)).as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_overshoot_is_not_valid() {
        let state = create_initial_state().with_tokens(Seat::Red, [Track(55), Track(51), AtHome, AtStart]);
        let state = rolled(&state, 3);

        // 55 + 3 = 58 overshoots; 51 + 3 = 54 is fine.
        assert_eq!(valid_moves(&state).as_slice(), &[1]);
    }

    #[test]
    fn test_destination() {
        let state = create_initial_state().with_tokens(Seat::Red, [AtStart, Track(10), Track(54), AtHome]);
        let state = rolled(&state, 3);

        assert_eq!(destination(&state, 0), None);
        assert_eq!(destination(&state, 1), Some(Track(13)));
        assert_eq!(destination(&state, 2), Some(AtHome));
        assert_eq!(destination(&state, 3), None);
    }

    #[test]
    fn test_captures_compare_shared_cells() {
        // Green offset 1 is ring cell 14, the same as Red offset 14.
        let state = create_initial_state()
            .with_tokens(Seat::Green, [Track(1), Track(14), AtStart, AtStart]);

        let captures = check_for_captures(&state, Seat::Red, 14);
        assert_eq!(captures.as_slice(), &[Capture { seat: Seat::Green, token: 0 }]);
    }

    #[test]
    fn test_home_stretch_never_captures() {
        let state = create_initial_state()
            .with_tokens(Seat::Green, [Track(52), AtStart, AtStart, AtStart])
            .with_tokens(Seat::Blue, [Track(13), AtStart, AtStart, AtStart]);

        assert!(check_for_captures(&state, Seat::Red, 52).is_empty());
        // Blue offset 13 is Red's entry cell.
        assert_eq!(check_for_captures(&state, Seat::Red, 0).len(), 1);
        // Green's home stretch is private even if offsets line up numerically.
        assert!(check_for_captures(&state, Seat::Red, 13).is_empty());
    }

    #[test]
    fn test_own_tokens_never_captured() {
        let state = create_initial_state().with_tokens(Seat::Red, [Track(5), Track(5), AtStart, AtStart]);
        assert!(check_for_captures(&state, Seat::Red, 5).is_empty());
    }

    #[test]
    fn test_enter_on_six_keeps_turn() {
        let state = rolled(&create_initial_state(), 6);
        let moved = move_token(&state, 0);

        assert_eq!(moved.token(Seat::Red, 0), Some(Track(0)));
        assert_eq!(moved.active_seat, Seat::Red);
        assert!(moved.bonus_turn);
        assert!(moved.token_moved);
        assert_eq!(turn_phase(&moved), TurnPhase::AwaitingRoll);
    }

    #[test]
    fn test_plain_move_rotates_turn() {
        let state = create_initial_state().with_tokens(Seat::Red, [Track(3), AtStart, AtStart, AtStart]);
        let moved = move_token(&rolled(&state, 2), 0);

        assert_eq!(moved.token(Seat::Red, 0), Some(Track(5)));
        assert_eq!(moved.active_seat, Seat::Green);
        assert!(!moved.dice_rolled);
        assert_eq!(moved.dice_value, None);
        assert_eq!(moved.log.last(), Some("It's Green's turn."));
    }

    #[test]
    fn test_second_move_on_same_six_rotates() {
        let state = create_initial_state().with_tokens(Seat::Red, [Track(3), Track(8), AtStart, AtStart]);
        let once = move_token(&rolled(&state, 6), 0);
        assert_eq!(once.active_seat, Seat::Red);

        let twice = move_token(&once, 1);
        assert_eq!(twice.token(Seat::Red, 1), Some(Track(14)));
        assert_eq!(twice.active_seat, Seat::Green);
    }

    #[test]
    fn test_invalid_move_is_noop() {
        let state = rolled(&create_initial_state(), 3);

        assert_eq!(move_token(&state, 0), state);
        assert_eq!(move_token(&state, 9), state);
        assert_eq!(
            try_move_token(&state, 0),
            Err(MoveError::IllegalMove { seat: Seat::Red, token: 0 })
        );
        assert_eq!(try_move_token(&state, 9), Err(MoveError::TokenOutOfRange(9)));
        assert_eq!(
            try_move_token(&create_initial_state(), 0),
            Err(MoveError::DiceNotRolled)
        );
    }

    #[test]
    fn test_capture_resets_opponent() {
        let state = create_initial_state()
            .with_tokens(Seat::Red, [Track(10), AtStart, AtStart, AtStart])
            .with_tokens(Seat::Green, [Track(1), AtStart, AtStart, AtStart]);
        let moved = move_token(&rolled(&state, 4), 0);

        assert_eq!(moved.token(Seat::Red, 0), Some(Track(14)));
        assert_eq!(moved.token(Seat::Green, 0), Some(AtStart));
        assert!(moved.log.entries().any(|e| e == "Red captured Green's token!"));
    }

    #[test]
    fn test_move_to_home_and_win() {
        let state = create_initial_state().with_tokens(Seat::Red, [Track(56), AtHome, AtHome, AtHome]);
        let moved = move_token(&rolled(&state, 1), 0);

        assert_eq!(moved.token(Seat::Red, 0), Some(AtHome));
        assert_eq!(moved.status, GameStatus::Finished);
        assert_eq!(moved.winner, Some(Seat::Red));
        assert_eq!(moved.active_seat, Seat::Red);
        assert_eq!(moved.log.last(), Some("Red has won the game!"));
        assert_eq!(turn_phase(&moved), TurnPhase::Finished);
    }

    #[test]
    fn test_finished_game_is_frozen() {
        let state = create_initial_state().with_tokens(Seat::Red, [Track(56), AtHome, AtHome, AtHome]);
        let done = move_token(&rolled(&state, 1), 0);

        assert_eq!(end_turn(&done), done);
        assert_eq!(rolled(&done, 6), done);
        assert!(valid_moves(&done).is_empty());
        assert_eq!(try_move_token(&done, 0), Err(MoveError::GameFinished));
    }

    #[test]
    fn test_end_turn_resets_dice() {
        let state = rolled(&create_initial_state(), 6);
        let next = end_turn(&state);

        assert_eq!(next.active_seat, Seat::Green);
        assert_eq!(next.dice_value, None);
        assert!(!next.dice_rolled);
        assert!(!next.token_moved);
        assert!(!next.bonus_turn);
    }

    #[test]
    fn test_turn_phases() {
        let state = create_initial_state();
        assert_eq!(turn_phase(&state), TurnPhase::AwaitingRoll);

        // Nothing can leave start on a 3.
        assert_eq!(turn_phase(&rolled(&state, 3)), TurnPhase::Stuck);

        let on_board = state.with_tokens(Seat::Red, [Track(0), AtStart, AtStart, AtStart]);
        assert_eq!(turn_phase(&rolled(&on_board, 3)), TurnPhase::AwaitingMove);

        // A 6 with no legal move still owes a roll.
        let blocked = create_initial_state().with_tokens(Seat::Red, [Track(55), AtHome, AtHome, AtHome]);
        assert_eq!(turn_phase(&rolled(&blocked, 6)), TurnPhase::AwaitingRoll);
    }

    #[test]
    fn test_input_state_not_mutated() {
        let state = rolled(&create_initial_state(), 6);
        let before = state.clone();
        let _ = move_token(&state, 2);
        let _ = end_turn(&state);

        assert_eq!(state, before);
    }
}
