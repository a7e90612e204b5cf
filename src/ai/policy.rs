//! Move-selection policies for computer-controlled seats.
//!
//! Policies are trait-based so a session can swap the decision maker:
//! - `HeuristicPolicy`: capture first, then advance the leading token
//! - `RandomPolicy`: uniform over legal moves

use crate::core::{GameState, RandomSource};

use super::heuristic::choose_move;

/// Picks one token to move from the active seat's legal moves.
pub trait MovePolicy: Send + Sync {
    /// Choose a token index from `moves`.
    ///
    /// Returns `None` only if `moves` is empty.
    fn choose_move(
        &self,
        state: &GameState,
        moves: &[usize],
        rng: &mut dyn RandomSource,
    ) -> Option<usize>;
}

/// The standard computer player.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicPolicy;

impl MovePolicy for HeuristicPolicy {
    fn choose_move(
        &self,
        state: &GameState,
        moves: &[usize],
        rng: &mut dyn RandomSource,
    ) -> Option<usize> {
        choose_move(state, moves, rng)
    }
}

/// Uniform random baseline.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose_move(
        &self,
        _state: &GameState,
        moves: &[usize],
        rng: &mut dyn RandomSource,
    ) -> Option<usize> {
        if moves.is_empty() {
            return None;
        }
        Some(moves[rng.pick_index(moves.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;

    #[test]
    fn test_random_policy_uses_picks() {
        let state = GameState::new();
        let mut rng = ScriptedRng::default().with_picks([2, 0]);

        assert_eq!(RandomPolicy.choose_move(&state, &[1, 2, 3], &mut rng), Some(3));
        assert_eq!(RandomPolicy.choose_move(&state, &[1, 2, 3], &mut rng), Some(1));
    }

    #[test]
    fn test_policies_handle_empty_moves() {
        let state = GameState::new();
        let mut rng = ScriptedRng::default();

        assert_eq!(RandomPolicy.choose_move(&state, &[], &mut rng), None);
        assert_eq!(HeuristicPolicy.choose_move(&state, &[], &mut rng), None);
    }

    #[test]
    fn test_policies_are_object_safe() {
        let policies: Vec<Box<dyn MovePolicy>> = vec![Box::new(HeuristicPolicy), Box::new(RandomPolicy)];
        let state = GameState::new();
        let mut rng = ScriptedRng::default();

        for policy in &policies {
            assert_eq!(policy.choose_move(&state, &[2], &mut rng), Some(2));
        }
    }
}
