//! Session driver: owns the current state and moves it forward.
//!
//! The rules never advance on their own. A `GameSession` is the caller that
//! holds "the current state", forwards human intents (roll, select token),
//! runs computer seats through the heuristic player, ends turns that are
//! stuck, and tells observers what happened.

use thiserror::Error;
use tracing::{debug, info};

use super::observer::GameObserver;
use crate::ai::{take_computer_turn_with, HeuristicPolicy, MovePolicy};
use crate::core::{ConfigError, GameRng, GameRngState, GameState, LudoConfig, Seat};
use crate::rules::{end_turn, roll_dice, try_move_token, turn_phase, valid_moves, MoveError, MoveSet, TurnPhase};

/// Errors from driving a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0} is not controlled by a human")]
    NotHumanTurn(Seat),

    #[error("{0} is not controlled by the computer")]
    NotComputerTurn(Seat),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("game did not finish within {0} steps")]
    StepLimitReached(u32),
}

/// A single game in progress.
pub struct GameSession {
    config: LudoConfig,
    state: GameState,
    rng: GameRng,
    policy: Box<dyn MovePolicy>,
    observers: Vec<Box<dyn GameObserver>>,
    finish_reported: bool,
    steps: u32,
}

impl GameSession {
    /// Start a new game from a validated config.
    pub fn new(config: LudoConfig) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            state: GameState::with_config(&config),
            rng: GameRng::new(config.seed),
            config,
            policy: Box::new(HeuristicPolicy),
            observers: Vec::new(),
            finish_reported: false,
            steps: 0,
        })
    }

    /// Use a different policy for computer seats.
    #[must_use]
    pub fn with_policy(mut self, policy: impl MovePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Register an observer.
    pub fn add_observer(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Start over with a fresh state and a new seed. Observers are kept.
    pub fn restart(&mut self, seed: u64) {
        self.config.seed = seed;
        self.state = GameState::with_config(&self.config);
        self.rng = GameRng::new(seed);
        self.finish_reported = false;
        self.steps = 0;
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &LudoConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        turn_phase(&self.state)
    }

    /// Tokens the presentation layer should offer for selection.
    #[must_use]
    pub fn valid_moves(&self) -> MoveSet {
        valid_moves(&self.state)
    }

    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        !self.state.is_finished() && !self.config.is_computer(self.state.active_seat)
    }

    /// Checkpoint of the session RNG, for deterministic replay.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Driver steps taken so far.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    // === Human intents ===

    /// Roll for the active human seat.
    pub fn roll(&mut self) -> Result<&GameState, SessionError> {
        self.require_human()?;
        self.transition(|state, rng, _| Ok(roll_dice(state, rng)))?;
        Ok(&self.state)
    }

    /// Move one of the active human seat's tokens.
    pub fn select_token(&mut self, token: usize) -> Result<&GameState, SessionError> {
        self.require_human()?;
        self.transition(|state, _, _| try_move_token(state, token).map_err(SessionError::from))?;
        Ok(&self.state)
    }

    fn require_human(&self) -> Result<(), SessionError> {
        let seat = self.state.active_seat;
        if self.config.is_computer(seat) {
            return Err(SessionError::NotHumanTurn(seat));
        }
        Ok(())
    }

    // === Turn resolution ===

    /// End the turn if the active seat rolled and cannot move.
    ///
    /// Returns whether the turn was ended.
    pub fn resolve_stuck(&mut self) -> bool {
        if self.phase() != TurnPhase::Stuck {
            return false;
        }
        debug!("{} has no legal move", self.state.active_seat);
        self.transition(|state, _, _| Ok(end_turn(state))).is_ok()
    }

    /// Take one step for the active computer seat.
    ///
    /// A completed turn is ended here rather than left for the caller.
    pub fn step_computer(&mut self) -> Result<&GameState, SessionError> {
        let seat = self.state.active_seat;
        if !self.config.is_computer(seat) {
            return Err(SessionError::NotComputerTurn(seat));
        }

        match self.phase() {
            TurnPhase::Finished => {}
            TurnPhase::Stuck => {
                self.resolve_stuck();
            }
            TurnPhase::AwaitingRoll | TurnPhase::AwaitingMove => {
                self.transition(|state, rng, policy| Ok(take_computer_turn_with(state, policy, rng)))?;
            }
        }
        Ok(&self.state)
    }

    /// Run the game until a human seat has something to do or it ends.
    ///
    /// A human seat that is stuck has nothing to decide, so its turn is
    /// ended here as well.
    pub fn advance(&mut self) -> Result<&GameState, SessionError> {
        while !self.state.is_finished() {
            if self.config.is_computer(self.state.active_seat) {
                self.tick()?;
            } else if !self.resolve_stuck() {
                break;
            }
        }
        Ok(&self.state)
    }

    /// Play an all-computer game to the end and return the winner.
    pub fn play_to_completion(&mut self) -> Result<Seat, SessionError> {
        loop {
            if let Some(winner) = self.state.winner {
                return Ok(winner);
            }
            let seat = self.state.active_seat;
            if !self.config.is_computer(seat) {
                return Err(SessionError::NotComputerTurn(seat));
            }
            self.tick()?;
        }
    }

    fn tick(&mut self) -> Result<(), SessionError> {
        if self.steps >= self.config.max_steps {
            return Err(SessionError::StepLimitReached(self.config.max_steps));
        }
        self.steps += 1;
        self.step_computer()?;
        Ok(())
    }

    // === Notification ===

    /// Run one rules transition on the current state and notify observers
    /// of every entry it appended, including any the log truncated.
    fn transition<F>(&mut self, step: F) -> Result<(), SessionError>
    where
        F: FnOnce(&GameState, &mut GameRng, &dyn MovePolicy) -> Result<GameState, SessionError>,
    {
        self.state.log.start_recording();
        let result = step(&self.state, &mut self.rng, self.policy.as_ref());
        match result {
            Ok(next) => {
                self.replace(next);
                Ok(())
            }
            Err(err) => {
                self.state.log.take_recorded();
                Err(err)
            }
        }
    }

    fn replace(&mut self, mut next: GameState) {
        let appended = next.log.take_recorded();
        self.state = next;

        for entry in &appended {
            for observer in self.observers.iter_mut() {
                observer.on_log_entry(entry);
            }
        }

        if let (Some(winner), false) = (self.state.winner, self.finish_reported) {
            self.finish_reported = true;
            info!("{} won after {} steps", winner, self.steps);
            for observer in self.observers.iter_mut() {
                observer.on_game_finished(winner);
            }
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .field("steps", &self.steps)
            .finish()
    }
}
