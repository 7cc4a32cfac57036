//! Rules engine trait.
//!
//! Implementors supply the deal and the transition function. Legality and
//! status are derived from `execute` by the provided methods, so the rules
//! live in exactly one place.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{universe, Action, GameRng, GameState, IllegalMove, KlondikeConfig};

/// Legal actions for one state. Rarely more than a couple dozen.
pub type ActionList = SmallVec<[Action; 16]>;

/// Classification of a state, recomputed on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GameStatus {
    /// Play continues.
    NotFinished = 0,
    /// The step count went past the configured cap.
    ExceededLimit = 1,
    /// No action is legal: a deadlock.
    OutOfSteps = 2,
    /// Every card is on a foundation or face up on the tableau.
    Won = 3,
}

impl GameStatus {
    /// True for every label except `NotFinished`.
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameStatus::NotFinished
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `execute` must never mutate its input. A rejected action leaves the
///   caller holding the exact state it passed in.
/// - All randomness comes from the `rng` argument.
pub trait RulesEngine {
    /// Get the engine configuration.
    fn config(&self) -> &KlondikeConfig;

    /// Deal a fresh game.
    fn new_game(&self, rng: &mut GameRng) -> GameState;

    /// Apply `action` to `state`, producing the successor state.
    fn execute(
        &self,
        state: &GameState,
        action: Action,
        rng: &mut GameRng,
    ) -> Result<GameState, IllegalMove>;

    // === Legality Oracle ===

    /// Whether `execute` would accept `action`.
    ///
    /// Trial transitions run against a private generator, so this never
    /// advances the caller's RNG.
    fn is_legal(&self, state: &GameState, action: Action) -> bool {
        self.execute(state, action, &mut GameRng::probe()).is_ok()
    }

    /// Every legal action, in universe order.
    fn legal_actions(&self, state: &GameState) -> ActionList {
        let mut probe = GameRng::probe();
        universe()
            .iter()
            .copied()
            .filter(|&action| self.execute(state, action, &mut probe).is_ok())
            .collect()
    }

    /// Whether any action is legal. Stops at the first hit.
    fn has_legal_action(&self, state: &GameState) -> bool {
        let mut probe = GameRng::probe();
        universe()
            .iter()
            .any(|&action| self.execute(state, action, &mut probe).is_ok())
    }

    // === Status ===

    /// Classify `state`.
    ///
    /// `Won` is checked first so a cap breach on the winning move still
    /// reports the win. The cap is checked before the legality scan.
    fn status(&self, state: &GameState) -> GameStatus {
        if state.is_won() {
            GameStatus::Won
        } else if state.step_count() > self.config().step_cap {
            GameStatus::ExceededLimit
        } else if !self.has_legal_action(state) {
            GameStatus::OutOfSteps
        } else {
            GameStatus::NotFinished
        }
    }
}
