//! Klondike engine.

use tracing::debug;

use super::{deal, transition};
use crate::core::{Action, GameRng, GameState, IllegalMove, KlondikeConfig, RecyclePolicy};
use crate::rules::RulesEngine;

/// The Klondike rules engine.
///
/// Holds configuration only. States are separate values, so one engine can
/// drive any number of games or search branches at once.
#[derive(Clone, Debug, Default)]
pub struct Klondike {
    config: KlondikeConfig,
}

/// Builder for creating a `Klondike` engine.
#[derive(Clone, Debug, Default)]
pub struct KlondikeBuilder {
    config: KlondikeConfig,
}

impl KlondikeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step_cap(mut self, cap: u32) -> Self {
        self.config = self.config.with_step_cap(cap);
        self
    }

    pub fn recycle(mut self, policy: RecyclePolicy) -> Self {
        self.config = self.config.with_recycle(policy);
        self
    }

    pub fn build(self) -> Klondike {
        Klondike::new(self.config)
    }
}

impl Klondike {
    #[must_use]
    pub fn new(config: KlondikeConfig) -> Self {
        Self { config }
    }

    /// Deal a game from `seed`, or from OS entropy when `None`.
    ///
    /// Returns the dealt state and the generator that must be passed to
    /// every later `execute` for the game to be reproducible from `seed`.
    #[must_use]
    pub fn deal(&self, seed: Option<u64>) -> (GameState, GameRng) {
        let mut rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let state = self.new_game(&mut rng);
        (state, rng)
    }
}

impl RulesEngine for Klondike {
    fn config(&self) -> &KlondikeConfig {
        &self.config
    }

    fn new_game(&self, rng: &mut GameRng) -> GameState {
        debug!(step_cap = self.config.step_cap, recycle = ?self.config.recycle, "new game");
        deal::deal(rng)
    }

    fn execute(
        &self,
        state: &GameState,
        action: Action,
        rng: &mut GameRng,
    ) -> Result<GameState, IllegalMove> {
        transition::execute(&self.config, state, action, rng)
    }
}
