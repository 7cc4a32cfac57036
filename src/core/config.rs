//! Engine configuration and fixed table geometry.
//!
//! The ruleset itself is fixed (one variant, one action universe). What a
//! caller may tune is how long play is allowed to run and how the stock
//! behaves once it can no longer produce anything new.

use serde::{Deserialize, Serialize};

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 7;

/// Number of foundations (one per suit).
pub const FOUNDATIONS: usize = 4;

/// Number of placeholders dealt into the stock.
pub const STOCK_SIZE: usize = 24;

/// Default step cap after which a game reports `ExceededLimit`.
pub const STEP_CAP: u32 = 50_000;

/// What `Draw` does when the stock is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecyclePolicy {
    /// Always recycle the waste into the stock, even when that changes nothing
    /// playable. `Draw` is then never rejected, so no state ever deadlocks.
    Always,
    /// Reject a recycle when the waste holds at most one card: cycling it
    /// cannot expose anything new, so it counts as a dead end.
    #[default]
    SkipIdle,
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KlondikeConfig {
    /// A state whose step count exceeds this reports `ExceededLimit`.
    /// Advisory only: transitions keep working past the cap.
    pub step_cap: u32,

    /// Stock recycling behaviour.
    pub recycle: RecyclePolicy,
}

impl Default for KlondikeConfig {
    fn default() -> Self {
        Self {
            step_cap: STEP_CAP,
            recycle: RecyclePolicy::default(),
        }
    }
}

impl KlondikeConfig {
    /// Set a custom step cap.
    #[must_use]
    pub fn with_step_cap(mut self, cap: u32) -> Self {
        self.step_cap = cap;
        self
    }

    /// Set the recycle policy.
    #[must_use]
    pub fn with_recycle(mut self, policy: RecyclePolicy) -> Self {
        self.recycle = policy;
        self
    }
}
