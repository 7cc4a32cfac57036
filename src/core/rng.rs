//! Seeded randomness for the deal and for lazy reveals.
//!
//! One `GameRng` is threaded explicitly through `new_game` and every
//! `execute` call. It shuffles the deck and picks every card drawn from the
//! unseen pool, so a single seed replays an entire game.
//!
//! ## Branching
//!
//! A search that expands several children of one state gives each child its
//! own generator:
//!
//! ```
//! use lazy_klondike::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut left = rng.fork();
//! let mut right = rng.fork();
//!
//! // Siblings get distinct seeds, each replayable on its own.
//! assert_ne!(left.seed(), right.seed());
//! let mut replay = GameRng::new(left.seed());
//! assert_eq!(left.pick_index(52), replay.pick_index(52));
//! # let _ = right.pick_index(52);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seed of the scratch generator used for trial transitions.
///
/// Whether a transition succeeds never depends on which card a reveal
/// produces, only on whether the unseen pool has one to give.
const PROBE_SEED: u64 = 0x5EED_0F_F1A1;

/// ChaCha8 generator that remembers the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from OS entropy. The seed is still recorded, so the game can be
    /// replayed from `seed()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub(crate) fn probe() -> Self {
        Self::new(PROBE_SEED)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Child generator for a search branch.
    ///
    /// The child's seed is the next word of this stream, so forking advances
    /// `self`. Successive forks differ, and the same parent position always
    /// yields the same child.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.gen())
    }

    /// Uniform index in `0..len`.
    ///
    /// Panics if `len` is zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Position in the stream, for saving alongside a `GameState`.
    #[must_use]
    pub fn checkpoint(&self) -> RngCheckpoint {
        RngCheckpoint {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Generator positioned exactly where `checkpoint` was taken.
    #[must_use]
    pub fn resume(checkpoint: &RngCheckpoint) -> Self {
        let mut rng = Self::new(checkpoint.seed);
        rng.inner.set_word_pos(checkpoint.word_pos);
        rng
    }
}

/// A saved stream position. Restoring is O(1) however far the stream ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RngCheckpoint {
    pub seed: u64,
    pub word_pos: u128,
}
