//! # lazy-klondike
//!
//! A Klondike rules engine in which face-down cards have no identity until
//! they are turned up.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: `execute` never modifies its input. It returns a
//!    fresh `GameState` or an `IllegalMove`, so search branches can share
//!    states freely.
//!
//! 2. **One Source of Rules**: Legality is decided by attempting the
//!    transition. `legal_actions` filters the fixed action universe through
//!    `execute` and never re-implements a rule.
//!
//! 3. **Explicit Randomness**: One `GameRng` is passed through the deal and
//!    every transition. A seed reproduces a whole game.
//!
//! ## Architecture
//!
//! - **Lazy Reveal**: Hidden tableau cards are a count, and the stock starts
//!   as placeholders. When a position becomes observable, its card is drawn
//!   uniformly from the unseen pool.
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, locations, actions, state, errors
//! - `cards`: Ranks, suits, cards, the deck
//! - `zones`: Tableau piles, foundations, the unseen pool
//! - `rules`: Placement rule, `RulesEngine` trait, game status
//! - `games`: The Klondike engine
//!
//! ## Usage
//!
//! ```
//! use lazy_klondike::{Klondike, RulesEngine, GameStatus};
//!
//! let game = Klondike::default();
//! let (mut state, mut rng) = game.deal(Some(42));
//!
//! while game.status(&state) == GameStatus::NotFinished && state.step_count() < 100 {
//!     let action = game.legal_actions(&state)[0];
//!     state = game.execute(&state, action, &mut rng).unwrap();
//! }
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    universe, Action, GameRng, GameState, IllegalMove, KlondikeConfig, Location, RecyclePolicy,
    RngCheckpoint, StateError, ACTION_COUNT, STEP_CAP,
};

pub use crate::cards::{Card, Color, Rank, StockCard, Suit};

pub use crate::zones::{Foundation, Pile, UnseenPool};

pub use crate::rules::{compatible, ActionList, GameStatus, RulesEngine};

pub use crate::games::klondike::{new_game, Klondike, KlondikeBuilder};
