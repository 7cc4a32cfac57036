//! Klondike with lazily revealed cards.
//!
//! - Draw one card at a time, unlimited recycles
//! - Seven tableau piles, four suit-locked foundations
//! - Face-down cards get their identity only when they are turned up

mod deal;
mod game;
mod transition;

pub use game::{Klondike, KlondikeBuilder};

use crate::core::{GameRng, GameState};

/// Deal a game with the default engine.
///
/// Shorthand for `Klondike::default().deal(seed)`.
#[must_use]
pub fn new_game(seed: Option<u64>) -> (GameState, GameRng) {
    Klondike::default().deal(seed)
}
