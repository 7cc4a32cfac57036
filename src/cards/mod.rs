//! Card taxonomy and the deck.
//!
//! - `Rank`, `Suit`, `Color`: fixed value types
//! - `Card`: a concrete (suit, rank) pair
//! - `StockCard`: a stock slot, either known or a not-yet-assigned placeholder

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, StockCard, Suit};
pub use deck::{full_deck, DECK_SIZE};
