//! The 52-card deck.

use super::card::{Card, Rank, Suit};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// A fresh, unshuffled deck, rank-major (all aces, then all twos, ...).
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}
