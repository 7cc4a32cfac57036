//! The unseen pool: every card whose position has never been observed.
//!
//! Face-down tableau slots and `Unknown` stock placeholders carry no identity.
//! When one becomes observable, a card is drawn uniformly at random from this
//! pool without replacement. The pool is the single source of identities for
//! all of them.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameRng;

/// Unordered multiset of cards not yet revealed anywhere.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnseenPool {
    cards: Vector<Card>,
}

impl UnseenPool {
    #[must_use]
    pub fn new(cards: Vector<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Draw one card uniformly at random.
    ///
    /// Returns the pool without that card, or `None` if the pool is empty.
    #[must_use]
    pub fn draw(&self, rng: &mut GameRng) -> Option<(Self, Card)> {
        if self.cards.is_empty() {
            return None;
        }
        let mut cards = self.cards.clone();
        let card = cards.remove(rng.pick_index(cards.len()));
        Some((Self { cards }, card))
    }
}

impl FromIterator<Card> for UnseenPool {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
