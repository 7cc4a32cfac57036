//! Tableau piles and foundations.
//!
//! Both are persistent values: every operation returns a new zone and leaves
//! the receiver untouched. Backing sequences are `im::Vector`, so the copies
//! share structure.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A tableau column.
///
/// Hidden cards are a count only. Their identities are decided one at a time,
/// when each becomes the top of the pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    hidden_left: usize,
    /// Face-up run, bottom to top.
    visible: Vector<Card>,
}

impl Pile {
    #[must_use]
    pub fn new(hidden_left: usize, visible: Vector<Card>) -> Self {
        Self { hidden_left, visible }
    }

    /// Number of face-down cards under the visible run.
    #[must_use]
    pub fn hidden_left(&self) -> usize {
        self.hidden_left
    }

    /// Face-up run, bottom to top.
    #[must_use]
    pub fn visible(&self) -> &Vector<Card> {
        &self.visible
    }

    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.visible.back().copied()
    }

    /// Total card positions in the pile, hidden included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hidden_left + self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the visible run is gone but face-down cards remain.
    #[must_use]
    pub fn needs_reveal(&self) -> bool {
        self.visible.is_empty() && self.hidden_left > 0
    }

    /// Pile with `run` laid on top.
    #[must_use]
    pub fn with_run(&self, run: Vector<Card>) -> Self {
        let mut visible = self.visible.clone();
        visible.append(run);
        Self::new(self.hidden_left, visible)
    }

    /// Pile with one card laid on top.
    #[must_use]
    pub fn with_card(&self, card: Card) -> Self {
        let mut visible = self.visible.clone();
        visible.push_back(card);
        Self::new(self.hidden_left, visible)
    }

    /// Split the visible run at `offset`: returns the pile left behind and the
    /// run `visible[offset..]`.
    ///
    /// The pile left behind may need a reveal; see `needs_reveal`.
    #[must_use]
    pub fn split_at(&self, offset: usize) -> (Self, Vector<Card>) {
        let mut kept = self.visible.clone();
        let run = kept.split_off(offset);
        (Self::new(self.hidden_left, kept), run)
    }

    /// Flip `card` up as the new sole visible card, consuming one hidden slot.
    #[must_use]
    pub(crate) fn revealed(&self, card: Card) -> Self {
        debug_assert!(self.needs_reveal());
        Self::new(self.hidden_left - 1, Vector::unit(card))
    }
}

/// A foundation: one suit, ascending from the ace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Foundation {
    cards: Vector<Card>,
}

impl Foundation {
    #[must_use]
    pub fn new(cards: Vector<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Ace through King of one suit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == 13
    }

    #[must_use]
    pub fn with_card(&self, card: Card) -> Self {
        let mut cards = self.cards.clone();
        cards.push_back(card);
        Self { cards }
    }

    /// Foundation without its top card, and that card.
    #[must_use]
    pub fn popped(&self) -> Option<(Self, Card)> {
        let mut cards = self.cards.clone();
        let top = cards.pop_back()?;
        Some((Self { cards }, top))
    }
}
