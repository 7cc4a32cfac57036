//! Game state: an immutable snapshot of every zone plus a step counter.
//!
//! ## GameState
//!
//! - 7 tableau piles (hidden count + face-up run)
//! - 4 foundations, foundation `i` locked to suit `i`
//! - Waste pile (face up, top = most recently drawn)
//! - Stock (face down, top = next to draw), known or placeholder cards
//! - Unseen pool backing every placeholder and hidden tableau slot
//!
//! Transitions never modify a `GameState`; they build a new one. All zones
//! are `im` persistent structures, so cloning a state is O(1) and branches
//! share structure.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::{FOUNDATIONS, TABLEAU_PILES};
use super::error::StateError;
use super::location::Location;
use crate::cards::{Card, Rank, StockCard, Suit, DECK_SIZE};
use crate::rules::compatible;
use crate::zones::{Foundation, Pile, UnseenPool};

/// Full game state.
///
/// The `with_*` methods build arbitrary positions (puzzles, fixtures, restored
/// snapshots). They do not validate; call `audit` to check a hand-built state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) piles: [Pile; TABLEAU_PILES],
    pub(crate) foundations: [Foundation; FOUNDATIONS],
    pub(crate) waste: Vector<Card>,
    pub(crate) stock: Vector<StockCard>,
    pub(crate) unseen: UnseenPool,
    pub(crate) step_count: u32,
}

impl GameState {
    /// A table with no cards anywhere.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    // === Builders ===

    #[must_use]
    pub fn with_pile(mut self, index: usize, pile: Pile) -> Self {
        self.piles[index] = pile;
        self
    }

    #[must_use]
    pub fn with_foundation(mut self, index: usize, foundation: Foundation) -> Self {
        self.foundations[index] = foundation;
        self
    }

    /// Set the waste, bottom to top.
    #[must_use]
    pub fn with_waste(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.waste = cards.into_iter().collect();
        self
    }

    /// Set the stock, bottom to top.
    #[must_use]
    pub fn with_stock(mut self, cards: impl IntoIterator<Item = StockCard>) -> Self {
        self.stock = cards.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_unseen(mut self, unseen: UnseenPool) -> Self {
        self.unseen = unseen;
        self
    }

    #[must_use]
    pub fn with_step_count(mut self, steps: u32) -> Self {
        self.step_count = steps;
        self
    }

    // === Read-only view ===

    #[must_use]
    pub fn piles(&self) -> &[Pile; TABLEAU_PILES] {
        &self.piles
    }

    #[must_use]
    pub fn pile(&self, index: usize) -> &Pile {
        &self.piles[index]
    }

    #[must_use]
    pub fn foundations(&self) -> &[Foundation; FOUNDATIONS] {
        &self.foundations
    }

    #[must_use]
    pub fn foundation(&self, index: usize) -> &Foundation {
        &self.foundations[index]
    }

    /// Waste pile, bottom to top.
    #[must_use]
    pub fn waste(&self) -> &Vector<Card> {
        &self.waste
    }

    #[must_use]
    pub fn waste_top(&self) -> Option<Card> {
        self.waste.back().copied()
    }

    /// Stock, bottom to top.
    #[must_use]
    pub fn stock(&self) -> &Vector<StockCard> {
        &self.stock
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    #[must_use]
    pub fn unseen(&self) -> &UnseenPool {
        &self.unseen
    }

    #[must_use]
    pub fn unseen_len(&self) -> usize {
        self.unseen.len()
    }

    /// Number of successful transitions since the deal.
    #[must_use]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Top card at a location, if any. `None` for an index past the table.
    #[must_use]
    pub fn top_card(&self, location: Location) -> Option<Card> {
        match location {
            Location::Pile(i) => self.piles.get(usize::from(i))?.top(),
            Location::Foundation(i) => self.foundations.get(usize::from(i))?.top(),
            Location::WastePile => self.waste_top(),
        }
    }

    /// Nothing left in the waste, the stock, or the unseen pool.
    ///
    /// Every remaining tableau card is then face up, so the game plays out.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.waste.is_empty() && self.stock.is_empty() && self.unseen.is_empty()
    }

    // === Invariants ===

    /// Check every global invariant, returning the first breach.
    ///
    /// - 52 positions, and 52 distinct identities once the unseen pool is
    ///   counted in place of the unassigned positions
    /// - Foundations run Ace upward in their own suit
    /// - Tableau runs descend by one with alternating colors
    /// - No pile has hidden cards with nothing face up
    pub fn audit(&self) -> Result<(), StateError> {
        for (index, foundation) in self.foundations.iter().enumerate() {
            for (position, &card) in foundation.cards().iter().enumerate() {
                let expected = Suit::from_index(index)
                    .zip(Rank::from_value(position as u8 + 1))
                    .map(|(suit, rank)| Card::new(suit, rank));
                if expected != Some(card) {
                    return Err(StateError::FoundationOrder { index, position });
                }
            }
        }

        for (index, pile) in self.piles.iter().enumerate() {
            if pile.needs_reveal() {
                return Err(StateError::UncoveredHidden(index));
            }
            let visible = pile.visible();
            for position in 1..visible.len() {
                if !compatible(Some(visible[position - 1]), visible[position]) {
                    return Err(StateError::PileOrder { index, position });
                }
            }
        }

        let positions = self.piles.iter().map(Pile::len).sum::<usize>()
            + self.foundations.iter().map(Foundation::len).sum::<usize>()
            + self.waste.len()
            + self.stock.len();
        if positions != DECK_SIZE {
            return Err(StateError::CardCount(positions));
        }

        let unknown = self.piles.iter().map(Pile::hidden_left).sum::<usize>()
            + self.stock.iter().filter(|c| !c.is_known()).count();
        if unknown != self.unseen.len() {
            return Err(StateError::UnseenMismatch {
                unknown,
                unseen: self.unseen.len(),
            });
        }

        let known = self
            .piles
            .iter()
            .flat_map(|p| p.visible().iter().copied())
            .chain(self.foundations.iter().flat_map(|f| f.cards().iter().copied()))
            .chain(self.waste.iter().copied())
            .chain(self.stock.iter().filter_map(|c| c.known()))
            .chain(self.unseen.iter());

        let mut seen = FxHashSet::default();
        for card in known {
            if !seen.insert(card) {
                return Err(StateError::DuplicateCard(card));
            }
        }

        Ok(())
    }
}
