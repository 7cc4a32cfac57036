//! Addressable zones.
//!
//! A `Location` names one zone inside a `GameState`: one of the tableau
//! piles, one of the foundations, or the waste pile. Locations carry no card
//! data; they only address.

use serde::{Deserialize, Serialize};

use super::config::{FOUNDATIONS, TABLEAU_PILES};

/// A zone an action can reference.
///
/// The waste pile may only ever be a source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Tableau pile, index 0..7.
    Pile(u8),
    /// Foundation, index 0..4. Foundation `i` holds suit `i` only.
    Foundation(u8),
    /// The face-up waste pile.
    WastePile,
}

impl Location {
    /// Every location, in action-universe order: piles, foundations, waste.
    pub const ALL: [Location; TABLEAU_PILES + FOUNDATIONS + 1] = [
        Location::Pile(0),
        Location::Pile(1),
        Location::Pile(2),
        Location::Pile(3),
        Location::Pile(4),
        Location::Pile(5),
        Location::Pile(6),
        Location::Foundation(0),
        Location::Foundation(1),
        Location::Foundation(2),
        Location::Foundation(3),
        Location::WastePile,
    ];

    /// Tableau pile location.
    ///
    /// Panics if `index` is not a tableau index.
    #[must_use]
    pub fn pile(index: usize) -> Self {
        assert!(index < TABLEAU_PILES, "Tableau index {index} out of range");
        Location::Pile(index as u8)
    }

    /// Foundation location.
    ///
    /// Panics if `index` is not a foundation index.
    #[must_use]
    pub fn foundation(index: usize) -> Self {
        assert!(index < FOUNDATIONS, "Foundation index {index} out of range");
        Location::Foundation(index as u8)
    }

    /// Whether the index names a zone that exists. Always true for
    /// locations built with `pile` or `foundation`.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            Location::Pile(i) => (i as usize) < TABLEAU_PILES,
            Location::Foundation(i) => (i as usize) < FOUNDATIONS,
            Location::WastePile => true,
        }
    }

    /// Position in `Location::ALL`. Only meaningful when `is_valid`.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Location::Pile(i) => i as usize,
            Location::Foundation(i) => TABLEAU_PILES + i as usize,
            Location::WastePile => TABLEAU_PILES + FOUNDATIONS,
        }
    }

    /// Whether cards may be placed here.
    #[must_use]
    pub const fn is_destination(self) -> bool {
        !matches!(self, Location::WastePile)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Pile(i) => write!(f, "MainPile[{i}]"),
            Location::Foundation(i) => write!(f, "Foundation[{i}]"),
            Location::WastePile => write!(f, "VisiblePile"),
        }
    }
}
