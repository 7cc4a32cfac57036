//! Actions and the static action universe.
//!
//! The syntactic universe is every `Move` between two distinct locations
//! whose destination is not the waste pile, plus a single `Draw`. It is built
//! once and never changes; which of its actions are legal depends on the state.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::location::Location;

/// Number of actions in the universe: 11 non-waste sources with 10 targets
/// each, the waste with 11 targets, and `Draw`.
pub const ACTION_COUNT: usize = 11 * 10 + 11 + 1;

/// A player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the top card (or, between tableau piles, a run) from `src` to `dest`.
    Move { src: Location, dest: Location },
    /// Draw from the stock, recycling the waste when the stock is empty.
    Draw,
}

impl Action {
    /// Shorthand for `Action::Move { src, dest }`.
    #[must_use]
    pub const fn moving(src: Location, dest: Location) -> Self {
        Action::Move { src, dest }
    }

    /// Position of this action in the universe, or `None` for a move the
    /// universe does not contain (same source and destination, the waste
    /// as destination, or an index past the end of the table).
    ///
    /// ```
    /// use lazy_klondike::core::{Action, Location, universe};
    ///
    /// let action = Action::moving(Location::WastePile, Location::pile(3));
    /// let index = action.index().unwrap();
    /// assert_eq!(universe()[index], action);
    /// ```
    #[must_use]
    pub fn index(self) -> Option<usize> {
        const WASTE_BASE: usize = 11 * 10;
        match self {
            Action::Draw => Some(ACTION_COUNT - 1),
            Action::Move { src, dest } => {
                let in_table = src.is_valid() && dest.is_valid();
                if src == dest || !dest.is_destination() || !in_table {
                    return None;
                }
                let (s, d) = (src.ordinal(), dest.ordinal());
                match src {
                    Location::WastePile => Some(WASTE_BASE + d),
                    _ => Some(s * 10 + if d < s { d } else { d - 1 }),
                }
            }
        }
    }

    /// Action at a universe position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        universe().get(index).copied()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { src, dest } => write!(f, "Move({src} -> {dest})"),
            Action::Draw => write!(f, "Draw"),
        }
    }
}

/// The full action universe, in construction order: moves grouped by source
/// location (piles, foundations, waste), then `Draw`.
#[must_use]
pub fn universe() -> &'static [Action] {
    static UNIVERSE: OnceLock<Vec<Action>> = OnceLock::new();
    UNIVERSE.get_or_init(|| {
        let mut actions = Vec::with_capacity(ACTION_COUNT);
        for src in Location::ALL {
            for dest in Location::ALL {
                if src != dest && dest.is_destination() {
                    actions.push(Action::moving(src, dest));
                }
            }
        }
        actions.push(Action::Draw);
        actions
    })
}
