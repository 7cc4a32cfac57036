//! Error types.
//!
//! `IllegalMove` is the only outcome `execute` can fail with. Every variant is
//! an expected, recoverable result: the caller tries a different action and
//! the input state is untouched.

use thiserror::Error;

use super::location::Location;
use crate::cards::Card;

/// Reasons a transition is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("cannot move from empty {0}")]
    EmptySource(Location),

    #[error("no card in {src} can be transferred onto {dest}")]
    NoTransferPoint { src: Location, dest: Location },

    #[error("{card} cannot be placed on {dest}")]
    Incompatible { card: Card, dest: Location },

    #[error("{card} does not belong on {dest}")]
    WrongFoundation { card: Card, dest: Location },

    #[error("only an ace may start {dest}, got {card}")]
    NonAceOnEmptyFoundation { card: Card, dest: Location },

    #[error("{card} does not continue the sequence on {dest}")]
    OutOfSequence { card: Card, dest: Location },

    /// An ace offered to a foundation that already holds cards.
    #[error("inconsistent state: {dest} is not empty but {card} was offered to it")]
    AceOnOccupiedFoundation { card: Card, dest: Location },

    /// Not reachable through the action universe.
    #[error("{0} cannot be a destination")]
    InvalidDestination(Location),

    #[error("stock is empty and recycling the waste would change nothing")]
    IdleRecycle,

    /// A position needed an identity but the unseen pool was empty.
    /// Only a hand-built state that fails `audit` can get here.
    #[error("inconsistent state: no unseen card left to reveal")]
    UnseenExhausted,
}

/// A broken invariant found by `GameState::audit`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("card {0} is accounted for more than once")]
    DuplicateCard(Card),

    #[error("expected 52 card positions, found {0}")]
    CardCount(usize),

    #[error("{unknown} unknown positions but {unseen} unseen cards")]
    UnseenMismatch { unknown: usize, unseen: usize },

    #[error("foundation {index} is out of order at position {position}")]
    FoundationOrder { index: usize, position: usize },

    #[error("tableau pile {index} is out of order at position {position}")]
    PileOrder { index: usize, position: usize },

    #[error("tableau pile {0} has hidden cards but nothing visible")]
    UncoveredHidden(usize),
}
