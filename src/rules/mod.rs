//! Rules: the placement predicate and the engine trait.
//!
//! Games implement `RulesEngine` to supply:
//! - The initial deal
//! - The transition function
//!
//! Legality and status are derived from the transition function and never
//! re-implemented.

pub mod compat;
pub mod engine;

pub use compat::compatible;
pub use engine::{ActionList, GameStatus, RulesEngine};
