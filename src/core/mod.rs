//! Core engine types: RNG, configuration, locations, actions, state, errors.
//!
//! Everything here is a value type. The transition function that moves
//! cards between zones lives in `games::klondike`.

pub mod rng;
pub mod config;
pub mod location;
pub mod action;
pub mod state;
pub mod error;

pub use rng::{GameRng, RngCheckpoint};
pub use config::{KlondikeConfig, RecyclePolicy, FOUNDATIONS, STEP_CAP, STOCK_SIZE, TABLEAU_PILES};
pub use location::Location;
pub use action::{universe, Action, ACTION_COUNT};
pub use state::GameState;
pub use error::{IllegalMove, StateError};
