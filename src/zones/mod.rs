//! Card zones.
//!
//! - `Pile`: tableau column, hidden count plus a face-up run
//! - `Foundation`: per-suit ascending stack
//! - `UnseenPool`: identities not yet assigned to any position

pub mod pile;
pub mod pool;

pub use pile::{Foundation, Pile};
pub use pool::UnseenPool;
