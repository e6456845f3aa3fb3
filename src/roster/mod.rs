//! Roster of eligible players.
//!
//! - `RosterStore`: ordered, case-insensitively unique names with
//!   add/rename/remove
//! - `RosterStorage`: persistence collaborator, with JSON file and
//!   in-memory backends

pub mod storage;
pub mod store;

pub use storage::{JsonFileStorage, MemoryStorage, RosterStorage};
pub use store::RosterStore;
