//! Core types: player names, roles, errors, RNG, configuration.
//!
//! Everything else in the crate builds on these.

pub mod name;
pub mod role;
pub mod error;
pub mod rng;
pub mod config;

pub use name::{name_key, PlayerName};
pub use role::{Role, TRAITOR_COUNT};
pub use error::{GameError, GameResult, StorageError};
pub use rng::GameRng;
pub use config::{SessionConfig, DEFAULT_ROSTER};
