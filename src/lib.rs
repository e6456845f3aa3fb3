//! # traitors-game
//!
//! Game state engine for a Traitors-style party game: a roster of players is
//! secretly split into two traitors and the faithful, the traitors share a
//! private channel, and a moderator records murders with undo.
//!
//! ## Design Principles
//!
//! 1. **One Aggregate**: all session state lives in `GameSession`. Hosts that
//!    serve concurrent requests wrap it in `SharedSession`.
//!
//! 2. **Case-Insensitive Identity**: names are compared by a lower-cased key
//!    and displayed as the roster spells them.
//!
//! 3. **Fair Draw**: traitors are picked by a uniform shuffle, so no player is
//!    favored. Seed the RNG via `SessionConfig` to reproduce a round.
//!
//! 4. **Soft Persistence**: only the roster is persisted. Storage failures are
//!    logged and never surface as game errors.
//!
//! ## Modules
//!
//! - `core`: player names, roles, errors, RNG, configuration
//! - `roster`: roster store and persistence backends
//! - `roles`: role assignment
//! - `murder`: murder history with undo
//! - `chat`: traitor channel
//! - `session`: the session aggregate and its lifecycle

pub mod core;
pub mod roster;
pub mod roles;
pub mod murder;
pub mod chat;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameResult, StorageError,
    GameRng, PlayerName, Role, SessionConfig,
    DEFAULT_ROSTER, TRAITOR_COUNT,
};

pub use crate::roster::{JsonFileStorage, MemoryStorage, RosterStorage, RosterStore};

pub use crate::roles::{Assignment, RoleStatus};

pub use crate::murder::MurderHistory;

pub use crate::chat::{ChatEntry, TraitorChannel, TraitorView};

pub use crate::session::{GameSession, Phase, SessionSnapshot, SharedSession};
