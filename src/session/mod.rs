//! Session lifecycle.
//!
//! - `GameSession`: the aggregate owning roster and round state
//! - `SharedSession`: mutex handle for multi-threaded hosts

pub mod game;
pub mod shared;

pub use game::{GameSession, Phase, SessionSnapshot};
pub use shared::SharedSession;
