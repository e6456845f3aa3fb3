//! Traitor channel: a role-gated, append-only chat log.

pub mod channel;

pub use channel::{ChatEntry, TraitorChannel, TraitorView};
