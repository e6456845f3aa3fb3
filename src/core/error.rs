//! Error kinds returned by session operations.
//!
//! Every variant is a local, recoverable condition. Wording for end users is
//! left to the presentation layer; the messages here are for logs.

use thiserror::Error;

/// Errors from roster, assignment, murder and chat operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("name is empty")]
    EmptyName,
    #[error("a player named {0:?} already exists")]
    DuplicateName(String),
    #[error("no player named {0:?}")]
    NotFound(String),
    #[error("roles have already been assigned for this round")]
    AlreadyStarted,
    #[error("{0:?} is not a traitor")]
    NotATraitor(String),
    #[error("murder history is empty")]
    EmptyHistory,
}

/// Result alias for session operations.
pub type GameResult<T> = Result<T, GameError>;

/// Failures reading or writing the persisted roster.
///
/// These never escape the roster store: they are logged and the in-memory
/// roster stays authoritative.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("roster io: {0}")]
    Io(#[from] std::io::Error),
    #[error("roster file is not a list of names: {0}")]
    Malformed(#[from] serde_json::Error),
}
