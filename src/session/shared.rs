//! Thread-safe handle to a single global session.
//!
//! Hosts that serve requests from several threads share one `SharedSession`.
//! Each `with` call holds the lock for the whole operation, so callers never
//! observe a half-applied reset and two concurrent `assign` calls cannot both
//! succeed.

use std::sync::{Arc, Mutex, PoisonError};

use super::game::GameSession;
use crate::core::SessionConfig;

/// Cloneable, mutex-guarded `GameSession`.
#[derive(Clone, Debug)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    /// Wrap an existing session.
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Load a session from `config` and wrap it.
    pub fn load(config: &SessionConfig) -> Self {
        Self::new(GameSession::load(config))
    }

    /// Run `f` with exclusive access to the session.
    ///
    /// A lock poisoned by a panicking caller is recovered: operations check
    /// their inputs before mutating, so the session is consistent between
    /// calls.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameError;
    use crate::roster::MemoryStorage;

    fn shared() -> SharedSession {
        let config = SessionConfig::new().with_seed(1);
        SharedSession::new(GameSession::load_with_storage(
            Box::new(MemoryStorage::with_names(["A", "B", "C", "D"])),
            &config,
        ))
    }

    #[test]
    fn test_concurrent_assign_succeeds_once() {
        let session = shared();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let session = session.clone();
                std::thread::spawn(move || session.with(|s| s.assign().map(|_| ())))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert_eq!(results.iter().filter(|r| **r == Err(GameError::AlreadyStarted)).count(), 7);
        assert_eq!(session.with(|s| s.round()), 1);
    }

    #[test]
    fn test_survives_poisoned_lock() {
        let session = shared();
        let poisoner = session.clone();

        let _ = std::thread::spawn(move || {
            poisoner.with(|_| panic!("boom"));
        })
        .join();

        assert_eq!(session.with(|s| s.players().len()), 4);
    }
}
