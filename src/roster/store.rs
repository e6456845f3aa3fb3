//! The roster store: ordered, case-insensitively unique player names.
//!
//! Every successful mutation is written through to the configured
//! `RosterStorage`. Write failures are logged and otherwise ignored; the
//! in-memory roster is authoritative for the life of the process.

use tracing::{debug, info, warn};

use super::storage::RosterStorage;
use crate::core::{GameError, GameResult, PlayerName};

/// Ordered list of distinct player names backed by persistent storage.
#[derive(Debug)]
pub struct RosterStore {
    names: Vec<PlayerName>,
    storage: Box<dyn RosterStorage>,
}

impl RosterStore {
    /// Load the roster from `storage`.
    ///
    /// Falls back to `default` (and writes it back) when nothing is stored,
    /// the stored data is not a list of strings, or no usable names remain
    /// after dropping blank and duplicate entries. Never fails.
    pub fn load(storage: Box<dyn RosterStorage>, default: &[String]) -> Self {
        let loaded = match storage.read_roster() {
            Ok(Some(raw)) => Some(sanitize(raw)).filter(|names| !names.is_empty()),
            Ok(None) => {
                info!("No persisted roster, seeding defaults");
                None
            }
            Err(e) => {
                warn!(error = %e, "Persisted roster unusable, seeding defaults");
                None
            }
        };

        match loaded {
            Some(names) => {
                info!(players = names.len(), "Loaded roster");
                Self { names, storage }
            }
            None => {
                let store = Self {
                    names: sanitize(default.to_vec()),
                    storage,
                };
                store.persist();
                store
            }
        }
    }

    /// Roster entries in order.
    #[must_use]
    pub fn names(&self) -> &[PlayerName] {
        &self.names
    }

    /// Display names in order, as persisted.
    #[must_use]
    pub fn display_names(&self) -> Vec<String> {
        self.names.iter().map(|n| n.display().to_string()).collect()
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check for an empty roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Case-insensitive lookup of a roster entry.
    #[must_use]
    pub fn find(&self, raw: &str) -> Option<&PlayerName> {
        self.names.iter().find(|n| n.matches(raw))
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.find(raw).is_some()
    }

    /// Append a player.
    ///
    /// The name is trimmed. Fails on an empty name or a case-insensitive
    /// duplicate.
    pub fn add(&mut self, raw: &str) -> GameResult<PlayerName> {
        let name = PlayerName::parse(raw).ok_or(GameError::EmptyName)?;
        if let Some(existing) = self.names.iter().find(|n| **n == name) {
            return Err(GameError::DuplicateName(existing.display().to_string()));
        }

        self.names.push(name.clone());
        debug!(player = %name, "Added player");
        self.persist();
        Ok(name)
    }

    /// Rename `old` (exact stored casing) to `new` (trimmed), keeping its
    /// position.
    ///
    /// Renaming to a case variant of the same entry is allowed.
    pub fn rename(&mut self, old: &str, new: &str) -> GameResult<()> {
        let name = PlayerName::parse(new).ok_or(GameError::EmptyName)?;
        let index = self.names.iter().position(|n| n.display() == old);

        let collision = self
            .names
            .iter()
            .enumerate()
            .find(|(i, n)| Some(*i) != index && **n == name);
        if let Some((_, existing)) = collision {
            return Err(GameError::DuplicateName(existing.display().to_string()));
        }

        let index = index.ok_or_else(|| GameError::NotFound(old.to_string()))?;
        debug!(from = old, to = %name, "Renamed player");
        self.names[index] = name;
        self.persist();
        Ok(())
    }

    /// Remove a player by exact stored casing.
    pub fn remove(&mut self, raw: &str) -> GameResult<PlayerName> {
        let index = self
            .names
            .iter()
            .position(|n| n.display() == raw)
            .ok_or_else(|| GameError::NotFound(raw.to_string()))?;

        let removed = self.names.remove(index);
        debug!(player = %removed, "Removed player");
        self.persist();
        Ok(removed)
    }

    fn persist(&self) {
        if let Err(e) = self.storage.write_roster(&self.display_names()) {
            warn!(error = %e, "Failed to persist roster; keeping in-memory copy");
        }
    }
}

/// Trim entries and drop blanks and case-insensitive duplicates, keeping the
/// first occurrence.
fn sanitize(raw: Vec<String>) -> Vec<PlayerName> {
    let mut names: Vec<PlayerName> = Vec::with_capacity(raw.len());
    for entry in raw {
        match PlayerName::parse(&entry) {
            None => warn!("Dropping blank roster entry"),
            Some(name) if names.contains(&name) => {
                warn!(player = %name, "Dropping duplicate roster entry");
            }
            Some(name) => names.push(name),
        }
    }
    names
}
