//! Ordered murder log with undo.

use im::Vector;

use crate::core::{GameError, GameResult};

/// Murdered names in the order they were marked.
///
/// Entries are not checked against the roster: a moderator may record any
/// name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MurderHistory {
    victims: Vector<String>,
}

impl MurderHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a murder. The name is trimmed and must not be empty.
    pub fn mark(&mut self, raw: &str) -> GameResult<()> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        self.victims.push_back(name.to_string());
        Ok(())
    }

    /// Remove and return the most recent entry.
    pub fn undo_last(&mut self) -> GameResult<String> {
        self.victims.pop_back().ok_or(GameError::EmptyHistory)
    }

    /// Remove every entry, returning how many there were.
    pub fn undo_all(&mut self) -> GameResult<usize> {
        if self.victims.is_empty() {
            return Err(GameError::EmptyHistory);
        }
        let removed = self.victims.len();
        self.victims.clear();
        Ok(removed)
    }

    /// All entries, oldest first.
    pub fn list(&self) -> impl Iterator<Item = &String> {
        self.victims.iter()
    }

    /// The most recently murdered name.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.victims.back().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.victims.len()
    }

    /// Check for an empty history.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.victims.is_empty()
    }

    /// Drop every entry without reporting a count.
    pub(crate) fn clear(&mut self) {
        self.victims.clear();
    }

    /// Copy of the entries, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.victims.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_undo_last() {
        let mut history = MurderHistory::new();
        history.mark("X").unwrap();
        history.mark(" Y ").unwrap();

        assert_eq!(history.latest(), Some("Y"));
        assert_eq!(history.undo_last(), Ok("Y".to_string()));
        assert_eq!(history.to_vec(), vec!["X"]);
    }

    #[test]
    fn test_undo_all() {
        let mut history = MurderHistory::new();
        history.mark("X").unwrap();

        assert_eq!(history.undo_all(), Ok(1));
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
    }

    #[test]
    fn test_empty_history_errors() {
        let mut history = MurderHistory::new();

        assert_eq!(history.undo_last(), Err(GameError::EmptyHistory));
        assert_eq!(history.undo_all(), Err(GameError::EmptyHistory));
    }

    #[test]
    fn test_mark_rejects_blank() {
        let mut history = MurderHistory::new();

        assert_eq!(history.mark("   "), Err(GameError::EmptyName));
        assert!(history.is_empty());
    }

    #[test]
    fn test_mark_allows_repeats_and_strangers() {
        let mut history = MurderHistory::new();
        history.mark("Gus").unwrap();
        history.mark("Gus").unwrap();
        history.mark("Nobody In Particular").unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history.list().collect::<Vec<_>>(), vec!["Gus", "Gus", "Nobody In Particular"]);
    }
}
