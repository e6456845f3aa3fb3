//! Roster persistence backends.
//!
//! The roster is stored as a JSON array of strings. Reads distinguish
//! "nothing stored" (`Ok(None)`) from "stored but unusable" (`Err`), so the
//! store can seed defaults in both cases while logging only the second.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::core::StorageError;

/// Persistence collaborator for the roster.
///
/// Implementations are fallible but failures are never fatal: the roster
/// store logs them and keeps its in-memory copy.
pub trait RosterStorage: Send + std::fmt::Debug {
    /// Read the persisted roster. `Ok(None)` when nothing has been stored.
    fn read_roster(&self) -> Result<Option<Vec<String>>, StorageError>;

    /// Replace the persisted roster.
    fn write_roster(&self, names: &[String]) -> Result<(), StorageError>;
}

/// Parse persisted roster text. Anything but a JSON array of strings fails.
pub fn parse_roster(text: &str) -> Result<Vec<String>, StorageError> {
    Ok(serde_json::from_str(text)?)
}

/// Render a roster the way it is written to disk.
pub fn render_roster(names: &[String]) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(names)?)
}

/// Roster stored as a pretty-printed JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Store the roster at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the roster file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterStorage for JsonFileStorage {
    fn read_roster(&self) -> Result<Option<Vec<String>>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => parse_roster(&text).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_roster(&self, names: &[String]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, render_roster(names)?)?;
        Ok(())
    }
}

/// In-process roster storage.
///
/// Clones share the same slot, so a caller can hand one clone to a session
/// and inspect what was persisted through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Empty storage: the first read reports nothing stored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with raw text, which need not be valid.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(text.into()))),
            fail_writes: false,
        }
    }

    /// Storage pre-filled with a valid roster.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        // Vec<String> always serializes.
        let text = serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string());
        Self::with_contents(text)
    }

    /// Make every write fail with an io error. Reads still work.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Raw persisted text, if any.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Persisted roster, if present and well-formed.
    #[must_use]
    pub fn names(&self) -> Option<Vec<String>> {
        self.contents().and_then(|text| parse_roster(&text).ok())
    }
}

impl RosterStorage for MemoryStorage {
    fn read_roster(&self) -> Result<Option<Vec<String>>, StorageError> {
        self.contents().map(|text| parse_roster(&text)).transpose()
    }

    fn write_roster(&self, names: &[String]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "writes disabled").into());
        }
        let text = render_roster(names)?;
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("traitors-roster-{}-{}.json", tag, std::process::id()))
    }

    #[test]
    fn test_parse_roster() {
        assert_eq!(parse_roster(r#"["A", "b"]"#).unwrap(), vec!["A".to_string(), "b".to_string()]);
        assert!(matches!(parse_roster(r#"{"players": []}"#), Err(StorageError::Malformed(_))));
        assert!(matches!(parse_roster(r#"["A", 3]"#), Err(StorageError::Malformed(_))));
        assert!(parse_roster("not json").is_err());
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.read_roster().unwrap().is_none());

        storage.write_roster(&["Alina".to_string(), "Alex".to_string()]).unwrap();
        assert_eq!(storage.read_roster().unwrap(), Some(vec!["Alina".to_string(), "Alex".to_string()]));
    }

    #[test]
    fn test_memory_storage_clones_share_slot() {
        let storage = MemoryStorage::new();
        let observer = storage.clone();

        storage.write_roster(&["Gus".to_string()]).unwrap();
        assert_eq!(observer.names(), Some(vec!["Gus".to_string()]));
    }

    #[test]
    fn test_memory_storage_failing_writes() {
        let storage = MemoryStorage::with_names(["Bob"]).failing_writes();

        assert!(matches!(storage.write_roster(&[]), Err(StorageError::Io(_))));
        assert_eq!(storage.names(), Some(vec!["Bob".to_string()]));
    }

    #[test]
    fn test_file_storage_missing_file_reads_none() {
        let storage = JsonFileStorage::new(temp_path("missing"));
        assert!(storage.read_roster().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let path = temp_path("roundtrip");
        let storage = JsonFileStorage::new(&path);

        storage.write_roster(&["Vicky".to_string(), "Grace".to_string()]).unwrap();
        let read = storage.read_roster().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read, Some(vec!["Vicky".to_string(), "Grace".to_string()]));
    }

    #[test]
    fn test_file_storage_malformed() {
        let path = temp_path("malformed");
        std::fs::write(&path, "{\"oops\": true}").unwrap();

        let result = JsonFileStorage::new(&path).read_roster();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(StorageError::Malformed(_))));
    }
}
