//! Player names: case-preserving display, case-insensitive identity.
//!
//! A `PlayerName` carries the string exactly as the roster stores it plus a
//! lower-cased key. All lookups go through the key; all rendering uses the
//! display form.

use serde::{Deserialize, Serialize};

/// Normalize a raw name into its identity key.
///
/// Surrounding whitespace is ignored, so `" Ollie "` and `"OLLIE"` share a key.
#[must_use]
pub fn name_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A roster entry.
///
/// Equality and hashing use the key only, so two names that differ only in
/// casing are the same player.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PlayerName {
    display: String,
    key: String,
}

impl PlayerName {
    /// Create a name from already-trimmed input.
    pub fn new(display: impl Into<String>) -> Self {
        let display = display.into();
        let key = name_key(&display);
        Self { display, key }
    }

    /// Trim the input and build a name, or `None` if nothing is left.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::new(trimmed))
        }
    }

    /// The name as entered, for display.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The lower-cased identity key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Case-insensitive comparison against raw input.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        self.key == name_key(raw)
    }
}

impl PartialEq for PlayerName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PlayerName {}

impl std::hash::Hash for PlayerName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

impl From<String> for PlayerName {
    fn from(display: String) -> Self {
        Self::new(display)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_lowercase_and_trimmed() {
        assert_eq!(name_key("  OlLiE "), "ollie");
        assert_eq!(PlayerName::new("DanO").key(), "dano");
    }

    #[test]
    fn test_display_preserves_case() {
        let name = PlayerName::new("DanE");
        assert_eq!(name.display(), "DanE");
        assert_eq!(format!("{}", name), "DanE");
    }

    #[test]
    fn test_equality_ignores_case() {
        assert_eq!(PlayerName::new("Bob"), PlayerName::new("bob"));
        assert_ne!(PlayerName::new("Bob"), PlayerName::new("Bobby"));
        assert!(PlayerName::new("Vicky").matches("VICKY"));
    }

    #[test]
    fn test_parse() {
        assert_eq!(PlayerName::parse("  Gus ").map(|n| n.display().to_string()), Some("Gus".to_string()));
        assert!(PlayerName::parse("   ").is_none());
        assert!(PlayerName::parse("").is_none());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let name = PlayerName::new("Lottie");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Lottie\"");

        let back: PlayerName = serde_json::from_str(&json).unwrap();
        assert_eq!(back.display(), "Lottie");
        assert_eq!(back.key(), "lottie");
    }
}
