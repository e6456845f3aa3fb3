//! Session configuration.
//!
//! Hosts configure a session at startup with `SessionConfig`:
//! - where the roster is persisted
//! - which roster to seed when nothing usable is persisted
//! - an optional RNG seed for reproducible role assignment

use std::path::PathBuf;

/// Roster used when no persisted roster exists.
pub const DEFAULT_ROSTER: &[&str] = &[
    "Alina", "Alex", "Ollie", "Bob", "Gus", "DanO", "DanE", "Vicky", "Grace", "Lottie",
];

/// Default location of the persisted roster file.
pub const DEFAULT_ROSTER_PATH: &str = "players.json";

/// Environment variable overriding the roster path.
pub const ROSTER_PATH_ENV: &str = "TRAITORS_ROSTER_PATH";

/// Environment variable fixing the RNG seed.
pub const SEED_ENV: &str = "TRAITORS_SEED";

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Roster file location (used by `JsonFileStorage`).
    pub roster_path: PathBuf,

    /// Names seeded when the persisted roster is absent or unusable.
    pub default_roster: Vec<String>,

    /// RNG seed. `None` draws one from entropy at session creation.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionConfig {
    /// Create a configuration with the built-in defaults.
    pub fn new() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_PATH),
            default_roster: DEFAULT_ROSTER.iter().map(|s| (*s).to_string()).collect(),
            seed: None,
        }
    }

    /// Build a configuration from the process environment.
    ///
    /// Unset variables keep their defaults. An unparsable seed is ignored
    /// with a warning.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(path) = lookup(ROSTER_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            config.roster_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(SEED_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(e) => tracing::warn!(value = %raw, error = %e, "Ignoring invalid {}", SEED_ENV),
            }
        }

        config
    }

    /// Set the roster file location.
    #[must_use]
    pub fn with_roster_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.roster_path = path.into();
        self
    }

    /// Replace the fallback roster.
    #[must_use]
    pub fn with_default_roster<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_roster = names.into_iter().map(Into::into).collect();
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
