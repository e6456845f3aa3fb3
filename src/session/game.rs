//! The game session aggregate.
//!
//! `GameSession` owns the roster together with the round state that depends
//! on it (assignment, traitor chat, murder history). Round state is reset as
//! a unit whenever the roster changes or the host asks for a fresh round.
//!
//! ## Lifecycle
//!
//! ```text
//! NoGame --assign()--> InProgress --reset_round() / roster change--> NoGame
//! ```
//!
//! ## Example
//!
//! ```
//! use traitors_game::{GameSession, MemoryStorage, Role, SessionConfig};
//!
//! let config = SessionConfig::new().with_default_roster(["A", "B", "C", "D"]).with_seed(7);
//! let mut session = GameSession::load_with_storage(Box::new(MemoryStorage::new()), &config);
//!
//! session.assign().unwrap();
//! let traitors: Vec<String> = session.traitors().iter().map(|t| t.to_string()).collect();
//! assert_eq!(traitors.len(), 2);
//! assert_eq!(session.role_of(&traitors[0]), Some(Role::Traitor));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chat::{ChatEntry, TraitorChannel, TraitorView};
use crate::core::{GameError, GameResult, GameRng, PlayerName, Role, SessionConfig};
use crate::murder::MurderHistory;
use crate::roles::{Assignment, RoleStatus};
use crate::roster::{JsonFileStorage, RosterStorage, RosterStore};

/// Round state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No roles assigned.
    NoGame,
    /// Roles assigned; chat and murders are live.
    InProgress,
}

/// Serializable view of the session for presentation layers.
///
/// Roles are secret and not included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub players: Vec<String>,
    pub phase: Phase,
    pub round: u64,
    pub murdered: Vec<String>,
    pub chat: Vec<ChatEntry>,
}

/// A single game session.
#[derive(Debug)]
pub struct GameSession {
    roster: RosterStore,
    assignment: Option<Assignment>,
    chat: TraitorChannel,
    murders: MurderHistory,
    rng: GameRng,
    /// Number of rounds started since the session was created.
    round: u64,
}

impl GameSession {
    /// Create a session whose roster lives in `config.roster_path`.
    pub fn load(config: &SessionConfig) -> Self {
        Self::load_with_storage(Box::new(JsonFileStorage::new(&config.roster_path)), config)
    }

    /// Create a session with an explicit roster backend.
    pub fn load_with_storage(storage: Box<dyn RosterStorage>, config: &SessionConfig) -> Self {
        let roster = RosterStore::load(storage, &config.default_roster);
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), players = roster.len(), "Session created");

        Self {
            roster,
            assignment: None,
            chat: TraitorChannel::new(),
            murders: MurderHistory::new(),
            rng,
            round: 0,
        }
    }

    // === Roster ===

    /// Roster entries in order.
    #[must_use]
    pub fn players(&self) -> &[PlayerName] {
        self.roster.names()
    }

    /// The roster store.
    #[must_use]
    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    /// Add a player and reset the round.
    pub fn add_player(&mut self, name: &str) -> GameResult<PlayerName> {
        let added = self.roster.add(name)?;
        self.reset_round();
        Ok(added)
    }

    /// Rename a player (exact stored casing) and reset the round.
    pub fn rename_player(&mut self, old: &str, new: &str) -> GameResult<()> {
        self.roster.rename(old, new)?;
        self.reset_round();
        Ok(())
    }

    /// Remove a player (exact stored casing) and reset the round.
    pub fn remove_player(&mut self, name: &str) -> GameResult<PlayerName> {
        let removed = self.roster.remove(name)?;
        self.reset_round();
        Ok(removed)
    }

    // === Lifecycle ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.assignment.is_some() {
            Phase::InProgress
        } else {
            Phase::NoGame
        }
    }

    /// Check whether roles have been assigned this round.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.assignment.is_some()
    }

    /// Number of rounds started so far.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Clear the assignment, chat and murder history together.
    pub fn reset_round(&mut self) {
        self.assignment = None;
        self.chat.clear();
        self.murders.clear();
        info!(round = self.round, "Round reset");
    }

    // === Roles ===

    /// Assign roles for a new round.
    ///
    /// Fails with `AlreadyStarted` (changing nothing) while a round is in
    /// progress; call `reset_round` first.
    pub fn assign(&mut self) -> GameResult<&Assignment> {
        if self.assignment.is_some() {
            return Err(GameError::AlreadyStarted);
        }

        let assignment = Assignment::assign(self.roster.names(), &mut self.rng);
        self.round += 1;
        info!(round = self.round, players = assignment.len(), traitors = assignment.traitors().len(), "Roles assigned");
        Ok(&*self.assignment.insert(assignment))
    }

    /// The current assignment, if any.
    #[must_use]
    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    /// Case-insensitive role lookup. `None` if no game or unknown name.
    #[must_use]
    pub fn role_of(&self, name: &str) -> Option<Role> {
        self.assignment.as_ref().and_then(|a| a.role_of(name))
    }

    /// Role lookup that tells "not started" apart from "unknown player".
    #[must_use]
    pub fn role_status(&self, name: &str) -> RoleStatus {
        match &self.assignment {
            None => RoleStatus::NotStarted,
            Some(a) => a.role_of(name).map_or(RoleStatus::UnknownPlayer, RoleStatus::Assigned),
        }
    }

    /// The other traitor, as the roster spells it.
    #[must_use]
    pub fn other_traitor(&self, name: &str) -> Option<&PlayerName> {
        self.assignment.as_ref().and_then(|a| a.other_traitor(name))
    }

    /// This round's traitors; empty when no game is in progress.
    #[must_use]
    pub fn traitors(&self) -> &[PlayerName] {
        match &self.assignment {
            Some(assignment) => assignment.traitors(),
            None => &[],
        }
    }

    // === Murders ===

    /// Record a murder. Any non-empty name is accepted.
    pub fn mark_murdered(&mut self, name: &str) -> GameResult<()> {
        self.murders.mark(name)?;
        debug!(victim = name.trim(), total = self.murders.len(), "Murder recorded");
        Ok(())
    }

    /// Record a murder on behalf of a traitor.
    ///
    /// Fails with `NotATraitor` if `actor` does not hold the traitor role.
    pub fn murder_as_traitor(&mut self, actor: &str, target: &str) -> GameResult<()> {
        if self.role_of(actor) != Some(Role::Traitor) {
            return Err(GameError::NotATraitor(actor.trim().to_string()));
        }
        self.mark_murdered(target)
    }

    /// Undo the most recent murder, returning the name.
    pub fn undo_last(&mut self) -> GameResult<String> {
        let victim = self.murders.undo_last()?;
        debug!(victim = %victim, "Murder undone");
        Ok(victim)
    }

    /// Undo every murder, returning how many were removed.
    pub fn undo_all(&mut self) -> GameResult<usize> {
        let removed = self.murders.undo_all()?;
        debug!(removed, "All murders undone");
        Ok(removed)
    }

    /// Murdered names, oldest first.
    pub fn murdered(&self) -> impl Iterator<Item = &String> {
        self.murders.list()
    }

    /// The most recent victim.
    #[must_use]
    pub fn latest_murdered(&self) -> Option<&str> {
        self.murders.latest()
    }

    /// The murder history.
    #[must_use]
    pub fn murders(&self) -> &MurderHistory {
        &self.murders
    }

    // === Traitor chat ===

    /// Check that `name` is a traitor.
    pub fn login(&self, name: &str) -> GameResult<TraitorView> {
        self.chat.login(self.assignment.as_ref(), name)
    }

    /// Post to the traitor channel.
    pub fn post(&mut self, name: &str, message: &str) -> GameResult<ChatEntry> {
        self.chat.post(self.assignment.as_ref(), name, message)
    }

    /// Chat messages in arrival order.
    pub fn chat_history(&self) -> impl Iterator<Item = &ChatEntry> {
        self.chat.history()
    }

    // === Views ===

    /// Capture a serializable view of the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            players: self.roster.display_names(),
            phase: self.phase(),
            round: self.round,
            murdered: self.murders.to_vec(),
            chat: self.chat.history().cloned().collect(),
        }
    }
}
