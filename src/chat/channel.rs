//! The traitors' private channel.
//!
//! Every call is gated on the caller currently holding the traitor role.
//! There is no session: identity is re-checked by name each time.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameError, GameResult};
use crate::roles::Assignment;

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Speaker, as the roster spells the name.
    pub speaker: String,
    /// Message text, unescaped.
    pub message: String,
    /// Arrival order within the round, starting at 0.
    pub seq: u64,
}

/// What a traitor sees after logging in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitorView {
    /// The traitor's own name, as the roster spells it.
    pub name: String,
    /// The other traitor, if there is one.
    pub partner: Option<String>,
}

/// Append-only chat log for one round.
#[derive(Clone, Debug, Default)]
pub struct TraitorChannel {
    entries: Vector<ChatEntry>,
    next_seq: u64,
}

impl TraitorChannel {
    /// Create an empty channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `name` is a traitor and describe their view of the channel.
    pub fn login(&self, assignment: Option<&Assignment>, name: &str) -> GameResult<TraitorView> {
        let assignment = assignment.ok_or_else(|| not_a_traitor(name))?;
        let me = assignment.traitor(name).ok_or_else(|| not_a_traitor(name))?;

        Ok(TraitorView {
            name: me.display().to_string(),
            partner: assignment.other_traitor(name).map(|p| p.display().to_string()),
        })
    }

    /// Append a message from a traitor. Nothing is recorded on failure.
    pub fn post(&mut self, assignment: Option<&Assignment>, name: &str, message: &str) -> GameResult<ChatEntry> {
        let speaker = assignment
            .and_then(|a| a.traitor(name))
            .ok_or_else(|| not_a_traitor(name))?;

        let entry = ChatEntry {
            speaker: speaker.display().to_string(),
            message: message.to_string(),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.entries.push_back(entry.clone());
        debug!(speaker = %entry.speaker, seq = entry.seq, "Traitor chat message");
        Ok(entry)
    }

    /// Messages in arrival order.
    pub fn history(&self) -> impl Iterator<Item = &ChatEntry> {
        self.entries.iter()
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check for an empty channel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every message and restart the sequence.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.next_seq = 0;
    }
}

fn not_a_traitor(name: &str) -> GameError {
    GameError::NotATraitor(name.trim().to_string())
}
