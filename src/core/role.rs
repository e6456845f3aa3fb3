//! Secret roles.

use serde::{Deserialize, Serialize};

/// Number of traitors chosen per round (fewer if the roster is smaller).
pub const TRAITOR_COUNT: usize = 2;

/// A player's secret role for the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// One of the (at most two) players with access to the traitor channel.
    Traitor,
    /// Everyone else.
    Faithful,
}

impl Role {
    /// Check for the traitor role.
    #[must_use]
    pub const fn is_traitor(self) -> bool {
        matches!(self, Role::Traitor)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Traitor => f.write_str("Traitor"),
            Role::Faithful => f.write_str("Faithful"),
        }
    }
}
