//! Role lookup outcomes for presentation layers.

use serde::{Deserialize, Serialize};

use crate::core::Role;

/// Result of asking for a player's role.
///
/// `role_of` collapses the first two cases into `None`; this keeps them apart
/// so a page can say "roles are not out yet" instead of "who are you?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleStatus {
    /// No assignment exists this round.
    NotStarted,
    /// Roles are assigned but the name is not on the roster.
    UnknownPlayer,
    /// The player's role.
    Assigned(Role),
}

impl RoleStatus {
    /// The role, if one was found.
    #[must_use]
    pub fn role(self) -> Option<Role> {
        match self {
            RoleStatus::Assigned(role) => Some(role),
            RoleStatus::NotStarted | RoleStatus::UnknownPlayer => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role() {
        assert_eq!(RoleStatus::Assigned(Role::Faithful).role(), Some(Role::Faithful));
        assert_eq!(RoleStatus::NotStarted.role(), None);
        assert_eq!(RoleStatus::UnknownPlayer.role(), None);
    }
}
