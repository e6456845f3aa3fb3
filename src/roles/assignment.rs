//! Random partition of the roster into traitors and faithful.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{name_key, GameRng, PlayerName, Role, TRAITOR_COUNT};

/// One round's role assignment.
///
/// Keyed by lower-cased name and covering exactly the roster it was built
/// from. The traitors' display names are kept alongside so a traitor can be
/// shown their partner as the roster spells it.
#[derive(Clone, Debug)]
pub struct Assignment {
    roles: FxHashMap<String, Role>,
    traitors: SmallVec<[PlayerName; TRAITOR_COUNT]>,
}

impl Assignment {
    /// Assign roles to `roster`.
    ///
    /// The roster is shuffled uniformly (Fisher-Yates) and the first
    /// `min(TRAITOR_COUNT, len)` players become traitors, so every player has
    /// the same chance of being picked. Rosters smaller than
    /// `TRAITOR_COUNT` get fewer traitors rather than an error.
    #[must_use]
    pub fn assign(roster: &[PlayerName], rng: &mut GameRng) -> Self {
        let mut order: Vec<&PlayerName> = roster.iter().collect();
        rng.shuffle(&mut order);

        let mut roles = FxHashMap::default();
        roles.reserve(order.len());
        let mut traitors = SmallVec::new();

        for (index, name) in order.into_iter().enumerate() {
            let role = if index < TRAITOR_COUNT {
                traitors.push(name.clone());
                Role::Traitor
            } else {
                Role::Faithful
            };
            roles.insert(name.key().to_string(), role);
        }

        Self { roles, traitors }
    }

    /// Number of players covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Check for an assignment over an empty roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Case-insensitive role lookup.
    #[must_use]
    pub fn role_of(&self, raw: &str) -> Option<Role> {
        self.roles.get(&name_key(raw)).copied()
    }

    /// Check whether `raw` names a traitor.
    #[must_use]
    pub fn is_traitor(&self, raw: &str) -> bool {
        self.role_of(raw) == Some(Role::Traitor)
    }

    /// The traitors, in the order they were drawn.
    #[must_use]
    pub fn traitors(&self) -> &[PlayerName] {
        &self.traitors
    }

    /// Resolve a traitor's name to its roster spelling.
    #[must_use]
    pub fn traitor(&self, raw: &str) -> Option<&PlayerName> {
        self.traitors.iter().find(|t| t.matches(raw))
    }

    /// The other traitor, given one traitor's name.
    ///
    /// `None` if `raw` is not a traitor or is the only one.
    #[must_use]
    pub fn other_traitor(&self, raw: &str) -> Option<&PlayerName> {
        let me = self.traitor(raw)?;
        self.traitors.iter().find(|t| *t != me)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<PlayerName> {
        names.iter().map(|n| PlayerName::new(*n)).collect()
    }

    fn count(assignment: &Assignment, names: &[PlayerName], role: Role) -> usize {
        names.iter().filter(|n| assignment.role_of(n.display()) == Some(role)).count()
    }

    #[test]
    fn test_two_traitors_rest_faithful() {
        let names = roster(&["A", "B", "C", "D", "E"]);
        let assignment = Assignment::assign(&names, &mut GameRng::new(42));

        assert_eq!(assignment.len(), 5);
        assert_eq!(count(&assignment, &names, Role::Traitor), 2);
        assert_eq!(count(&assignment, &names, Role::Faithful), 3);
        assert_eq!(assignment.traitors().len(), 2);
    }

    #[test]
    fn test_small_rosters() {
        let empty = Assignment::assign(&[], &mut GameRng::new(1));
        assert!(empty.is_empty());
        assert!(empty.traitors().is_empty());

        let solo = roster(&["Solo"]);
        let one = Assignment::assign(&solo, &mut GameRng::new(1));
        assert_eq!(one.role_of("solo"), Some(Role::Traitor));
        assert_eq!(one.other_traitor("Solo"), None);

        let pair = roster(&["A", "B"]);
        let two = Assignment::assign(&pair, &mut GameRng::new(1));
        assert_eq!(count(&two, &pair, Role::Traitor), 2);
    }

    #[test]
    fn test_role_of_ignores_case() {
        let names = roster(&["Ollie", "Bob", "Gus"]);
        let assignment = Assignment::assign(&names, &mut GameRng::new(3));

        let role = assignment.role_of("Ollie");
        assert!(role.is_some());
        assert_eq!(assignment.role_of("OLLIE"), role);
        assert_eq!(assignment.role_of("ollie"), role);
        assert_eq!(assignment.role_of(" oLLie "), role);
        assert_eq!(assignment.role_of("Stranger"), None);
    }

    #[test]
    fn test_other_traitor_returns_display_name() {
        let names = roster(&["Alina", "DanO", "DanE", "Vicky"]);
        let assignment = Assignment::assign(&names, &mut GameRng::new(11));

        let traitors = assignment.traitors().to_vec();
        let (first, second) = (&traitors[0], &traitors[1]);

        assert_eq!(assignment.other_traitor(&first.display().to_uppercase()), Some(second));
        assert_eq!(assignment.other_traitor(second.display()).map(PlayerName::display), Some(first.display()));

        let faithful = names.iter().find(|n| !assignment.is_traitor(n.display())).unwrap();
        assert_eq!(assignment.other_traitor(faithful.display()), None);
    }

    #[test]
    fn test_seeded_assignment_is_reproducible() {
        let names = roster(&["A", "B", "C", "D", "E", "F"]);
        let first = Assignment::assign(&names, &mut GameRng::new(99));
        let second = Assignment::assign(&names, &mut GameRng::new(99));

        assert_eq!(first.traitors(), second.traitors());
    }
}
