use crate::{Ability, Action, ResourceScope, Role};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::LazyLock;

type Abilities = HashMap<Role, HashMap<Action, Vec<Ability>>>;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Store of granted abilities, keyed by role and action.
///
/// The registry only grows: abilities are appended and never revoked or
/// deduplicated. Registration may happen at any time, including while other
/// threads are running checks; a check sees each ability either fully
/// registered or not at all.
#[derive(Debug, Default)]
pub struct Registry {
    abilities: RwLock<Abilities>,
}

/// What the abilities of one role/action pair grant on one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Coverage {
    /// An unrestricted ability matched.
    pub unrestricted: bool,
    /// An owner-only ability matched.
    pub owner_only: bool,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry.
    ///
    /// Applications that prefer package level state populate this once at
    /// start-up and check against it from request handlers. Tests should
    /// construct their own [`Registry`] instead.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Let `role` perform `action` on every resource in `scope`.
    pub fn authorise(&self, role: Role, action: Action, scope: impl Into<ResourceScope>) {
        self.grant(Ability::new(role, action, scope));
    }

    /// Let `role` perform `action` on resources in `scope` that the acting
    /// user owns.
    pub fn authorise_owner(&self, role: Role, action: Action, scope: impl Into<ResourceScope>) {
        self.grant(Ability::owner(role, action, scope));
    }

    /// Append `ability`.
    pub fn grant(&self, ability: Ability) {
        tracing::debug!(
            role = %ability.role(),
            action = %ability.action(),
            scope = %ability.scope(),
            owner_only = ability.owner_only(),
            "Registered ability"
        );

        self.abilities
            .write()
            .entry(ability.role())
            .or_default()
            .entry(ability.action())
            .or_default()
            .push(ability);
    }

    /// Snapshot of every registered ability, ordered by role then action.
    /// Abilities for the same role and action keep their registration order.
    pub fn abilities(&self) -> Vec<Ability> {
        let abilities = self.abilities.read();

        let mut lists: Vec<(&Role, &Action, &Vec<Ability>)> = abilities
            .iter()
            .flat_map(|(role, actions)| {
                actions.iter().map(move |(action, list)| (role, action, list))
            })
            .collect();
        lists.sort_by_key(|(role, action, _)| (**role, **action));

        lists
            .into_iter()
            .flat_map(|(_, _, list)| list.iter().cloned())
            .collect()
    }

    /// Number of registered abilities, duplicates included.
    pub fn len(&self) -> usize {
        self.abilities
            .read()
            .values()
            .flat_map(|actions| actions.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Summarize the abilities registered for `role` and `action` that
    /// cover `resource_type`.
    ///
    /// The read lock is released before returning, so ownership predicates
    /// are never run while the registry is locked.
    pub(crate) fn coverage(&self, role: Role, action: Action, resource_type: &str) -> Coverage {
        let abilities = self.abilities.read();
        let Some(list) = abilities.get(&role).and_then(|actions| actions.get(&action)) else {
            return Coverage::default();
        };

        let mut coverage = Coverage::default();
        for ability in list.iter().filter(|ability| ability.applies_to(resource_type)) {
            if ability.owner_only() {
                coverage.owner_only = true;
            } else {
                coverage.unrestricted = true;
                break;
            }
        }
        coverage
    }
}
