use oph_can::{Ability, Action, Registry, Resource, ResourceScope, Role, Subject, UserId};
use proptest::prelude::*;

struct Actor {
    id: UserId,
    role: Role,
}

impl Subject for Actor {
    fn role_id(&self) -> Role {
        self.role
    }

    fn user_id(&self) -> UserId {
        self.id
    }
}

struct Record {
    kind: String,
    owner: UserId,
}

impl Resource for Record {
    fn resource_id(&self) -> &str {
        &self.kind
    }

    fn owned_by(&self, user: UserId) -> bool {
        user == self.owner
    }
}

fn action() -> impl Strategy<Value = Action> {
    prop::sample::select(Action::ALL.to_vec())
}

fn kind() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn ability() -> impl Strategy<Value = Ability> {
    (0i64..4, action(), prop::option::of(kind()), any::<bool>()).prop_map(
        |(role, action, kind, owner_only)| {
            let scope = kind.map_or(ResourceScope::Anything, ResourceScope::Resource);
            if owner_only {
                Ability::owner(Role(role), action, scope)
            } else {
                Ability::new(Role(role), action, scope)
            }
        },
    )
}

proptest! {
    #[test]
    fn it_allows_everything_with_wildcard_manage(
        role in any::<i64>(),
        user in any::<i64>(),
        owner in any::<i64>(),
        action in action(),
        kind in kind()
    ) {
        let registry = Registry::new();
        registry.authorise(Role(role), Action::Manage, ResourceScope::Anything);

        let actor = Actor { id: user, role: Role(role) };
        let record = Record { kind, owner };
        prop_assert!(registry.allows(action, &record, Some(&actor)));
    }

    #[test]
    fn it_limits_typed_manage_to_its_type(
        action in action(),
        kind in kind(),
        other in kind()
    ) {
        prop_assume!(kind != other);
        let registry = Registry::new();
        registry.authorise(Role(1), Action::Manage, kind.clone());

        let actor = Actor { id: 5, role: Role(1) };
        let typed = Record { kind, owner: 9 };
        let untyped = Record { kind: other, owner: 9 };
        prop_assert!(registry.allows(action, &typed, Some(&actor)));
        prop_assert!(!registry.allows(action, &untyped, Some(&actor)));
    }

    #[test]
    fn it_follows_ownership_with_owner_only_manage(
        action in action(),
        user in any::<i64>(),
        other in any::<i64>()
    ) {
        prop_assume!(user != other);
        let registry = Registry::new();
        registry.authorise_owner(Role(1), Action::Manage, "pages");

        let actor = Actor { id: user, role: Role(1) };
        let own = Record { kind: "pages".into(), owner: user };
        let foreign = Record { kind: "pages".into(), owner: other };
        prop_assert!(registry.allows(action, &own, Some(&actor)));
        prop_assert!(!registry.allows(action, &foreign, Some(&actor)));
    }

    #[test]
    fn it_denies_missing_subject(
        abilities in prop::collection::vec(ability(), 0..16),
        action in action(),
        kind in kind()
    ) {
        let registry = Registry::new();
        for ability in abilities {
            registry.grant(ability);
        }

        let record = Record { kind, owner: 0 };
        prop_assert!(!registry.allows(action, &record, None));
    }

    #[test]
    fn it_allows_narrow_grant_only_for_itself(
        granted in action(),
        requested in action()
    ) {
        prop_assume!(granted != Action::Manage);
        let registry = Registry::new();
        registry.authorise(Role(1), granted, "pages");

        let actor = Actor { id: 1, role: Role(1) };
        let record = Record { kind: "pages".into(), owner: 1 };
        prop_assert_eq!(
            registry.allows(requested, &record, Some(&actor)),
            granted == requested
        );
    }

    #[test]
    fn it_ignores_duplicate_registration(
        abilities in prop::collection::vec(ability(), 0..16),
        role in 0i64..4,
        user in 0i64..4,
        owner in 0i64..4,
        action in action(),
        kind in kind()
    ) {
        let once = Registry::new();
        let twice = Registry::new();
        for ability in abilities {
            once.grant(ability.clone());
            twice.grant(ability.clone());
            twice.grant(ability);
        }

        let actor = Actor { id: user, role: Role(role) };
        let record = Record { kind, owner };
        prop_assert_eq!(
            once.allows(action, &record, Some(&actor)),
            twice.allows(action, &record, Some(&actor))
        );
    }

    #[test]
    fn it_does_not_inherit_between_roles(
        abilities in prop::collection::vec(ability(), 0..16),
        action in action(),
        kind in kind()
    ) {
        let registry = Registry::new();
        for ability in abilities.iter().filter(|ability| ability.role() != Role(3)) {
            registry.grant(ability.clone());
        }

        let actor = Actor { id: 1, role: Role(3) };
        let record = Record { kind, owner: 1 };
        prop_assert!(!registry.allows(action, &record, Some(&actor)));
    }
}
