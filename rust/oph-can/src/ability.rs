use crate::{Action, Resource, ResourceScope, Role, Subject};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One granted rule: `role` may perform `action` on resources in `scope`.
///
/// When `owner_only` is set the ability only grants access to resources
/// owned by the acting user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ability {
    role: Role,
    action: Action,
    scope: ResourceScope,
    #[serde(default)]
    owner_only: bool,
}

impl Ability {
    /// Unrestricted ability.
    pub fn new(role: Role, action: Action, scope: impl Into<ResourceScope>) -> Self {
        Self {
            role,
            action,
            scope: scope.into(),
            owner_only: false,
        }
    }

    /// Ability restricted to resources owned by the acting user.
    pub fn owner(role: Role, action: Action, scope: impl Into<ResourceScope>) -> Self {
        Self {
            owner_only: true,
            ..Self::new(role, action, scope)
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn scope(&self) -> &ResourceScope {
        &self.scope
    }

    pub fn owner_only(&self) -> bool {
        self.owner_only
    }

    /// Returns true if this ability's scope covers `resource_type`,
    /// regardless of ownership.
    pub fn applies_to(&self, resource_type: &str) -> bool {
        self.scope.matches(resource_type)
    }

    /// Returns true if this ability lets `subject` act on `resource`.
    ///
    /// Only scope and ownership are considered; role and action are matched
    /// by the registry lookup that found this ability.
    pub fn permits<R, S>(&self, resource: &R, subject: &S) -> bool
    where
        R: Resource + ?Sized,
        S: Subject + ?Sized,
    {
        self.applies_to(resource.resource_id())
            && (!self.owner_only || resource.owned_by(subject.user_id()))
    }
}

impl Display for Ability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "role {} may {} {}", self.role, self.action, self.scope)?;
        if self.owner_only {
            write!(f, " (owner only)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserId;

    struct Actor(UserId);

    impl Subject for Actor {
        fn role_id(&self) -> Role {
            Role(10)
        }

        fn user_id(&self) -> UserId {
            self.0
        }
    }

    struct Page {
        owner: UserId,
    }

    impl Resource for Page {
        fn resource_id(&self) -> &str {
            "pages"
        }

        fn owned_by(&self, user: UserId) -> bool {
            user == self.owner
        }
    }

    #[test]
    fn it_permits_anyone_in_scope_when_unrestricted() {
        let ability = Ability::new(Role(10), Action::Show, "pages");

        assert!(ability.permits(&Page { owner: 1 }, &Actor(2)));
        assert!(!ability.owner_only());
    }

    #[test]
    fn it_permits_only_owners_when_restricted() {
        let ability = Ability::owner(Role(10), Action::Manage, "pages");

        assert!(ability.permits(&Page { owner: 2 }, &Actor(2)));
        assert!(!ability.permits(&Page { owner: 1 }, &Actor(2)));
    }

    #[test]
    fn it_does_not_permit_other_resource_types() {
        let ability = Ability::new(Role(10), Action::Manage, "users");

        assert!(!ability.permits(&Page { owner: 2 }, &Actor(2)));
        let wildcard = Ability::new(Role(10), Action::Manage, "*");
        assert!(wildcard.permits(&Page { owner: 2 }, &Actor(2)));
    }

    #[test]
    fn it_displays_the_rule() {
        assert_eq!(
            Ability::owner(Role(10), Action::Update, "products").to_string(),
            "role 10 may update products (owner only)"
        );
        assert_eq!(
            Ability::new(Role(100), Action::Manage, "*").to_string(),
            "role 100 may manage *"
        );
    }
}
