//! Records of the open payment host, as seen by authorisation checks.
//!
//! Only the fields the checks need are kept: identifiers, roles and
//! owners. Persistence lives elsewhere and builds these from rows.

use crate::roles::{ADMIN, ANON};
use oph_can::{Resource, Role, Subject, UserId};

/// Resource type of [`User`] records.
pub const USERS: &str = "users";

/// Resource type of [`Product`] records.
pub const PRODUCTS: &str = "products";

/// Resource type of [`Subscription`] records.
pub const SUBSCRIPTIONS: &str = "subscriptions";

/// An account.
///
/// A user is both the subject of checks made on their behalf and a resource
/// other checks are made against; each user owns their own record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub role: Role,
}

impl User {
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    /// The user of a request without a session: id 0 with the anonymous
    /// role. This is a real subject, so anonymous visitors get exactly the
    /// abilities granted to [`ANON`].
    pub fn anon() -> Self {
        Self::new(0, ANON)
    }

    pub fn is_anon(&self) -> bool {
        self.role == ANON
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN
    }
}

impl Default for User {
    fn default() -> Self {
        Self::anon()
    }
}

impl Subject for User {
    fn role_id(&self) -> Role {
        self.role
    }

    fn user_id(&self) -> UserId {
        self.id
    }
}

impl Resource for User {
    fn resource_id(&self) -> &str {
        USERS
    }

    fn owned_by(&self, user: UserId) -> bool {
        user == self.id
    }
}

/// A product offered for sale, owned by the user who listed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub user_id: UserId,
}

impl Resource for Product {
    fn resource_id(&self) -> &str {
        PRODUCTS
    }

    fn owned_by(&self, user: UserId) -> bool {
        user == self.user_id
    }
}

/// A customer's subscription to a product, owned by the subscriber.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subscription {
    pub id: i64,
    pub user_id: UserId,
}

impl Resource for Subscription {
    fn resource_id(&self) -> &str {
        SUBSCRIPTIONS
    }

    fn owned_by(&self, user: UserId) -> bool {
        user == self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::READER;

    #[test]
    fn it_treats_users_as_owners_of_themselves() {
        let user = User::new(7, READER);

        assert!(user.owned_by(7));
        assert!(!user.owned_by(8));
        assert_eq!(user.resource_id(), USERS);
    }

    #[test]
    fn it_builds_anonymous_users() {
        let anon = User::default();

        assert!(anon.is_anon());
        assert!(!anon.is_admin());
        assert_eq!(anon.user_id(), 0);
    }

    #[test]
    fn it_owns_records_through_user_id() {
        let product = Product { id: 1, user_id: 7 };
        let subscription = Subscription { id: 2, user_id: 8 };

        assert!(product.owned_by(7));
        assert!(!subscription.owned_by(7));
    }
}
