use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier of an actor's privilege set.
///
/// Roles are opaque keys. The registry never compares them by magnitude, so
/// a role with a larger value does not inherit the abilities of a smaller
/// one; any ordering between roles is a convention of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(pub i64);

impl From<i64> for Role {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Role> for i64 {
    fn from(value: Role) -> Self {
        value.0
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an authenticated actor, passed to ownership predicates.
pub type UserId = i64;
