//! Roles assigned to accounts of the open payment host.

use oph_can::Role;

/// Visitors without an account, and freshly built users that have not been
/// saved yet.
pub const ANON: Role = Role(0);

/// Registered customers.
pub const READER: Role = Role(10);

/// Site administrators.
pub const ADMIN: Role = Role(100);

const NAMES: [(&str, Role); 3] = [("anon", ANON), ("reader", READER), ("admin", ADMIN)];

/// Look up a role by its name, ignoring case.
pub fn role_by_name(name: &str) -> Option<Role> {
    NAMES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name.trim()))
        .map(|(_, role)| *role)
}

/// Name of a known role.
pub fn role_name(role: Role) -> Option<&'static str> {
    NAMES
        .iter()
        .find(|(_, known)| *known == role)
        .map(|(name, _)| *name)
}

/// Parse a role given either by name or by number.
pub fn parse_role(value: &str) -> Option<Role> {
    role_by_name(value).or_else(|| value.trim().parse::<i64>().ok().map(Role))
}
