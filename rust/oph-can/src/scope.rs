use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Textual form of [`ResourceScope::Anything`].
pub const WILDCARD: &str = "*";

/// Resource types an ability covers.
///
/// Scopes are written as the resource type identifier (for example a table
/// name such as `"pages"`) or as `"*"` for every resource type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceScope {
    /// Matches every resource type.
    Anything,
    /// Matches resources whose type identifier equals the given one.
    Resource(String),
}

impl ResourceScope {
    /// Scope covering `resource_type`.
    ///
    /// Like every conversion from text, `"*"` yields [`ResourceScope::Anything`].
    pub fn resource(resource_type: impl Into<String>) -> Self {
        Self::from(resource_type.into())
    }

    /// Returns true if this scope covers `resource_type`.
    pub fn matches(&self, resource_type: &str) -> bool {
        match self {
            Self::Anything => true,
            Self::Resource(name) => name == resource_type,
        }
    }

    /// Textual form of this scope.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Anything => WILDCARD,
            Self::Resource(name) => name,
        }
    }
}

impl From<String> for ResourceScope {
    fn from(value: String) -> Self {
        if value == WILDCARD {
            Self::Anything
        } else {
            Self::Resource(value)
        }
    }
}

impl From<&str> for ResourceScope {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ResourceScope> for String {
    fn from(value: ResourceScope) -> Self {
        match value {
            ResourceScope::Anything => WILDCARD.to_string(),
            ResourceScope::Resource(name) => name,
        }
    }
}

impl Display for ResourceScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
