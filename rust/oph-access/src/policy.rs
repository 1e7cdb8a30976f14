//! Declarative grant tables.
//!
//! A policy document lists grants as JSON so deployments can adjust the
//! abilities of each role without rebuilding:
//!
//! ```json
//! {
//!   "grants": [
//!     { "role": "admin", "action": "manage", "resource": "*" },
//!     { "role": "reader", "action": "update", "resource": "products", "owner": true },
//!     { "role": 42, "action": "show", "resource": "reports" }
//!   ]
//! }
//! ```

use crate::roles::{parse_role, role_name};
use crate::setup::setup_authorisation;
use oph_can::{Ability, Action, Registry, ResourceScope, Role};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors that can occur while loading or applying a policy document.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// The document could not be read.
    #[error("Failed to read policy {}: {source}", .path.display())]
    Io {
        /// Location of the document.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The document is not a valid policy.
    #[error("Invalid policy document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A grant names a role that does not exist.
    #[error("Unknown role '{0}'")]
    UnknownRole(String),
}

/// Role of a grant, written as a number or as a role name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleRef {
    Id(i64),
    Name(String),
}

impl RoleRef {
    pub fn resolve(&self) -> Result<Role, PolicyError> {
        match self {
            Self::Id(id) => Ok(Role(*id)),
            Self::Name(name) => {
                parse_role(name).ok_or_else(|| PolicyError::UnknownRole(name.clone()))
            }
        }
    }
}

impl From<Role> for RoleRef {
    fn from(role: Role) -> Self {
        match role_name(role) {
            Some(name) => Self::Name(name.to_string()),
            None => Self::Id(role.0),
        }
    }
}

/// One entry of a policy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    pub role: RoleRef,
    pub action: Action,
    pub resource: ResourceScope,
    /// Restrict the grant to resources owned by the acting user.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub owner: bool,
}

impl Grant {
    /// Ability this grant registers.
    pub fn ability(&self) -> Result<Ability, PolicyError> {
        let role = self.role.resolve()?;
        let scope = self.resource.clone();
        Ok(if self.owner {
            Ability::owner(role, self.action, scope)
        } else {
            Ability::new(role, self.action, scope)
        })
    }
}

impl From<&Ability> for Grant {
    fn from(ability: &Ability) -> Self {
        Self {
            role: ability.role().into(),
            action: ability.action(),
            resource: ability.scope().clone(),
            owner: ability.owner_only(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    #[serde(default)]
    pub grants: Vec<Grant>,
}

impl PolicyDocument {
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a document from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| PolicyError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loaded policy document");
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, PolicyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_abilities<'a>(abilities: impl IntoIterator<Item = &'a Ability>) -> Self {
        Self {
            grants: abilities.into_iter().map(Grant::from).collect(),
        }
    }

    /// The application's built-in grant table as a document.
    pub fn default_grants() -> Self {
        let registry = Registry::new();
        setup_authorisation(&registry);
        Self::from_abilities(&registry.abilities())
    }

    /// Register every grant with `registry` and return how many were added.
    ///
    /// All grants are resolved before the first one is registered, so a
    /// document with an unknown role leaves the registry untouched.
    pub fn apply(&self, registry: &Registry) -> Result<usize, PolicyError> {
        let abilities = self
            .grants
            .iter()
            .map(Grant::ability)
            .collect::<Result<Vec<_>, _>>()?;

        let count = abilities.len();
        for ability in abilities {
            registry.grant(ability);
        }

        tracing::info!(grants = count, "Applied policy document");
        Ok(count)
    }
}
