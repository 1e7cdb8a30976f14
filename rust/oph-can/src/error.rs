use crate::{Action, Role};
use std::fmt::{Display, Formatter};

/// Error returned when a check does not allow an operation.
///
/// This is the only error the engine produces. Callers are expected to turn
/// it into a "forbidden" response and stop processing the request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Not authorized to {action} {resource}: {reason}")]
pub struct NotAuthorized {
    /// The action that was requested.
    pub action: Action,
    /// Type identifier of the resource the action targeted.
    pub resource: String,
    /// Why the check failed.
    pub reason: Denial,
}

impl NotAuthorized {
    /// Create a new denial for `action` on `resource`.
    pub fn new(action: Action, resource: impl Into<String>, reason: Denial) -> Self {
        Self {
            action,
            resource: resource.into(),
            reason,
        }
    }

    /// Role of the subject that was denied, if there was one.
    pub fn role(&self) -> Option<Role> {
        match self.reason {
            Denial::NoSubject => None,
            Denial::NoAbility { role } => Some(role),
        }
    }

    /// Get the HTTP status code callers should answer with.
    pub fn status_code(&self) -> u16 {
        403
    }
}

/// Detail attached to a [`NotAuthorized`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// The check was made without a subject.
    NoSubject,
    /// The subject's role holds no ability that grants the action.
    NoAbility {
        /// Role of the denied subject.
        role: Role,
    },
}

impl Display for Denial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSubject => write!(f, "no subject"),
            Self::NoAbility { role } => write!(f, "role {role} holds no matching ability"),
        }
    }
}

/// Error returned when parsing an unknown action name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown action '{0}'")]
pub struct ParseActionError(pub String);
