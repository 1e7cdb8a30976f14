use crate::ParseActionError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Operation an ability grants and a check asks for.
///
/// [`Action::Manage`] is the broad grant: a `Manage` ability on a resource
/// type satisfies checks for every other action on that type. The remaining
/// actions are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Action {
    /// Read a single resource.
    Show,
    /// Read a collection of resources.
    List,
    /// Create a resource.
    Create,
    /// Modify a resource.
    Update,
    /// Delete a resource.
    Destroy,
    /// Full control over a resource, implies every other action.
    Manage,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 6] = [
        Action::Show,
        Action::List,
        Action::Create,
        Action::Update,
        Action::Destroy,
        Action::Manage,
    ];

    /// Actions whose abilities satisfy a check for this action.
    ///
    /// This is the whole implication table: a narrow action is satisfied by
    /// itself or by `Manage`, and `Manage` only by itself.
    pub fn candidates(self) -> &'static [Action] {
        match self {
            Action::Show => &[Action::Show, Action::Manage],
            Action::List => &[Action::List, Action::Manage],
            Action::Create => &[Action::Create, Action::Manage],
            Action::Update => &[Action::Update, Action::Manage],
            Action::Destroy => &[Action::Destroy, Action::Manage],
            Action::Manage => &[Action::Manage],
        }
    }

    /// Returns true if an ability for `self` satisfies a check for `other`.
    pub fn implies(self, other: Action) -> bool {
        other.candidates().contains(&self)
    }

    /// Lowercase name of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Show => "show",
            Action::List => "list",
            Action::Create => "create",
            Action::Update => "update",
            Action::Destroy => "destroy",
            Action::Manage => "manage",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses lowercase names case-insensitively. The `…Resource` spelling used
/// by older grant tables (`ManageResource`, `ShowResource`) is accepted too.
impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let name = value.trim().to_ascii_lowercase();
        let name = name.strip_suffix("resource").unwrap_or(&name);

        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == name)
            .ok_or_else(|| ParseActionError(value.to_string()))
    }
}

impl TryFrom<String> for Action {
    type Error = ParseActionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Action> for &'static str {
    fn from(value: Action) -> Self {
        value.as_str()
    }
}
