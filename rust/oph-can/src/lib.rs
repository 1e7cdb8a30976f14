//! Role and ownership based authorization.
//!
//! This crate decides, for every protected operation, whether an actor may
//! perform an [`Action`] on a resource. Grants are registered once as
//! [`Ability`] values in a [`Registry`], and request handling code asks the
//! registry to [`check`](Registry::check) each operation before doing it.
//!
//! # Quick Example
//!
//! ```rust
//! use oph_can::{Action, Registry, Resource, Role, Subject, UserId};
//!
//! struct User { id: UserId, role: Role }
//!
//! impl Subject for User {
//!     fn role_id(&self) -> Role { self.role }
//!     fn user_id(&self) -> UserId { self.id }
//! }
//!
//! struct Page { owner: UserId }
//!
//! impl Resource for Page {
//!     fn resource_id(&self) -> &str { "pages" }
//!     fn owned_by(&self, user: UserId) -> bool { user == self.owner }
//! }
//!
//! const EDITOR: Role = Role(10);
//!
//! let registry = Registry::new();
//!
//! // Editors manage their own pages and may read everybody's.
//! registry.authorise_owner(EDITOR, Action::Manage, "pages");
//! registry.authorise(EDITOR, Action::Show, "pages");
//!
//! let editor = User { id: 2, role: EDITOR };
//! let own = Page { owner: 2 };
//! let other = Page { owner: 1 };
//!
//! // Manage implies every narrower action.
//! assert!(registry.update(&own, Some(&editor)).is_ok());
//! assert!(registry.update(&other, Some(&editor)).is_err());
//! assert!(registry.show(&other, Some(&editor)).is_ok());
//!
//! // Anonymous callers never get through.
//! assert!(registry.show(&own, None).is_err());
//! ```
//!
//! # Core Concepts
//!
//! ## Subjects and Resources
//!
//! The engine knows nothing about users or records. Callers implement two
//! small traits instead:
//!
//! - [`Subject`] exposes the actor's [`Role`] and [`UserId`].
//! - [`Resource`] exposes a resource type identifier (shared by every
//!   instance of that type, e.g. a table name) and an ownership predicate
//!   for the specific instance.
//!
//! ## Abilities
//!
//! An [`Ability`] says that a role may perform an action on resources whose
//! type matches a [`ResourceScope`]. The scope is either one resource type
//! or [`ResourceScope::Anything`]. An ability may be restricted to owners, in
//! which case it only grants access when the resource is owned by the acting
//! user.
//!
//! Abilities are additive: there are no deny rules, and a check allows as
//! soon as any registered ability grants it. Roles are independent keys, so
//! no role inherits another role's abilities.
//!
//! ## Action implication
//!
//! [`Action::Manage`] is the broad grant. Holding `Manage` on a resource type
//! satisfies a check for any action on that type, while the narrow actions
//! never imply one another or `Manage`. See [`Action::candidates`].
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Registry`] | Stores abilities and evaluates checks |
//! | [`Ability`] | One granted rule |
//! | [`Action`] | Operation being authorized |
//! | [`ResourceScope`] | Resource type or wildcard an ability covers |
//! | [`NotAuthorized`] | The only error a check produces |

mod error;
pub use error::*;

mod role;
pub use role::*;

mod action;
pub use action::*;

mod scope;
pub use scope::*;

mod subject;
pub use subject::*;

mod ability;
pub use ability::*;

mod registry;
pub use registry::*;

mod check;
