use crate::{Role, UserId};
use std::rc::Rc;
use std::sync::Arc;

/// An authenticated actor a check is made for.
///
/// Implemented by the application's user record. Anonymous callers are
/// represented by passing no subject at all, or by a subject whose role only
/// holds the abilities granted to anonymous users.
pub trait Subject {
    /// Role whose abilities apply to this actor.
    fn role_id(&self) -> Role;

    /// Identifier handed to [`Resource::owned_by`] for owner-only abilities.
    fn user_id(&self) -> UserId;
}

/// A resource instance a check is made against.
pub trait Resource {
    /// Identifier of the resource *type*, matched against ability scopes.
    ///
    /// Every instance of a type returns the same value (typically the table
    /// name); it is not a per-instance key.
    fn resource_id(&self) -> &str;

    /// Returns true if this instance is owned by `user`.
    fn owned_by(&self, user: UserId) -> bool;
}

macro_rules! forward {
    ($($pointer:ident),*) => {
        $(
            impl<T: Subject + ?Sized> Subject for $pointer<T> {
                fn role_id(&self) -> Role {
                    (**self).role_id()
                }

                fn user_id(&self) -> UserId {
                    (**self).user_id()
                }
            }

            impl<T: Resource + ?Sized> Resource for $pointer<T> {
                fn resource_id(&self) -> &str {
                    (**self).resource_id()
                }

                fn owned_by(&self, user: UserId) -> bool {
                    (**self).owned_by(user)
                }
            }
        )*
    };
}

forward!(Box, Rc, Arc);

impl<T: Subject + ?Sized> Subject for &T {
    fn role_id(&self) -> Role {
        (**self).role_id()
    }

    fn user_id(&self) -> UserId {
        (**self).user_id()
    }
}

impl<T: Resource + ?Sized> Resource for &T {
    fn resource_id(&self) -> &str {
        (**self).resource_id()
    }

    fn owned_by(&self, user: UserId) -> bool {
        (**self).owned_by(user)
    }
}
