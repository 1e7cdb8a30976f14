use crate::records::{PRODUCTS, SUBSCRIPTIONS, USERS};
use crate::roles::{ADMIN, ANON, READER};
use oph_can::{Action, Registry, ResourceScope};

/// Register the abilities of every application role.
///
/// Called once while the application is assembled, before requests are
/// served.
pub fn setup_authorisation(registry: &Registry) {
    // Admins are allowed to manage all resources
    registry.authorise(ADMIN, Action::Manage, ResourceScope::Anything);

    // Readers may edit their own user
    registry.authorise_owner(READER, Action::Update, USERS);

    // Readers may add products and edit their own products
    registry.authorise(READER, Action::Create, PRODUCTS);
    registry.authorise_owner(READER, Action::Update, PRODUCTS);

    // Readers may add subscriptions and edit their own subscriptions
    registry.authorise(READER, Action::Create, SUBSCRIPTIONS);
    registry.authorise_owner(READER, Action::Update, SUBSCRIPTIONS);

    // Anon may create users; a user being signed up is still owned by id 0
    registry.authorise_owner(ANON, Action::Create, USERS);

    tracing::info!(abilities = registry.len(), "Authorisation configured");
}
