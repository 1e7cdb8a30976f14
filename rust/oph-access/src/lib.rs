//! # Open Payment Host access rules
//!
//! Application side of authorisation: the roles accounts can hold, the
//! records checks are made against, and the grant table registered when the
//! application starts.
//!
//! ```rust
//! use oph_access::records::{Product, User};
//! use oph_access::roles::READER;
//! use oph_access::setup_authorisation;
//! use oph_can::Registry;
//!
//! let registry = Registry::new();
//! setup_authorisation(&registry);
//!
//! let seller = User::new(5, READER);
//! let listing = Product { id: 1, user_id: 5 };
//!
//! assert!(registry.update(&listing, Some(&seller)).is_ok());
//! assert!(registry.destroy(&listing, Some(&seller)).is_err());
//! ```
//!
//! Grants can also be supplied as a JSON [`PolicyDocument`].
//!
//! ## Usage
//!
//! The `can` binary evaluates checks against the built-in table or a policy
//! document given with `--policy` (or `OPH_POLICY`):
//!
//! ```bash
//! cargo run --bin can -- check --role reader --user 5 --owner 5 --action update --resource products
//! cargo run --bin can -- --policy grants.json list
//! cargo run --bin can -- export
//! ```

pub mod records;
pub mod roles;

mod setup;
pub use setup::*;

mod policy;
pub use policy::*;

mod cli;
pub use cli::*;
