use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use oph_can::{Action, NotAuthorized, Registry, Resource, Role, Subject, UserId};

use crate::records::User;
use crate::roles::parse_role;
use crate::{PolicyDocument, PolicyError, setup_authorisation};

#[derive(Debug, Parser)]
#[command(name = "can")]
#[command(bin_name = "can")]
#[command(about = "Inspect and evaluate open payment host grants", long_about = None)]
pub struct CanCli {
    /// Policy document to use instead of the built-in grant table.
    #[arg(long, env = "OPH_POLICY", global = true)]
    pub policy: Option<PathBuf>,

    /// Log registrations and decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CanCommand,
}

#[derive(Debug, Subcommand)]
pub enum CanCommand {
    /// Decide whether one operation is allowed.
    Check(CheckArgs),
    /// Print every registered ability.
    List,
    /// Print the active grants as a policy document.
    Export,
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Role name or number of the acting user.
    #[arg(long, required_unless_present = "anonymous", value_parser = parse_role_arg)]
    pub role: Option<Role>,

    /// Id of the acting user.
    #[arg(long, default_value_t = 0)]
    pub user: UserId,

    #[arg(long)]
    pub action: Action,

    /// Resource type, e.g. `products`.
    #[arg(long)]
    pub resource: String,

    /// Owner of the resource instance. Unowned when omitted.
    #[arg(long)]
    pub owner: Option<UserId>,

    /// Check without any subject.
    #[arg(long, conflicts_with = "role")]
    pub anonymous: bool,
}

fn parse_role_arg(value: &str) -> Result<Role, String> {
    parse_role(value).ok_or_else(|| format!("unknown role '{value}'"))
}

/// Resource instance described on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub resource_type: String,
    pub owner: Option<UserId>,
}

impl Resource for Probe {
    fn resource_id(&self) -> &str {
        &self.resource_type
    }

    fn owned_by(&self, user: UserId) -> bool {
        self.owner == Some(user)
    }
}

impl CheckArgs {
    /// Evaluate this check against `registry`.
    pub fn evaluate(&self, registry: &Registry) -> Result<(), NotAuthorized> {
        let probe = Probe {
            resource_type: self.resource.clone(),
            owner: self.owner,
        };
        let user = self
            .role
            .filter(|_| !self.anonymous)
            .map(|role| User::new(self.user, role));

        registry.check(
            self.action,
            &probe,
            user.as_ref().map(|user| user as &dyn Subject),
        )
    }
}

/// Build a registry from the policy at `policy`, or from the built-in grant
/// table when there is none.
pub fn load_registry(policy: Option<&Path>) -> Result<Registry, PolicyError> {
    let registry = Registry::new();
    match policy {
        Some(path) => {
            PolicyDocument::load(path)?.apply(&registry)?;
        }
        None => setup_authorisation(&registry),
    }
    Ok(registry)
}

/// Run `cli`, writing results to `out`.
///
/// Returns false when a check was denied.
pub fn run(cli: &CanCli, out: &mut impl Write) -> anyhow::Result<bool> {
    let registry = load_registry(cli.policy.as_deref())?;

    match &cli.command {
        CanCommand::Check(check) => match check.evaluate(&registry) {
            Ok(()) => {
                writeln!(out, "allowed")?;
                Ok(true)
            }
            Err(denied) => {
                writeln!(out, "{denied}")?;
                Ok(false)
            }
        },
        CanCommand::List => {
            for ability in registry.abilities() {
                writeln!(out, "{ability}")?;
            }
            Ok(true)
        }
        CanCommand::Export => {
            let document = PolicyDocument::from_abilities(&registry.abilities());
            writeln!(out, "{}", document.to_json()?)?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::READER;
    use oph_can::Denial;

    fn check(arguments: &[&str]) -> CheckArgs {
        let cli = CanCli::try_parse_from(
            ["can", "check"].iter().chain(arguments.iter()).copied(),
        )
        .expect("valid arguments");
        match cli.command {
            CanCommand::Check(check) => check,
            command => panic!("unexpected command {command:?}"),
        }
    }

    #[test]
    fn it_parses_role_names() {
        let args = check(&["--role", "reader", "--action", "update", "--resource", "products"]);

        assert_eq!(args.role, Some(READER));
        assert_eq!(args.action, Action::Update);
        assert_eq!(args.user, 0);
        assert_eq!(args.owner, None);
    }

    #[test]
    fn it_requires_role_or_anonymous() {
        let result =
            CanCli::try_parse_from(["can", "check", "--action", "show", "--resource", "products"]);

        assert!(result.is_err());
    }

    #[test]
    fn it_rejects_unknown_roles() {
        let result = CanCli::try_parse_from([
            "can", "check", "--role", "owner", "--action", "show", "--resource", "products",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn it_evaluates_ownership_of_the_probe() {
        let registry = load_registry(None).expect("built-in grants");
        let own = check(&[
            "--role", "reader", "--user", "5", "--owner", "5", "--action", "update", "--resource",
            "products",
        ]);
        let foreign = CheckArgs {
            owner: Some(6),
            ..own.clone()
        };

        assert!(own.evaluate(&registry).is_ok());
        assert_eq!(
            foreign.evaluate(&registry).unwrap_err().reason,
            Denial::NoAbility { role: READER }
        );
    }

    #[test]
    fn it_evaluates_anonymous_checks_without_subject() {
        let registry = load_registry(None).expect("built-in grants");
        let args = check(&["--anonymous", "--action", "create", "--resource", "users"]);

        assert_eq!(
            args.evaluate(&registry).unwrap_err().reason,
            Denial::NoSubject
        );
    }
}
