use anyhow::Result;
use clap::Parser;
use oph_access::CanCli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = CanCli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let allowed = oph_access::run(&cli, &mut std::io::stdout().lock())?;
    if !allowed {
        std::process::exit(1);
    }
    Ok(())
}
