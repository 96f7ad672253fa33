//! `gpgfind` entry point.

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gpgfind_cli::{Cli, handlers};
use gpgfind_core::probe::SystemEnv;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = handlers::finder_config(&cli, &SystemEnv);
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = handlers::run(&cli, &config, &mut stdout) {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }

    stdout.flush()?;
    Ok(())
}
