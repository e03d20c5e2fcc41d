use std::io;

use anyhow::Result;
use clap::Parser;
use tabletown_cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with the rendered table
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tabletown={log_level},tabletown_cli={log_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run(cli, stdin, &mut stdout)
}
