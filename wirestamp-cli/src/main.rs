//! wirestamp inspection tool
//!
//! Usage:
//!   wirestamp now
//!   wirestamp parse 2018-12-14T20:36:58.789Z
//!   wirestamp config database.toml
//!
//! Handy for checking what another producer's timestamp decodes to, and for
//! confirming a config file loads without printing its password.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use wirestamp_cli::{Cli, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}
