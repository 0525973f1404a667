//! Command handling for the `wirestamp` binary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use wirestamp_dbconfig::DatabaseConfig;
use wirestamp_types::{DECODE_FORMATS, Timestamp, decode_with};

#[derive(Parser, Debug)]
#[command(name = "wirestamp")]
#[command(about = "Inspect wire timestamps and database settings")]
pub struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the current time in wire and display form
    Now,

    /// Decode a timestamp and show how it normalises
    Parse {
        /// Unquoted timestamp text, e.g. 2018-11-18T09:04:23-08:00
        text: String,
    },

    /// Load a database TOML file and print it with credentials masked
    Config {
        /// Path to the TOML file
        path: PathBuf,
    },
}

/// Executes `cli.command`, writing the report to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Now => write_timestamp(out, Timestamp::now()),
        Command::Parse { text } => {
            let decoded = decode_with(DECODE_FORMATS, text)?;
            debug!(format = decoded.format, "Decoded input");
            let ts = Timestamp::Set(decoded.instant);
            write_timestamp(out, ts)?;
            writeln!(out, "offset:  {}", decoded.instant.offset())?;
            writeln!(out, "format:  {}", decoded.format)?;
            Ok(())
        }
        Command::Config { path } => {
            let config = DatabaseConfig::load_from(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            let backend = config.backend()?;
            writeln!(out, "backend: {}", backend.name())?;
            writeln!(out, "{}", config.to_masked_json()?)?;
            Ok(())
        }
    }
}

fn write_timestamp(out: &mut impl Write, ts: Timestamp) -> Result<()> {
    writeln!(out, "json:    {}", serde_json::to_string(&ts)?)?;
    writeln!(out, "display: {ts}")?;
    Ok(())
}
