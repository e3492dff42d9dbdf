//! Log setup.
//!
//! The terminal belongs to the form, so logs only go to a file given with
//! `--log-file`. `LISTFORM_LOG` takes an `EnvFilter` directive and wins over
//! `-v`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "LISTFORM_LOG";

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber when a log file was requested.
pub fn init(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(cli.log_level()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("failed to install logger")?;

    Ok(())
}
