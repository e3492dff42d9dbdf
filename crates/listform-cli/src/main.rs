#![forbid(unsafe_code)]

//! # listform
//!
//! Prompt for a list of values in the terminal and print them.
//!
//! ## Usage
//!
//! ```bash
//! listform --title "Name some fruits"          # Interactive list entry
//! listform --suggestion apple --output json    # With autocomplete, JSON out
//! printf 'a\nb\n\n' | listform                 # Piped input: accessible mode
//! ```
//!
//! The form is drawn on stderr so stdout carries only the result. Exit
//! status is 130 when the user aborts with ctrl+c.

mod cli;
mod config;
mod logging;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use listform::{Form, FormState, ListValue, Program};
use tracing::{debug, info};

use cli::{Cli, OutputFormat};
use config::Config;

/// Exit status for a run the user cancelled.
const EXIT_ABORTED: u8 = 130;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(&cli)?;

    let config = Config::resolve(&cli)?;
    debug!(?config, "Resolved configuration");

    let binding = ListValue::new();
    let form = Form::new(vec![Box::new(config.build_field(binding.clone()))])
        .theme(config.theme()?);

    let accessible =
        config.accessible || !io::stdin().is_terminal() || !io::stderr().is_terminal();

    let state = if accessible {
        run_accessible(form)?
    } else {
        Program::new(form)
            .run_with_writer(io::stderr())
            .context("failed to run interactive form")?
            .state()
    };

    if state == FormState::Aborted {
        info!("Aborted by user");
        return Ok(ExitCode::from(EXIT_ABORTED));
    }

    let values = finish_values(binding.get(), config.keep_empty);
    info!(count = values.len(), "Collected values");
    write_values(&mut io::stdout().lock(), &values, config.output)?;
    Ok(ExitCode::SUCCESS)
}

fn run_accessible(mut form: Form) -> Result<FormState> {
    debug!("Running accessible mode");
    let mut stdin = io::stdin().lock();
    let mut stderr = io::stderr().lock();
    form.run_accessible(&mut stdin, &mut stderr)
        .context("failed to read values")?;
    Ok(form.state())
}

/// Drop trailing empty entries unless asked to keep them.
fn finish_values(mut values: Vec<String>, keep_empty: bool) -> Vec<String> {
    if !keep_empty {
        while values.last().is_some_and(String::is_empty) {
            values.pop();
        }
    }
    values
}

fn write_values(out: &mut impl Write, values: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Lines => {
            for value in values {
                writeln!(out, "{value}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, values).context("failed to encode values")?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
