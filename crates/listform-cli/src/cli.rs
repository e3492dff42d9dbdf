//! Command-line interface for `listform`.
//!
//! ```bash
//! # Ask for a list, one value per output line
//! listform --title "Name some fruits" --placeholder apple
//!
//! # Require non-empty values of at most 12 characters, print JSON
//! listform --title Tags --required --max-length 12 --output json
//!
//! # Line-oriented prompts (also used automatically when stdin is piped)
//! printf 'apple\nbanana\n\n' | listform --accessible
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;

/// Prompt for a list of values in the terminal.
///
/// Enter a value and press enter to add another. Press enter on an empty
/// line to finish. The collected values are printed to stdout.
#[derive(Parser, Debug, Clone, Default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI flags are naturally bools"
)]
#[command(name = "listform", author, version, about)]
pub struct Cli {
    /// Title shown above the first entry
    #[arg(long, env = "LISTFORM_TITLE")]
    pub title: Option<String>,

    /// Description shown below the title
    #[arg(long, env = "LISTFORM_DESCRIPTION")]
    pub description: Option<String>,

    /// Placeholder shown in empty entries
    #[arg(long, env = "LISTFORM_PLACEHOLDER")]
    pub placeholder: Option<String>,

    /// Prompt rendered before each entry
    #[arg(long, env = "LISTFORM_PROMPT")]
    pub prompt: Option<String>,

    /// Maximum number of characters per entry (0 for no limit)
    #[arg(long)]
    pub char_limit: Option<usize>,

    /// Mask entries as they are typed
    #[arg(long)]
    pub password: bool,

    /// Render the title on the same line as the first entry
    #[arg(long)]
    pub inline: bool,

    /// Autocomplete suggestion (repeatable)
    #[arg(long = "suggestion", value_name = "TEXT")]
    pub suggestions: Vec<String>,

    /// Reject blank entries
    #[arg(long)]
    pub required: bool,

    /// Reject entries longer than this many characters
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Validate the empty last entry instead of treating it as "done"
    #[arg(long)]
    pub validate_empty: bool,

    /// Theme: charm, dracula, base16 or base
    #[arg(long, short = 't', env = "LISTFORM_THEME")]
    pub theme: Option<String>,

    /// Use line-oriented prompts instead of the interactive UI
    #[arg(long, env = "LISTFORM_ACCESSIBLE")]
    pub accessible: bool,

    /// Output format
    #[arg(long, short = 'o', value_enum)]
    pub output: Option<OutputFormat>,

    /// Keep trailing empty entries in the output
    #[arg(long)]
    pub keep_empty: bool,

    /// TOML file with default settings; flags override it
    #[arg(long, short = 'c', env = "LISTFORM_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long, env = "LISTFORM_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// How collected values are printed.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Lines,
    /// A JSON array of strings
    Json,
}

impl Cli {
    /// Default log directive for the verbosity count.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
