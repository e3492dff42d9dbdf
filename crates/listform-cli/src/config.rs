//! Resolved settings for a `listform` run.
//!
//! Settings come from an optional TOML file and the command line, with
//! flags taking precedence. Entry settings live in an `[entry]` table:
//!
//! ```toml
//! title = "Name some fruits"
//! required = true
//! theme = "dracula"
//! output = "json"
//!
//! [entry]
//! prompt = "• "
//! placeholder = "apple"
//! suggestions = ["apple", "apricot", "banana"]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use listform::{
    EchoMode, EmptyTail, EntryTemplate, ListInput, ListValue, THEME_NAMES, Theme, Validator,
    theme_by_name, validate_all, validate_max_length, validate_required,
};
use serde::Deserialize;

use crate::cli::{Cli, OutputFormat};

/// Everything a run needs, independent of where it was specified.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Config naturally has boolean flags"
)]
pub struct Config {
    /// Title shown above the first entry.
    pub title: String,
    /// Description shown below the title.
    pub description: String,
    /// Render title and description on the entry line.
    pub inline: bool,
    /// Reject blank entries.
    pub required: bool,
    /// Reject entries longer than this many characters.
    pub max_length: Option<usize>,
    /// Validate the empty last entry instead of finishing on it.
    pub validate_empty: bool,
    /// Theme name.
    pub theme: String,
    /// Force line-oriented prompts.
    pub accessible: bool,
    /// Output format.
    pub output: OutputFormat,
    /// Keep trailing empty entries in the output.
    pub keep_empty: bool,
    /// Per-entry settings.
    pub entry: EntryTemplate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            inline: false,
            required: false,
            max_length: None,
            validate_empty: false,
            theme: "charm".to_string(),
            accessible: false,
            output: OutputFormat::default(),
            keep_empty: false,
            entry: EntryTemplate::default(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid config")
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in config file {}", path.display()))
    }

    /// Resolve settings from the config file named by `cli` (if any) and
    /// the flags themselves.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.theme()?;
        Ok(config)
    }

    /// Overlay command-line flags. Flags that are not given leave the
    /// current value alone.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(title) = &cli.title {
            self.title.clone_from(title);
        }
        if let Some(description) = &cli.description {
            self.description.clone_from(description);
        }
        if let Some(placeholder) = &cli.placeholder {
            self.entry.placeholder.clone_from(placeholder);
        }
        if let Some(prompt) = &cli.prompt {
            self.entry.prompt.clone_from(prompt);
        }
        if let Some(limit) = cli.char_limit {
            self.entry.char_limit = limit;
        }
        if cli.password {
            self.entry.echo_mode = EchoMode::Password;
        }
        if !cli.suggestions.is_empty() {
            self.entry.suggestions.clone_from(&cli.suggestions);
        }
        if let Some(max) = cli.max_length {
            self.max_length = Some(max);
        }
        if let Some(theme) = &cli.theme {
            self.theme.clone_from(theme);
        }
        if let Some(output) = cli.output {
            self.output = output;
        }
        self.inline |= cli.inline;
        self.required |= cli.required;
        self.validate_empty |= cli.validate_empty;
        self.accessible |= cli.accessible;
        self.keep_empty |= cli.keep_empty;
    }

    /// The selected theme.
    pub fn theme(&self) -> Result<Theme> {
        theme_by_name(&self.theme).ok_or_else(|| {
            anyhow!(
                "unknown theme {:?} (expected one of: {})",
                self.theme,
                THEME_NAMES.join(", ")
            )
        })
    }

    fn validator(&self) -> Validator {
        let mut validators = Vec::new();
        if self.required {
            validators.push(validate_required());
        }
        if let Some(max) = self.max_length {
            validators.push(validate_max_length(max));
        }
        validate_all(validators)
    }

    /// Build the list field, bound to `binding`.
    pub fn build_field(&self, binding: ListValue) -> ListInput {
        let empty_tail = if self.validate_empty {
            EmptyTail::Validate
        } else {
            EmptyTail::Finish
        };
        ListInput::with_template(self.entry.clone())
            .key("values")
            .title(self.title.clone())
            .description(self.description.clone())
            .inline(self.inline)
            .validate_with(self.validator())
            .empty_tail(empty_tail)
            .value(binding)
    }
}
