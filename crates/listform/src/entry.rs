//! Per-entry configuration for list fields.
//!
//! A list field owns one [`EntryTemplate`] and configures every entry from
//! it, including entries created while the user is typing. Changing the
//! template re-applies it to existing entries, so all entries always agree.

use serde::Deserialize;

use crate::key::Binding;
use crate::keymap::InputKeyMap;
use crate::textinput::{EchoMode, TextInput};

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_accept_suggestion() -> Binding {
    InputKeyMap::default().accept_suggestion
}

/// How every entry of a list field is configured.
///
/// Deserializable so the shape of a list can come from a config file:
///
/// ```rust
/// use listform::EntryTemplate;
///
/// let t: EntryTemplate = toml::from_str(r#"
///     prompt = "• "
///     char_limit = 20
///     suggestions = ["apple", "banana"]
/// "#).unwrap();
/// assert_eq!(t.prompt, "• ");
/// assert!(t.shows_suggestions());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EntryTemplate {
    /// Prompt rendered before each entry.
    pub prompt: String,
    /// Maximum characters per entry (0 = no limit).
    pub char_limit: usize,
    /// How typed characters are echoed.
    pub echo_mode: EchoMode,
    /// Placeholder shown in empty entries.
    pub placeholder: String,
    /// Autocomplete candidates offered in every entry.
    pub suggestions: Vec<String>,
    /// Binding that accepts the current suggestion.
    #[serde(skip, default = "default_accept_suggestion")]
    pub accept_suggestion: Binding,
    /// Display width of each entry (0 = unlimited).
    #[serde(skip)]
    pub width: usize,
}

impl Default for EntryTemplate {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            char_limit: 0,
            echo_mode: EchoMode::Normal,
            placeholder: String::new(),
            suggestions: Vec::new(),
            accept_suggestion: default_accept_suggestion(),
            width: 0,
        }
    }
}

impl EntryTemplate {
    /// Whether entries display and offer suggestions.
    pub fn shows_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Configure `input` from this template. The input's value is untouched.
    pub fn apply(&self, input: &mut TextInput) {
        input.set_prompt(self.prompt.clone());
        input.set_char_limit(self.char_limit);
        input.set_echo_mode(self.echo_mode);
        input.set_placeholder(self.placeholder.clone());
        input.show_suggestions = self.shows_suggestions();
        input.key_map.accept_suggestion = self
            .accept_suggestion
            .clone()
            .set_enabled(self.accept_suggestion.enabled() && self.shows_suggestions());
        input.set_suggestions(&self.suggestions);
        input.set_width(self.width);
    }

    /// Build a new, empty, blurred entry.
    pub fn build(&self) -> TextInput {
        let mut input = TextInput::new();
        self.apply(&mut input);
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        let t = EntryTemplate::default();
        assert_eq!(t.prompt, "> ");
        assert!(!t.shows_suggestions());
        assert!(t.accept_suggestion.enabled());
    }

    #[test]
    fn test_build_copies_every_setting() {
        let t = EntryTemplate {
            prompt: "* ".into(),
            char_limit: 3,
            echo_mode: EchoMode::Password,
            placeholder: "fruit".into(),
            suggestions: vec!["apple".into()],
            ..EntryTemplate::default()
        };
        let input = t.build();
        assert_eq!(input.prompt, "* ");
        assert_eq!(input.char_limit, 3);
        assert_eq!(input.echo_mode, EchoMode::Password);
        assert_eq!(input.placeholder, "fruit");
        assert!(input.show_suggestions);
        assert_eq!(input.available_suggestions(), vec!["apple"]);
        assert!(input.key_map.accept_suggestion.enabled());
        assert!(input.value().is_empty());
        assert!(!input.focused());
    }

    #[test]
    fn test_no_suggestions_disables_accept() {
        let input = EntryTemplate::default().build();
        assert!(!input.key_map.accept_suggestion.enabled());
        assert!(!input.show_suggestions);
    }

    #[test]
    fn test_apply_keeps_value() {
        let mut input = TextInput::new();
        input.set_value("abcdef");
        let t = EntryTemplate {
            char_limit: 4,
            ..EntryTemplate::default()
        };
        t.apply(&mut input);
        assert_eq!(input.value(), "abcd");
    }

    #[test]
    fn test_deserialize_echo_mode() {
        let t: EntryTemplate = toml::from_str(r#"echo_mode = "password""#).unwrap();
        assert_eq!(t.echo_mode, EchoMode::Password);
        assert_eq!(t.prompt, "> ");
    }
}
