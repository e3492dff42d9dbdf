//! Form-level keybindings.

use crate::key::Binding;

/// Keybindings for form navigation.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Quit the form.
    pub quit: Binding,
    /// Input field keybindings.
    pub input: InputKeyMap,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyMap {
    /// Creates a new default keymap.
    pub fn new() -> Self {
        Self {
            quit: Binding::new().keys(&["ctrl+c"]),
            input: InputKeyMap::default(),
        }
    }
}

/// Keybindings for input fields, list fields included.
#[derive(Debug, Clone)]
pub struct InputKeyMap {
    /// Accept autocomplete suggestion.
    pub accept_suggestion: Binding,
    /// Go to next entry or field.
    pub next: Binding,
    /// Go to previous entry or field.
    pub prev: Binding,
    /// Submit the form.
    pub submit: Binding,
}

impl Default for InputKeyMap {
    fn default() -> Self {
        Self {
            accept_suggestion: Binding::new().keys(&["ctrl+e"]).help("ctrl+e", "complete"),
            prev: Binding::new()
                .keys(&["shift+tab"])
                .help("shift+tab", "back"),
            next: Binding::new().keys(&["enter", "tab"]).help("enter", "next"),
            submit: Binding::new().keys(&["enter"]).help("enter", "submit"),
        }
    }
}
