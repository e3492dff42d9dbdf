//! Keyboard input and keybindings.
//!
//! [`KeyMsg`] is what the form delivers to fields. A key renders to a
//! canonical string (`"enter"`, `"shift+tab"`, `"a"`, `"alt+left"`) through
//! its `Display` impl, and [`Binding`]s match against that string.

use std::fmt;

/// Keyboard key event message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The type of key pressed.
    pub key_type: KeyType,
    /// For [`KeyType::Runes`], the characters typed.
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
    /// Whether this came from a bracketed paste.
    pub paste: bool,
}

impl KeyMsg {
    /// Create a new key message from a key type.
    pub fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
            paste: false,
        }
    }

    /// Create a new key message from a character.
    pub fn from_char(c: char) -> Self {
        Self::from_runes(vec![c])
    }

    /// Create a new key message from multiple characters.
    pub fn from_runes(runes: Vec<char>) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes,
            alt: false,
            paste: false,
        }
    }

    /// Set the alt modifier.
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Set the paste flag.
    pub fn with_paste(mut self) -> Self {
        self.paste = true;
        self
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.key_type == KeyType::Runes {
            if self.paste {
                write!(f, "[")?;
            }
            for c in &self.runes {
                write!(f, "{c}")?;
            }
            if self.paste {
                write!(f, "]")?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.key_type)
        }
    }
}

/// The keys the form and its inputs distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Regular character(s) input.
    Runes,
    /// Enter / carriage return.
    Enter,
    /// Tab.
    Tab,
    /// Shift+Tab.
    ShiftTab,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// Delete key.
    Delete,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Ctrl+Left.
    CtrlLeft,
    /// Ctrl+Right.
    CtrlRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PgUp,
    /// Page Down.
    PgDown,
    /// Ctrl+A.
    CtrlA,
    /// Ctrl+B.
    CtrlB,
    /// Ctrl+C.
    CtrlC,
    /// Ctrl+D.
    CtrlD,
    /// Ctrl+E.
    CtrlE,
    /// Ctrl+F.
    CtrlF,
    /// Ctrl+H.
    CtrlH,
    /// Ctrl+J.
    CtrlJ,
    /// Ctrl+K.
    CtrlK,
    /// Ctrl+N.
    CtrlN,
    /// Ctrl+P.
    CtrlP,
    /// Ctrl+U.
    CtrlU,
    /// Ctrl+W.
    CtrlW,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyType::Runes => "runes",
            KeyType::Enter => "enter",
            KeyType::Tab => "tab",
            KeyType::ShiftTab => "shift+tab",
            KeyType::Esc => "esc",
            KeyType::Backspace => "backspace",
            KeyType::Delete => "delete",
            KeyType::Up => "up",
            KeyType::Down => "down",
            KeyType::Left => "left",
            KeyType::Right => "right",
            KeyType::CtrlLeft => "ctrl+left",
            KeyType::CtrlRight => "ctrl+right",
            KeyType::Home => "home",
            KeyType::End => "end",
            KeyType::PgUp => "pgup",
            KeyType::PgDown => "pgdown",
            KeyType::CtrlA => "ctrl+a",
            KeyType::CtrlB => "ctrl+b",
            KeyType::CtrlC => "ctrl+c",
            KeyType::CtrlD => "ctrl+d",
            KeyType::CtrlE => "ctrl+e",
            KeyType::CtrlF => "ctrl+f",
            KeyType::CtrlH => "ctrl+h",
            KeyType::CtrlJ => "ctrl+j",
            KeyType::CtrlK => "ctrl+k",
            KeyType::CtrlN => "ctrl+n",
            KeyType::CtrlP => "ctrl+p",
            KeyType::CtrlU => "ctrl+u",
            KeyType::CtrlW => "ctrl+w",
        };
        f.write_str(name)
    }
}

/// Convert a crossterm key event into a [`KeyMsg`].
///
/// Returns `None` for keys the form has no use for (function keys, media
/// keys, unmapped control chords).
pub fn from_crossterm_key(
    code: crossterm::event::KeyCode,
    modifiers: crossterm::event::KeyModifiers,
) -> Option<KeyMsg> {
    use crossterm::event::{KeyCode, KeyModifiers};

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let key_type = match code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'a' => KeyType::CtrlA,
            'b' => KeyType::CtrlB,
            'c' => KeyType::CtrlC,
            'd' => KeyType::CtrlD,
            'e' => KeyType::CtrlE,
            'f' => KeyType::CtrlF,
            'h' => KeyType::CtrlH,
            'i' => KeyType::Tab,
            'j' => KeyType::CtrlJ,
            'k' => KeyType::CtrlK,
            'm' => KeyType::Enter,
            'n' => KeyType::CtrlN,
            'p' => KeyType::CtrlP,
            'u' => KeyType::CtrlU,
            'w' => KeyType::CtrlW,
            _ => return None,
        },
        KeyCode::Char(c) => {
            let mut key = KeyMsg::from_char(c);
            key.alt = alt;
            return Some(key);
        }
        KeyCode::Enter => KeyType::Enter,
        KeyCode::Backspace => KeyType::Backspace,
        KeyCode::BackTab => KeyType::ShiftTab,
        KeyCode::Tab if shift => KeyType::ShiftTab,
        KeyCode::Tab => KeyType::Tab,
        KeyCode::Esc => KeyType::Esc,
        KeyCode::Delete => KeyType::Delete,
        KeyCode::Up => KeyType::Up,
        KeyCode::Down => KeyType::Down,
        KeyCode::Left if ctrl => KeyType::CtrlLeft,
        KeyCode::Left => KeyType::Left,
        KeyCode::Right if ctrl => KeyType::CtrlRight,
        KeyCode::Right => KeyType::Right,
        KeyCode::Home => KeyType::Home,
        KeyCode::End => KeyType::End,
        KeyCode::PageUp => KeyType::PgUp,
        KeyCode::PageDown => KeyType::PgDown,
        _ => return None,
    };

    Some(KeyMsg {
        key_type,
        runes: Vec::new(),
        alt,
        paste: false,
    })
}

/// Help information for a keybinding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key(s) to display in help text (e.g., "shift+tab").
    pub key: String,
    /// Description of what the binding does.
    pub desc: String,
}

impl Help {
    /// Creates new help information.
    #[must_use]
    pub fn new(key: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            desc: desc.into(),
        }
    }
}

/// A keybinding with associated help text.
///
/// A binding is enabled when it has at least one key and was not disabled.
///
/// ```rust
/// use listform::{Binding, KeyMsg, KeyType};
///
/// let next = Binding::new().keys(&["enter", "tab"]).help("enter", "next");
/// assert!(next.matches(&KeyMsg::from_type(KeyType::Tab)));
/// assert!(!next.clone().set_enabled(false).matches(&KeyMsg::from_type(KeyType::Tab)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    keys: Vec<String>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a new empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys for this binding.
    #[must_use]
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|&s| s.to_string()).collect();
        self
    }

    /// Sets the help text for this binding.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help::new(key, desc);
        self
    }

    /// Returns the keys for this binding.
    #[must_use]
    pub fn get_keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the help information for this binding.
    #[must_use]
    pub fn get_help(&self) -> &Help {
        &self.help
    }

    /// Returns whether this binding is enabled.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding (mutable version).
    pub fn enable(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Enables or disables the binding (builder version).
    #[must_use]
    pub fn set_enabled(mut self, enabled: bool) -> Self {
        self.disabled = !enabled;
        self
    }

    /// Whether `key` is one of this binding's keys, ignoring enablement.
    #[must_use]
    pub fn has_key(&self, key: &KeyMsg) -> bool {
        let key = key.to_string();
        self.keys.iter().any(|k| *k == key)
    }

    /// Whether this binding is enabled and `key` is one of its keys.
    #[must_use]
    pub fn matches(&self, key: &KeyMsg) -> bool {
        self.enabled() && self.has_key(key)
    }
}

/// Checks if the key matches any of the given bindings.
pub fn matches(key: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(key))
}
