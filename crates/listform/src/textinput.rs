//! Single-line text input.
//!
//! Every entry of a [`ListInput`](crate::ListInput) is one of these. The
//! input handles its own editing keys (cursor movement, deletion, word
//! motions, suggestions) and leaves navigation keys to its owner.
//!
//! # Example
//!
//! ```rust
//! use listform::{KeyMsg, Message, TextInput};
//!
//! let mut input = TextInput::new();
//! input.set_placeholder("apple");
//! input.focus();
//! input.update(&Message::new(KeyMsg::from_runes("kiwi".chars().collect())));
//! assert_eq!(input.value(), "kiwi");
//! ```

use crate::key::{Binding, KeyMsg};
use crate::message::Message;
use crate::style::Style;
use serde::Deserialize;
use unicode_width::UnicodeWidthChar;

/// Echo mode for the text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EchoMode {
    /// Display text as-is (default).
    #[default]
    Normal,
    /// Display echo character instead of actual text (for passwords).
    Password,
    /// Display nothing (hidden input).
    None,
}

/// Key bindings for editing within a text input.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move cursor forward one character.
    pub character_forward: Binding,
    /// Move cursor backward one character.
    pub character_backward: Binding,
    /// Move cursor forward one word.
    pub word_forward: Binding,
    /// Move cursor backward one word.
    pub word_backward: Binding,
    /// Delete word backward.
    pub delete_word_backward: Binding,
    /// Delete text after cursor.
    pub delete_after_cursor: Binding,
    /// Delete text before cursor.
    pub delete_before_cursor: Binding,
    /// Delete character backward.
    pub delete_character_backward: Binding,
    /// Delete character forward.
    pub delete_character_forward: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
    /// Accept current suggestion.
    pub accept_suggestion: Binding,
    /// Next suggestion.
    pub next_suggestion: Binding,
    /// Previous suggestion.
    pub prev_suggestion: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            character_forward: Binding::new().keys(&["right", "ctrl+f"]),
            character_backward: Binding::new().keys(&["left", "ctrl+b"]),
            word_forward: Binding::new().keys(&["alt+right", "ctrl+right", "alt+f"]),
            word_backward: Binding::new().keys(&["alt+left", "ctrl+left", "alt+b"]),
            delete_word_backward: Binding::new().keys(&["alt+backspace", "ctrl+w"]),
            delete_after_cursor: Binding::new().keys(&["ctrl+k"]),
            delete_before_cursor: Binding::new().keys(&["ctrl+u"]),
            delete_character_backward: Binding::new().keys(&["backspace", "ctrl+h"]),
            delete_character_forward: Binding::new().keys(&["delete", "ctrl+d"]),
            line_start: Binding::new().keys(&["home", "ctrl+a"]),
            line_end: Binding::new().keys(&["end", "ctrl+e"]),
            accept_suggestion: Binding::new().keys(&["tab"]),
            next_suggestion: Binding::new().keys(&["down", "ctrl+n"]),
            prev_suggestion: Binding::new().keys(&["up", "ctrl+p"]),
        }
    }
}

/// Replace tabs and newlines with spaces and drop other control characters.
fn sanitize(runes: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(runes.len());
    let mut iter = runes.iter().peekable();
    while let Some(&r) = iter.next() {
        match r {
            '\u{FFFD}' => {}
            '\r' => {
                if iter.peek() == Some(&&'\n') {
                    continue;
                }
                out.push(' ');
            }
            '\n' | '\t' => out.push(' '),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

fn display_width(runes: &[char]) -> usize {
    runes.iter().map(|c| c.width().unwrap_or(0)).sum()
}

/// Single-line text input model.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Prompt displayed before input.
    pub prompt: String,
    /// Placeholder text when empty.
    pub placeholder: String,
    /// Echo mode (normal, password, none).
    pub echo_mode: EchoMode,
    /// Character to display in password mode.
    pub echo_character: char,
    /// Style for the character under the cursor.
    pub cursor_style: Style,
    /// Style for the prompt.
    pub prompt_style: Style,
    /// Style for the text.
    pub text_style: Style,
    /// Style for the placeholder.
    pub placeholder_style: Style,
    /// Style for the untyped part of a suggestion.
    pub completion_style: Style,
    /// Maximum characters allowed (0 = no limit).
    pub char_limit: usize,
    /// Maximum display width (0 = no limit).
    pub width: usize,
    /// Key bindings.
    pub key_map: KeyMap,
    /// Whether to show suggestions.
    pub show_suggestions: bool,
    value: Vec<char>,
    focus: bool,
    pos: usize,
    offset: usize,
    offset_right: usize,
    suggestions: Vec<Vec<char>>,
    matched_suggestions: Vec<Vec<char>>,
    current_suggestion_index: usize,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    /// Creates a new text input with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prompt: "> ".to_string(),
            placeholder: String::new(),
            echo_mode: EchoMode::Normal,
            echo_character: '*',
            cursor_style: Style::new(),
            prompt_style: Style::new(),
            text_style: Style::new(),
            placeholder_style: Style::new().foreground("240"),
            completion_style: Style::new().foreground("240"),
            char_limit: 0,
            width: 0,
            key_map: KeyMap::default(),
            show_suggestions: false,
            value: Vec::new(),
            focus: false,
            pos: 0,
            offset: 0,
            offset_right: 0,
            suggestions: Vec::new(),
            matched_suggestions: Vec::new(),
            current_suggestion_index: 0,
        }
    }

    /// Sets the prompt string.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Sets the echo mode.
    pub fn set_echo_mode(&mut self, mode: EchoMode) {
        self.echo_mode = mode;
    }

    /// Sets the character limit and truncates the current value to fit.
    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit;
        if limit > 0 && self.value.len() > limit {
            self.value.truncate(limit);
            self.set_cursor(self.pos);
            self.update_suggestions();
        }
    }

    /// Sets the display width (0 = unlimited).
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.handle_overflow();
    }

    /// Sets the value of the text input.
    pub fn set_value(&mut self, s: &str) {
        let runes = sanitize(&s.chars().collect::<Vec<_>>());
        self.set_value_internal(runes);
    }

    fn set_value_internal(&mut self, runes: Vec<char>) {
        let empty = self.value.is_empty();

        if self.char_limit > 0 && runes.len() > self.char_limit {
            self.value = runes[..self.char_limit].to_vec();
        } else {
            self.value = runes;
        }

        if (self.pos == 0 && empty) || self.pos > self.value.len() {
            self.set_cursor(self.value.len());
        }
        self.handle_overflow();
        self.update_suggestions();
    }

    /// Returns the current value as a string.
    #[must_use]
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Returns the cursor position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Sets the cursor position.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    /// Moves cursor to start of input.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves cursor to end of input.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Returns whether the input is focused.
    #[must_use]
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Focuses the input.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Blurs the input.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Resets the input to empty.
    pub fn reset(&mut self) {
        self.value.clear();
        self.set_cursor(0);
        self.update_suggestions();
    }

    /// Sets the suggestions list.
    pub fn set_suggestions(&mut self, suggestions: &[String]) {
        self.suggestions = suggestions.iter().map(|s| s.chars().collect()).collect();
        self.update_suggestions();
    }

    /// Returns available suggestions as strings.
    #[must_use]
    pub fn available_suggestions(&self) -> Vec<String> {
        self.suggestions
            .iter()
            .map(|s| s.iter().collect())
            .collect()
    }

    /// Returns matched suggestions as strings.
    #[must_use]
    pub fn matched_suggestions(&self) -> Vec<String> {
        self.matched_suggestions
            .iter()
            .map(|s| s.iter().collect())
            .collect()
    }

    /// Returns the current suggestion.
    #[must_use]
    pub fn current_suggestion(&self) -> String {
        self.matched_suggestions
            .get(self.current_suggestion_index)
            .map(|s| s.iter().collect())
            .unwrap_or_default()
    }

    fn insert_runes_from_user_input(&mut self, v: &[char]) {
        let paste = sanitize(v);

        let available = if self.char_limit > 0 {
            let avail = self.char_limit.saturating_sub(self.value.len());
            if avail == 0 {
                return;
            }
            avail
        } else {
            usize::MAX
        };
        let paste = &paste[..paste.len().min(available)];

        let mut new_value = self.value[..self.pos].to_vec();
        new_value.extend_from_slice(paste);
        new_value.extend_from_slice(&self.value[self.pos..]);
        self.pos += paste.len();

        self.set_value_internal(new_value);
    }

    fn handle_overflow(&mut self) {
        if self.width == 0 || display_width(&self.value) <= self.width {
            self.offset = 0;
            self.offset_right = self.value.len();
            return;
        }

        self.offset_right = self.offset_right.min(self.value.len());

        if self.pos < self.offset {
            self.offset = self.pos;
            let mut w = 0;
            let mut i = 0;
            let runes = &self.value[self.offset..];
            while i < runes.len() {
                let cw = runes[i].width().unwrap_or(0);
                if w + cw > self.width {
                    break;
                }
                w += cw;
                i += 1;
            }
            self.offset_right = self.offset + i;
        } else if self.pos >= self.offset_right {
            self.offset_right = self.pos;
            let mut w = 0;
            let mut start = self.offset_right;
            while start > 0 {
                let cw = self.value[start - 1].width().unwrap_or(0);
                if w + cw > self.width {
                    break;
                }
                w += cw;
                start -= 1;
            }
            self.offset = start;
        }
    }

    fn delete_before_cursor(&mut self) {
        self.value = self.value[self.pos..].to_vec();
        self.offset = 0;
        self.set_cursor(0);
    }

    fn delete_after_cursor(&mut self) {
        self.value.truncate(self.pos);
        self.set_cursor(self.value.len());
    }

    /// Index of the start of the word before `pos`, skipping trailing spaces.
    fn word_start_before(&self, mut pos: usize) -> usize {
        while pos > 0 && self.value[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !self.value[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }

    fn delete_word_backward(&mut self) {
        if self.pos == 0 || self.value.is_empty() {
            return;
        }
        if self.echo_mode != EchoMode::Normal {
            self.delete_before_cursor();
            return;
        }

        let old_pos = self.pos;
        let start = self.word_start_before(old_pos);
        self.value.drain(start..old_pos);
        self.set_cursor(start);
    }

    fn word_backward(&mut self) {
        if self.pos == 0 || self.value.is_empty() {
            return;
        }
        if self.echo_mode != EchoMode::Normal {
            self.cursor_start();
            return;
        }
        let start = self.word_start_before(self.pos);
        self.set_cursor(start);
    }

    fn word_forward(&mut self) {
        if self.pos >= self.value.len() || self.value.is_empty() {
            return;
        }
        if self.echo_mode != EchoMode::Normal {
            self.cursor_end();
            return;
        }

        let mut i = self.pos;
        while i < self.value.len() && self.value[i].is_whitespace() {
            i += 1;
        }
        while i < self.value.len() && !self.value[i].is_whitespace() {
            i += 1;
        }
        self.set_cursor(i);
    }

    fn echo_transform(&self, v: &str) -> String {
        match self.echo_mode {
            EchoMode::Normal => v.to_string(),
            EchoMode::Password => self.echo_character.to_string().repeat(v.chars().count()),
            EchoMode::None => String::new(),
        }
    }

    fn update_suggestions(&mut self) {
        if !self.show_suggestions {
            return;
        }

        if self.value.is_empty() || self.suggestions.is_empty() {
            self.matched_suggestions.clear();
            return;
        }

        let value_lower = self.value().to_lowercase();
        let matches: Vec<Vec<char>> = self
            .suggestions
            .iter()
            .filter(|s| {
                s.iter()
                    .collect::<String>()
                    .to_lowercase()
                    .starts_with(&value_lower)
            })
            .cloned()
            .collect();

        if matches != self.matched_suggestions {
            self.current_suggestion_index = 0;
        }
        self.matched_suggestions = matches;
    }

    fn next_suggestion(&mut self) {
        if self.matched_suggestions.is_empty() {
            return;
        }
        self.current_suggestion_index =
            (self.current_suggestion_index + 1) % self.matched_suggestions.len();
    }

    fn previous_suggestion(&mut self) {
        if self.matched_suggestions.is_empty() {
            return;
        }
        self.current_suggestion_index = self
            .current_suggestion_index
            .checked_sub(1)
            .unwrap_or(self.matched_suggestions.len() - 1);
    }

    /// Handles a message. Only [`KeyMsg`]s have an effect, and only while
    /// focused.
    pub fn update(&mut self, msg: &Message) {
        if !self.focus {
            return;
        }
        let Some(key) = msg.downcast_ref::<KeyMsg>() else {
            return;
        };
        let km = &self.key_map;

        if km.accept_suggestion.matches(key)
            && let Some(suggestion) = self.matched_suggestions.get(self.current_suggestion_index)
            && self.value.len() < suggestion.len()
        {
            let mut rest = suggestion[self.value.len()..].to_vec();
            if self.char_limit > 0 {
                rest.truncate(self.char_limit.saturating_sub(self.value.len()));
            }
            self.value.extend_from_slice(&rest);
            self.cursor_end();
        }

        let km = &self.key_map;
        if km.delete_word_backward.matches(key) {
            self.delete_word_backward();
        } else if km.delete_character_backward.matches(key) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.set_cursor(self.pos - 1);
            }
        } else if km.word_backward.matches(key) {
            self.word_backward();
        } else if km.character_backward.matches(key) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if km.word_forward.matches(key) {
            self.word_forward();
        } else if km.character_forward.matches(key) {
            if self.pos < self.value.len() {
                self.set_cursor(self.pos + 1);
            }
        } else if km.line_start.matches(key) {
            self.cursor_start();
        } else if km.delete_character_forward.matches(key) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if km.line_end.matches(key) {
            self.cursor_end();
        } else if km.delete_after_cursor.matches(key) {
            self.delete_after_cursor();
        } else if km.delete_before_cursor.matches(key) {
            self.delete_before_cursor();
        } else if km.next_suggestion.matches(key) {
            self.next_suggestion();
        } else if km.prev_suggestion.matches(key) {
            self.previous_suggestion();
        } else if !km.accept_suggestion.matches(key) && !key.alt && !key.runes.is_empty() {
            let runes = key.runes.clone();
            self.insert_runes_from_user_input(&runes);
        }

        self.update_suggestions();
        self.handle_overflow();
    }

    fn cursor_view(&self, ch: &str, base: &Style) -> String {
        if self.focus {
            self.cursor_style.clone().reverse().render(ch)
        } else {
            base.clone().inline().render(ch)
        }
    }

    /// Renders the text input.
    #[must_use]
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return self.placeholder_view();
        }

        let value = &self.value[self.offset..self.offset_right];
        let pos = self.pos.saturating_sub(self.offset).min(value.len());

        let before: String = value[..pos].iter().collect();
        let mut v = self
            .text_style
            .clone()
            .inline()
            .render(&self.echo_transform(&before));

        if pos < value.len() {
            let at_cursor = self.echo_transform(&value[pos].to_string());
            v.push_str(&self.cursor_view(&at_cursor, &self.text_style));

            let after: String = value[pos + 1..].iter().collect();
            v.push_str(
                &self
                    .text_style
                    .clone()
                    .inline()
                    .render(&self.echo_transform(&after)),
            );
        } else if self.focus
            && let Some(suggestion) = self.matched_suggestions.get(self.current_suggestion_index)
            && self.value.len() < suggestion.len()
        {
            let next: String = suggestion[self.value.len()].to_string();
            v.push_str(&self.cursor_view(&self.echo_transform(&next), &self.completion_style));
            let rest: String = suggestion[self.value.len() + 1..].iter().collect();
            v.push_str(&self.completion_style.clone().inline().render(&rest));
        } else if self.focus {
            v.push_str(&self.cursor_view(" ", &self.text_style));
        }

        if self.width > 0 {
            let val_width = display_width(value);
            if val_width <= self.width {
                let padding = self.width - val_width;
                v.push_str(&" ".repeat(padding));
            }
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }

    fn placeholder_view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);
        let first: String = self.placeholder.chars().take(1).collect();
        let rest: String = self.placeholder.chars().skip(1).collect();

        let head = self.cursor_view(&first, &self.placeholder_style);
        let tail = self.placeholder_style.clone().inline().render(&rest);
        format!("{prompt}{head}{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyType;

    fn key(t: KeyType) -> Message {
        Message::new(KeyMsg::from_type(t))
    }

    fn typed(s: &str) -> Message {
        Message::new(KeyMsg::from_runes(s.chars().collect()))
    }

    fn focused_with(value: &str) -> TextInput {
        let mut input = TextInput::new();
        input.set_value(value);
        input.focus();
        input
    }

    #[test]
    fn test_textinput_new() {
        let input = TextInput::new();
        assert_eq!(input.prompt, "> ");
        assert_eq!(input.echo_character, '*');
        assert!(!input.focused());
    }

    #[test]
    fn test_cursor_position() {
        let mut input = TextInput::new();
        input.set_value("hello");
        assert_eq!(input.position(), 5);

        input.set_cursor(2);
        assert_eq!(input.position(), 2);

        input.set_cursor(99);
        assert_eq!(input.position(), 5);
    }

    #[test]
    fn test_ignores_keys_when_blurred() {
        let mut input = TextInput::new();
        input.update(&typed("x"));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_typing_inserts_at_cursor() {
        let mut input = focused_with("ac");
        input.set_cursor(1);
        input.update(&typed("b"));
        assert_eq!(input.value(), "abc");
        assert_eq!(input.position(), 2);
    }

    #[test]
    fn test_paste_sanitizes_control_chars() {
        let mut input = focused_with("");
        input.update(&Message::new(
            KeyMsg::from_runes("a\tb\r\nc\u{7}".chars().collect()).with_paste(),
        ));
        assert_eq!(input.value(), "a b c");
    }

    #[test]
    fn test_char_limit() {
        let mut input = TextInput::new();
        input.set_char_limit(5);
        input.set_value("hello world");
        assert_eq!(input.value(), "hello");

        input.focus();
        input.update(&typed("!"));
        assert_eq!(input.value(), "hello");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = focused_with("abc");
        input.update(&key(KeyType::Backspace));
        assert_eq!(input.value(), "ab");

        input.update(&key(KeyType::Home));
        input.update(&key(KeyType::Delete));
        assert_eq!(input.value(), "b");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_word_motions() {
        let mut input = focused_with("red green blue");
        input.update(&key(KeyType::CtrlW));
        assert_eq!(input.value(), "red green ");

        input.update(&key(KeyType::CtrlLeft));
        assert_eq!(input.position(), 4);

        input.update(&key(KeyType::CtrlRight));
        assert_eq!(input.position(), 9);
    }

    #[test]
    fn test_delete_to_line_edges() {
        let mut input = focused_with("hello world");
        input.set_cursor(5);
        input.update(&key(KeyType::CtrlK));
        assert_eq!(input.value(), "hello");

        input.set_cursor(2);
        input.update(&key(KeyType::CtrlU));
        assert_eq!(input.value(), "llo");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_echo_mode() {
        let mut input = TextInput::new();
        assert_eq!(input.echo_transform("secret"), "secret");

        input.echo_mode = EchoMode::Password;
        assert_eq!(input.echo_transform("secret"), "******");

        input.echo_mode = EchoMode::None;
        assert_eq!(input.echo_transform("secret"), "");
    }

    #[test]
    fn test_password_view_hides_value() {
        let mut input = TextInput::new();
        input.set_echo_mode(EchoMode::Password);
        input.set_value("hunter2");
        let view = input.view();
        assert!(!view.contains("hunter2"));
        assert!(view.contains("*******"));
    }

    #[test]
    fn test_suggestions_case_insensitive_prefix() {
        let mut input = TextInput::new();
        input.show_suggestions = true;
        input.set_suggestions(&["Apple".into(), "apricot".into(), "banana".into()]);
        input.set_value("ap");

        assert_eq!(input.matched_suggestions(), vec!["Apple", "apricot"]);
        assert_eq!(input.current_suggestion(), "Apple");
    }

    #[test]
    fn test_cycle_and_accept_suggestion() {
        let mut input = focused_with("");
        input.show_suggestions = true;
        input.set_suggestions(&["apple".into(), "apricot".into()]);
        input.update(&typed("ap"));

        input.update(&key(KeyType::Down));
        assert_eq!(input.current_suggestion(), "apricot");
        input.update(&key(KeyType::Up));
        assert_eq!(input.current_suggestion(), "apple");
        input.update(&key(KeyType::Up));
        assert_eq!(input.current_suggestion(), "apricot");

        input.update(&key(KeyType::Tab));
        assert_eq!(input.value(), "apricot");
        assert_eq!(input.position(), 7);
    }

    #[test]
    fn test_accept_suggestion_respects_char_limit() {
        let mut input = focused_with("");
        input.show_suggestions = true;
        input.set_char_limit(3);
        input.set_suggestions(&["apricot".into()]);
        input.update(&typed("a"));

        input.update(&key(KeyType::Tab));
        assert_eq!(input.value(), "apr");
        assert_eq!(input.position(), 3);
    }

    #[test]
    fn test_disabled_accept_binding() {
        let mut input = focused_with("");
        input.show_suggestions = true;
        input.key_map.accept_suggestion = Binding::new().keys(&["tab"]).set_enabled(false);
        input.set_suggestions(&["apple".into()]);
        input.update(&typed("a"));
        input.update(&key(KeyType::Tab));
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_completion_rendered_when_focused() {
        let mut input = focused_with("");
        input.show_suggestions = true;
        input.set_suggestions(&["banana".into()]);
        input.update(&typed("ban"));
        let view = input.view();
        assert!(view.contains("ban"));
        assert!(view.contains("na"));

        input.blur();
        assert!(!input.view().contains("na"));
    }

    #[test]
    fn test_horizontal_scroll_keeps_cursor_visible() {
        let mut input = TextInput::new();
        input.set_width(5);
        input.set_value("abcdefghij");
        input.cursor_end();
        let view = input.view();
        assert!(view.contains("fghij"));
        assert!(!view.contains("abc"));

        input.cursor_start();
        let view = input.view();
        assert!(view.contains("abcde"));
        assert!(!view.contains("j"));
    }

    #[test]
    fn test_placeholder_view() {
        let mut input = TextInput::new();
        input.set_placeholder("Type here...");
        let view = input.view();
        assert!(view.contains("> "));
        assert!(view.contains("ype here..."));
    }

    #[test]
    fn test_view_contains_prompt_and_value() {
        let mut input = TextInput::new();
        input.set_prompt("? ");
        input.set_value("hello");
        let view = input.view();
        assert!(view.starts_with("? "));
        assert!(view.contains("hello"));
    }
}
