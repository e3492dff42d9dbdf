//! A field for entering an open-ended list of short text values.
//!
//! [`ListInput`] starts with a single text entry. Submitting a non-empty,
//! valid value in the last entry appends a fresh entry and moves focus to
//! it; submitting the empty last entry hands focus to the next field. The
//! values live in a [`ListValue`] the caller can hold on to.
//!
//! # Example
//!
//! ```rust
//! use listform::{Field, KeyMsg, KeyType, ListInput, ListValue, Message, NextFieldMsg};
//!
//! let fruits = ListValue::new();
//! let mut field = ListInput::new()
//!     .title("Fruits")
//!     .placeholder("apple")
//!     .value(fruits.clone());
//!
//! field.focus();
//! field.update(&Message::new(KeyMsg::from_runes("kiwi".chars().collect())));
//! field.update(&Message::new(KeyMsg::from_type(KeyType::Enter)));
//! assert_eq!(fruits.get(), vec!["kiwi", ""]);
//!
//! let cmd = field.update(&Message::new(KeyMsg::from_type(KeyType::Enter)));
//! assert!(cmd.and_then(|c| c.execute()).is_some_and(|m| m.is::<NextFieldMsg>()));
//! ```

use std::any::Any;
use std::fmt;
use std::io::{BufRead, Write};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Deserialize;
use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

use crate::accessible;
use crate::entry::EntryTemplate;
use crate::error::{FormError, Result};
use crate::field::{Field, FieldPosition, Validator, always_valid};
use crate::key::{Binding, KeyMsg};
use crate::keymap::{InputKeyMap, KeyMap};
use crate::message::{Cmd, Message, next_field, prev_field};
use crate::textinput::{EchoMode, TextInput};
use crate::theme::{FieldStyles, Theme, theme_charm};

/// A shared, caller-visible list of values.
///
/// Cloning the handle shares the underlying storage, so the caller can keep
/// one clone and read the values the field writes.
#[derive(Clone, Default)]
pub struct ListValue(Arc<RwLock<Vec<String>>>);

impl ListValue {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the values.
    pub fn get(&self) -> Vec<String> {
        self.0.read().clone()
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Borrow the values for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&[String]) -> R) -> R {
        f(&self.0.read())
    }

    /// Replace all values.
    pub fn set(&self, values: Vec<String>) {
        *self.0.write() = values;
    }

    pub(crate) fn set_at(&self, index: usize, value: String) {
        let mut values = self.0.write();
        if values.len() <= index {
            values.resize(index + 1, String::new());
        }
        values[index] = value;
    }

    pub(crate) fn push(&self, value: String) {
        self.0.write().push(value);
    }
}

impl fmt::Debug for ListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ListValue").field(&*self.0.read()).finish()
    }
}

impl<S: Into<String>> From<Vec<S>> for ListValue {
    fn from(values: Vec<S>) -> Self {
        Self(Arc::new(RwLock::new(
            values.into_iter().map(Into::into).collect(),
        )))
    }
}

/// What submitting an empty last entry does when the validator rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyTail {
    /// The empty last entry means "done": focus moves on regardless of the
    /// validator. The error is still recorded, and blur validates the entry
    /// again like every other one.
    #[default]
    Finish,
    /// The empty last entry is validated like any other entry.
    Validate,
}

/// A form field that collects a growing list of single-line values.
pub struct ListInput {
    key: String,
    value: ListValue,
    title: String,
    description: String,
    inline: bool,
    validate: Validator,
    empty_tail: EmptyTail,
    err: Option<String>,
    err_entry: usize,
    entries: Vec<TextInput>,
    focused: Option<usize>,
    template: EntryTemplate,
    width: usize,
    height: usize,
    theme: Option<Theme>,
    keymap: InputKeyMap,
    position: FieldPosition,
}

impl Default for ListInput {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ListInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListInput")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("value", &self.value)
            .field("focused", &self.focused)
            .field("err", &self.err)
            .field("entries", &self.entries.len())
            .field("empty_tail", &self.empty_tail)
            .finish_non_exhaustive()
    }
}

impl ListInput {
    /// Creates a list field with one empty entry.
    pub fn new() -> Self {
        let template = EntryTemplate::default();
        Self {
            key: String::new(),
            value: ListValue::from(vec![String::new()]),
            title: String::new(),
            description: String::new(),
            inline: false,
            validate: always_valid(),
            empty_tail: EmptyTail::default(),
            err: None,
            err_entry: 0,
            entries: vec![template.build()],
            focused: None,
            template,
            width: 0,
            height: 0,
            theme: None,
            keymap: InputKeyMap::default(),
            position: FieldPosition::default(),
        }
    }

    /// Creates a list field whose entries are configured from `template`.
    pub fn with_template(template: EntryTemplate) -> Self {
        let mut field = Self::new();
        field.template = template;
        field.apply_template();
        field
    }

    /// Sets the key used to look the value up in a form.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the prompt of every entry.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.template.prompt = prompt.into();
        self.apply_template();
        self
    }

    /// Sets the character limit of every entry (0 = none).
    pub fn char_limit(mut self, limit: usize) -> Self {
        self.template.char_limit = limit;
        self.apply_template();
        self
    }

    /// Sets the echo mode of every entry.
    pub fn echo_mode(mut self, mode: EchoMode) -> Self {
        self.template.echo_mode = mode;
        self.apply_template();
        self
    }

    /// Hides what the user types.
    pub fn password(self, password: bool) -> Self {
        self.echo_mode(if password {
            EchoMode::Password
        } else {
            EchoMode::Normal
        })
    }

    /// Sets the placeholder of every entry.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.template.placeholder = placeholder.into();
        self.apply_template();
        self
    }

    /// Sets the autocomplete candidates offered in every entry.
    pub fn suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.template.suggestions = suggestions.into_iter().map(Into::into).collect();
        self.apply_template();
        self
    }

    /// Renders the title and description on the same line as the entries.
    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self.apply_template();
        self
    }

    /// Sets the per-entry validation function.
    pub fn validate<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.validate_with(Arc::new(f))
    }

    /// Sets the per-entry validator from a shared [`Validator`].
    pub fn validate_with(mut self, validator: Validator) -> Self {
        self.validate = validator;
        self
    }

    /// Sets what submitting an empty last entry does.
    pub fn empty_tail(mut self, policy: EmptyTail) -> Self {
        self.empty_tail = policy;
        self
    }

    /// Binds the field to `binding`, clearing it and every entry.
    pub fn value(mut self, binding: ListValue) -> Self {
        for entry in &mut self.entries {
            entry.reset();
        }
        binding.set(vec![String::new(); self.entries.len()]);
        self.value = binding;
        self
    }

    /// Binds the field to `binding`, keeping its contents as initial entries.
    pub fn prefilled(mut self, binding: ListValue) -> Self {
        let mut values = binding.get();
        let count = values.len().max(self.entries.len()).max(1);
        values.resize(count, String::new());
        while self.entries.len() < count {
            self.entries.push(self.template.build());
        }
        for (entry, value) in self.entries.iter_mut().zip(values.iter_mut()) {
            entry.reset();
            entry.set_value(value);
            *value = entry.value();
        }
        binding.set(values);
        self.value = binding;
        self
    }

    /// Sets the theme, taking precedence over the form's theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self.apply_template();
        self
    }

    /// Returns a snapshot of the bound values.
    pub fn values(&self) -> Vec<String> {
        self.value.get()
    }

    /// Returns the bound value handle.
    pub fn binding(&self) -> ListValue {
        self.value.clone()
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// The entries, in order.
    pub fn entries(&self) -> &[TextInput] {
        &self.entries
    }

    /// Index of the focused entry, `None` while the field is blurred.
    pub fn focused_entry(&self) -> Option<usize> {
        self.focused
    }

    /// The entry the current error belongs to.
    pub fn error_entry(&self) -> Option<usize> {
        self.err.as_ref().map(|_| self.err_entry)
    }

    /// The configuration every entry is built from.
    pub fn template(&self) -> &EntryTemplate {
        &self.template
    }

    /// Rows added by growth plus any height set by the form.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The navigation bindings currently in effect.
    pub fn keymap(&self) -> &InputKeyMap {
        &self.keymap
    }

    /// Where the enclosing form placed this field.
    pub fn position(&self) -> FieldPosition {
        self.position
    }

    fn active_theme(&self) -> std::borrow::Cow<'_, Theme> {
        match &self.theme {
            Some(theme) => std::borrow::Cow::Borrowed(theme),
            None => std::borrow::Cow::Owned(theme_charm()),
        }
    }

    fn entry_width(&self) -> usize {
        if self.width == 0 {
            return 0;
        }
        let frame = self.active_theme().blurred.base.horizontal_frame_size();
        let mut width = self
            .width
            .saturating_sub(frame + self.template.prompt.width() + 1);
        if self.inline {
            width = width.saturating_sub(self.title.width() + self.description.width());
        }
        width.max(1)
    }

    fn apply_template(&mut self) {
        self.template.width = self.entry_width();
        let template = &self.template;
        for entry in &mut self.entries {
            template.apply(entry);
        }
    }

    fn set_error(&mut self, index: usize, err: Option<String>) {
        if err.is_some() {
            self.err_entry = index;
        }
        self.err = err;
    }

    fn move_focus(&mut self, from: usize, to: usize) {
        self.entries[from].blur();
        self.entries[to].focus();
        self.focused = Some(to);
        debug!(key = %self.key, from, to, "List entry focus moved");
    }

    fn append_entry(&mut self) -> usize {
        self.entries.push(self.template.build());
        self.value.push(String::new());
        self.height += 1;
        debug!(key = %self.key, entries = self.entries.len(), "List grew");
        self.entries.len() - 1
    }

    fn grow(&mut self, from: usize) {
        let tail = self.append_entry();
        self.move_focus(from, tail);
    }

    fn is_prev(&self, key: &KeyMsg, index: usize) -> bool {
        if index > 0 {
            self.keymap.prev.has_key(key)
        } else {
            self.keymap.prev.matches(key)
        }
    }

    fn is_next(&self, key: &KeyMsg, index: usize) -> bool {
        if self.keymap.next.matches(key) || self.keymap.submit.matches(key) {
            return true;
        }
        let last = index + 1 == self.entries.len();
        let value_empty = self.entries[index].value().is_empty();
        (!last || !value_empty) && (self.keymap.next.has_key(key) || self.keymap.submit.has_key(key))
    }

    fn handle_prev(&mut self, index: usize, value: &str) -> Option<Cmd> {
        let err = (self.validate)(value);
        if err.is_some() {
            debug!(key = %self.key, index, "Backward move blocked by validation");
            self.set_error(index, err);
            return None;
        }
        if index == 0 {
            debug!(key = %self.key, "Leaving list backward");
            return Some(prev_field());
        }
        self.move_focus(index, index - 1);
        None
    }

    fn handle_next(&mut self, index: usize, value: &str) -> Option<Cmd> {
        let err = (self.validate)(value);
        let last = index + 1 == self.entries.len();

        if !last {
            if err.is_some() {
                debug!(key = %self.key, index, "Forward move blocked by validation");
                self.set_error(index, err);
                return None;
            }
            self.move_focus(index, index + 1);
            return None;
        }

        if value.is_empty() {
            let blocks = err.is_some() && self.empty_tail == EmptyTail::Validate;
            self.set_error(index, err);
            if blocks {
                debug!(key = %self.key, index, "Empty tail rejected by validation");
                return None;
            }
            debug!(key = %self.key, entries = self.entries.len(), "Leaving list forward");
            return Some(next_field());
        }

        if err.is_some() {
            debug!(key = %self.key, index, "Growth blocked by validation");
            self.set_error(index, err);
            return None;
        }
        self.grow(index);
        None
    }

    fn commit(&mut self) {
        self.focused = None;
        self.err = None;
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.blur();
            self.value.set_at(i, entry.value());
        }
        for (i, entry) in self.entries.iter().enumerate() {
            if let Some(err) = (self.validate)(&entry.value()) {
                self.err = Some(err);
                self.err_entry = i;
                break;
            }
        }
    }

    fn render_entry(&self, index: usize, styles: &FieldStyles) -> String {
        let mut block = String::new();

        if index == 0 {
            if !self.title.is_empty() {
                block.push_str(&styles.title.render(&self.title));
                if !self.inline {
                    block.push('\n');
                }
            }
            if !self.description.is_empty() {
                block.push_str(&styles.description.render(&self.description));
                if !self.inline {
                    block.push('\n');
                }
            }
        } else if self.inline {
            if !self.title.is_empty() {
                block.push_str(&" ".repeat(self.title.width()));
            }
            if !self.description.is_empty() {
                block.push_str(&" ".repeat(self.description.width()));
            }
        }

        let mut input = self.entries[index].clone();
        input.prompt_style = styles.text_input.prompt.clone();
        input.text_style = styles.text_input.text.clone();
        input.placeholder_style = styles.text_input.placeholder.clone();
        input.completion_style = styles.text_input.placeholder.clone();
        input.cursor_style = styles.text_input.cursor.clone();
        block.push_str(&input.view());

        if self.err.is_some() && self.err_entry == index {
            block.push_str(&styles.error_indicator.render(""));
        }

        styles.base.render(&block)
    }
}

impl Field for ListInput {
    fn get_key(&self) -> &str {
        &self.key
    }

    fn get_value(&self) -> Box<dyn Any> {
        Box::new(self.value.get())
    }

    fn error(&self) -> Option<&str> {
        self.err.as_deref()
    }

    fn init(&mut self) -> Option<Cmd> {
        for entry in &mut self.entries {
            entry.blur();
        }
        None
    }

    fn update(&mut self, msg: &Message) -> Option<Cmd> {
        let index = self.focused?;

        self.entries[index].update(msg);
        let value = self.entries[index].value();
        self.value.set_at(index, value.clone());

        let key = msg.downcast_ref::<KeyMsg>()?;
        trace!(key = %self.key, index, input = %key, "List key");
        self.err = None;

        if self.is_prev(key, index) {
            self.handle_prev(index, &value)
        } else if self.is_next(key, index) {
            self.handle_next(index, &value)
        } else {
            None
        }
    }

    fn view(&self) -> String {
        let theme = self.active_theme();
        (0..self.entries.len())
            .map(|i| {
                let styles = if self.focused == Some(i) {
                    &theme.focused
                } else {
                    &theme.blurred
                };
                self.render_entry(i, styles)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn focus(&mut self) -> Option<Cmd> {
        for entry in &mut self.entries {
            entry.blur();
        }
        let tail = self.entries.len() - 1;
        self.entries[tail].focus();
        self.focused = Some(tail);
        debug!(key = %self.key, entry = tail, "List focused");
        None
    }

    fn blur(&mut self) -> Option<Cmd> {
        self.commit();
        debug!(key = %self.key, entries = self.entries.len(), error = ?self.err, "List committed");
        None
    }

    fn key_binds(&self) -> Vec<Binding> {
        if self.template.shows_suggestions() {
            vec![
                self.keymap.accept_suggestion.clone(),
                self.keymap.prev.clone(),
                self.keymap.submit.clone(),
                self.keymap.next.clone(),
            ]
        } else {
            vec![
                self.keymap.prev.clone(),
                self.keymap.submit.clone(),
                self.keymap.next.clone(),
            ]
        }
    }

    fn with_theme(&mut self, theme: &Theme) {
        if self.theme.is_none() {
            self.theme = Some(theme.clone());
            self.apply_template();
        }
    }

    fn with_keymap(&mut self, keymap: &KeyMap) {
        self.keymap = keymap.input.clone();
        self.template.accept_suggestion = self.keymap.accept_suggestion.clone();
        self.apply_template();
    }

    fn with_width(&mut self, width: usize) {
        self.width = width;
        self.apply_template();
    }

    fn with_height(&mut self, height: usize) {
        self.height = height;
    }

    fn with_position(&mut self, position: FieldPosition) {
        self.position = position;
        self.keymap.prev.enable(!position.is_first());
        self.keymap.next.enable(!position.is_last());
        self.keymap.submit.enable(position.is_last());
    }

    fn run_accessible(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        accessible::write_header(output, &self.title, &self.description)?;

        // Values already present are kept; prompting starts on an empty tail.
        let tail = self.entries.len() - 1;
        if !self.entries[tail].value().is_empty() {
            self.append_entry();
        }
        for (i, value) in self.value.get().iter().enumerate() {
            if i + 1 < self.entries.len() {
                writeln!(output, "{}. {}{}", i + 1, self.template.prompt, value)?;
            }
        }

        loop {
            let index = self.entries.len() - 1;
            let prompt = format!("{}. {}", index + 1, self.template.prompt);
            let line = accessible::prompt_line(input, output, &prompt)?;
            let at_eof = line.is_none();

            let entry = &mut self.entries[index];
            entry.set_value(&line.unwrap_or_default());
            let value = entry.value();
            self.value.set_at(index, value.clone());

            let err = (self.validate)(&value);
            if value.is_empty() {
                match err {
                    Some(err) if self.empty_tail == EmptyTail::Validate => {
                        if at_eof {
                            return Err(FormError::validation(err));
                        }
                        accessible::write_error(output, &err)?;
                        continue;
                    }
                    _ => break,
                }
            }

            match err {
                Some(err) => accessible::write_error(output, &err)?,
                None => {
                    self.append_entry();
                }
            }
        }

        self.commit();
        debug!(key = %self.key, entries = self.entries.len(), "Accessible list finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyType;
    use crate::message::{NextFieldMsg, PrevFieldMsg};
    use crate::theme::theme_base;

    fn key(t: KeyType) -> Message {
        Message::new(KeyMsg::from_type(t))
    }

    fn type_str(field: &mut ListInput, s: &str) {
        for c in s.chars() {
            field.update(&Message::new(KeyMsg::from_char(c)));
        }
    }

    fn next(field: &mut ListInput) -> Option<Message> {
        field.update(&key(KeyType::Enter)).and_then(Cmd::execute)
    }

    fn reject_bad() -> impl Fn(&str) -> Option<String> + Send + Sync + 'static {
        |s: &str| (s == "bad").then(|| "no bad values".to_string())
    }

    fn reject_empty() -> impl Fn(&str) -> Option<String> + Send + Sync + 'static {
        |s: &str| s.is_empty().then(|| "required".to_string())
    }

    #[test]
    fn test_new_field_has_one_entry() {
        let field = ListInput::new();
        assert_eq!(field.entry_count(), 1);
        assert_eq!(field.values(), vec![""]);
        assert_eq!(field.focused_entry(), None);
        assert!(field.error().is_none());
    }

    #[test]
    fn test_updates_ignored_while_unfocused() {
        let mut field = ListInput::new();
        assert!(field.update(&Message::new(KeyMsg::from_char('a'))).is_none());
        assert!(field.update(&key(KeyType::Enter)).is_none());
        assert_eq!(field.values(), vec![""]);
        assert_eq!(field.entry_count(), 1);
    }

    #[test]
    fn test_focus_lands_on_tail() {
        let mut field = ListInput::new().prefilled(ListValue::from(vec!["a", "b"]));
        field.focus();
        assert_eq!(field.focused_entry(), Some(1));
        assert!(field.entries()[1].focused());
        assert!(!field.entries()[0].focused());
    }

    #[test]
    fn test_keystrokes_sync_immediately() {
        let binding = ListValue::new();
        let mut field = ListInput::new().value(binding.clone());
        field.focus();
        type_str(&mut field, "app");
        assert_eq!(binding.get(), vec!["app"]);
    }

    #[test]
    fn test_apple_banana_scenario() {
        let mut field = ListInput::new();
        field.focus();

        type_str(&mut field, "apple");
        assert!(next(&mut field).is_none());
        assert_eq!(field.entry_count(), 2);
        assert_eq!(field.focused_entry(), Some(1));
        assert!(field.entries()[1].value().is_empty());
        assert_eq!(field.values(), vec!["apple", ""]);

        type_str(&mut field, "banana");
        assert!(next(&mut field).is_none());
        assert_eq!(field.entry_count(), 3);
        assert_eq!(field.values(), vec!["apple", "banana", ""]);

        let msg = next(&mut field).unwrap();
        assert!(msg.is::<NextFieldMsg>());
        assert_eq!(field.entry_count(), 3);
        assert_eq!(field.values(), vec!["apple", "banana", ""]);
    }

    #[test]
    fn test_growth_focuses_only_the_new_tail() {
        let mut field = ListInput::new();
        field.focus();
        type_str(&mut field, "x");
        next(&mut field);
        assert!(!field.entries()[0].focused());
        assert!(field.entries()[1].focused());
        assert_eq!(field.height(), 1);
    }

    #[test]
    fn test_empty_single_entry_exits() {
        let mut field = ListInput::new();
        field.focus();
        let msg = next(&mut field).unwrap();
        assert!(msg.is::<NextFieldMsg>());
        assert_eq!(field.entry_count(), 1);
    }

    #[test]
    fn test_invalid_tail_blocks() {
        let mut field = ListInput::new().validate(reject_bad());
        field.focus();
        type_str(&mut field, "bad");
        assert!(next(&mut field).is_none());
        assert_eq!(field.entry_count(), 1);
        assert_eq!(field.focused_entry(), Some(0));
        assert_eq!(field.error(), Some("no bad values"));
        assert_eq!(field.error_entry(), Some(0));
    }

    #[test]
    fn test_any_key_clears_error() {
        let mut field = ListInput::new().validate(reject_bad());
        field.focus();
        type_str(&mut field, "bad");
        next(&mut field);
        assert!(field.error().is_some());

        field.update(&key(KeyType::Backspace));
        assert!(field.error().is_none());
        assert_eq!(field.values(), vec!["ba"]);
    }

    #[test]
    fn test_empty_tail_finishes_despite_validator() {
        let mut field = ListInput::new().validate(reject_empty());
        field.focus();
        let msg = next(&mut field).unwrap();
        assert!(msg.is::<NextFieldMsg>());
        assert_eq!(field.error(), Some("required"));
    }

    #[test]
    fn test_empty_tail_validate_policy_blocks() {
        let mut field = ListInput::new()
            .validate(reject_empty())
            .empty_tail(EmptyTail::Validate);
        field.focus();
        assert!(next(&mut field).is_none());
        assert_eq!(field.error(), Some("required"));
        assert_eq!(field.entry_count(), 1);
    }

    #[test]
    fn test_prev_at_first_entry_leaves_field() {
        let mut field = ListInput::new();
        field.focus();
        type_str(&mut field, "ok");
        let msg = field.update(&key(KeyType::ShiftTab)).and_then(Cmd::execute);
        assert!(msg.unwrap().is::<PrevFieldMsg>());
        assert_eq!(field.focused_entry(), Some(0));
    }

    #[test]
    fn test_prev_moves_within_list() {
        let mut field = ListInput::new().prefilled(ListValue::from(vec!["a", "b", ""]));
        field.focus();
        assert_eq!(field.focused_entry(), Some(2));

        assert!(field.update(&key(KeyType::ShiftTab)).is_none());
        assert_eq!(field.focused_entry(), Some(1));
        assert!(field.entries()[1].focused());
        assert!(!field.entries()[2].focused());

        assert!(field.update(&key(KeyType::Tab)).is_none());
        assert_eq!(field.focused_entry(), Some(2));
    }

    #[test]
    fn test_prev_blocked_by_invalid_value() {
        let mut field = ListInput::new()
            .validate(reject_bad())
            .prefilled(ListValue::from(vec!["a", ""]));
        field.focus();
        type_str(&mut field, "bad");
        assert!(field.update(&key(KeyType::ShiftTab)).is_none());
        assert_eq!(field.focused_entry(), Some(1));
        assert!(field.error().is_some());
    }

    #[test]
    fn test_next_on_interior_entry_validates() {
        let mut field = ListInput::new()
            .validate(reject_bad())
            .prefilled(ListValue::from(vec!["bad", ""]));
        field.focus();
        field.update(&key(KeyType::ShiftTab));
        // Moving back is allowed from a valid entry; "bad" now blocks forward.
        assert_eq!(field.focused_entry(), Some(0));
        assert!(field.update(&key(KeyType::Enter)).is_none());
        assert_eq!(field.focused_entry(), Some(0));
        assert_eq!(field.error_entry(), Some(0));
    }

    #[test]
    fn test_disabled_prev_at_first_field_stays_put() {
        let mut field = ListInput::new();
        field.with_position(FieldPosition::new(0, 2));
        field.focus();
        assert!(field.update(&key(KeyType::ShiftTab)).is_none());
        assert_eq!(field.focused_entry(), Some(0));
    }

    #[test]
    fn test_disabled_prev_still_moves_internally() {
        let mut field = ListInput::new().prefilled(ListValue::from(vec!["a", ""]));
        field.with_position(FieldPosition::new(0, 1));
        field.focus();
        assert!(field.update(&key(KeyType::ShiftTab)).is_none());
        assert_eq!(field.focused_entry(), Some(0));
    }

    #[test]
    fn test_last_field_only_submits_with_enter() {
        let mut field = ListInput::new();
        field.with_position(FieldPosition::new(1, 2));
        field.focus();
        assert!(field.update(&key(KeyType::Tab)).is_none());
        assert!(next(&mut field).unwrap().is::<NextFieldMsg>());
    }

    #[test]
    fn test_tab_grows_on_last_field() {
        let mut field = ListInput::new();
        field.with_position(FieldPosition::new(0, 1));
        field.focus();
        type_str(&mut field, "pear");
        assert!(field.update(&key(KeyType::Tab)).is_none());
        assert_eq!(field.entry_count(), 2);
    }

    #[test]
    fn test_blur_commits_and_is_idempotent() {
        let mut field = ListInput::new().validate(reject_bad());
        field.focus();
        type_str(&mut field, "ok");
        next(&mut field);
        type_str(&mut field, "bad");

        field.blur();
        let first = (field.values(), field.error().map(String::from));
        field.blur();
        let second = (field.values(), field.error().map(String::from));

        assert_eq!(first, second);
        assert_eq!(first.0, vec!["ok", "bad"]);
        assert_eq!(first.1.as_deref(), Some("no bad values"));
        assert_eq!(field.error_entry(), Some(1));
        assert_eq!(field.focused_entry(), None);
        assert!(field.entries().iter().all(|e| !e.focused()));
    }

    #[test]
    fn test_blur_validates_empty_tail() {
        let mut field = ListInput::new().validate(reject_empty());
        field.focus();
        type_str(&mut field, "fig");
        next(&mut field);
        let msg = next(&mut field).unwrap();
        assert!(msg.is::<NextFieldMsg>());
        assert_eq!(field.error(), Some("required"));

        field.blur();
        assert_eq!(field.values(), vec!["fig", ""]);
        assert_eq!(field.error(), Some("required"));
        assert_eq!(field.error_entry(), Some(1));

        let mut strict = ListInput::new()
            .validate(reject_empty())
            .empty_tail(EmptyTail::Validate);
        strict.blur();
        assert_eq!(strict.error(), Some("required"));
    }

    #[test]
    fn test_blur_clears_stale_error() {
        let mut field = ListInput::new().validate(reject_bad());
        field.focus();
        type_str(&mut field, "bad");
        next(&mut field);
        field.update(&key(KeyType::CtrlU));
        field.blur();
        assert!(field.error().is_none());
    }

    #[test]
    fn test_value_resets_binding() {
        let binding = ListValue::from(vec!["stale", "data"]);
        let field = ListInput::new().value(binding.clone());
        assert_eq!(binding.get(), vec![""]);
        assert_eq!(field.entry_count(), 1);
    }

    #[test]
    fn test_prefilled_keeps_binding() {
        let binding = ListValue::from(vec!["a", "b"]);
        let field = ListInput::new().prefilled(binding.clone());
        assert_eq!(field.entry_count(), 2);
        assert_eq!(field.entries()[0].value(), "a");
        assert_eq!(field.entries()[1].value(), "b");
        assert_eq!(binding.get(), vec!["a", "b"]);
    }

    #[test]
    fn test_prefilled_empty_binding_gets_one_entry() {
        let binding = ListValue::new();
        let field = ListInput::new().prefilled(binding.clone());
        assert_eq!(field.entry_count(), 1);
        assert_eq!(binding.get(), vec![""]);
    }

    #[test]
    fn test_template_setters_reach_every_entry() {
        let mut field = ListInput::new();
        field.focus();
        type_str(&mut field, "one");
        next(&mut field);

        let mut field = field.prompt("• ").char_limit(4).placeholder("more?");
        assert!(field.entries().iter().all(|e| e.prompt == "• "));
        assert!(field.entries().iter().all(|e| e.char_limit == 4));

        type_str(&mut field, "three");
        assert_eq!(field.values(), vec!["one", "thre"]);
        next(&mut field);
        let tail = &field.entries()[2];
        assert_eq!(tail.prompt, "• ");
        assert_eq!(tail.placeholder, "more?");
    }

    #[test]
    fn test_suggestions_enable_accept_binding() {
        let mut field = ListInput::new().suggestions(["apple", "apricot"]);
        field.with_keymap(&KeyMap::default());
        field.focus();
        type_str(&mut field, "apr");
        field.update(&key(KeyType::CtrlE));
        assert_eq!(field.values(), vec!["apricot"]);
        assert_eq!(field.key_binds().len(), 4);
    }

    #[test]
    fn test_accepted_suggestion_respects_char_limit() {
        let binding = ListValue::new();
        let mut field = ListInput::new()
            .value(binding.clone())
            .char_limit(3)
            .suggestions(["apricot"]);
        field.with_keymap(&KeyMap::default());
        field.focus();
        type_str(&mut field, "a");
        field.update(&key(KeyType::CtrlE));
        assert_eq!(binding.get(), vec!["apr"]);
    }

    #[test]
    fn test_single_suggestion_is_shown() {
        let field = ListInput::new().suggestions(["kiwi"]);
        assert!(field.entries()[0].show_suggestions);
        assert_eq!(field.key_binds().len(), 4);
        assert_eq!(ListInput::new().key_binds().len(), 3);
    }

    #[test]
    fn test_with_position_toggles_bindings() {
        let mut field = ListInput::new();
        field.with_position(FieldPosition::new(1, 3));
        assert!(field.keymap().prev.enabled());
        assert!(field.keymap().next.enabled());
        assert!(!field.keymap().submit.enabled());

        field.with_position(FieldPosition::new(2, 3));
        assert!(!field.keymap().next.enabled());
        assert!(field.keymap().submit.enabled());
    }

    #[test]
    fn test_with_width_sizes_entries() {
        let mut field = ListInput::new().theme(theme_base());
        field.with_width(40);
        // 40 - frame (2) - prompt (2) - 1
        assert_eq!(field.entries()[0].width, 35);

        let mut inline = ListInput::new().title("Fruits").inline(true).theme(theme_base());
        inline.with_width(40);
        assert_eq!(inline.entries()[0].width, 29);
    }

    #[test]
    fn test_view_shows_title_once() {
        let mut field = ListInput::new().title("Fruits").theme(theme_base());
        field.focus();
        type_str(&mut field, "apple");
        next(&mut field);

        let view = field.view();
        assert_eq!(view.matches("Fruits").count(), 1);
        assert!(view.contains("apple"));
        assert_eq!(view.lines().count(), 3);
    }

    #[test]
    fn test_view_inline_pads_later_entries() {
        let field = ListInput::new()
            .title("Fruits")
            .inline(true)
            .theme(theme_base())
            .prefilled(ListValue::from(vec!["a", "b"]));
        let view = field.view();
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Fruits> a"));
        assert!(lines[1].contains("      > b"));
    }

    #[test]
    fn test_view_marks_error_entry() {
        let mut field = ListInput::new().validate(reject_bad()).theme(theme_base());
        field.focus();
        type_str(&mut field, "bad");
        next(&mut field);
        assert!(field.view().contains(" *"));
    }

    #[test]
    fn test_focused_entry_gets_thick_border() {
        let mut field = ListInput::new()
            .theme(theme_base())
            .prefilled(ListValue::from(vec!["a", ""]));
        field.focus();
        let view = field.view();
        let lines: Vec<&str> = view.lines().collect();
        assert!(!lines[0].starts_with('┃'));
        assert!(lines[1].starts_with('┃'));
    }

    #[test]
    fn test_get_value_is_boxed_vec() {
        let field = ListInput::new().prefilled(ListValue::from(vec!["x"]));
        let value = field.get_value();
        assert_eq!(value.downcast_ref::<Vec<String>>().unwrap(), &vec!["x".to_string()]);
    }

    #[test]
    fn test_accessible_collects_until_empty_line() {
        let binding = ListValue::new();
        let mut field = ListInput::new()
            .title("Fruits")
            .validate(reject_bad())
            .value(binding.clone());
        let mut input = "apple\nbad\nbanana\n\n".as_bytes();
        let mut output = Vec::new();

        field.run_accessible(&mut input, &mut output).unwrap();

        assert_eq!(binding.get(), vec!["apple", "banana", ""]);
        assert_eq!(field.entry_count(), 3);
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Fruits"));
        assert!(printed.contains("no bad values"));
        assert!(printed.contains("3. > "));
    }

    #[test]
    fn test_accessible_eof_finishes() {
        let mut field = ListInput::new();
        let mut input = "kiwi".as_bytes();
        let mut output = Vec::new();
        field.run_accessible(&mut input, &mut output).unwrap();
        assert_eq!(field.values(), vec!["kiwi", ""]);
    }

    #[test]
    fn test_accessible_keeps_prefilled_values() {
        let binding = ListValue::from(vec!["fig", "lime"]);
        let mut field = ListInput::new().prefilled(binding.clone());
        let mut input = "pear\n\n".as_bytes();
        let mut output = Vec::new();
        field.run_accessible(&mut input, &mut output).unwrap();

        assert_eq!(binding.get(), vec!["fig", "lime", "pear", ""]);
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.starts_with("1. > fig\n2. > lime\n3. > "));
    }

    #[test]
    fn test_accessible_validate_policy_reprompts_empty() {
        let mut field = ListInput::new()
            .validate(reject_empty())
            .empty_tail(EmptyTail::Validate);
        let mut input = "\n".as_bytes();
        let mut output = Vec::new();
        let err = field.run_accessible(&mut input, &mut output).unwrap_err();
        assert_eq!(err, FormError::validation("required"));
        assert!(String::from_utf8(output).unwrap().contains("required"));
    }
}
