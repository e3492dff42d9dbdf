//! The field abstraction a [`Form`](crate::Form) drives, plus validators.

use std::any::Any;
use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::error::Result;
use crate::key::Binding;
use crate::keymap::KeyMap;
use crate::message::{Cmd, Message};
use crate::theme::Theme;

/// A per-value validation predicate: `None` means valid, `Some(msg)` is the
/// error shown to the user.
pub type Validator = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Wrap a closure as a [`Validator`].
pub fn validator<F>(f: F) -> Validator
where
    F: Fn(&str) -> Option<String> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A validator that accepts everything.
pub fn always_valid() -> Validator {
    Arc::new(|_| None)
}

/// Rejects blank (whitespace-only) values.
pub fn validate_required() -> Validator {
    Arc::new(|s: &str| s.trim().is_empty().then(|| "value is required".to_string()))
}

/// Rejects values longer than `max` characters.
pub fn validate_max_length(max: usize) -> Validator {
    Arc::new(move |s: &str| {
        (s.chars().count() > max).then(|| format!("must be at most {max} characters"))
    })
}

/// Rejects values shorter than `min` characters.
pub fn validate_min_length(min: usize) -> Validator {
    Arc::new(move |s: &str| {
        (s.chars().count() < min).then(|| format!("must be at least {min} characters"))
    })
}

/// Runs validators in order and reports the first failure.
pub fn validate_all(validators: Vec<Validator>) -> Validator {
    Arc::new(move |s: &str| validators.iter().find_map(|v| v(s)))
}

/// Positional information about a field within a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldPosition {
    /// Index of this field.
    pub field: usize,
    /// Index of the first field.
    pub first_field: usize,
    /// Index of the last field.
    pub last_field: usize,
}

impl FieldPosition {
    /// Position of field `index` in a form of `count` fields.
    pub fn new(index: usize, count: usize) -> Self {
        Self {
            field: index,
            first_field: 0,
            last_field: count.saturating_sub(1),
        }
    }

    /// Returns whether this field is the first in the form.
    pub fn is_first(&self) -> bool {
        self.field == self.first_field
    }

    /// Returns whether this field is the last in the form.
    pub fn is_last(&self) -> bool {
        self.field == self.last_field
    }
}

/// A form field.
///
/// Fields talk to their form only through the commands they return: a
/// field that wants focus to move yields a command producing
/// [`NextFieldMsg`](crate::NextFieldMsg) or
/// [`PrevFieldMsg`](crate::PrevFieldMsg).
pub trait Field: Send + Sync {
    /// Returns the field's key.
    fn get_key(&self) -> &str;

    /// Returns the field's value.
    fn get_value(&self) -> Box<dyn Any>;

    /// Returns whether the form should pass over this field.
    fn skip(&self) -> bool {
        false
    }

    /// Returns the current validation error, if any.
    fn error(&self) -> Option<&str>;

    /// Initializes the field.
    fn init(&mut self) -> Option<Cmd>;

    /// Updates the field with a message.
    fn update(&mut self, msg: &Message) -> Option<Cmd>;

    /// Renders the field.
    fn view(&self) -> String;

    /// Focuses the field.
    fn focus(&mut self) -> Option<Cmd>;

    /// Blurs the field.
    fn blur(&mut self) -> Option<Cmd>;

    /// Returns the help keybindings.
    fn key_binds(&self) -> Vec<Binding>;

    /// Sets the theme.
    fn with_theme(&mut self, theme: &Theme);

    /// Sets the keymap.
    fn with_keymap(&mut self, keymap: &KeyMap);

    /// Sets the width.
    fn with_width(&mut self, width: usize);

    /// Sets the height.
    fn with_height(&mut self, height: usize);

    /// Sets the field position.
    fn with_position(&mut self, position: FieldPosition);

    /// Runs the field as a plain line-oriented prompt.
    fn run_accessible(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_position() {
        let only = FieldPosition::new(0, 1);
        assert!(only.is_first() && only.is_last());

        let middle = FieldPosition::new(1, 3);
        assert!(!middle.is_first());
        assert!(!middle.is_last());

        let last = FieldPosition::new(2, 3);
        assert!(last.is_last());
    }

    #[test]
    fn test_validate_required() {
        let v = validate_required();
        assert!(v("").is_some());
        assert!(v("   ").is_some());
        assert!(v("apple").is_none());
    }

    #[test]
    fn test_validate_lengths_count_chars() {
        let max = validate_max_length(3);
        assert!(max("äöü").is_none());
        assert!(max("abcd").is_some());

        let min = validate_min_length(2);
        assert!(min("a").is_some());
        assert!(min("ab").is_none());
    }

    #[test]
    fn test_validate_all_reports_first_failure() {
        let v = validate_all(vec![validate_required(), validate_max_length(3)]);
        assert_eq!(v("").as_deref(), Some("value is required"));
        assert_eq!(v("abcd").as_deref(), Some("must be at most 3 characters"));
        assert!(v("abc").is_none());
        assert!(always_valid()("anything").is_none());
    }
}
