//! A form: an ordered sequence of fields with one focused at a time.

use std::any::Any;
use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::Result;
use crate::field::{Field, FieldPosition};
use crate::key::KeyMsg;
use crate::keymap::KeyMap;
use crate::message::{Cmd, Message, Model, NextFieldMsg, PrevFieldMsg, quit};
use crate::theme::{Theme, theme_charm};

/// The current state of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    /// User is completing the form.
    #[default]
    Normal,
    /// User has completed the form.
    Completed,
    /// User has aborted the form.
    Aborted,
}

/// A form containing a sequence of fields.
///
/// The form delivers messages to the focused field and moves focus when a
/// field returns [`NextFieldMsg`] or [`PrevFieldMsg`]. Fields reporting
/// [`Field::skip`] are passed over. Moving past the last field completes the
/// form.
pub struct Form {
    fields: Vec<Box<dyn Field>>,
    current: usize,
    state: FormState,
    width: usize,
    theme: Theme,
    keymap: KeyMap,
    show_help: bool,
    initialized: bool,
}

impl Default for Form {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Form {
    /// Creates a new form with the given fields.
    pub fn new(fields: Vec<Box<dyn Field>>) -> Self {
        Self {
            fields,
            current: 0,
            state: FormState::Normal,
            width: 80,
            theme: theme_charm(),
            keymap: KeyMap::default(),
            show_help: true,
            initialized: false,
        }
    }

    /// Sets the form width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the keymap.
    pub fn keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Shows or hides the key help line.
    pub fn show_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Returns the form state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Returns the index of the focused field.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the field at `index`.
    pub fn field(&self, index: usize) -> Option<&dyn Field> {
        self.fields.get(index).map(|f| f.as_ref())
    }

    /// Collects all field errors.
    pub fn errors(&self) -> Vec<&str> {
        self.fields.iter().filter_map(|f| f.error()).collect()
    }

    /// Returns the value of a field by key.
    pub fn get_value(&self, key: &str) -> Option<Box<dyn Any>> {
        self.fields
            .iter()
            .find(|f| f.get_key() == key)
            .map(|f| f.get_value())
    }

    /// Returns the list value of a field by key.
    pub fn get_list(&self, key: &str) -> Option<Vec<String>> {
        self.get_value(key)
            .and_then(|v| v.downcast::<Vec<String>>().ok())
            .map(|v| *v)
    }

    /// Hands theme, keymap, width and position to every field.
    fn init_fields(&mut self) {
        let count = self.fields.len();
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.with_theme(&self.theme);
            field.with_keymap(&self.keymap);
            field.with_width(self.width);
            field.with_position(FieldPosition::new(i, count));
        }
        self.initialized = true;
    }

    fn start(&mut self) -> Option<Cmd> {
        self.init_fields();
        for field in &mut self.fields {
            field.init();
        }
        self.current = self.fields.iter().position(|f| !f.skip()).unwrap_or(0);
        self.fields.get_mut(self.current).and_then(|f| f.focus())
    }

    fn next_field(&mut self) -> Option<Cmd> {
        if let Some(field) = self.fields.get_mut(self.current) {
            field.blur();
        }
        let next = (self.current + 1..self.fields.len()).find(|&i| !self.fields[i].skip());
        let Some(next) = next else {
            self.state = FormState::Completed;
            info!(fields = self.fields.len(), "Form completed");
            return Some(quit());
        };
        self.current = next;
        debug!(field = self.current, "Focus moved to next field");
        self.fields.get_mut(self.current).and_then(|f| f.focus())
    }

    fn prev_field(&mut self) -> Option<Cmd> {
        let Some(prev) = (0..self.current).rev().find(|&i| !self.fields[i].skip()) else {
            return None;
        };
        if let Some(field) = self.fields.get_mut(self.current) {
            field.blur();
        }
        self.current = prev;
        debug!(field = self.current, "Focus moved to previous field");
        self.fields.get_mut(self.current).and_then(|f| f.focus())
    }

    fn help_view(&self) -> String {
        let Some(field) = self.fields.get(self.current) else {
            return String::new();
        };
        let help = &self.theme.help;
        let separator = help.separator.render("");
        field
            .key_binds()
            .iter()
            .filter(|b| b.enabled())
            .map(|b| {
                let h = b.get_help();
                format!("{} {}", help.key.render(&h.key), help.desc.render(&h.desc))
            })
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// Runs every field in order as line-oriented prompts.
    pub fn run_accessible(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        if !self.initialized {
            self.init_fields();
        }
        let mut first = true;
        for i in 0..self.fields.len() {
            if self.fields[i].skip() {
                continue;
            }
            self.current = i;
            if !first {
                writeln!(output)?;
            }
            first = false;
            self.fields[i].run_accessible(input, output)?;
        }
        self.state = FormState::Completed;
        info!(fields = self.fields.len(), "Accessible form completed");
        Ok(())
    }
}

impl Model for Form {
    fn init(&mut self) -> Option<Cmd> {
        self.start()
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if !self.initialized {
            // Fields focus synchronously, so starting lazily yields no command.
            let cmd = self.start();
            debug_assert!(cmd.is_none(), "field focus returned a command");
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>()
            && self.keymap.quit.matches(key)
        {
            self.state = FormState::Aborted;
            info!("Form aborted");
            return Some(quit());
        }

        if self.state != FormState::Normal {
            return None;
        }

        if msg.is::<NextFieldMsg>() {
            return self.next_field();
        }
        if msg.is::<PrevFieldMsg>() {
            return self.prev_field();
        }

        self.fields
            .get_mut(self.current)
            .and_then(|f| f.update(&msg))
    }

    fn view(&self) -> String {
        let separator = self.theme.field_separator.render("");
        let mut output = self
            .fields
            .iter()
            .map(|f| f.view())
            .collect::<Vec<_>>()
            .join(&separator);

        if self.show_help && self.state == FormState::Normal {
            let help = self.help_view();
            if !help.is_empty() {
                output.push_str("\n\n");
                output.push_str(&help);
            }
        }

        self.theme.form.render(&output)
    }
}
