#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Listform
//!
//! A terminal form field for entering an open-ended list of short text
//! values, such as "name some fruits".
//!
//! The centerpiece is [`ListInput`]: a growing column of single-line text
//! entries. Submitting a non-empty value in the last entry appends a new
//! one; submitting the empty last entry moves on to the next field. Every
//! keystroke is mirrored into a [`ListValue`] the caller holds.
//!
//! Around it the crate provides what the field needs to run end to end:
//! - a single-line [`TextInput`] with suggestions and echo modes
//! - an Elm-style [`Message`]/[`Cmd`] layer and a [`Model`] trait
//! - keybindings ([`Binding`], [`KeyMap`]) and themes ([`Theme`])
//! - a flat [`Form`] that sequences fields
//! - a terminal [`Program`] runner and a headless [`ProgramSimulator`]
//! - a line-oriented accessible mode ([`Field::run_accessible`])
//!
//! ## Example
//!
//! ```rust
//! use listform::{Form, KeyType, ListInput, ListValue, ProgramSimulator};
//!
//! let fruits = ListValue::new();
//! let form = Form::new(vec![Box::new(
//!     ListInput::new()
//!         .key("fruits")
//!         .title("Name some fruits")
//!         .value(fruits.clone()),
//! )]);
//!
//! let mut sim = ProgramSimulator::new(form);
//! sim.type_text("apple");
//! sim.press(KeyType::Enter);
//! sim.type_text("banana");
//! sim.press(KeyType::Enter);
//! sim.press(KeyType::Enter);
//! sim.run_until_quit(100);
//!
//! assert_eq!(fruits.get(), vec!["apple", "banana", ""]);
//! ```
//!
//! For a real terminal, hand the form to [`Program::run`] instead.

pub mod accessible;
pub mod entry;
pub mod error;
pub mod field;
pub mod form;
pub mod key;
pub mod keymap;
pub mod list_input;
pub mod message;
pub mod program;
pub mod simulator;
pub mod style;
pub mod textinput;
pub mod theme;

pub use entry::EntryTemplate;
pub use error::{FormError, Result};
pub use field::{
    Field, FieldPosition, Validator, always_valid, validate_all, validate_max_length,
    validate_min_length, validate_required, validator,
};
pub use form::{Form, FormState};
pub use key::{Binding, Help, KeyMsg, KeyType, from_crossterm_key};
pub use keymap::{InputKeyMap, KeyMap};
pub use list_input::{EmptyTail, ListInput, ListValue};
pub use message::{
    Cmd, Message, Model, NextFieldMsg, PrevFieldMsg, QuitMsg, next_field, prev_field, quit,
};
pub use program::Program;
pub use simulator::{ProgramSimulator, SimulationStats};
pub use style::{Border, Style};
pub use textinput::{EchoMode, TextInput};
pub use theme::{
    FieldStyles, HelpStyles, THEME_NAMES, TextInputStyles, Theme, theme_base, theme_base16,
    theme_by_name, theme_charm, theme_dracula,
};
