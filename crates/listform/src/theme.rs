//! Themes: the focused/blurred style sets fields render with.

use crate::style::{Border, Style};

/// Collection of styles for a form and its fields.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Base style wrapped around the whole form.
    pub form: Style,
    /// Separator between fields.
    pub field_separator: Style,
    /// Styles for blurred (unfocused) fields and entries.
    pub blurred: FieldStyles,
    /// Styles for focused fields and entries.
    pub focused: FieldStyles,
    /// Styles for the key help line.
    pub help: HelpStyles,
}

impl Default for Theme {
    fn default() -> Self {
        theme_charm()
    }
}

/// Styles for one field in one focus state.
#[derive(Debug, Clone, Default)]
pub struct FieldStyles {
    /// Base style wrapped around each rendered entry.
    pub base: Style,
    /// Title style.
    pub title: Style,
    /// Description style.
    pub description: Style,
    /// Error indicator shown next to the offending entry.
    pub error_indicator: Style,
    /// Error message style.
    pub error_message: Style,
    /// Text input specific styles.
    pub text_input: TextInputStyles,
}

/// Styles for text inputs.
#[derive(Debug, Clone, Default)]
pub struct TextInputStyles {
    /// Cursor style.
    pub cursor: Style,
    /// Placeholder style.
    pub placeholder: Style,
    /// Prompt style.
    pub prompt: Style,
    /// Text style.
    pub text: Style,
}

/// Styles for the help line under the form.
#[derive(Debug, Clone, Default)]
pub struct HelpStyles {
    /// Key names (`enter`, `shift+tab`).
    pub key: Style,
    /// Binding descriptions.
    pub desc: Style,
    /// Separator between bindings.
    pub separator: Style,
}

/// Returns the base theme: structure only, almost no color.
pub fn theme_base() -> Theme {
    let mut focused = FieldStyles {
        base: Style::new().padding_left(1).border(Border::thick()),
        error_indicator: Style::new().set_string(" *"),
        error_message: Style::new().set_string(" *"),
        ..FieldStyles::default()
    };
    focused.text_input.placeholder = Style::new().foreground("8");

    let mut blurred = focused.clone();
    blurred.base = blurred.base.border(Border::hidden());

    Theme {
        form: Style::new(),
        field_separator: Style::new().set_string("\n\n"),
        focused,
        blurred,
        help: HelpStyles {
            key: Style::new().foreground("241"),
            desc: Style::new().foreground("239"),
            separator: Style::new().foreground("237").set_string(" • "),
        },
    }
}

/// Returns the Charm theme (default).
pub fn theme_charm() -> Theme {
    let mut t = theme_base();

    let indigo = "#7571F9";
    let fuchsia = "#F780E2";
    let green = "#02BF87";
    let red = "#ED567A";
    let normal_fg = "252";

    t.focused.base = t.focused.base.border_foreground("238");
    t.focused.title = t.focused.title.foreground(indigo).bold();
    t.focused.description = t.focused.description.foreground("243");
    t.focused.error_indicator = t.focused.error_indicator.foreground(red);
    t.focused.error_message = t.focused.error_message.foreground(red);
    t.focused.text_input.cursor = t.focused.text_input.cursor.foreground(green);
    t.focused.text_input.placeholder = t.focused.text_input.placeholder.foreground("238");
    t.focused.text_input.prompt = t.focused.text_input.prompt.foreground(fuchsia);
    t.focused.text_input.text = t.focused.text_input.text.foreground(normal_fg);

    t.blurred = t.focused.clone();
    t.blurred.base = t.focused.base.clone().border(Border::hidden());

    t
}

/// Returns the Dracula theme.
pub fn theme_dracula() -> Theme {
    let mut t = theme_base();

    let selection = "#44475a";
    let foreground = "#f8f8f2";
    let comment = "#6272a4";
    let purple = "#bd93f9";
    let red = "#ff5555";
    let yellow = "#f1fa8c";

    t.focused.base = t.focused.base.border_foreground(selection);
    t.focused.title = t.focused.title.foreground(purple);
    t.focused.description = t.focused.description.foreground(comment);
    t.focused.error_indicator = t.focused.error_indicator.foreground(red);
    t.focused.error_message = t.focused.error_message.foreground(red);
    t.focused.text_input.cursor = t.focused.text_input.cursor.foreground(yellow);
    t.focused.text_input.placeholder = t.focused.text_input.placeholder.foreground(comment);
    t.focused.text_input.prompt = t.focused.text_input.prompt.foreground(yellow);
    t.focused.text_input.text = t.focused.text_input.text.foreground(foreground);

    t.blurred = t.focused.clone();
    t.blurred.base = t.blurred.base.border(Border::hidden());

    t
}

/// Returns the Base16 theme, built from the terminal's 16 ANSI colors.
pub fn theme_base16() -> Theme {
    let mut t = theme_base();

    t.focused.base = t.focused.base.border_foreground("8");
    t.focused.title = t.focused.title.foreground("6");
    t.focused.description = t.focused.description.foreground("8");
    t.focused.error_indicator = t.focused.error_indicator.foreground("9");
    t.focused.error_message = t.focused.error_message.foreground("9");
    t.focused.text_input.cursor = t.focused.text_input.cursor.foreground("3");
    t.focused.text_input.prompt = t.focused.text_input.prompt.foreground("3");

    t.blurred = t.focused.clone();
    t.blurred.base = t.blurred.base.border(Border::hidden());
    t.blurred.title = t.blurred.title.foreground("8");
    t.blurred.text_input.prompt = t.blurred.text_input.prompt.foreground("8");
    t.blurred.text_input.text = t.blurred.text_input.text.foreground("7");

    t
}

/// Looks up a preset theme by name (`base`, `charm`, `dracula`, `base16`).
pub fn theme_by_name(name: &str) -> Option<Theme> {
    match name.to_ascii_lowercase().as_str() {
        "base" => Some(theme_base()),
        "charm" => Some(theme_charm()),
        "dracula" => Some(theme_dracula()),
        "base16" => Some(theme_base16()),
        _ => None,
    }
}

/// Names accepted by [`theme_by_name`].
pub const THEME_NAMES: &[&str] = &["charm", "dracula", "base16", "base"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_by_name() {
        for name in THEME_NAMES {
            assert!(theme_by_name(name).is_some(), "{name}");
        }
        assert!(theme_by_name("Dracula").is_some());
        assert!(theme_by_name("solarized").is_none());
    }

    #[test]
    fn test_focused_and_blurred_share_frame_width() {
        for name in THEME_NAMES {
            let t = theme_by_name(name).unwrap();
            assert_eq!(
                t.focused.base.horizontal_frame_size(),
                t.blurred.base.horizontal_frame_size(),
                "{name}"
            );
        }
    }

    #[test]
    fn test_error_indicator() {
        let t = theme_base();
        assert_eq!(t.focused.error_indicator.render(""), " *");
    }
}
