//! Terminal styles for rendering fields.
//!
//! A small styling layer: foreground/background colors, a few
//! text attributes, horizontal padding and an optional left border. ANSI
//! sequences are produced by crossterm, which also honors `NO_COLOR`.
//!
//! ```rust
//! use listform::{Border, Style};
//!
//! let style = Style::new()
//!     .bold()
//!     .foreground("#7571F9")
//!     .padding_left(1)
//!     .border(Border::thick());
//! let out = style.render("Fruits");
//! assert!(out.contains("Fruits"));
//! ```

use bitflags::bitflags;
use crossterm::style::{Attribute, Attributes, Color, ContentStyle};
use unicode_width::UnicodeWidthStr;

bitflags! {
    /// Text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct Attrs: u8 {
        const BOLD = 1 << 0;
        const FAINT = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const REVERSE = 1 << 4;
    }
}

/// Left-edge border glyphs.
///
/// Fields only ever draw a left edge, which is how focus is signalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    /// Glyph drawn at the start of every line.
    pub left: &'static str,
}

impl Border {
    /// A thin line (`│`).
    pub const fn normal() -> Self {
        Self { left: "│" }
    }

    /// A heavy line (`┃`).
    pub const fn thick() -> Self {
        Self { left: "┃" }
    }

    /// Reserves the border column without drawing anything.
    pub const fn hidden() -> Self {
        Self { left: " " }
    }
}

/// Parse a color string: `#rrggbb` hex or an ANSI 256 index such as `"238"`.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb { r, g, b });
    }
    s.parse::<u8>().ok().map(Color::AnsiValue)
}

/// A set of visual properties applied when rendering text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    value: String,
    fg: Option<Color>,
    bg: Option<Color>,
    attrs: Attrs,
    padding_left: u16,
    padding_right: u16,
    border: Option<Border>,
    border_fg: Option<Color>,
    inline: bool,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text rendered in front of whatever is passed to [`render`](Self::render).
    pub fn set_string(mut self, s: impl Into<String>) -> Self {
        self.value = s.into();
        self
    }

    /// Returns the stored string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Bold text.
    pub fn bold(mut self) -> Self {
        self.attrs |= Attrs::BOLD;
        self
    }

    /// Dim text.
    pub fn faint(mut self) -> Self {
        self.attrs |= Attrs::FAINT;
        self
    }

    /// Italic text.
    pub fn italic(mut self) -> Self {
        self.attrs |= Attrs::ITALIC;
        self
    }

    /// Underlined text.
    pub fn underline(mut self) -> Self {
        self.attrs |= Attrs::UNDERLINE;
        self
    }

    /// Swap foreground and background.
    pub fn reverse(mut self) -> Self {
        self.attrs |= Attrs::REVERSE;
        self
    }

    /// Sets the foreground color. Unparseable colors are ignored.
    pub fn foreground(mut self, color: impl Into<String>) -> Self {
        self.fg = parse_color(&color.into());
        self
    }

    /// Sets the background color. Unparseable colors are ignored.
    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.bg = parse_color(&color.into());
        self
    }

    /// Spaces inserted before each line (inside the border).
    pub fn padding_left(mut self, n: u16) -> Self {
        self.padding_left = n;
        self
    }

    /// Spaces appended to each line.
    pub fn padding_right(mut self, n: u16) -> Self {
        self.padding_right = n;
        self
    }

    /// Sets the left border.
    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Sets the border color.
    pub fn border_foreground(mut self, color: impl Into<String>) -> Self {
        self.border_fg = parse_color(&color.into());
        self
    }

    /// Render on a single line, dropping newlines.
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Columns added around the content (border plus padding).
    pub fn horizontal_frame_size(&self) -> usize {
        let border = self.border.map_or(0, |b| b.left.width());
        border + self.padding_left as usize + self.padding_right as usize
    }

    fn content_style(&self) -> ContentStyle {
        let mut attributes = Attributes::default();
        for (flag, attr) in [
            (Attrs::BOLD, Attribute::Bold),
            (Attrs::FAINT, Attribute::Dim),
            (Attrs::ITALIC, Attribute::Italic),
            (Attrs::UNDERLINE, Attribute::Underlined),
            (Attrs::REVERSE, Attribute::Reverse),
        ] {
            if self.attrs.contains(flag) {
                attributes.set(attr);
            }
        }
        ContentStyle {
            foreground_color: self.fg,
            background_color: self.bg,
            underline_color: None,
            attributes,
        }
    }

    fn paint(&self, text: &str) -> String {
        if text.is_empty() || (self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()) {
            return text.to_string();
        }
        self.content_style().apply(text).to_string()
    }

    /// Render the given text with this style applied.
    pub fn render(&self, text: &str) -> String {
        let mut content = format!("{}{}", self.value, text);
        if self.inline {
            content = content.replace(['\r', '\n'], "");
        }

        let border = self.border.map(|b| {
            let glyph = b.left;
            match self.border_fg {
                Some(color) => ContentStyle {
                    foreground_color: Some(color),
                    ..ContentStyle::default()
                }
                .apply(glyph)
                .to_string(),
                None => glyph.to_string(),
            }
        });
        let left_pad = " ".repeat(self.padding_left as usize);
        let right_pad = " ".repeat(self.padding_right as usize);

        content
            .split('\n')
            .map(|line| {
                let mut out = String::new();
                if let Some(border) = &border {
                    out.push_str(border);
                }
                out.push_str(&left_pad);
                out.push_str(&self.paint(line));
                out.push_str(&right_pad);
                out
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
