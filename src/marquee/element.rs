//! Display elements owned by a marquee
//!
//! The root box clips a single absolutely positioned child holding the text.
//! Only the child's `left` changes once the widget is built.

use std::fmt;

use ratatui::style::Color;

use super::timeline::{self, SharedTimeline};
use crate::font::FontSpec;

/// A length in pixels, displayed CSS-style as `5px`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Px(pub f64);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Relative,
    Absolute,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Relative => write!(f, "relative"),
            Position::Absolute => write!(f, "absolute"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Hidden,
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overflow::Hidden => write!(f, "hidden"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Solid,
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorderStyle::Solid => write!(f, "solid"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: Px,
    pub style: BorderStyle,
    pub color: Color,
}

impl Border {
    pub fn solid(width: Px, color: Color) -> Self {
        Self {
            width,
            style: BorderStyle::Solid,
            color,
        }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.width, self.style, colour_name(self.color))
    }
}

/// CSS-ish colour name: lowercase names, `#rrggbb` for RGB
fn colour_name(color: Color) -> String {
    match color {
        Color::Reset => "currentcolor".to_string(),
        Color::Black => "black".to_string(),
        Color::Red => "red".to_string(),
        Color::Green => "green".to_string(),
        Color::Yellow => "yellow".to_string(),
        Color::Blue => "blue".to_string(),
        Color::Magenta => "magenta".to_string(),
        Color::Cyan => "cyan".to_string(),
        Color::Gray => "gray".to_string(),
        Color::DarkGray => "darkgray".to_string(),
        Color::LightRed => "lightred".to_string(),
        Color::LightGreen => "lightgreen".to_string(),
        Color::LightYellow => "lightyellow".to_string(),
        Color::LightBlue => "lightblue".to_string(),
        Color::LightMagenta => "lightmagenta".to_string(),
        Color::LightCyan => "lightcyan".to_string(),
        Color::White => "white".to_string(),
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        Color::Indexed(i) => format!("indexed({})", i),
    }
}

/// The text box inside the root; positioned by the scroll timeline
#[derive(Debug)]
pub struct ChildElement {
    pub(super) text: String,
    pub(super) font: FontSpec,
    pub(super) font_description: String,
    pub(super) width: Px,
    pub(super) color: Option<Color>,
    pub(super) timeline: SharedTimeline,
}

impl ChildElement {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Position {
        Position::Absolute
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// The font description as given at construction
    pub fn font_description(&self) -> &str {
        &self.font_description
    }

    pub fn width(&self) -> Px {
        self.width
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Current horizontal position inside the root
    pub fn left(&self) -> Px {
        timeline::lock(&self.timeline).left()
    }
}

/// The clipping box a marquee hands out for attachment to a display tree
#[derive(Debug)]
pub struct RootElement {
    pub(super) id: Option<String>,
    pub(super) classes: Vec<String>,
    pub(super) padding: Px,
    pub(super) width: Px,
    pub(super) height: Px,
    pub(super) border: Border,
    pub(super) child: ChildElement,
}

impl RootElement {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn position(&self) -> Position {
        Position::Relative
    }

    pub fn overflow(&self) -> Overflow {
        Overflow::Hidden
    }

    pub fn padding(&self) -> Px {
        self.padding
    }

    pub fn width(&self) -> Px {
        self.width
    }

    pub fn height(&self) -> Px {
        self.height
    }

    pub fn border(&self) -> Border {
        self.border
    }

    pub fn child(&self) -> &ChildElement {
        &self.child
    }
}
