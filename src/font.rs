//! Font description parsing
//!
//! Marquee fonts are given as CSS font shorthand strings such as
//! `"bold 28px arial"`. [`FontSpec`] holds the parsed form used for width
//! measurement and render modifiers, while [`leading_pixel_size`] reproduces
//! the line-height approximation: the first run of digits in the normalised
//! description.

use std::fmt;
use std::str::FromStr;

use crate::error::MarqueeError;

/// Font used when a description cannot be parsed
pub const DEFAULT_FONT: &str = "10px sans-serif";

const PX_PER_EM: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// Parsed CSS font shorthand
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub style: FontStyle,
    pub small_caps: bool,
    /// Numeric weight, 400 = normal, 700 = bold
    pub weight: u16,
    pub size_px: f64,
    pub family: String,
}

impl FontSpec {
    pub fn is_bold(&self) -> bool {
        self.weight >= 600
    }

    pub fn is_italic(&self) -> bool {
        self.style != FontStyle::Normal
    }

    /// Parse a font description, falling back to [`DEFAULT_FONT`] when it is invalid
    pub fn parse_or_default(font: &str) -> Self {
        match font.parse() {
            Ok(spec) => spec,
            Err(_e) => {
                #[cfg(debug_assertions)]
                log::debug!("Ignoring font {:?} ({}), using {}", font, _e, DEFAULT_FONT);
                Self::default()
            }
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            style: FontStyle::Normal,
            small_caps: false,
            weight: 400,
            size_px: 10.0,
            family: "sans-serif".to_string(),
        }
    }
}

impl FromStr for FontSpec {
    type Err = MarqueeError;

    fn from_str(font: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| MarqueeError::InvalidFont {
            font: font.to_string(),
            reason: reason.to_string(),
        };

        let mut spec = FontSpec {
            family: String::new(),
            ..FontSpec::default()
        };
        let mut tokens = font.split_whitespace();
        let mut size = None;

        for token in tokens.by_ref() {
            match token.to_ascii_lowercase().as_str() {
                "normal" => {}
                "italic" => spec.style = FontStyle::Italic,
                "oblique" => spec.style = FontStyle::Oblique,
                "small-caps" => spec.small_caps = true,
                "bold" | "bolder" => spec.weight = 700,
                "lighter" => spec.weight = 300,
                other => {
                    if let Some(weight) = parse_weight(other) {
                        spec.weight = weight;
                    } else if let Some(px) = parse_size(other) {
                        size = Some(px);
                        break;
                    } else {
                        return Err(invalid(&format!("unexpected token {:?}", token)));
                    }
                }
            }
        }

        spec.size_px = size.ok_or_else(|| invalid("missing font size"))?;
        spec.family = tokens.collect::<Vec<_>>().join(" ");
        if spec.family.is_empty() {
            return Err(invalid("missing font family"));
        }

        Ok(spec)
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            FontStyle::Normal => {}
            FontStyle::Italic => write!(f, "italic ")?,
            FontStyle::Oblique => write!(f, "oblique ")?,
        }
        if self.small_caps {
            write!(f, "small-caps ")?;
        }
        match self.weight {
            400 => {}
            700 => write!(f, "bold ")?,
            w => write!(f, "{} ", w)?,
        }
        write!(f, "{}px {}", self.size_px, self.family)
    }
}

/// Numeric weights are multiples of 100 between 100 and 900
fn parse_weight(token: &str) -> Option<u16> {
    let weight: u16 = token.parse().ok()?;
    ((100..=900).contains(&weight) && weight % 100 == 0).then_some(weight)
}

/// Parse `<number><unit>[/line-height]` into pixels
fn parse_size(token: &str) -> Option<f64> {
    let size = token.split('/').next()?;
    let unit_start = size.find(|c: char| c.is_ascii_alphabetic())?;
    let value: f64 = size[..unit_start].parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    match &size[unit_start..] {
        "px" => Some(value),
        "pt" => Some(value * 4.0 / 3.0),
        "em" | "rem" => Some(value * PX_PER_EM),
        _ => None,
    }
}

/// Integer value of the first run of ASCII digits in a font description
///
/// `"bold 28px arial"` gives 28. Numeric weights come first in the
/// shorthand, so `"600 16px arial"` gives 600. Runs too long for a `u32`
/// saturate.
pub fn leading_pixel_size(font: &str) -> Option<u32> {
    let start = font.find(|c: char| c.is_ascii_digit())?;
    let rest = &font[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(rest[..end].parse().unwrap_or(u32::MAX))
}

#[cfg(test)]
#[path = "font_tests.rs"]
mod font_tests;
