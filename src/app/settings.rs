//! Settings for the demo screen
//!
//! Command-line values override the config file, which overrides the
//! built-in defaults.

use std::str::FromStr;
use std::time::Duration;

use ratatui::style::Color;

use crate::config::Config;
use crate::error::MarqueeError;
use crate::font::FontSpec;
use crate::marquee::MarqueeOptions;
use crate::theme;

/// Values given on the command line; `None` defers to the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub width: Option<u16>,
    pub delay_ms: Option<u64>,
    pub pixel_step: Option<f64>,
    pub font: Option<String>,
    pub hold_ms: Option<u64>,
    pub color: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub title: String,
    pub width: u16,
    pub delay: Duration,
    pub pixel_step: f64,
    pub font: String,
    pub hold: Duration,
    pub colour: Color,
    pub id: Option<String>,
}

impl Settings {
    /// Merge overrides with the config and reject values the player cannot run with
    pub fn resolve(
        title: &str,
        overrides: Overrides,
        config: &Config,
    ) -> Result<Self, MarqueeError> {
        let section = &config.marquee;

        let colour = match overrides.color.as_deref().or(section.color.as_deref()) {
            Some(name) => parse_colour(name)?,
            None => theme::marquee::DEMO_COLOUR,
        };

        let settings = Settings {
            title: title.to_string(),
            width: overrides.width.unwrap_or(section.width),
            delay: overrides
                .delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| section.delay()),
            pixel_step: overrides.pixel_step.unwrap_or(section.pixel_step),
            font: overrides.font.unwrap_or_else(|| section.font.clone()),
            hold: overrides
                .hold_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| section.hold()),
            colour,
            id: overrides.id,
        };

        if settings.delay.is_zero() {
            return Err(MarqueeError::ZeroInterval);
        }
        if settings.pixel_step <= 0.0 || settings.pixel_step.is_nan() {
            return Err(MarqueeError::NonPositiveStep(settings.pixel_step));
        }
        settings.font.parse::<FontSpec>()?;

        Ok(settings)
    }

    pub fn options(&self) -> MarqueeOptions {
        MarqueeOptions::new(
            self.width as f64,
            self.title.clone(),
            self.delay,
            self.font.clone(),
        )
        .pixel_step(self.pixel_step)
        .hold(self.hold)
    }
}

/// Parse a colour name (`red`, `light-blue`), index (`42`) or `#rrggbb`
pub fn parse_colour(name: &str) -> Result<Color, MarqueeError> {
    Color::from_str(name.trim()).map_err(|_| MarqueeError::InvalidColour(name.to_string()))
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
