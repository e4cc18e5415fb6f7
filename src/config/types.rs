// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::marquee::DEFAULT_HOLD;

/// Marquee configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarqueeConfig {
    /// Visible width in terminal columns
    #[serde(default = "default_width")]
    pub width: u16,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_pixel_step")]
    pub pixel_step: f64,
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
    /// Colour name or `#rrggbb`; the theme colour when absent
    #[serde(default)]
    pub color: Option<String>,
}

fn default_width() -> u16 {
    40
}

fn default_delay_ms() -> u64 {
    60
}

fn default_pixel_step() -> f64 {
    1.0
}

fn default_font() -> String {
    "16px monospace".to_string()
}

fn default_hold_ms() -> u64 {
    DEFAULT_HOLD.as_millis() as u64
}

impl MarqueeConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        MarqueeConfig {
            width: default_width(),
            delay_ms: default_delay_ms(),
            pixel_step: default_pixel_step(),
            font: default_font(),
            hold_ms: default_hold_ms(),
            color: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub marquee: MarqueeConfig,
}
