//! marquee library - horizontally scrolling text widget
//!
//! A [`MarqueeWidget`] is measured once at construction, rendered with
//! ratatui, and animated by a [`MarqueePlayer`] running on tokio.

pub mod app;
pub mod config;
pub mod error;
pub mod font;
pub mod marquee;
pub mod measure;

#[cfg(test)]
pub mod test_utils;
pub mod theme;

// Re-export commonly used types for convenience
pub use error::MarqueeError;
pub use marquee::{MarqueeOptions, MarqueePlayer, MarqueeWidget, Phase, PlayerStatus};
pub use measure::MeasureContext;
