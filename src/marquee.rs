//! Marquee widget
//!
//! A single line of text that scrolls left inside a fixed-width box, holding
//! still for a moment at each end before starting over.

mod element;
mod marquee_render;
mod marquee_widget;
mod player;
mod timeline;

use std::time::Duration;

pub use element::{Border, BorderStyle, ChildElement, Overflow, Position, Px, RootElement};
pub use marquee_widget::{MarqueeOptions, MarqueeWidget};
pub use player::{MarqueePlayer, PlayerStatus};
pub use timeline::{Phase, TickOutcome, Timeline};

/// Inner padding of the root box; the child's resting position
pub const PADDING_PX: f64 = 5.0;

/// Border width applied by construction and by every colour change
pub const BORDER_WIDTH_PX: f64 = 5.0;

/// Pause before and after each scroll pass
pub const DEFAULT_HOLD: Duration = Duration::from_millis(1500);

/// Class carried by every marquee root element
pub const ROOT_CLASS: &str = "marquee-widget";
