//! Centralized colours for the marquee and the demo screen.
//!
//! Render code uses `theme::module::CONSTANT` rather than hardcoded
//! `Color::*` values.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
}

/// Marquee widget defaults
pub mod marquee {
    use super::*;

    /// Border colour until `set_colour` is called
    pub const DEFAULT_COLOUR: Color = Color::Black;

    /// Colour the demo binary applies when none is configured
    pub const DEMO_COLOUR: Color = palette::YELLOW;
}

/// Status line under the marquee in the demo binary
pub mod status {
    use super::*;

    pub const TEXT: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const PHASE: Style = Style::new().fg(palette::TEXT).add_modifier(Modifier::BOLD);
    pub const HINT: Style = Style::new().fg(palette::TEXT_DIM);
    pub const WARNING: Style = Style::new().fg(palette::WARNING);
}
