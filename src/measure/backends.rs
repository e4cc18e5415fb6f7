//! Text measurement backends

use ratatui::text::Span;

use crate::font::FontSpec;

/// Measures the advance width of a single line of text
pub trait TextMeasure: Send {
    /// Width of `text` rendered in `font`, in the backend's units
    fn advance_width(&self, text: &str, font: &FontSpec) -> f64;
}

/// Terminal columns occupied by `text`; wide glyphs take two
fn display_columns(text: &str) -> usize {
    Span::raw(text).width()
}

/// Estimates pixel widths from the font size alone
///
/// Assumes an average advance of ~0.6em per terminal column, which is close
/// enough for proportional Latin fonts and exact for most monospace ones.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicMeasure {
    pub em_per_column: f64,
}

impl Default for HeuristicMeasure {
    fn default() -> Self {
        Self { em_per_column: 0.6 }
    }
}

impl TextMeasure for HeuristicMeasure {
    fn advance_width(&self, text: &str, font: &FontSpec) -> f64 {
        self.em_per_column * font.size_px * display_columns(text) as f64
    }
}

/// One unit per terminal column, regardless of font
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn advance_width(&self, text: &str, _font: &FontSpec) -> f64 {
        display_columns(text) as f64
    }
}
