use std::collections::HashMap;
use std::fmt;

use super::backends::{CellMeasure, HeuristicMeasure, TextMeasure};
use crate::font::{self, FontSpec};

/// Owned measuring surface with a per-context width cache
///
/// The cache keeps every `(text, font)` pair measured for the life of the
/// context; call [`MeasureContext::clear_widths`] to drop it.
pub struct MeasureContext {
    backend: Box<dyn TextMeasure>,
    widths: HashMap<(String, String), f64>,
}

impl fmt::Debug for MeasureContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeasureContext")
            .field("cached_widths", &self.widths.len())
            .finish_non_exhaustive()
    }
}

impl Default for MeasureContext {
    fn default() -> Self {
        Self::heuristic()
    }
}

impl MeasureContext {
    pub fn new(backend: impl TextMeasure + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            widths: HashMap::new(),
        }
    }

    /// Pixel estimates from font size, see [`HeuristicMeasure`]
    pub fn heuristic() -> Self {
        Self::new(HeuristicMeasure::default())
    }

    /// Terminal columns, see [`CellMeasure`]
    pub fn cells() -> Self {
        Self::new(CellMeasure)
    }

    /// Advance width of `text` in `font`
    ///
    /// Unparseable fonts are measured as [`font::DEFAULT_FONT`].
    pub fn text_width(&mut self, text: &str, font: &str) -> f64 {
        let key = (text.to_string(), font.to_string());
        if let Some(width) = self.widths.get(&key) {
            return *width;
        }

        let spec = FontSpec::parse_or_default(font);
        let width = self.backend.advance_width(text, &spec).max(0.0);
        self.widths.insert(key, width);
        width
    }

    /// Line height of `font`, taken from the first number in the normalised description
    ///
    /// The font is applied the same way as for [`MeasureContext::text_width`]:
    /// `"2em arial"` is read as `32px arial` and an unparseable font as
    /// [`font::DEFAULT_FONT`]. The text does not affect the result; glyph
    /// extents are not measured.
    pub fn text_height(&self, _text: &str, font: &str) -> u32 {
        let applied = FontSpec::parse_or_default(font).to_string();
        font::leading_pixel_size(&applied).unwrap_or(0)
    }

    pub fn cached_widths(&self) -> usize {
        self.widths.len()
    }

    pub fn clear_widths(&mut self) {
        self.widths.clear();
    }
}

#[cfg(test)]
#[path = "measure_context_tests.rs"]
mod measure_context_tests;
