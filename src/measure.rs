//! Text measurement for marquee geometry
//!
//! A [`MeasureContext`] is created by the caller and passed to widget
//! construction. It owns a [`TextMeasure`] backend and caches widths per
//! `(text, font)` pair.

mod backends;
mod measure_context;

pub use backends::{CellMeasure, HeuristicMeasure, TextMeasure};
pub use measure_context::MeasureContext;
