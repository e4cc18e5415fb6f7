//! Shared test utilities for marquee
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::time::Duration;

    use ratatui::buffer::Buffer;

    use crate::marquee::{MarqueeOptions, MarqueeWidget};
    use crate::measure::MeasureContext;

    /// Title twelve columns wide, four more than [`CELL_BOX_WIDTH`]
    pub const TEST_TITLE: &str = "Hello World!";

    pub const CELL_BOX_WIDTH: f64 = 8.0;

    /// Marquee measured in terminal columns, so offsets are columns too
    pub fn cell_widget(title: &str, max_width: f64, font: &str) -> MarqueeWidget {
        let options = MarqueeOptions::new(max_width, title, Duration::from_millis(10), font);
        MarqueeWidget::new(options, &mut MeasureContext::cells())
    }

    /// Symbols of each buffer row joined into strings
    pub fn buffer_rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }
}
