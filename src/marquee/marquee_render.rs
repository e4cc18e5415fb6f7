//! Marquee rendering
//!
//! Draws the root box as a bordered block and the title as one line,
//! shifted left by however far the timeline has scrolled.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::marquee_widget::MarqueeWidget;

impl MarqueeWidget {
    /// Terminal columns scrolled out on the left
    ///
    /// Measured widths may be in pixels, so the scroll distance is scaled by
    /// the title's column count over its measured width.
    pub fn scrolled_columns(&self) -> u16 {
        let child = self.root().child();
        let text_columns = Span::raw(child.text()).width() as f64;
        let width = child.width().0;
        if width <= 0.0 || text_columns == 0.0 {
            return 0;
        }

        let columns = (self.scrolled_px() * text_columns / width).floor();
        columns.clamp(0.0, u16::MAX as f64) as u16
    }

    fn text_style(&self) -> Style {
        let child = self.root().child();
        let mut style = Style::default();
        if let Some(color) = child.color() {
            style = style.fg(color);
        }
        if child.font().is_bold() {
            style = style.add_modifier(Modifier::BOLD);
        }
        if child.font().is_italic() {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }
}

impl Widget for &MarqueeWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_style(Style::default().fg(self.colour()));
        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(Span::styled(self.title(), self.text_style()));
        Paragraph::new(line)
            .scroll((0, self.scrolled_columns()))
            .render(inner, buf);
    }
}

#[cfg(test)]
#[path = "marquee_render_tests.rs"]
mod marquee_render_tests;
