use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::marquee::Phase;
use crate::theme;

/// Rows taken by the marquee box: one line of text plus borders
const MARQUEE_HEIGHT: u16 = 3;

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::IdleStart => "idle",
        Phase::PausedBeforeScroll => "holding",
        Phase::Scrolling => "scrolling",
        Phase::PausedAfterScroll => "holding at end",
    }
}

impl App {
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let marquee_area = self.marquee_area(area);
        frame.render_widget(&self.widget, marquee_area);

        let status_y = marquee_area.y.saturating_add(marquee_area.height);
        if status_y < area.bottom() {
            let status_area = Rect::new(area.x, status_y, area.width, 1);
            frame.render_widget(
                Paragraph::new(self.status_line()).centered(),
                status_area,
            );
        }

        let Some(warning) = &self.warning else {
            return;
        };
        if area.height > 0 {
            let warning_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(warning.as_str(), theme::status::WARNING)),
                warning_area,
            );
        }
    }

    /// Centre the marquee box, shrinking it to fit small terminals
    fn marquee_area(&self, area: Rect) -> Rect {
        let width = self.box_width.saturating_add(2).min(area.width);
        let height = MARQUEE_HEIGHT.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    fn status_line(&self) -> Line<'static> {
        let status = self.status();
        Line::from(vec![
            Span::styled(phase_label(status.phase), theme::status::PHASE),
            Span::styled(
                format!(
                    "  offset {}/{}  cycle {}",
                    self.widget.scrolled_px(),
                    self.widget.target_offset().max(0.0),
                    status.cycles
                ),
                theme::status::TEXT,
            ),
            Span::styled("  q quit", theme::status::HINT),
        ])
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
