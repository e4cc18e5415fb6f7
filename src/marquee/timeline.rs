use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::PADDING_PX;
use super::element::Px;

pub(crate) type SharedTimeline = Arc<Mutex<Timeline>>;

/// Lock the shared timeline, recovering the state if a holder panicked
pub(crate) fn lock(timeline: &SharedTimeline) -> MutexGuard<'_, Timeline> {
    timeline.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Where the animation loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    IdleStart,
    PausedBeforeScroll,
    Scrolling,
    PausedAfterScroll,
}

/// Result of one timer firing during the scroll phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The child moved to this position
    Moved(Px),
    /// The offset passed the target; the timer should stop
    Finished,
}

/// Scroll position of a marquee
///
/// `offset` counts pixels scrolled so far and `left` is the child position
/// derived from it. `left` only follows offsets within `[0, target]`, so the
/// tick that overshoots the target leaves the text where it was.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    offset: f64,
    target: f64,
    step: f64,
    left: Px,
    phase: Phase,
    playing: bool,
}

impl Timeline {
    pub fn new(target: f64, step: f64) -> Self {
        Self {
            offset: 0.0,
            target,
            step,
            left: Px(PADDING_PX),
            phase: Phase::IdleStart,
            playing: false,
        }
    }

    /// Advance by one pixel step
    pub fn tick(&mut self) -> TickOutcome {
        self.offset += self.step;
        if self.offset <= self.target {
            self.left = Px(PADDING_PX - self.offset);
            TickOutcome::Moved(self.left)
        } else {
            TickOutcome::Finished
        }
    }

    /// Back to the resting position
    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.left = Px(PADDING_PX);
    }

    /// Expected length of a scroll pass: `target * interval / step`
    ///
    /// Zero when there is nothing to scroll.
    pub fn scroll_estimate(&self, interval: Duration) -> Duration {
        let nanos = self.target * interval.as_nanos() as f64 / self.step;
        if nanos.is_finite() && nanos > 0.0 {
            Duration::from_nanos(nanos as u64)
        } else {
            Duration::ZERO
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn left(&self) -> Px {
        self.left
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub(crate) fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod timeline_tests;
