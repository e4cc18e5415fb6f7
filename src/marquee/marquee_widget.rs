use std::sync::{Arc, Mutex};
use std::time::Duration;

use ratatui::style::Color;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::element::{Border, ChildElement, Px, RootElement};
use super::player::{MarqueePlayer, PlayerStatus};
use super::timeline::{self, Phase, SharedTimeline, Timeline};
use super::{BORDER_WIDTH_PX, DEFAULT_HOLD, PADDING_PX, ROOT_CLASS};
use crate::error::MarqueeError;
use crate::font::FontSpec;
use crate::measure::MeasureContext;
use crate::theme;

/// Construction parameters for a [`MarqueeWidget`]
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeOptions {
    /// Visible width of the box; the text should be wider for anything to scroll
    pub max_width: f64,
    pub title: String,
    /// Time between two pixel steps
    pub delay: Duration,
    /// CSS font shorthand, e.g. `"bold 28px arial"`
    pub font: String,
    /// Pixels moved per step; missing, zero or NaN means 1
    pub pixel_step: Option<f64>,
    /// Pause at each end of a pass
    pub hold: Duration,
}

impl MarqueeOptions {
    pub fn new(
        max_width: f64,
        title: impl Into<String>,
        delay: Duration,
        font: impl Into<String>,
    ) -> Self {
        Self {
            max_width,
            title: title.into(),
            delay,
            font: font.into(),
            pixel_step: None,
            hold: DEFAULT_HOLD,
        }
    }

    pub fn pixel_step(mut self, pixel_step: f64) -> Self {
        self.pixel_step = Some(pixel_step);
        self
    }

    pub fn hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    fn resolved_pixel_step(&self) -> f64 {
        match self.pixel_step {
            Some(step) if step != 0.0 && !step.is_nan() => step,
            _ => 1.0,
        }
    }
}

/// A line of text that scrolls horizontally inside a fixed-width box
#[derive(Debug)]
pub struct MarqueeWidget {
    max_width: f64,
    delay: Duration,
    pixel_step: f64,
    hold: Duration,
    target_offset: f64,
    root: RootElement,
    timeline: SharedTimeline,
    status: Arc<watch::Sender<PlayerStatus>>,
}

impl MarqueeWidget {
    /// Build the root box and text child, measuring the title with `measure`
    ///
    /// The scroll target is fixed here as text width minus `max_width`; it is
    /// zero or negative when the text already fits.
    pub fn new(options: MarqueeOptions, measure: &mut MeasureContext) -> Self {
        let pixel_step = options.resolved_pixel_step();
        let height = measure.text_height(&options.title, &options.font);
        let text_width = measure.text_width(&options.title, &options.font);
        let target_offset = text_width - options.max_width;

        #[cfg(debug_assertions)]
        log::debug!(
            "Marquee {:?}: text width {} in box {}, target offset {}",
            options.title,
            text_width,
            options.max_width,
            target_offset
        );

        let timeline = Arc::new(Mutex::new(Timeline::new(target_offset, pixel_step)));
        let (status, _) = watch::channel(PlayerStatus::default());

        let child = ChildElement {
            text: options.title,
            font: FontSpec::parse_or_default(&options.font),
            font_description: options.font,
            width: Px(text_width),
            color: None,
            timeline: Arc::clone(&timeline),
        };

        let root = RootElement {
            id: None,
            classes: vec![ROOT_CLASS.to_string()],
            padding: Px(PADDING_PX),
            width: Px(options.max_width),
            height: Px(height as f64),
            border: Border::solid(Px(BORDER_WIDTH_PX), theme::marquee::DEFAULT_COLOUR),
            child,
        };

        Self {
            max_width: options.max_width,
            delay: options.delay,
            pixel_step,
            hold: options.hold,
            target_offset,
            root,
            timeline,
            status: Arc::new(status),
        }
    }

    /// The root box, for attaching to whatever draws it
    pub fn root(&self) -> &RootElement {
        &self.root
    }

    /// Give the root box an identifier for later lookup
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.root.id = Some(id.into());
    }

    /// Use `colour` for both the border and the text
    ///
    /// The border is always reset to 5px solid.
    pub fn set_colour(&mut self, colour: Color) {
        self.root.border = Border::solid(Px(BORDER_WIDTH_PX), colour);
        self.root.child.color = Some(colour);
    }

    pub fn colour(&self) -> Color {
        self.root.border.color
    }

    pub fn title(&self) -> &str {
        self.root.child.text()
    }

    pub fn max_width(&self) -> f64 {
        self.max_width
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn pixel_step(&self) -> f64 {
        self.pixel_step
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }

    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }

    pub fn current_offset(&self) -> f64 {
        timeline::lock(&self.timeline).offset()
    }

    pub fn phase(&self) -> Phase {
        timeline::lock(&self.timeline).phase()
    }

    pub fn is_playing(&self) -> bool {
        timeline::lock(&self.timeline).is_playing()
    }

    /// Watch phase changes and completed cycles
    pub fn subscribe(&self) -> watch::Receiver<PlayerStatus> {
        self.status.subscribe()
    }

    /// Create the animation loop for this marquee
    ///
    /// Only one player may exist at a time; dropping it (or cancelling
    /// `cancel` and letting `run` return) frees the slot again.
    pub fn player(&self, cancel: CancellationToken) -> Result<MarqueePlayer, MarqueeError> {
        if self.delay.is_zero() {
            return Err(MarqueeError::ZeroInterval);
        }
        if self.pixel_step <= 0.0 {
            return Err(MarqueeError::NonPositiveStep(self.pixel_step));
        }

        {
            let mut timeline = timeline::lock(&self.timeline);
            if timeline.is_playing() {
                return Err(MarqueeError::AlreadyPlaying);
            }
            timeline.set_playing(true);
        }

        Ok(MarqueePlayer::new(
            Arc::clone(&self.timeline),
            Arc::clone(&self.status),
            self.delay,
            self.hold,
            cancel,
        ))
    }

    /// Pixels currently scrolled out on the left, as shown on screen
    pub(crate) fn scrolled_px(&self) -> f64 {
        PADDING_PX - self.root.child.left().0
    }

    #[cfg(test)]
    pub(crate) fn timeline(&self) -> &SharedTimeline {
        &self.timeline
    }
}

#[cfg(test)]
#[path = "marquee_widget_tests.rs"]
mod marquee_widget_tests;
