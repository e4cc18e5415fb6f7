use std::thread::{self, JoinHandle};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::settings::Settings;
use crate::error::MarqueeError;
use crate::marquee::{MarqueeWidget, PlayerStatus};
use crate::measure::MeasureContext;

/// Demo screen: one marquee plus a status line
#[derive(Debug)]
pub struct App {
    pub(super) widget: MarqueeWidget,
    pub(super) status: watch::Receiver<PlayerStatus>,
    pub(super) warning: Option<String>,
    pub(super) box_width: u16,
    cancel: CancellationToken,
    should_quit: bool,
}

impl App {
    /// Build the marquee from `settings`, measuring in `measure`'s units
    pub fn new(
        settings: &Settings,
        measure: &mut MeasureContext,
        warning: Option<String>,
    ) -> Self {
        let mut widget = MarqueeWidget::new(settings.options(), measure);
        widget.set_colour(settings.colour);
        if let Some(id) = &settings.id {
            widget.set_id(id.clone());
        }

        let status = widget.subscribe();
        Self {
            widget,
            status,
            warning,
            box_width: settings.width,
            cancel: CancellationToken::new(),
            should_quit: false,
        }
    }

    pub fn widget(&self) -> &MarqueeWidget {
        &self.widget
    }

    pub fn status(&self) -> PlayerStatus {
        *self.status.borrow()
    }

    /// Start the animation loop on a background thread
    ///
    /// The thread owns a single-threaded tokio runtime and exits once
    /// [`App::quit`] cancels the player.
    pub fn spawn_player(&self) -> Result<JoinHandle<()>, MarqueeError> {
        let player = self.widget.player(self.cancel.clone())?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(thread::spawn(move || {
            runtime.block_on(player.run());

            #[cfg(debug_assertions)]
            log::debug!("Player thread finished");
        }))
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stop the player and leave the event loop
    pub fn quit(&mut self) {
        self.should_quit = true;
        self.cancel.cancel();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
