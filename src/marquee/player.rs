//! Animation loop for a marquee
//!
//! Hold, scroll until the text's right edge reaches the box, hold, reset,
//! repeat. The loop runs as a single task and checks its cancellation token
//! at every wait and on every timer tick.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::timeline::{self, Phase, SharedTimeline, TickOutcome};

/// Published by a running player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerStatus {
    pub phase: Phase,
    /// Completed hold-scroll-hold-reset cycles
    pub cycles: u64,
    pub playing: bool,
}

/// Drives a marquee's timeline; see [`super::MarqueeWidget::player`]
#[derive(Debug)]
pub struct MarqueePlayer {
    timeline: SharedTimeline,
    status: Arc<watch::Sender<PlayerStatus>>,
    delay: Duration,
    hold: Duration,
    cancel: CancellationToken,
}

impl MarqueePlayer {
    pub(super) fn new(
        timeline: SharedTimeline,
        status: Arc<watch::Sender<PlayerStatus>>,
        delay: Duration,
        hold: Duration,
        cancel: CancellationToken,
    ) -> Self {
        status.send_modify(|s| s.playing = true);
        Self {
            timeline,
            status,
            delay,
            hold,
            cancel,
        }
    }

    pub fn status(&self) -> watch::Receiver<PlayerStatus> {
        self.status.subscribe()
    }

    /// Run until the cancellation token fires
    pub async fn run(self) {
        loop {
            self.enter(Phase::IdleStart);

            self.enter(Phase::PausedBeforeScroll);
            if !self.pause().await {
                break;
            }

            self.enter(Phase::Scrolling);
            if !self.scroll().await {
                break;
            }

            self.enter(Phase::PausedAfterScroll);
            if !self.pause().await {
                break;
            }

            timeline::lock(&self.timeline).reset();
            self.status.send_modify(|s| s.cycles += 1);
        }

        #[cfg(debug_assertions)]
        log::debug!("Marquee player cancelled");
    }

    fn enter(&self, phase: Phase) {
        #[cfg(debug_assertions)]
        log::debug!("Marquee phase {:?}", phase);

        timeline::lock(&self.timeline).set_phase(phase);
        self.status.send_modify(|s| s.phase = phase);
    }

    /// Returns false if cancelled before the hold elapsed
    async fn pause(&self) -> bool {
        tokio::select! {
            _ = self.cancel.cancelled() => false,
            _ = time::sleep(self.hold) => true,
        }
    }

    /// Step the timeline every `delay` until it passes its target
    ///
    /// Returns false if cancelled first.
    async fn scroll(&self) -> bool {
        #[cfg(debug_assertions)]
        log::debug!(
            "Scroll pass estimated at {:?}",
            timeline::lock(&self.timeline).scroll_estimate(self.delay)
        );

        let mut ticker = time::interval_at(Instant::now() + self.delay, self.delay);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => return false,
                _ = ticker.tick() => {}
            }

            let outcome = timeline::lock(&self.timeline).tick();
            match outcome {
                TickOutcome::Moved(_left) => {
                    #[cfg(debug_assertions)]
                    log::trace!("Marquee moved to {}", _left);
                }
                TickOutcome::Finished => return true,
            }
        }
    }
}

impl Drop for MarqueePlayer {
    fn drop(&mut self) {
        timeline::lock(&self.timeline).set_playing(false);
        self.status.send_modify(|s| s.playing = false);
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
