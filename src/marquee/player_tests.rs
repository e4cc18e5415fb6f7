//! Tests for MarqueePlayer

use super::super::{MarqueeOptions, MarqueeWidget};
use super::*;
use crate::error::MarqueeError;
use crate::measure::MeasureContext;

fn hello_world(max_width: f64) -> (MarqueeWidget, MeasureContext) {
    let mut ctx = MeasureContext::heuristic();
    let options = MarqueeOptions::new(
        max_width,
        "Hello World",
        Duration::from_millis(20),
        "16px arial",
    )
    .pixel_step(2.0);
    let widget = MarqueeWidget::new(options, &mut ctx);
    (widget, ctx)
}

#[tokio::test(start_paused = true)]
async fn test_full_cycle_returns_to_start() {
    let (widget, mut ctx) = hello_world(100.0);
    let expected = ctx.text_width("Hello World", "16px arial") - 100.0;
    assert_eq!(widget.target_offset(), expected);

    let cancel = CancellationToken::new();
    let player = widget.player(cancel.clone()).unwrap();
    let mut status = player.status();
    let handle = tokio::spawn(player.run());

    status
        .wait_for(|s| s.phase == Phase::PausedAfterScroll)
        .await
        .unwrap();
    assert!(widget.current_offset() > widget.target_offset());
    assert_ne!(widget.root().child().left().to_string(), "5px");

    status.wait_for(|s| s.cycles == 1).await.unwrap();
    assert_eq!(widget.current_offset(), 0.0);
    assert_eq!(widget.root().child().left().to_string(), "5px");

    cancel.cancel();
    handle.await.unwrap();
    assert!(!widget.is_playing());
}

#[tokio::test(start_paused = true)]
async fn test_holds_before_scrolling() {
    let (widget, _ctx) = hello_world(100.0);
    let cancel = CancellationToken::new();
    let player = widget.player(cancel.clone()).unwrap();
    let mut status = player.status();
    let start = Instant::now();
    let handle = tokio::spawn(player.run());

    status
        .wait_for(|s| s.phase == Phase::Scrolling)
        .await
        .unwrap();
    assert!(start.elapsed() >= Duration::from_millis(1500));
    assert_eq!(widget.current_offset(), 0.0);

    cancel.cancel();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_scroll_pass_stops_at_threshold() {
    // 11 columns * 0.6em * 16px = 105.6px in a 100px box: target 5.6
    let (widget, _ctx) = hello_world(100.0);
    let cancel = CancellationToken::new();
    let player = widget.player(cancel.clone()).unwrap();
    let mut status = player.status();
    let handle = tokio::spawn(player.run());

    status
        .wait_for(|s| s.phase == Phase::PausedAfterScroll)
        .await
        .unwrap();
    assert_eq!(widget.current_offset(), 6.0);
    assert_eq!(widget.root().child().left().to_string(), "1px");

    cancel.cancel();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_text_that_fits_does_not_move() {
    let (widget, _ctx) = hello_world(1000.0);
    assert!(widget.target_offset() < 0.0);

    let cancel = CancellationToken::new();
    let player = widget.player(cancel.clone()).unwrap();
    let mut status = player.status();
    let handle = tokio::spawn(player.run());

    status
        .wait_for(|s| s.phase == Phase::PausedAfterScroll)
        .await
        .unwrap();
    assert_eq!(widget.root().child().left().to_string(), "5px");

    cancel.cancel();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_cancel_mid_scroll_stops_player() {
    let (widget, _ctx) = hello_world(50.0);
    let cancel = CancellationToken::new();
    let player = widget.player(cancel.clone()).unwrap();
    let mut status = player.status();
    let handle = tokio::spawn(player.run());

    status
        .wait_for(|s| s.phase == Phase::Scrolling)
        .await
        .unwrap();
    time::sleep(Duration::from_millis(100)).await;
    cancel.cancel();
    handle.await.unwrap();

    assert!(!widget.is_playing());
    assert!(!status.borrow().playing);
    assert_eq!(widget.phase(), Phase::Scrolling);
    assert_eq!(status.borrow().cycles, 0);
}

#[tokio::test(start_paused = true)]
async fn test_second_player_rejected_until_first_finishes() {
    let (widget, _ctx) = hello_world(100.0);
    let cancel = CancellationToken::new();
    let player = widget.player(cancel.clone()).unwrap();

    assert!(matches!(
        widget.player(CancellationToken::new()),
        Err(MarqueeError::AlreadyPlaying)
    ));

    let handle = tokio::spawn(player.run());
    cancel.cancel();
    handle.await.unwrap();

    assert!(widget.player(CancellationToken::new()).is_ok());
}

#[test]
fn test_dropped_player_frees_slot() {
    let (widget, _ctx) = hello_world(100.0);
    let player = widget.player(CancellationToken::new()).unwrap();
    assert!(widget.is_playing());
    drop(player);
    assert!(!widget.is_playing());
}

#[test]
fn test_zero_interval_rejected() {
    let mut ctx = MeasureContext::heuristic();
    let options = MarqueeOptions::new(10.0, "Hello", Duration::ZERO, "16px arial");
    let widget = MarqueeWidget::new(options, &mut ctx);
    assert!(matches!(
        widget.player(CancellationToken::new()),
        Err(MarqueeError::ZeroInterval)
    ));
}

#[test]
fn test_negative_step_rejected() {
    let mut ctx = MeasureContext::heuristic();
    let options = MarqueeOptions::new(10.0, "Hello", Duration::from_millis(10), "16px arial")
        .pixel_step(-2.0);
    let widget = MarqueeWidget::new(options, &mut ctx);
    assert!(matches!(
        widget.player(CancellationToken::new()),
        Err(MarqueeError::NonPositiveStep(step)) if step == -2.0
    ));
    assert!(!widget.is_playing());
}
