//! Tests for Timeline

use super::*;
use proptest::prelude::*;

#[test]
fn test_new_timeline_rests_at_padding() {
    let timeline = Timeline::new(10.0, 1.0);
    assert_eq!(timeline.offset(), 0.0);
    assert_eq!(timeline.left(), Px(5.0));
    assert_eq!(timeline.phase(), Phase::IdleStart);
    assert!(!timeline.is_playing());
}

#[test]
fn test_tick_moves_left_by_step() {
    let mut timeline = Timeline::new(10.0, 2.0);
    assert_eq!(timeline.tick(), TickOutcome::Moved(Px(3.0)));
    assert_eq!(timeline.tick(), TickOutcome::Moved(Px(1.0)));
    assert_eq!(timeline.offset(), 4.0);
    assert_eq!(timeline.left().to_string(), "1px");
}

#[test]
fn test_tick_reaching_target_exactly_still_moves() {
    let mut timeline = Timeline::new(2.0, 1.0);
    timeline.tick();
    assert_eq!(timeline.tick(), TickOutcome::Moved(Px(3.0)));
    assert_eq!(timeline.tick(), TickOutcome::Finished);
}

#[test]
fn test_overshooting_tick_keeps_position() {
    let mut timeline = Timeline::new(5.0, 2.0);
    timeline.tick();
    timeline.tick();
    assert_eq!(timeline.tick(), TickOutcome::Finished);
    assert_eq!(timeline.offset(), 6.0);
    assert_eq!(timeline.left(), Px(1.0));
}

#[test]
fn test_non_overflowing_text_finishes_on_first_tick() {
    let mut timeline = Timeline::new(-20.0, 1.0);
    assert_eq!(timeline.tick(), TickOutcome::Finished);
    assert_eq!(timeline.left(), Px(5.0));

    let mut timeline = Timeline::new(0.0, 1.0);
    assert_eq!(timeline.tick(), TickOutcome::Finished);
    assert_eq!(timeline.left(), Px(5.0));
}

#[test]
fn test_reset_returns_to_start() {
    let mut timeline = Timeline::new(10.0, 3.0);
    timeline.tick();
    timeline.tick();
    timeline.reset();
    assert_eq!(timeline.offset(), 0.0);
    assert_eq!(timeline.left().to_string(), "5px");
}

#[test]
fn test_scroll_estimate() {
    let timeline = Timeline::new(100.0, 2.0);
    assert_eq!(
        timeline.scroll_estimate(Duration::from_millis(20)),
        Duration::from_secs(1)
    );
}

#[test]
fn test_scroll_estimate_zero_without_overflow() {
    let timeline = Timeline::new(-5.0, 1.0);
    assert_eq!(
        timeline.scroll_estimate(Duration::from_millis(20)),
        Duration::ZERO
    );
}

// Property: however far a pass got, reset puts the offset at exactly 0 and
// the child at exactly 5px.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_reset_is_exact(
        target in -50.0f64..500.0,
        step in 0.5f64..10.0,
        ticks in 0usize..200,
    ) {
        let mut timeline = Timeline::new(target, step);
        for _ in 0..ticks {
            if timeline.tick() == TickOutcome::Finished {
                break;
            }
        }
        timeline.reset();

        prop_assert_eq!(timeline.offset(), 0.0);
        prop_assert_eq!(timeline.left().to_string(), "5px");
    }

    #[test]
    fn prop_left_tracks_offsets_within_target(
        target in 0.0f64..300.0,
        step in 0.5f64..10.0,
    ) {
        let mut timeline = Timeline::new(target, step);
        while let TickOutcome::Moved(left) = timeline.tick() {
            prop_assert!(timeline.offset() <= target);
            prop_assert_eq!(left.0, 5.0 - timeline.offset());
        }
        prop_assert!(timeline.offset() > target);
    }
}
