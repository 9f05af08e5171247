use approx::assert_relative_eq;

use cuptrack_core::tracker::{Circle, CircleTracker, TrackState};

const ALPHA: f32 = 0.25;
const BUDGET: u32 = 20;

fn circle(x: f32, y: f32, r: f32) -> Circle {
    Circle { x, y, r }
}

#[test]
fn test_first_candidate_is_adopted_unsmoothed() {
    let mut tracker = CircleTracker::new(ALPHA, BUDGET);
    assert_eq!(tracker.state(), TrackState::NoTrack);

    let out = tracker.update(Some(circle(40.0, 30.0, 14.0))).unwrap();

    assert_relative_eq!(out.x, 40.0);
    assert_relative_eq!(out.y, 30.0);
    assert_relative_eq!(out.r, 14.0);
    assert_eq!(tracker.state(), TrackState::Tracking);
    assert_eq!(tracker.miss_count(), 0);
}

#[test]
fn test_ema_converges_geometrically() {
    let mut tracker = CircleTracker::new(ALPHA, BUDGET);
    tracker.update(Some(circle(10.0, 10.0, 10.0)));

    let target = circle(20.0, 14.0, 12.0);
    let mut err = [10.0f32, 4.0, 2.0];

    for _ in 0..12 {
        let out = tracker.update(Some(target)).unwrap();
        let next = [
            (out.x - target.x).abs(),
            (out.y - target.y).abs(),
            (out.r - target.r).abs(),
        ];
        // Each accepted frame shrinks the remaining error by (1 - alpha).
        for (n, e) in next.iter().zip(err.iter()) {
            assert_relative_eq!(*n, e * (1.0 - ALPHA), epsilon = 1e-4);
        }
        err = next;
    }

    assert!(err[0] < 0.5, "x error should have converged, got {}", err[0]);
}

#[test]
fn test_track_frozen_during_tolerated_misses() {
    let mut tracker = CircleTracker::new(ALPHA, BUDGET);
    tracker.update(Some(circle(40.0, 30.0, 14.0)));
    let held = tracker.current().unwrap();
    let conf = tracker.confidence();

    for i in 1..=BUDGET {
        let out = tracker
            .update(None)
            .expect("track should survive misses inside the budget");
        assert!((out.x - held.x).abs() < 1e-6);
        assert!((out.y - held.y).abs() < 1e-6);
        assert!((out.r - held.r).abs() < 1e-6);
        assert_eq!(tracker.miss_count(), i);
        assert!(
            (tracker.confidence() - conf).abs() < 1e-6,
            "confidence must not decay inside the budget"
        );
    }
    assert_eq!(tracker.state(), TrackState::Tracking);
}

#[test]
fn test_budget_exceeded_drops_track_and_decays_confidence() {
    let mut tracker = CircleTracker::new(ALPHA, BUDGET);
    for _ in 0..5 {
        tracker.update(Some(circle(40.0, 30.0, 14.0)));
    }
    let conf = tracker.confidence();

    for _ in 0..BUDGET {
        assert!(tracker.update(None).is_some());
    }
    assert!(
        tracker.update(None).is_none(),
        "miss {} must clear the track",
        BUDGET + 1
    );
    assert_eq!(tracker.state(), TrackState::NoTrack);
    assert!(tracker.confidence() < conf);

    // Confidence keeps decaying on further misses, floored at zero.
    let mut last = tracker.confidence();
    for _ in 0..30 {
        tracker.update(None);
        let c = tracker.confidence();
        assert!(c <= last + 1e-6);
        assert!(c >= 0.0);
        last = c;
    }
    assert!(last.abs() < 1e-6, "confidence should reach the floor");
}

#[test]
fn test_confidence_caps_at_one() {
    let mut tracker = CircleTracker::new(ALPHA, BUDGET);
    for _ in 0..15 {
        tracker.update(Some(circle(40.0, 30.0, 14.0)));
        assert!(tracker.confidence() <= 1.0);
    }
    assert!(tracker.confidence() >= 0.999);
}

#[test]
fn test_reacquire_after_drop_adopts_fresh() {
    let mut tracker = CircleTracker::new(ALPHA, BUDGET);
    tracker.update(Some(circle(10.0, 10.0, 8.0)));
    for _ in 0..=BUDGET {
        tracker.update(None);
    }
    assert_eq!(tracker.state(), TrackState::NoTrack);

    // A candidate far from the dead track is adopted outright, not blended.
    let out = tracker.update(Some(circle(60.0, 40.0, 20.0))).unwrap();
    assert_relative_eq!(out.x, 60.0);
    assert_relative_eq!(out.y, 40.0);
    assert_relative_eq!(out.r, 20.0);
    assert_eq!(tracker.miss_count(), 0);
}

#[test]
fn test_reset_is_idempotent() {
    let mut tracker = CircleTracker::new(ALPHA, BUDGET);
    tracker.update(Some(circle(40.0, 30.0, 14.0)));

    tracker.reset();
    tracker.reset();

    assert_eq!(tracker.state(), TrackState::NoTrack);
    assert_eq!(tracker.miss_count(), 0);
    assert!(tracker.confidence().abs() < 1e-6);
    assert!(tracker.current().is_none());
}
