mod common;

use approx::assert_relative_eq;
use image::RgbaImage;

use common::{blank_image, disk_image};
use cuptrack_core::config::DetectorConfig;
use cuptrack_core::detector::CupDetector;
use cuptrack_core::error::CuptrackError;
use cuptrack_core::tracker::TrackState;

#[test]
fn test_detect_centered_disk() {
    let img = disk_image(320, 240, 160.0, 120.0, 56.0);
    let mut detector = CupDetector::new();

    let circle = detector
        .detect(&img)
        .unwrap()
        .expect("disk should be detected");

    // The half-resolution vote grid limits center accuracy to ~3 working
    // units and the radius scan moves in steps of 2; both scale by 4 into
    // source coordinates here.
    assert!(
        (circle.x - 160.0).abs() <= 12.5,
        "center x {} too far from 160",
        circle.x
    );
    assert!(
        (circle.y - 120.0).abs() <= 12.5,
        "center y {} too far from 120",
        circle.y
    );
    assert!(
        (circle.r - 56.0).abs() <= 8.5,
        "radius {} too far from 56",
        circle.r
    );
    assert_eq!(detector.state(), TrackState::Tracking);
    assert!(detector.confidence() > 0.0);
}

#[test]
fn test_detect_offset_disk() {
    let img = disk_image(320, 240, 100.0, 80.0, 40.0);
    let mut detector = CupDetector::new();

    let circle = detector
        .detect(&img)
        .unwrap()
        .expect("off-center disk should be detected");

    assert!((circle.x - 100.0).abs() <= 12.5, "center x {}", circle.x);
    assert!((circle.y - 80.0).abs() <= 12.5, "center y {}", circle.y);
    assert!((circle.r - 40.0).abs() <= 8.5, "radius {}", circle.r);
}

#[test]
fn test_blank_frame_yields_none() {
    let img = blank_image(320, 240);
    let mut detector = CupDetector::new();

    let result = detector.detect(&img).unwrap();

    assert!(result.is_none());
    assert_eq!(detector.state(), TrackState::NoTrack);
    assert_eq!(detector.miss_count(), 1);
}

#[test]
fn test_zero_dimension_source_is_an_error() {
    let img = RgbaImage::new(0, 0);
    let mut detector = CupDetector::new();

    match detector.detect(&img) {
        Err(CuptrackError::InvalidDimensions {
            width: 0,
            height: 0,
        }) => {}
        other => panic!("expected InvalidDimensions, got {other:?}"),
    }
}

#[test]
fn test_confidence_rises_and_caps() {
    let img = disk_image(320, 240, 160.0, 120.0, 56.0);
    let mut detector = CupDetector::new();

    let mut last = 0.0f32;
    for _ in 0..12 {
        detector.detect(&img).unwrap();
        let conf = detector.confidence();
        assert!(conf >= last, "confidence dropped from {last} to {conf}");
        assert!(conf <= 1.0);
        last = conf;
    }
    assert!(last >= 0.999, "confidence should cap near 1.0, got {last}");
}

#[test]
fn test_miss_budget_keeps_then_drops_track() {
    let disk = disk_image(320, 240, 160.0, 120.0, 56.0);
    let blank = blank_image(320, 240);
    let mut detector = CupDetector::new();

    let mut tracked = None;
    for _ in 0..3 {
        tracked = detector.detect(&disk).unwrap();
    }
    let tracked = tracked.expect("track should be established");
    let conf_before = detector.confidence();

    // The budget tolerates 20 consecutive misses with a frozen track.
    for i in 1..=20u32 {
        let held = detector
            .detect(&blank)
            .unwrap()
            .unwrap_or_else(|| panic!("track should be held through miss {i}"));
        assert!((held.x - tracked.x).abs() < 1e-6);
        assert!((held.y - tracked.y).abs() < 1e-6);
        assert!((held.r - tracked.r).abs() < 1e-6);
        assert_eq!(detector.miss_count(), i);
        assert!(
            (detector.confidence() - conf_before).abs() < 1e-6,
            "confidence must not decay inside the budget"
        );
    }

    // Miss 21 exceeds the budget: track dropped, confidence decays.
    assert!(detector.detect(&blank).unwrap().is_none());
    assert_eq!(detector.state(), TrackState::NoTrack);
    assert!(detector.confidence() < conf_before);
}

#[test]
fn test_reset_restores_fresh_behavior() {
    let disk = disk_image(320, 240, 160.0, 120.0, 56.0);
    let mut detector = CupDetector::new();

    let first = detector.detect(&disk).unwrap().unwrap();
    assert_eq!(detector.state(), TrackState::Tracking);

    detector.reset();
    assert_eq!(detector.state(), TrackState::NoTrack);
    assert_eq!(detector.miss_count(), 0);
    assert!(detector.confidence().abs() < 1e-6);

    // Same frame after reset reproduces the first detection: no residual
    // smoothing bias.
    let again = detector.detect(&disk).unwrap().unwrap();
    assert_relative_eq!(again.x, first.x, epsilon = 1e-5);
    assert_relative_eq!(again.y, first.y, epsilon = 1e-5);
    assert_relative_eq!(again.r, first.r, epsilon = 1e-5);

    detector.reset();
    detector.reset();
    assert_eq!(detector.state(), TrackState::NoTrack);
}

#[test]
fn test_scale_invariance() {
    let small = disk_image(320, 240, 160.0, 120.0, 56.0);
    let large = disk_image(640, 480, 320.0, 240.0, 112.0);

    let mut det_small = CupDetector::new();
    let mut det_large = CupDetector::new();

    let a = det_small.detect(&small).unwrap().unwrap();
    let b = det_large.detect(&large).unwrap().unwrap();

    assert_relative_eq!(b.x, a.x * 2.0, epsilon = 1e-3);
    assert_relative_eq!(b.y, a.y * 2.0, epsilon = 1e-3);
    assert_relative_eq!(b.r, a.r * 2.0, epsilon = 1e-3);
}

#[test]
fn test_custom_working_resolution() {
    let config = DetectorConfig {
        working_width: 100,
        working_height: 80,
        ..Default::default()
    };
    let mut detector = CupDetector::with_config(config).unwrap();
    let img = disk_image(400, 320, 200.0, 160.0, 48.0);

    let circle = detector
        .detect(&img)
        .unwrap()
        .expect("disk should be detected at a custom working resolution");

    assert!((circle.x - 200.0).abs() <= 12.5, "center x {}", circle.x);
    assert!((circle.y - 160.0).abs() <= 12.5, "center y {}", circle.y);
    assert!((circle.r - 48.0).abs() <= 8.5, "radius {}", circle.r);
}

#[test]
fn test_inspect_renders_working_grids() {
    let img = disk_image(320, 240, 160.0, 120.0, 56.0);
    let mut detector = CupDetector::new();

    let inspection = detector.inspect(&img).unwrap();

    assert_eq!(inspection.luma.dimensions(), (80, 60));
    assert_eq!(inspection.edges.dimensions(), (80, 60));
    // The rim must show up in the edge map; the disk interior must not.
    assert!(inspection.edges.get_pixel(40 + 14, 30).0[0] > 28);
    assert_eq!(inspection.edges.get_pixel(40, 30).0[0], 0);
    // Inspection leaves tracker state untouched.
    assert_eq!(detector.state(), TrackState::NoTrack);
    assert_eq!(detector.miss_count(), 0);
}
