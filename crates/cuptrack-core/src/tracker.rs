//! Temporal smoothing and confidence state for per-frame detections.
//!
//! Everything upstream is stateless per frame; this is the only cross-frame
//! memory. Raw candidates jitter by a pixel or two and drop out entirely on
//! bad frames, so the tracker smooths accepted candidates with an
//! exponential moving average and rides out short dropouts before letting
//! the track go.

use crate::consts::{CONFIDENCE_DECAY, CONFIDENCE_GAIN};

/// A detected circle. Working-resolution coordinates inside the pipeline;
/// `CupDetector::detect` rescales to the caller's coordinate space before
/// returning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Center X (column).
    pub x: f32,
    /// Center Y (row).
    pub y: f32,
    /// Radius.
    pub r: f32,
}

/// Whether the tracker currently holds a smoothed track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackState {
    /// Nothing tracked: no candidate accepted yet, or the track was dropped.
    NoTrack,
    /// A smoothed track is held and returned, possibly frozen during a
    /// tolerated dropout.
    Tracking,
}

/// Cross-frame tracking state: smoothed circle, confidence, miss counter.
#[derive(Clone, Debug)]
pub struct CircleTracker {
    smoothing_alpha: f32,
    miss_budget: u32,
    smoothed: Option<Circle>,
    confidence: f32,
    misses: u32,
}

impl CircleTracker {
    pub fn new(smoothing_alpha: f32, miss_budget: u32) -> Self {
        Self {
            smoothing_alpha,
            miss_budget,
            smoothed: None,
            confidence: 0.0,
            misses: 0,
        }
    }

    /// Fold one frame's raw candidate into the track.
    ///
    /// With a candidate present the miss counter resets, confidence rises,
    /// and the track moves toward the candidate by the smoothing factor
    /// (or adopts it outright when no track exists yet). Without one the
    /// miss counter advances and the track is returned frozen until the
    /// budget is exhausted, after which the track is dropped and confidence
    /// decays on each further miss.
    pub fn update(&mut self, raw: Option<Circle>) -> Option<Circle> {
        match raw {
            Some(candidate) => {
                self.misses = 0;
                self.confidence = (self.confidence + CONFIDENCE_GAIN).min(1.0);
                self.smoothed = Some(match self.smoothed {
                    None => candidate,
                    Some(prev) => Circle {
                        x: prev.x + (candidate.x - prev.x) * self.smoothing_alpha,
                        y: prev.y + (candidate.y - prev.y) * self.smoothing_alpha,
                        r: prev.r + (candidate.r - prev.r) * self.smoothing_alpha,
                    },
                });
            }
            None => {
                self.misses += 1;
                if self.misses > self.miss_budget {
                    self.smoothed = None;
                    self.confidence = (self.confidence - CONFIDENCE_DECAY).max(0.0);
                }
            }
        }

        self.smoothed
    }

    /// Drop the track and zero confidence and the miss counter. Idempotent.
    pub fn reset(&mut self) {
        self.smoothed = None;
        self.confidence = 0.0;
        self.misses = 0;
    }

    /// Recent-reliability score in [0, 1].
    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    /// Consecutive frames without an accepted candidate.
    pub fn miss_count(&self) -> u32 {
        self.misses
    }

    /// Current smoothed track, if any, in working-resolution coordinates.
    pub fn current(&self) -> Option<Circle> {
        self.smoothed
    }

    pub fn state(&self) -> TrackState {
        if self.smoothed.is_some() {
            TrackState::Tracking
        } else {
            TrackState::NoTrack
        }
    }
}
