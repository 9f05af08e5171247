use image::{GrayImage, Luma};
use ndarray::Array2;
use tracing::{debug, trace};

use crate::config::DetectorConfig;
use crate::consts::{MIN_EDGE_POINTS, RGBA_CHANNEL_COUNT, VOTE_ANGLE_COUNT};
use crate::edges::{self, EdgePoint};
use crate::error::{CuptrackError, Result};
use crate::gray;
use crate::hough;
use crate::sample;
use crate::source::FrameSource;
use crate::tracker::{Circle, CircleTracker, TrackState};

/// Working-resolution luma and edge grids rendered for offline inspection.
#[derive(Clone, Debug)]
pub struct FrameInspection {
    pub luma: GrayImage,
    pub edges: GrayImage,
}

/// Per-call scratch storage, sized once at construction and cleared (never
/// reallocated) on every detection call. Contents are meaningless between
/// calls.
#[derive(Clone, Debug)]
struct Scratch {
    rgba: Array2<u8>,
    luma: Array2<u8>,
    edges: Array2<u8>,
    points: Vec<EdgePoint>,
    accum: Array2<u32>,
}

impl Scratch {
    fn new(w: usize, h: usize) -> Self {
        Self {
            rgba: Array2::zeros((h, w * RGBA_CHANNEL_COUNT)),
            luma: Array2::zeros((h, w)),
            edges: Array2::zeros((h, w)),
            points: Vec::new(),
            accum: Array2::zeros((h / 2, w / 2)),
        }
    }
}

/// Circular-vessel detector with temporal tracking.
///
/// Owns the whole pipeline: downsampling, luma conversion, edge extraction,
/// center voting, radius refinement, and the cross-frame tracker. One
/// instance per video stream; `detect` takes `&mut self`, so exclusive
/// access is enforced by the borrow checker rather than internal locking.
pub struct CupDetector {
    config: DetectorConfig,
    angles: [(f32, f32); VOTE_ANGLE_COUNT],
    scratch: Scratch,
    tracker: CircleTracker,
}

impl CupDetector {
    /// Detector with the reference tuning. Default configuration is valid
    /// by construction.
    pub fn new() -> Self {
        Self::build(DetectorConfig::default())
    }

    /// Detector with a custom configuration.
    pub fn with_config(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: DetectorConfig) -> Self {
        let scratch = Scratch::new(config.working_width, config.working_height);
        let tracker = CircleTracker::new(config.smoothing_alpha, config.miss_budget);
        Self {
            config,
            angles: hough::angle_table(),
            scratch,
            tracker,
        }
    }

    /// Run the pipeline on one frame and fold the outcome into the track.
    ///
    /// Returns the smoothed circle in the caller's coordinate space, or
    /// `Ok(None)` while nothing is tracked. Absence of a detection is never
    /// an error; only a degenerate frame source is.
    pub fn detect<S: FrameSource + ?Sized>(&mut self, source: &S) -> Result<Option<Circle>> {
        let src_w = source.width();
        let src_h = source.height();
        if src_w == 0 || src_h == 0 {
            return Err(CuptrackError::InvalidDimensions {
                width: src_w,
                height: src_h,
            });
        }

        let raw = self.raw_candidate(source);

        let prev_state = self.tracker.state();
        let smoothed = self.tracker.update(raw);
        let state = self.tracker.state();
        if state != prev_state {
            match state {
                TrackState::Tracking => {
                    debug!(confidence = self.tracker.confidence(), "track acquired")
                }
                TrackState::NoTrack => {
                    debug!(misses = self.tracker.miss_count(), "track dropped")
                }
            }
        }

        // Results leave in the caller's coordinate space; the working
        // resolution is an implementation detail.
        let scale_x = src_w as f32 / self.config.working_width as f32;
        let scale_y = src_h as f32 / self.config.working_height as f32;
        Ok(smoothed.map(|c| Circle {
            x: c.x * scale_x,
            y: c.y * scale_y,
            r: c.r * (scale_x + scale_y) * 0.5,
        }))
    }

    /// One raw circle candidate at working resolution, or `None`.
    ///
    /// Pipeline: downsample -> luma -> Sobel -> edge points -> center vote
    /// -> radius refinement.
    fn raw_candidate<S: FrameSource + ?Sized>(&mut self, source: &S) -> Option<Circle> {
        // Step 1: downsample into the working grid.
        sample::sample_frame(source, &mut self.scratch.rgba);

        // Step 2: luma conversion.
        gray::luma_from_rgba(&self.scratch.rgba, &mut self.scratch.luma);

        // Step 3: edge magnitude.
        edges::sobel_magnitude(&self.scratch.luma, &mut self.scratch.edges);

        // Step 4: collect edge points above threshold.
        edges::collect_edge_points(
            &self.scratch.edges,
            self.config.edge_threshold,
            &mut self.scratch.points,
        );
        if self.scratch.points.len() < MIN_EDGE_POINTS {
            trace!(
                points = self.scratch.points.len(),
                "too few edge points, skipping vote"
            );
            return None;
        }

        // Step 5: vote for centers radius by radius, then fit a radius at
        // the winning cell.
        let stride = hough::vote_stride(self.scratch.points.len());
        let bounds = hough::radius_bounds(self.config.working_width, self.config.working_height);
        let (cx, cy) = hough::vote_center(
            &self.scratch.points,
            stride,
            &self.angles,
            bounds,
            &mut self.scratch.accum,
        )?;
        let r = hough::refine_radius(&self.scratch.points, stride, cx, cy, bounds)?;

        trace!(cx, cy, r, "raw candidate");
        Some(Circle {
            x: cx as f32,
            y: cy as f32,
            r: r as f32,
        })
    }

    /// Render the working-resolution luma and edge grids for one frame.
    ///
    /// Offline tuning aid consumed by the CLI; `detect` never calls this
    /// and no tracker state changes.
    pub fn inspect<S: FrameSource + ?Sized>(&mut self, source: &S) -> Result<FrameInspection> {
        let src_w = source.width();
        let src_h = source.height();
        if src_w == 0 || src_h == 0 {
            return Err(CuptrackError::InvalidDimensions {
                width: src_w,
                height: src_h,
            });
        }

        sample::sample_frame(source, &mut self.scratch.rgba);
        gray::luma_from_rgba(&self.scratch.rgba, &mut self.scratch.luma);
        edges::sobel_magnitude(&self.scratch.luma, &mut self.scratch.edges);

        Ok(FrameInspection {
            luma: grid_to_image(&self.scratch.luma),
            edges: grid_to_image(&self.scratch.edges),
        })
    }

    /// Drop all cross-frame state. The next `detect` behaves like the first
    /// call on a fresh detector. Idempotent.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    /// Recent-reliability score in [0, 1].
    pub fn confidence(&self) -> f32 {
        self.tracker.confidence()
    }

    /// Consecutive frames without an accepted raw candidate.
    pub fn miss_count(&self) -> u32 {
        self.tracker.miss_count()
    }

    /// Whether a track is currently held.
    pub fn state(&self) -> TrackState {
        self.tracker.state()
    }

    /// Active configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}

impl Default for CupDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn grid_to_image(grid: &Array2<u8>) -> GrayImage {
    let (h, w) = grid.dim();
    let mut img = GrayImage::new(w as u32, h as u32);

    for row in 0..h {
        for col in 0..w {
            img.put_pixel(col as u32, row as u32, Luma([grid[[row, col]]]));
        }
    }

    img
}
