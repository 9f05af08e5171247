use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MISS_BUDGET, DEFAULT_SMOOTHING_ALPHA, DEFAULT_WORKING_HEIGHT, DEFAULT_WORKING_WIDTH,
    EDGE_THRESHOLD, MIN_WORKING_DIM,
};
use crate::error::{CuptrackError, Result};

/// Configuration for the detection pipeline and tracker.
///
/// The defaults reproduce the reference tuning; all detection happens at the
/// working resolution regardless of the source frame size.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Working-resolution width every frame is downsampled to.
    #[serde(default = "default_working_width")]
    pub working_width: usize,
    /// Working-resolution height every frame is downsampled to.
    #[serde(default = "default_working_height")]
    pub working_height: usize,
    /// Minimum edge magnitude (exclusive) for a pixel to vote.
    #[serde(default = "default_edge_threshold")]
    pub edge_threshold: u8,
    /// Exponential-moving-average factor for track smoothing, in (0, 1].
    #[serde(default = "default_smoothing_alpha")]
    pub smoothing_alpha: f32,
    /// Consecutive missed frames tolerated before the track is dropped.
    #[serde(default = "default_miss_budget")]
    pub miss_budget: u32,
}

fn default_working_width() -> usize {
    DEFAULT_WORKING_WIDTH
}
fn default_working_height() -> usize {
    DEFAULT_WORKING_HEIGHT
}
fn default_edge_threshold() -> u8 {
    EDGE_THRESHOLD
}
fn default_smoothing_alpha() -> f32 {
    DEFAULT_SMOOTHING_ALPHA
}
fn default_miss_budget() -> u32 {
    DEFAULT_MISS_BUDGET
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            working_width: DEFAULT_WORKING_WIDTH,
            working_height: DEFAULT_WORKING_HEIGHT,
            edge_threshold: EDGE_THRESHOLD,
            smoothing_alpha: DEFAULT_SMOOTHING_ALPHA,
            miss_budget: DEFAULT_MISS_BUDGET,
        }
    }
}

impl DetectorConfig {
    /// Check that the configuration can host the detection pipeline.
    pub fn validate(&self) -> Result<()> {
        let min_dim = self.working_width.min(self.working_height);
        if min_dim < MIN_WORKING_DIM {
            return Err(CuptrackError::InvalidConfig(format!(
                "working resolution {}x{} too small (min dimension {})",
                self.working_width, self.working_height, MIN_WORKING_DIM
            )));
        }
        if !(self.smoothing_alpha > 0.0 && self.smoothing_alpha <= 1.0) {
            return Err(CuptrackError::InvalidConfig(format!(
                "smoothing_alpha {} outside (0, 1]",
                self.smoothing_alpha
            )));
        }
        Ok(())
    }
}
