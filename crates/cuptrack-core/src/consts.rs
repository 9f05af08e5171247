/// Default working-resolution width the pipeline downsamples to.
pub const DEFAULT_WORKING_WIDTH: usize = 80;

/// Default working-resolution height the pipeline downsamples to.
pub const DEFAULT_WORKING_HEIGHT: usize = 60;

/// Number of interleaved channels per working-grid sample (R, G, B, A).
pub const RGBA_CHANNEL_COUNT: usize = 4;

/// Integer luma weight for the red channel. The three weights sum to 256 so
/// the weighted sum collapses to a single shift.
pub const LUMA_WEIGHT_R: u32 = 77;

/// Integer luma weight for the green channel.
pub const LUMA_WEIGHT_G: u32 = 150;

/// Integer luma weight for the blue channel.
pub const LUMA_WEIGHT_B: u32 = 29;

/// Right shift applied to the weighted channel sum to land back in 8 bits.
pub const LUMA_SHIFT: u32 = 8;

/// Minimum edge magnitude (exclusive) for a pixel to enter the edge point
/// list. Tuned against the L1 gradient approximation in `edges.rs`.
pub const EDGE_THRESHOLD: u8 = 28;

/// Minimum number of collected edge points for voting to be worthwhile.
/// Below this the frame is treated as textureless and skipped.
pub const MIN_EDGE_POINTS: usize = 16;

/// Edge point count per unit of voting stride: `stride = count / 200`,
/// floored at `MIN_VOTE_STRIDE`. Bounds vote cost in cluttered scenes.
pub const VOTE_STRIDE_DIVISOR: usize = 200;

/// Smallest stride ever applied to the edge point list.
pub const MIN_VOTE_STRIDE: usize = 2;

/// Smallest candidate radius, in working-resolution pixels.
pub const MIN_RADIUS: usize = 6;

/// Margin subtracted from half the smaller working dimension to form the
/// exclusive upper radius bound.
pub const RADIUS_MARGIN: usize = 2;

/// Step between candidate radii.
pub const RADIUS_STEP: usize = 2;

/// Number of uniformly spaced tangent angles voted per (point, radius) pair.
pub const VOTE_ANGLE_COUNT: usize = 16;

/// Minimum vote count for the strongest single-radius accumulator peak to
/// be accepted as a center candidate.
pub const MIN_PEAK_VOTES: u32 = 4;

/// Distance tolerance (working-resolution pixels) for an edge point to count
/// as an inlier of a candidate radius.
pub const RADIUS_TOLERANCE: f32 = 3.0;

/// Minimum inlier count for the winning radius to be accepted.
pub const MIN_RADIUS_INLIERS: usize = 3;

/// Default exponential-moving-average factor for track smoothing.
/// Higher follows raw detections faster; lower damps jitter harder.
pub const DEFAULT_SMOOTHING_ALPHA: f32 = 0.25;

/// Confidence added per frame with an accepted detection, clamped to 1.
pub const CONFIDENCE_GAIN: f32 = 0.1;

/// Confidence removed per frame once the miss budget is exhausted,
/// clamped to 0.
pub const CONFIDENCE_DECAY: f32 = 0.05;

/// Default number of consecutive missed frames tolerated before the track
/// is dropped. At 30 fps with every-2nd-frame sampling this is ~1.3 s.
pub const DEFAULT_MISS_BUDGET: u32 = 20;

/// Smallest working dimension accepted by config validation. Keeps the
/// candidate radius range `[MIN_RADIUS, min(w, h)/2 - RADIUS_MARGIN)`
/// non-empty.
pub const MIN_WORKING_DIM: usize = 20;
