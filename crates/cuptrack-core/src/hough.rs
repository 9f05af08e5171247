//! Center voting and radius refinement over the edge point list.
//!
//! Classic Hough circle scheme, heavily quantized for speed: 16 tangent
//! angles, radius step 2, and a half-resolution center accumulator. The
//! radius range is scanned one radius at a time through the same reused
//! grid, so a cell count is always the number of (point, angle) pairs
//! agreeing on a center at that exact radius. A genuine circle rim piles
//! its votes onto one cell of its own radius pass while clutter spreads
//! thin; the strongest single-radius peak becomes the candidate center.

use ndarray::Array2;

use crate::consts::{
    MIN_PEAK_VOTES, MIN_RADIUS, MIN_RADIUS_INLIERS, MIN_VOTE_STRIDE, RADIUS_MARGIN, RADIUS_STEP,
    RADIUS_TOLERANCE, VOTE_ANGLE_COUNT, VOTE_STRIDE_DIVISOR,
};
use crate::edges::EdgePoint;

/// Precompute the (cos, sin) table for the quantized vote angles.
pub fn angle_table() -> [(f32, f32); VOTE_ANGLE_COUNT] {
    std::array::from_fn(|k| {
        let theta = k as f32 * std::f32::consts::TAU / VOTE_ANGLE_COUNT as f32;
        (theta.cos(), theta.sin())
    })
}

/// Subsampling stride over the edge point list: `max(2, count / 200)`.
///
/// Keeps the number of voting points roughly constant however cluttered
/// the frame is.
pub fn vote_stride(point_count: usize) -> usize {
    (point_count / VOTE_STRIDE_DIVISOR).max(MIN_VOTE_STRIDE)
}

/// Candidate radius range for a working grid: `[MIN_RADIUS, max_r)` with
/// `max_r = min(w, h)/2 - RADIUS_MARGIN`. May be empty for degenerate grids.
pub fn radius_bounds(width: usize, height: usize) -> (usize, usize) {
    let max_r = (width.min(height) / 2).saturating_sub(RADIUS_MARGIN);
    (MIN_RADIUS, max_r)
}

/// Cast center votes for one candidate radius from every `stride`-th edge
/// point into `accum`.
///
/// `accum` is half working resolution: an implied center (cx, cy) lands in
/// cell (cx/2, cy/2). The grid is cleared first, so counts from different
/// radii never mix. Implied centers outside the grid are skipped, not
/// clamped.
pub fn cast_votes(
    points: &[EdgePoint],
    stride: usize,
    angles: &[(f32, f32); VOTE_ANGLE_COUNT],
    radius: usize,
    accum: &mut Array2<u32>,
) {
    accum.fill(0);
    let (acc_h, acc_w) = accum.dim();
    let rf = radius as f32;

    for point in points.iter().step_by(stride) {
        for &(cos, sin) in angles.iter() {
            let cx = (point.x as f32 - rf * cos) as i32;
            let cy = (point.y as f32 - rf * sin) as i32;
            if cx < 0 || cy < 0 {
                continue;
            }
            let cell_x = cx as usize / 2;
            let cell_y = cy as usize / 2;
            if cell_x < acc_w && cell_y < acc_h {
                accum[[cell_y, cell_x]] += 1;
            }
        }
    }
}

/// Strongest cell of the current accumulator contents, as (votes, cell).
/// Ties go to the first cell in row-major order.
fn plane_peak(accum: &Array2<u32>) -> (u32, (usize, usize)) {
    let (acc_h, acc_w) = accum.dim();
    let mut best = 0u32;
    let mut best_cell = (0usize, 0usize);

    for row in 0..acc_h {
        for col in 0..acc_w {
            if accum[[row, col]] > best {
                best = accum[[row, col]];
                best_cell = (col, row);
            }
        }
    }

    (best, best_cell)
}

/// Scan the radius range and return the best-supported center in working
/// coordinates.
///
/// Each radius votes into `accum` separately and the strongest single-radius
/// peak wins; ties go to the smaller radius. Returns `None` when even that
/// peak is weaker than `MIN_PEAK_VOTES`.
pub fn vote_center(
    points: &[EdgePoint],
    stride: usize,
    angles: &[(f32, f32); VOTE_ANGLE_COUNT],
    bounds: (usize, usize),
    accum: &mut Array2<u32>,
) -> Option<(usize, usize)> {
    let (min_r, max_r) = bounds;
    let mut best = 0u32;
    let mut best_cell = (0usize, 0usize);

    for r in (min_r..max_r).step_by(RADIUS_STEP) {
        cast_votes(points, stride, angles, r, accum);
        let (votes, cell) = plane_peak(accum);
        if votes > best {
            best = votes;
            best_cell = cell;
        }
    }

    if best < MIN_PEAK_VOTES {
        return None;
    }

    Some((best_cell.0 * 2 + 1, best_cell.1 * 2 + 1))
}

/// Pick the radius best supported by the strided edge points around
/// (`cx`, `cy`).
///
/// A point supports radius `r` when its distance to the center is within
/// `RADIUS_TOLERANCE` of `r`. Returns `None` when even the best radius has
/// fewer than `MIN_RADIUS_INLIERS` supporters. Ties go to the smaller
/// radius.
pub fn refine_radius(
    points: &[EdgePoint],
    stride: usize,
    cx: usize,
    cy: usize,
    bounds: (usize, usize),
) -> Option<usize> {
    let (min_r, max_r) = bounds;
    let mut best_r = 0usize;
    let mut best_count = 0usize;

    for r in (min_r..max_r).step_by(RADIUS_STEP) {
        let rf = r as f32;
        let mut count = 0usize;

        for point in points.iter().step_by(stride) {
            let dx = point.x as f32 - cx as f32;
            let dy = point.y as f32 - cy as f32;
            let dist = (dx * dx + dy * dy).sqrt();
            if (dist - rf).abs() <= RADIUS_TOLERANCE {
                count += 1;
            }
        }

        if count > best_count {
            best_count = count;
            best_r = r;
        }
    }

    if best_count < MIN_RADIUS_INLIERS {
        return None;
    }

    Some(best_r)
}
