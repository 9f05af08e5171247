use ndarray::Array2;

/// A working-grid pixel whose gradient magnitude cleared the edge threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgePoint {
    pub x: usize,
    pub y: usize,
}

/// Compute the Sobel edge-magnitude map of `luma` into `edges`.
///
/// Sobel kernels:
///   Gx = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]
///   Gy = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]]
///
/// Magnitude is the clamped L1 form `min(255, (|gx| + |gy|) >> 1)`, not the
/// Euclidean norm; the vote and inlier thresholds downstream are tuned
/// against this exact form. The 1-pixel border is left at zero (the kernel
/// needs a full 3x3 neighborhood).
pub fn sobel_magnitude(luma: &Array2<u8>, edges: &mut Array2<u8>) {
    edges.fill(0);
    let (h, w) = luma.dim();

    if h < 3 || w < 3 {
        return;
    }

    for row in 1..h - 1 {
        for col in 1..w - 1 {
            let gx = -(luma[[row - 1, col - 1]] as i32) + luma[[row - 1, col + 1]] as i32
                - 2 * luma[[row, col - 1]] as i32
                + 2 * luma[[row, col + 1]] as i32
                - luma[[row + 1, col - 1]] as i32
                + luma[[row + 1, col + 1]] as i32;

            let gy = -(luma[[row - 1, col - 1]] as i32)
                - 2 * luma[[row - 1, col]] as i32
                - luma[[row - 1, col + 1]] as i32
                + luma[[row + 1, col - 1]] as i32
                + 2 * luma[[row + 1, col]] as i32
                + luma[[row + 1, col + 1]] as i32;

            edges[[row, col]] = ((gx.abs() + gy.abs()) >> 1).min(255) as u8;
        }
    }
}

/// Collect interior pixels whose magnitude strictly exceeds `threshold`,
/// in row-major order.
pub fn collect_edge_points(edges: &Array2<u8>, threshold: u8, points: &mut Vec<EdgePoint>) {
    points.clear();
    let (h, w) = edges.dim();

    if h < 3 || w < 3 {
        return;
    }

    for row in 1..h - 1 {
        for col in 1..w - 1 {
            if edges[[row, col]] > threshold {
                points.push(EdgePoint { x: col, y: row });
            }
        }
    }
}
