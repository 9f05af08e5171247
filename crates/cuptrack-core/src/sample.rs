//! Downsampling from the source frame into the working-resolution grid.
//!
//! Detection never runs at the source resolution: every frame is first
//! sampled down to a small fixed grid so the per-frame cost is independent
//! of the camera format.

use ndarray::Array2;

use crate::consts::RGBA_CHANNEL_COUNT;
use crate::source::FrameSource;

/// Fill the interleaved RGBA working grid from `source`.
///
/// `rgba` has shape `(h, w * 4)`. Each working cell maps to one source pixel
/// by integer index scaling (nearest neighbor); detection tolerances absorb
/// the aliasing this introduces.
pub fn sample_frame<S: FrameSource + ?Sized>(source: &S, rgba: &mut Array2<u8>) {
    let (h, row_len) = rgba.dim();
    let w = row_len / RGBA_CHANNEL_COUNT;
    let src_w = source.width() as usize;
    let src_h = source.height() as usize;

    for row in 0..h {
        let sy = (row * src_h / h) as u32;
        for col in 0..w {
            let sx = (col * src_w / w) as u32;
            let px = source.pixel(sx, sy);
            let base = col * RGBA_CHANNEL_COUNT;
            rgba[[row, base]] = px[0];
            rgba[[row, base + 1]] = px[1];
            rgba[[row, base + 2]] = px[2];
            rgba[[row, base + 3]] = px[3];
        }
    }
}
