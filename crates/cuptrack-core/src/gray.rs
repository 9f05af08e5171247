use ndarray::Array2;

use crate::consts::{LUMA_SHIFT, LUMA_WEIGHT_B, LUMA_WEIGHT_G, LUMA_WEIGHT_R, RGBA_CHANNEL_COUNT};

/// Convert the interleaved RGBA working grid to single-channel luma.
///
/// `luma = (77*R + 150*G + 29*B) >> 8`. The weights sum to 256, so the
/// result stays in [0, 255] without a clamp. Alpha is ignored.
pub fn luma_from_rgba(rgba: &Array2<u8>, luma: &mut Array2<u8>) {
    let (h, w) = luma.dim();

    for row in 0..h {
        for col in 0..w {
            let base = col * RGBA_CHANNEL_COUNT;
            let r = rgba[[row, base]] as u32;
            let g = rgba[[row, base + 1]] as u32;
            let b = rgba[[row, base + 2]] as u32;
            luma[[row, col]] =
                ((LUMA_WEIGHT_R * r + LUMA_WEIGHT_G * g + LUMA_WEIGHT_B * b) >> LUMA_SHIFT) as u8;
        }
    }
}
