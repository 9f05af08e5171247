use image::{Rgba, RgbaImage};

/// Disk and background values chosen so the rim gradient clears the edge
/// threshold comfortably after luma conversion.
pub const DISK_COLOR: [u8; 4] = [220, 220, 220, 255];
pub const BACKGROUND_COLOR: [u8; 4] = [20, 20, 20, 255];

/// Render a filled bright disk on a dark background.
///
/// The disk test is analytic (distance <= radius), so the same scene
/// rendered at k times the resolution with k-scaled center and radius
/// produces exactly k-scaled pixel content.
pub fn disk_image(width: u32, height: u32, cx: f32, cy: f32, radius: f32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let px = if (dx * dx + dy * dy).sqrt() <= radius {
                DISK_COLOR
            } else {
                BACKGROUND_COLOR
            };
            img.put_pixel(x, y, Rgba(px));
        }
    }
    img
}

/// Uniform frame with no structure at all.
pub fn blank_image(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.put_pixel(x, y, Rgba(BACKGROUND_COLOR));
        }
    }
    img
}
