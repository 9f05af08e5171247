use image::{Rgba, RgbaImage};

use cuptrack_core::tracker::Circle;

const MARK_COLOR: Rgba<u8> = Rgba([80, 200, 120, 255]);
const MISS_COLOR: Rgba<u8> = Rgba([200, 80, 80, 255]);

/// Draw the detected circle and a center cross onto `img`.
pub fn draw_detection(img: &mut RgbaImage, circle: &Circle) {
    // Two adjacent rings give the outline a visible width.
    draw_ring(img, circle.x, circle.y, circle.r, MARK_COLOR);
    draw_ring(img, circle.x, circle.y, circle.r + 1.0, MARK_COLOR);
    draw_cross(img, circle.x, circle.y, MARK_COLOR);
}

/// Mark a frame that produced no accepted detection: a diagonal cross in
/// the middle of the frame.
pub fn draw_miss(img: &mut RgbaImage) {
    let cx = (img.width() / 2) as i64;
    let cy = (img.height() / 2) as i64;
    let arm = (img.width().min(img.height()) / 16).max(4) as i64;
    for offset in -arm..=arm {
        put_pixel_checked(img, cx + offset, cy + offset, MISS_COLOR);
        put_pixel_checked(img, cx + offset, cy - offset, MISS_COLOR);
    }
}

fn draw_ring(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    if radius <= 0.0 {
        return;
    }
    // Enough samples that adjacent plotted pixels touch.
    let steps = (radius * std::f32::consts::TAU).ceil().max(16.0) as usize;
    for step in 0..steps {
        let theta = step as f32 * std::f32::consts::TAU / steps as f32;
        let x = (cx + radius * theta.cos()).round() as i64;
        let y = (cy + radius * theta.sin()).round() as i64;
        put_pixel_checked(img, x, y, color);
    }
}

fn draw_cross(img: &mut RgbaImage, cx: f32, cy: f32, color: Rgba<u8>) {
    let cx = cx.round() as i64;
    let cy = cy.round() as i64;
    for offset in -4..=4i64 {
        put_pixel_checked(img, cx + offset, cy, color);
        put_pixel_checked(img, cx, cy + offset, color);
    }
}

fn put_pixel_checked(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}
