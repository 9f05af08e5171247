use image::RgbaImage;

/// Read-only seam to the frame acquisition surface.
///
/// The pipeline only ever samples pixels; acquisition, buffering, and frame
/// pacing live on the other side of this trait. Implementations must return
/// stable dimensions for the lifetime of one `detect()` call.
pub trait FrameSource {
    /// Source frame width in pixels.
    fn width(&self) -> u32;

    /// Source frame height in pixels.
    fn height(&self) -> u32;

    /// RGBA sample at (x, y). Callers only pass coordinates inside
    /// `width() x height()`.
    fn pixel(&self, x: u32, y: u32) -> [u8; 4];
}

impl FrameSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y).0
    }
}
