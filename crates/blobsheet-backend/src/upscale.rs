//! Nearest-neighbor upscaling.

use crate::raster::PixelBuffer;

/// Magnify `frame` by an integer `scale` with nearest-neighbor sampling.
///
/// Every source pixel becomes a `scale × scale` block of the same color, so
/// hard pixel edges survive. A scale of 1 hands the frame back untouched.
pub fn upscale(frame: PixelBuffer, scale: u32) -> PixelBuffer {
    if scale <= 1 {
        return frame;
    }

    let width = frame.width * scale;
    let height = frame.height * scale;
    let mut out = PixelBuffer::transparent(width, height);

    for dy in 0..height {
        let sy = dy / scale;
        for dx in 0..width {
            out.set(dx, dy, frame.get(dx / scale, sy));
        }
    }

    out
}
