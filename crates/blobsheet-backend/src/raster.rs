//! RGBA pixel buffers.

use blobsheet_spec::Rgba;

/// A 2D RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major).
    pub data: Vec<Rgba>,
}

impl PixelBuffer {
    /// Create a new buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a new fully transparent buffer.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Rgba::TRANSPARENT)
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        let idx = (y * self.width + x) as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        let idx = (y * self.width + x) as usize;
        self.data[idx] = color;
    }

    /// True if `(x, y)` lies inside the buffer.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Set a pixel given signed coordinates. Writes outside the buffer are
    /// dropped.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Rgba) {
        if self.contains(x, y) {
            self.set(x as u32, y as u32, color);
        }
    }

    /// Iterate over `(x, y, color)` for every pixel, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgba)> + '_ {
        let width = self.width;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i as u32 % width, i as u32 / width, c))
    }

    /// Count pixels equal to `color`.
    pub fn count(&self, color: Rgba) -> usize {
        self.data.iter().filter(|&&c| c == color).count()
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_array());
        }
        bytes
    }
}
