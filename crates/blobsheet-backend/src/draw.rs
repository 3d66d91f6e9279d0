//! Pixel-art drawing primitives.
//!
//! Every primitive overwrites the pixels it touches: colors are stored as
//! given, alpha included, with no blending against what was there before.
//! Bounding boxes are inclusive on both ends and everything is clipped to
//! the buffer.

use blobsheet_spec::Rgba;

use crate::raster::PixelBuffer;

/// Inclusive pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Same box moved by `(dx, dy)`.
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// Paint the pixels of `rect` selected by `inside`.
///
/// Pixels with a 4-neighbor outside the shape form the outline; the rest
/// take the fill. Without an outline color the whole shape is filled.
fn paint_shape(
    buffer: &mut PixelBuffer,
    rect: Rect,
    inside: impl Fn(i32, i32) -> bool,
    fill: Option<Rgba>,
    outline: Option<Rgba>,
) {
    for y in rect.y0..=rect.y1 {
        for x in rect.x0..=rect.x1 {
            if !inside(x, y) {
                continue;
            }
            let edge =
                !inside(x - 1, y) || !inside(x + 1, y) || !inside(x, y - 1) || !inside(x, y + 1);
            let color = if edge { outline.or(fill) } else { fill };
            if let Some(color) = color {
                buffer.put(x, y, color);
            }
        }
    }
}

/// True if the center of pixel `(x, y)` lies in the ellipse inscribed in `rect`.
fn ellipse_contains(rect: Rect, x: i32, y: i32) -> bool {
    let a = (rect.x1 - rect.x0 + 1) as f64 / 2.0;
    let b = (rect.y1 - rect.y0 + 1) as f64 / 2.0;
    if a <= 0.0 || b <= 0.0 {
        return false;
    }
    let cx = (rect.x0 + rect.x1 + 1) as f64 / 2.0;
    let cy = (rect.y0 + rect.y1 + 1) as f64 / 2.0;
    let dx = (x as f64 + 0.5 - cx) / a;
    let dy = (y as f64 + 0.5 - cy) / b;
    dx * dx + dy * dy <= 1.0
}

fn rounded_contains(rect: Rect, radius: i32, x: i32, y: i32) -> bool {
    if !rect.contains(x, y) {
        return false;
    }
    let r = radius
        .min((rect.x1 - rect.x0) / 2)
        .min((rect.y1 - rect.y0) / 2)
        .max(0);

    let corner_x = if x < rect.x0 + r {
        rect.x0 + r
    } else if x > rect.x1 - r {
        rect.x1 - r
    } else {
        return true;
    };
    let corner_y = if y < rect.y0 + r {
        rect.y0 + r
    } else if y > rect.y1 - r {
        rect.y1 - r
    } else {
        return true;
    };

    let dx = x - corner_x;
    let dy = y - corner_y;
    dx * dx + dy * dy <= r * r
}

/// Ellipse inscribed in `rect`.
pub fn ellipse(buffer: &mut PixelBuffer, rect: Rect, fill: Option<Rgba>, outline: Option<Rgba>) {
    paint_shape(buffer, rect, |x, y| ellipse_contains(rect, x, y), fill, outline);
}

/// Axis-aligned rectangle.
pub fn rectangle(buffer: &mut PixelBuffer, rect: Rect, fill: Option<Rgba>, outline: Option<Rgba>) {
    paint_shape(buffer, rect, |x, y| rect.contains(x, y), fill, outline);
}

/// Rectangle with corners rounded to `radius`.
pub fn rounded_rectangle(
    buffer: &mut PixelBuffer,
    rect: Rect,
    radius: i32,
    fill: Option<Rgba>,
    outline: Option<Rgba>,
) {
    paint_shape(
        buffer,
        rect,
        |x, y| rounded_contains(rect, radius, x, y),
        fill,
        outline,
    );
}

/// Bresenham segment, both endpoints included.
fn plot_line(buffer: &mut PixelBuffer, from: (i32, i32), to: (i32, i32), color: Rgba) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        buffer.put(x, y, color);
        if (x, y) == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Straight line of `width` pixels. Extra width is stacked along the
/// minor axis.
pub fn line(buffer: &mut PixelBuffer, from: (i32, i32), to: (i32, i32), color: Rgba, width: u32) {
    plot_line(buffer, from, to, color);

    let mostly_horizontal = (to.0 - from.0).abs() >= (to.1 - from.1).abs();
    for k in 1..width as i32 {
        let (ox, oy) = if mostly_horizontal { (0, k) } else { (k, 0) };
        plot_line(
            buffer,
            (from.0 + ox, from.1 + oy),
            (to.0 + ox, to.1 + oy),
            color,
        );
    }
}

/// Part of the outline of the ellipse inscribed in `rect`.
///
/// Angles are in degrees, measured clockwise from the +x axis (y grows
/// downwards), so `20..=160` is the lower half.
pub fn arc(buffer: &mut PixelBuffer, rect: Rect, start_deg: f64, end_deg: f64, color: Rgba) {
    let a = (rect.x1 - rect.x0 + 1) as f64 / 2.0;
    let b = (rect.y1 - rect.y0 + 1) as f64 / 2.0;
    let cx = (rect.x0 + rect.x1 + 1) as f64 / 2.0;
    let cy = (rect.y0 + rect.y1 + 1) as f64 / 2.0;
    let inside = |x: i32, y: i32| ellipse_contains(rect, x, y);

    for y in rect.y0..=rect.y1 {
        for x in rect.x0..=rect.x1 {
            if !inside(x, y) {
                continue;
            }
            let edge =
                !inside(x - 1, y) || !inside(x + 1, y) || !inside(x, y - 1) || !inside(x, y + 1);
            if !edge {
                continue;
            }
            let mut angle = ((y as f64 + 0.5 - cy) / b)
                .atan2((x as f64 + 0.5 - cx) / a)
                .to_degrees();
            if angle < 0.0 {
                angle += 360.0;
            }
            if angle >= start_deg && angle <= end_deg {
                buffer.put(x, y, color);
            }
        }
    }
}

/// Filled convex polygon, edges included.
pub fn polygon(buffer: &mut PixelBuffer, points: &[(i32, i32)], fill: Rgba) {
    if points.is_empty() {
        return;
    }

    let bounds = points.iter().fold(
        Rect::new(i32::MAX, i32::MAX, i32::MIN, i32::MIN),
        |r, &(x, y)| Rect::new(r.x0.min(x), r.y0.min(y), r.x1.max(x), r.y1.max(y)),
    );

    let inside = |x: i32, y: i32| {
        let mut positive = false;
        let mut negative = false;
        for (i, &(ax, ay)) in points.iter().enumerate() {
            let (bx, by) = points[(i + 1) % points.len()];
            let cross = (bx - ax) * (y - ay) - (by - ay) * (x - ax);
            positive |= cross > 0;
            negative |= cross < 0;
        }
        !(positive && negative)
    };

    paint_shape(buffer, bounds, inside, Some(fill), None);
}
