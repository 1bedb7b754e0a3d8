//! Rasterizers for strokes, stamps and shapes.
//!
//! Every primitive clips against the target [`Surface`] instead of failing, and
//! returns `true` when the requested geometry had any extent at all. A `false`
//! return means nothing was touched and the edit should not be committed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::Surface;
use crate::color::Color;
use crate::geometry::{PixelRect, Point};

/// How rectangles and circles are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeStyle {
    /// Only a border of the active thickness
    #[default]
    Outline,
    /// The whole interior
    #[serde(alias = "fill")]
    Filled,
}

impl ShapeStyle {
    pub const ALL: [ShapeStyle; 2] = [ShapeStyle::Outline, ShapeStyle::Filled];

    pub fn label(&self) -> &'static str {
        match self {
            ShapeStyle::Outline => "Outline",
            ShapeStyle::Filled => "Filled",
        }
    }
}

impl fmt::Display for ShapeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shape style `{0}` (expected `outline` or `filled`)")]
pub struct ParseStyleError(pub String);

impl FromStr for ShapeStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outline" => Ok(ShapeStyle::Outline),
            "filled" | "fill" => Ok(ShapeStyle::Filled),
            _ => Err(ParseStyleError(s.to_owned())),
        }
    }
}

/// Fill the clipped part of `rect`.
fn fill_rect<S: Surface + ?Sized>(surface: &mut S, rect: PixelRect, color: Color) {
    let clipped = rect.clipped(surface.width(), surface.height());
    for y in clipped.y..clipped.bottom() {
        for x in clipped.x..clipped.right() {
            surface.plot(x, y, color);
        }
    }
}

/// Bresenham line, one pixel wide.
fn thin_line<S: Surface + ?Sized>(surface: &mut S, p0: Point, p1: Point, color: Color) {
    let (mut x, mut y) = (p0.x, p0.y);
    let dx = (p1.x - x).abs();
    let sx = if x < p1.x { 1 } else { -1 };
    let dy = -(p1.y - y).abs();
    let sy = if y < p1.y { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        surface.plot(x, y, color);
        if x == p1.x && y == p1.y {
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

/// Squared distance from `p` to the segment `a`-`b`.
fn segment_distance_sq(p: (f32, f32), a: Point, b: Point) -> f32 {
    let (ax, ay) = (a.x as f32, a.y as f32);
    let (dx, dy) = (b.x as f32 - ax, b.y as f32 - ay);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.0 - ax) * dx + (p.1 - ay) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (ax + t * dx, ay + t * dy);
    (p.0 - cx) * (p.0 - cx) + (p.1 - cy) * (p.1 - cy)
}

/// Rasterize a segment of the given thickness.
///
/// Thickness 0 or 1 gives a 1-pixel line. Wider strokes color every pixel whose
/// center is within `thickness / 2` of the segment, which rounds the caps.
pub fn stroke<S: Surface + ?Sized>(
    surface: &mut S,
    p0: Point,
    p1: Point,
    color: Color,
    thickness: u32,
) -> bool {
    if thickness <= 1 {
        thin_line(surface, p0, p1, color);
        return true;
    }

    let radius = thickness as f32 / 2.0;
    let reach = radius.ceil() as i32;
    let bounds = PixelRect::from_corners(
        Point::new(p0.x.min(p1.x) - reach, p0.y.min(p1.y) - reach),
        Point::new(p0.x.max(p1.x) + reach + 1, p0.y.max(p1.y) + reach + 1),
    )
    .clipped(surface.width(), surface.height());

    let radius_sq = radius * radius;
    for y in bounds.y..bounds.bottom() {
        for x in bounds.x..bounds.right() {
            if segment_distance_sq((x as f32, y as f32), p0, p1) <= radius_sq {
                surface.plot(x, y, color);
            }
        }
    }
    true
}

/// Pixels of a disk around `center`: `dx² + dy² <= outer²` and `> inner²`.
fn ring<S: Surface + ?Sized>(
    surface: &mut S,
    center: Point,
    outer: i32,
    inner: Option<i32>,
    color: Color,
) {
    let outer_sq = outer * outer;
    let inner_sq = inner.map(|r| r * r);
    for dy in -outer..=outer {
        for dx in -outer..=outer {
            let d = dx * dx + dy * dy;
            if d > outer_sq {
                continue;
            }
            if let Some(inner_sq) = inner_sq {
                if d <= inner_sq {
                    continue;
                }
            }
            surface.plot(center.x + dx, center.y + dy, color);
        }
    }
}

/// Filled disk. A radius of 0 colors just the center pixel.
pub fn stamp<S: Surface + ?Sized>(surface: &mut S, center: Point, color: Color, radius: u32) -> bool {
    ring(surface, center, radius as i32, None, color);
    true
}

/// Axis-aligned rectangle spanned by two drag corners, in either order.
pub fn rectangle<S: Surface + ?Sized>(
    surface: &mut S,
    p0: Point,
    p1: Point,
    color: Color,
    style: ShapeStyle,
    thickness: u32,
) -> bool {
    let rect = PixelRect::from_corners(p0, p1);
    if rect.is_empty() {
        return false;
    }

    match style {
        ShapeStyle::Filled => fill_rect(surface, rect, color),
        ShapeStyle::Outline => {
            let t = (thickness.max(1) as i32).min(rect.width.max(rect.height));
            let band_h = t.min(rect.height);
            let band_w = t.min(rect.width);
            // top, bottom, left, right
            fill_rect(surface, PixelRect { height: band_h, ..rect }, color);
            fill_rect(
                surface,
                PixelRect { y: rect.bottom() - band_h, height: band_h, ..rect },
                color,
            );
            fill_rect(surface, PixelRect { width: band_w, ..rect }, color);
            fill_rect(
                surface,
                PixelRect { x: rect.right() - band_w, width: band_w, ..rect },
                color,
            );
        }
    }
    true
}

/// Circle centered between the drag corners.
///
/// The radius is the Chebyshev distance from the center to `p1`, so dragging
/// along either axis alone sizes the circle. A radius of 0 draws nothing.
pub fn circle<S: Surface + ?Sized>(
    surface: &mut S,
    p0: Point,
    p1: Point,
    color: Color,
    style: ShapeStyle,
    thickness: u32,
) -> bool {
    let center = p0.midpoint(p1);
    let radius = p1.chebyshev_distance(center);
    if radius <= 0 {
        return false;
    }

    match style {
        ShapeStyle::Filled => ring(surface, center, radius, None, color),
        ShapeStyle::Outline => {
            let inner = radius - thickness.max(1) as i32;
            ring(surface, center, radius, (inner > 0).then_some(inner), color)
        }
    }
    true
}
