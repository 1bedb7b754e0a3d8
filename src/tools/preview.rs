//! Ephemeral overlays drawn over the canvas while the user is interacting.
//!
//! Overlays are computed from the gesture state each frame and never touch the
//! committed pixel buffer or the history.

use crate::buffer::Surface;
use crate::color::Color;
use crate::geometry::Point;
use crate::primitives::{self, ShapeStyle};

use super::Tool;

/// Opacity of an in-progress line/rect/circle
pub const SHAPE_PREVIEW_ALPHA: u8 = 100;
/// Opacity of the brush footprint under the pointer
pub const BRUSH_CURSOR_ALPHA: u8 = 150;

/// A single-color coverage mask the size of the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    width: u32,
    height: u32,
    color: Color,
    alpha: u8,
    mask: Vec<bool>,
}

impl Overlay {
    pub fn new(width: u32, height: u32, color: Color, alpha: u8) -> Self {
        Self {
            width,
            height,
            color,
            alpha,
            mask: vec![false; width as usize * height as usize],
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Whether the overlay paints the pixel at (x, y)
    pub fn covers(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && self.mask[y as usize * self.width as usize + x as usize]
    }

    pub fn covered_pixels(&self) -> usize {
        self.mask.iter().filter(|&&covered| covered).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.mask.contains(&true)
    }

    /// Blend the overlay into a row-major pixel slice of the same size.
    pub fn composite_onto(&self, pixels: &mut [Color]) {
        for (pixel, &covered) in pixels.iter_mut().zip(&self.mask) {
            if covered {
                *pixel = self.color.blend_over(*pixel, self.alpha);
            }
        }
    }
}

impl Surface for Overlay {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn plot(&mut self, x: i32, y: i32, _color: Color) {
        if self.contains(x, y) {
            let idx = y as usize * self.width as usize + x as usize;
            self.mask[idx] = true;
        }
    }
}

/// Everything a shape preview depends on.
#[derive(Debug, Clone, Copy)]
pub struct ShapePreview {
    pub tool: Tool,
    pub start: Point,
    pub current: Point,
    pub style: ShapeStyle,
    pub color: Color,
    pub thickness: u32,
}

/// Rasterize the shape the user would get by releasing the pointer now.
///
/// Returns `None` for tools without a drag phase and for degenerate shapes.
pub fn shape_overlay(preview: &ShapePreview, width: u32, height: u32) -> Option<Overlay> {
    let mut overlay = Overlay::new(width, height, preview.color, SHAPE_PREVIEW_ALPHA);
    let end = preview.current.clamp_to(width, height);
    let drawn = match preview.tool {
        Tool::Line => primitives::stroke(
            &mut overlay,
            preview.start,
            end,
            preview.color,
            preview.thickness,
        ),
        Tool::Rect => primitives::rectangle(
            &mut overlay,
            preview.start,
            end,
            preview.color,
            preview.style,
            preview.thickness,
        ),
        Tool::Circle => primitives::circle(
            &mut overlay,
            preview.start,
            end,
            preview.color,
            preview.style,
            preview.thickness,
        ),
        Tool::Pen | Tool::Eraser | Tool::Fill => false,
    };
    drawn.then_some(overlay)
}

/// The footprint a pen or eraser dab would leave at `position`.
pub fn brush_cursor(
    tool: Tool,
    position: Point,
    color: Color,
    thickness: u32,
    width: u32,
    height: u32,
) -> Option<Overlay> {
    if !tool.is_freehand() {
        return None;
    }
    let mut overlay = Overlay::new(width, height, color, BRUSH_CURSOR_ALPHA);
    primitives::stamp(&mut overlay, position, color, thickness / 2);
    Some(overlay)
}
