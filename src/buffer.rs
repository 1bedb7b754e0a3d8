use std::sync::Arc;

use crate::color::Color;
use crate::error::CanvasError;

/// Anything the drawing primitives can rasterize into.
///
/// `plot` is the clipping write: coordinates outside the surface are dropped.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn plot(&mut self, x: i32, y: i32, color: Color);

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }
}

/// The fixed-size grid of pixels the user paints on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Create a `width` x `height` buffer with every pixel set to `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, CanvasError> {
        if self.contains(x, y) {
            Ok(y as usize * self.width as usize + x as usize)
        } else {
            Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Result<Color, CanvasError> {
        let idx = self.index(x, y)?;
        Ok(self.pixels[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, color: Color) -> Result<(), CanvasError> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = color;
        Ok(())
    }

    /// Paint the whole buffer with one color.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Take an independent copy of the current contents.
    pub fn copy(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            pixels: Arc::from(self.pixels.as_slice()),
        }
    }

    /// Replace the whole buffer with the contents of `snapshot`.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), CanvasError> {
        if snapshot.dimensions() != self.dimensions() {
            return Err(CanvasError::DimensionMismatch {
                expected: self.dimensions(),
                found: snapshot.dimensions(),
            });
        }
        self.pixels.copy_from_slice(&snapshot.pixels);
        Ok(())
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

impl Surface for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if self.contains(x, y) {
            let idx = y as usize * self.width as usize + x as usize;
            self.pixels[idx] = color;
        }
    }
}

/// An immutable copy of a [`PixelBuffer`].
///
/// Cloning is cheap: the pixel data is shared, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    pixels: Arc<[Color]>,
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, x: i32, y: i32) -> Result<Color, CanvasError> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Packed RGB bytes, row-major, three per pixel.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| [c.r, c.g, c.b])
            .collect()
    }
}
