use crate::buffer::{PixelBuffer, Surface};
use crate::color::Color;
use crate::error::CanvasError;
use crate::geometry::Point;

/// Replace the 4-connected region around `seed` with `replacement`.
///
/// Returns `Ok(false)` without touching the buffer when the seed already has the
/// replacement color. The region is walked with a heap-allocated stack so that
/// large regions cannot overflow the call stack.
pub fn flood_fill(
    buffer: &mut PixelBuffer,
    seed: Point,
    replacement: Color,
) -> Result<bool, CanvasError> {
    let target = buffer.get(seed.x, seed.y)?;
    if target == replacement {
        return Ok(false);
    }

    let mut stack = vec![seed];
    while let Some(Point { x, y }) = stack.pop() {
        // Out-of-bounds neighbours are skipped here rather than before pushing.
        match buffer.get(x, y) {
            Ok(color) if color == target => {}
            _ => continue,
        }
        buffer.plot(x, y, replacement);

        stack.push(Point::new(x + 1, y));
        stack.push(Point::new(x - 1, y));
        stack.push(Point::new(x, y + 1));
        stack.push(Point::new(x, y - 1));
    }
    Ok(true)
}
