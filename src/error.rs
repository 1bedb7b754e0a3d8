use thiserror::Error;

/// Errors raised by direct pixel access on a [`crate::PixelBuffer`].
///
/// Drawing primitives clip their geometry and never produce these; they only
/// surface when a caller addresses the buffer itself with bad coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// A coordinate fell outside `[0, width) x [0, height)`
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    /// A snapshot was restored into a buffer of a different size
    #[error("snapshot is {found:?} but the canvas is {expected:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },
}
