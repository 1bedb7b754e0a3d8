use std::path::Path;

use image::{ImageFormat, RgbImage};
use thiserror::Error;

use crate::buffer::Snapshot;

/// Errors that can occur while writing the canvas to disk
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Snapshot of {width}x{height} does not fit an RGB image")]
    InvalidBuffer { width: u32, height: u32 },
}

/// Convert a snapshot into an `image` RGB buffer
pub fn to_rgb_image(snapshot: &Snapshot) -> Result<RgbImage, ExportError> {
    let (width, height) = snapshot.dimensions();
    RgbImage::from_raw(width, height, snapshot.to_rgb_bytes())
        .ok_or(ExportError::InvalidBuffer { width, height })
}

/// Write the canvas (and nothing else) to `path` as a PNG.
pub fn save_png(snapshot: &Snapshot, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let image = to_rgb_image(snapshot)?;
    match image.save_with_format(path, ImageFormat::Png) {
        Ok(()) => {
            log::info!("Drawing saved as {}", path.display());
            Ok(())
        }
        Err(err) => {
            log::error!("Error saving drawing to {}: {}", path.display(), err);
            Err(err.into())
        }
    }
}
