use egui::{pos2, Color32, ColorImage, Context, Painter, Rect, TextureHandle, TextureOptions};

use crate::buffer::Snapshot;
use crate::engine::CanvasEngine;
use crate::tools::Overlay;

/// Uploads the canvas (plus any preview overlays) to a GPU texture and paints it.
#[derive(Default)]
pub struct CanvasRenderer {
    texture: Option<TextureHandle>,
    /// Engine revision currently in the texture
    uploaded_revision: Option<u64>,
    /// Number of times the texture was (re)built
    uploads: u64,
}

impl std::fmt::Debug for CanvasRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasRenderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_revision", &self.uploaded_revision)
            .field("uploads", &self.uploads)
            .finish()
    }
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a snapshot and its overlays into one image.
    ///
    /// The snapshot itself is left untouched; blending happens on a copy.
    pub fn compose(snapshot: &Snapshot, overlays: &[Overlay]) -> ColorImage {
        let mut pixels = snapshot.pixels().to_vec();
        for overlay in overlays {
            overlay.composite_onto(&mut pixels);
        }
        let bytes: Vec<u8> = pixels.iter().flat_map(|c| [c.r, c.g, c.b]).collect();
        ColorImage::from_rgb(
            [snapshot.width() as usize, snapshot.height() as usize],
            &bytes,
        )
    }

    /// Rebuild the texture if the engine revision moved, then paint it into `rect`.
    ///
    /// Overlays only change through engine input and commands, both of which
    /// bump the revision, so an idle hovering pointer costs no uploads.
    pub fn render(&mut self, ctx: &Context, painter: &Painter, rect: Rect, engine: &CanvasEngine) {
        if self.uploaded_revision != Some(engine.revision()) || self.texture.is_none() {
            let image = Self::compose(&engine.snapshot(), &engine.overlays());
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
                }
            }
            self.uploaded_revision = Some(engine.revision());
            self.uploads += 1;
        }

        if let Some(texture) = &self.texture {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
    }

    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    pub fn uploaded_revision(&self) -> Option<u64> {
        self.uploaded_revision
    }
}
