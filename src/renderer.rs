use eframe::egui::{self, Color32, Painter, Rect, Stroke, TextureHandle, TextureOptions};

use crate::document::Document;
use crate::grid::{GridState, grid_lines};

const CANVAS_BORDER: Stroke = Stroke {
    width: 2.0,
    color: Color32::BLACK,
};

/// Draws the canvas and the grid overlay each frame.
///
/// The canvas lives in a single egui texture that is only re-uploaded when the document
/// version changes.
pub struct Renderer {
    texture: Option<TextureHandle>,
    /// Document version the texture was uploaded from
    texture_version: Option<u64>,
    grid_color: Color32,
}

// Custom Debug implementation since TextureHandle doesn't implement Debug
impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("texture_version", &self.texture_version)
            .field("grid_color", &self.grid_color)
            .finish()
    }
}

impl Renderer {
    pub fn new(grid_color: Color32) -> Self {
        Self {
            texture: None,
            texture_version: None,
            grid_color,
        }
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     ctx (egui::Context): The egui context used to upload the canvas texture
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): Screen rectangle the canvas occupies
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &Painter,
        rect: Rect,
        document: &Document,
        grid: &GridState,
    ) {
        match self.sync_texture(ctx, document) {
            Some(texture) => {
                let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(texture.id(), rect, uv, Color32::WHITE);
            }
            None => {
                painter.rect_filled(rect, 0.0, Color32::WHITE);
            }
        }

        // The grid goes over the composited frame only, never into the canvas
        let grid_stroke = Stroke::new(1.0, self.grid_color);
        for line in grid_lines(grid, rect.width(), rect.height()) {
            painter.line_segment(
                [rect.min + line.from.to_vec2(), rect.min + line.to.to_vec2()],
                grid_stroke,
            );
        }

        painter.rect_stroke(rect, 0.0, CANVAS_BORDER);
    }

    /// Uploads the canvas if it changed since the last frame.
    fn sync_texture(&mut self, ctx: &egui::Context, document: &Document) -> Option<&TextureHandle> {
        let canvas = document.canvas()?;

        if self.texture_version != Some(document.version()) {
            let image = canvas.to_color_image();
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
                }
            }
            self.texture_version = Some(document.version());
        }

        self.texture.as_ref()
    }

    #[cfg(test)]
    fn uploaded_version(&self) -> Option<u64> {
        self.texture_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Pos2, vec2};

    fn painter(ctx: &egui::Context, rect: Rect) -> Painter {
        Painter::new(ctx.clone(), egui::LayerId::background(), rect)
    }

    #[test]
    fn test_render_without_canvas() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0));
        let mut renderer = Renderer::new(Color32::LIGHT_GRAY);

        renderer.render(&ctx, &painter(&ctx, rect), rect, &Document::new(), &GridState::default());
        assert_eq!(renderer.uploaded_version(), None);
    }

    #[test]
    fn test_texture_follows_document_version() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(64.0, 64.0));
        let mut renderer = Renderer::new(Color32::LIGHT_GRAY);
        let mut document = Document::new();
        document.initialize(64, 64);
        let mut grid = GridState::default();
        grid.show(20);

        renderer.render(&ctx, &painter(&ctx, rect), rect, &document, &grid);
        assert_eq!(renderer.uploaded_version(), Some(document.version()));

        document.draw_segment(Pos2::new(0.0, 0.0), Pos2::new(64.0, 64.0), Color32::BLACK, 3.0);
        renderer.render(&ctx, &painter(&ctx, rect), rect, &document, &grid);
        assert_eq!(renderer.uploaded_version(), Some(document.version()));
    }
}
