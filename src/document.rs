use egui::{Color32, Pos2};

use crate::canvas::Canvas;
use crate::error::ExportError;

/// An immutable full copy of the canvas, taken before a mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    canvas: Canvas,
}

impl Snapshot {
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.canvas.pixel(x, y)
    }

    fn into_canvas(self) -> Canvas {
        self.canvas
    }
}

/// The live raster surface.
///
/// The canvas is allocated lazily because its size is only known once the window has been
/// laid out. Until then every operation is a no-op.
#[derive(Debug, Default)]
pub struct Document {
    canvas: Option<Canvas>,
    /// Bumped on every pixel change so the renderer knows when to re-upload.
    version: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a white canvas the first time it is called with a non-empty size.
    ///
    /// Returns `true` if a canvas was allocated by this call.
    pub fn initialize(&mut self, width: u32, height: u32) -> bool {
        if self.canvas.is_some() || width == 0 || height == 0 {
            return false;
        }

        log::info!("Initializing {}x{} canvas", width, height);
        self.canvas = Some(Canvas::new(width, height));
        self.touch();
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.canvas.is_some()
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// `[width, height]` of the canvas once initialized.
    pub fn size(&self) -> Option<[u32; 2]> {
        self.canvas.as_ref().map(|canvas| [canvas.width(), canvas.height()])
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.canvas.as_ref().and_then(|canvas| canvas.pixel(x, y))
    }

    pub fn fill_white(&mut self) {
        if let Some(canvas) = &mut self.canvas {
            canvas.fill_white();
            self.touch();
        }
    }

    pub fn draw_segment(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        if let Some(canvas) = &mut self.canvas {
            canvas.draw_segment(from, to, color, width);
            self.touch();
        }
    }

    /// Deep copy of the current pixels, independent of later mutations.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.canvas.as_ref().map(|canvas| Snapshot {
            canvas: canvas.clone(),
        })
    }

    /// Replaces the live pixels with those of `snapshot`.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.canvas = Some(snapshot.into_canvas());
        self.touch();
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let canvas = self.canvas.as_ref().ok_or(ExportError::NotInitialized)?;
        Ok(canvas.encode_png()?)
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}
