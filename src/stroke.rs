use egui::{Color32, Pos2, vec2};

use crate::document::Document;

pub const MIN_BRUSH_WIDTH: u32 = 1;
pub const MAX_BRUSH_WIDTH: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushMode {
    #[default]
    Draw,
    Erase,
}

/// Color, width and mode applied to each new segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    color: Color32,
    width: u32,
    mode: BrushMode,
}

impl Default for BrushState {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: 5,
            mode: BrushMode::Draw,
        }
    }
}

impl BrushState {
    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Sets the width, clamped to the range the brush-size slider offers.
    pub fn set_width(&mut self, width: u32) {
        self.width = width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH);
    }

    pub fn set_mode(&mut self, mode: BrushMode) {
        self.mode = mode;
    }

    /// The color segments are actually painted with. Erasing paints white.
    pub fn paint_color(&self) -> Color32 {
        match self.mode {
            BrushMode::Draw => self.color,
            BrushMode::Erase => Color32::WHITE,
        }
    }
}

/// Maps a pointer position to the center of the pixel it lands in.
///
/// Pointers report whole-number positions at pixel corners, while the canvas samples
/// coverage at pixel centers.
fn pixel_center(pos: Pos2) -> Pos2 {
    pos + vec2(0.5, 0.5)
}

/// The stroke currently being drawn while the pointer is held down.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveStroke {
    last: Pos2,
    segments: usize,
}

impl ActiveStroke {
    pub fn new(start: Pos2) -> Self {
        Self {
            last: start,
            segments: 0,
        }
    }

    /// Extends the stroke to `pos`, drawing one segment from the previous point.
    ///
    /// The brush is sampled per segment, so a brush change only affects later segments.
    pub fn add_point(&mut self, pos: Pos2, brush: &BrushState, document: &mut Document) {
        document.draw_segment(
            pixel_center(self.last),
            pixel_center(pos),
            brush.paint_color(),
            brush.width() as f32,
        );
        self.last = pos;
        self.segments += 1;
    }

    pub fn segment_count(&self) -> usize {
        self.segments
    }
}
