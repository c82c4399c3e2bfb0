use egui::{Color32, ColorImage, Pos2};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Fixed-size RGB pixel buffer holding the drawing.
///
/// Pixel `(x, y)` covers the square `[x, x + 1) × [y, y + 1)` and is sampled at its center.
#[derive(Clone, PartialEq)]
pub struct Canvas {
    pixels: RgbImage,
}

// Printing every pixel is useless in logs
impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .finish()
    }
}

impl Canvas {
    /// Allocates a canvas filled with white.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, WHITE),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.pixels
            .get_pixel_checked(x, y)
            .map(|Rgb([r, g, b])| Color32::from_rgb(*r, *g, *b))
    }

    pub fn fill_white(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = WHITE;
        }
    }

    /// Rasterizes a segment of the given stroke width with round caps.
    ///
    /// Each pixel is blended toward `color` by its coverage, which falls off linearly over
    /// one pixel at the stroke edge. Consecutive segments sharing an endpoint therefore join
    /// without gaps at any width.
    pub fn draw_segment(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        if !(from.x.is_finite() && from.y.is_finite() && to.x.is_finite() && to.y.is_finite()) {
            return;
        }

        let radius = width.max(1.0) / 2.0;
        let reach = radius + 0.5;

        let min_x = (from.x.min(to.x) - reach).floor().max(0.0) as u32;
        let min_y = (from.y.min(to.y) - reach).floor().max(0.0) as u32;
        let max_x = (from.x.max(to.x) + reach).ceil().min(self.width() as f32).max(0.0) as u32;
        let max_y = (from.y.max(to.y) + reach).ceil().min(self.height() as f32).max(0.0) as u32;

        let [r, g, b, _] = color.to_array();

        for y in min_y..max_y {
            for x in min_x..max_x {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = (reach - distance_to_segment(center, from, to)).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }

                let Rgb([dr, dg, db]) = *self.pixels.get_pixel(x, y);
                self.pixels.put_pixel(
                    x,
                    y,
                    Rgb([
                        blend(dr, r, coverage),
                        blend(dg, g, coverage),
                        blend(db, b, coverage),
                    ]),
                );
            }
        }
    }

    /// Encodes the pixels as an RGB PNG at the canvas's native size.
    pub fn encode_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Converts to an egui image for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgb(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }
}

fn blend(dst: u8, src: u8, coverage: f32) -> u8 {
    let dst = f32::from(dst);
    (dst + (f32::from(src) - dst) * coverage).round() as u8
}

/// Shortest distance from `point` to the segment `start..end`.
fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let line_vec = end - start;
    let point_vec = point - start;

    let len_sq = line_vec.length_sq();
    if len_sq == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / len_sq).clamp(0.0, 1.0);
    (point - (start + line_vec * t)).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_dark(color: Color32) -> bool {
        color.r() < 64 && color.g() < 64 && color.b() < 64
    }

    #[test]
    fn test_new_canvas_is_white() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(canvas.pixel(x, y), Some(Color32::WHITE));
            }
        }
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn test_vertical_segment() {
        let mut canvas = Canvas::new(200, 200);
        canvas.draw_segment(Pos2::new(10.0, 10.0), Pos2::new(10.0, 50.0), Color32::BLACK, 5.0);

        for y in 10..50 {
            assert!(is_dark(canvas.pixel(10, y).unwrap()), "pixel (10, {y}) not dark");
        }
        assert_eq!(canvas.pixel(100, 100), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(20, 30), Some(Color32::WHITE));
    }

    #[test]
    fn test_round_cap_extends_past_endpoint() {
        let mut canvas = Canvas::new(100, 100);
        canvas.draw_segment(Pos2::new(50.0, 20.0), Pos2::new(50.0, 40.0), Color32::BLACK, 10.0);

        // Within the cap radius below the end point
        assert!(is_dark(canvas.pixel(50, 42).unwrap()));
        // Corner a square cap would cover stays untouched
        assert_eq!(canvas.pixel(54, 44), Some(Color32::WHITE));
    }

    #[test]
    fn test_thin_diagonal_has_no_gaps() {
        let mut canvas = Canvas::new(64, 64);
        canvas.draw_segment(Pos2::new(5.0, 5.0), Pos2::new(55.0, 55.0), Color32::BLACK, 1.0);

        for i in 6..54 {
            let color = canvas.pixel(i, i).unwrap();
            assert!(color.r() < 255, "gap at ({i}, {i})");
        }
    }

    #[test]
    fn test_segment_is_clipped_to_bounds() {
        let mut canvas = Canvas::new(20, 20);
        canvas.draw_segment(Pos2::new(-30.0, 10.0), Pos2::new(50.0, 10.0), Color32::RED, 4.0);
        canvas.draw_segment(Pos2::new(-30.0, -30.0), Pos2::new(-10.0, -10.0), Color32::RED, 4.0);

        assert_eq!(canvas.pixel(0, 10), Some(Color32::RED));
        assert_eq!(canvas.pixel(19, 10), Some(Color32::RED));
        assert_eq!(canvas.pixel(0, 0), Some(Color32::WHITE));
    }

    #[test]
    fn test_fill_white_resets_pixels() {
        let mut canvas = Canvas::new(30, 30);
        canvas.draw_segment(Pos2::new(0.0, 0.0), Pos2::new(30.0, 30.0), Color32::BLUE, 8.0);
        canvas.fill_white();
        assert_eq!(canvas, Canvas::new(30, 30));
    }

    #[test]
    fn test_encode_png_keeps_dimensions() {
        let mut canvas = Canvas::new(40, 25);
        canvas.draw_segment(Pos2::new(2.0, 2.0), Pos2::new(30.0, 20.0), Color32::BLACK, 3.0);

        let bytes = canvas.encode_png().unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        assert_eq!((decoded.width(), decoded.height()), (40, 25));
        assert_eq!(decoded.to_rgb8(), canvas.pixels);
    }

    #[test]
    fn test_distance_to_segment() {
        let start = Pos2::new(0.0, 0.0);
        let end = Pos2::new(10.0, 0.0);
        assert!((distance_to_segment(Pos2::new(5.0, 3.0), start, end) - 3.0).abs() < 1e-5);
        assert!((distance_to_segment(Pos2::new(13.0, 4.0), start, end) - 5.0).abs() < 1e-5);
        assert!((distance_to_segment(Pos2::new(3.0, 4.0), start, start) - 5.0).abs() < 1e-5);
    }
}
