//! RGB raster surface and PNG encoding.

use std::fmt;
use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use crate::paint::Color;

/// Exclusively-owned RGB8 drawing surface.
///
/// One writer, sequential draw calls: renderers blend pixels in and the
/// result is encoded to PNG once at the end. Out-of-bounds writes are
/// ignored, so shape renderers can rasterize their full bounding boxes
/// without edge special-casing.
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, Rgb([background.r, background.g, background.b])),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.img.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Writes one pixel. No-op outside the canvas.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.img.width() || y as u32 >= self.img.height() {
            return;
        }
        self.img.put_pixel(x as u32, y as u32, Rgb([color.r, color.g, color.b]));
    }

    /// Blends `color` over the existing pixel with `coverage` in [0, 1].
    ///
    /// Full coverage writes the color exactly (no rounding drift).
    pub fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        let coverage = coverage.clamp(0.0, 1.0);
        if coverage <= 0.0 {
            return;
        }
        if coverage >= 1.0 {
            self.put(x, y, color);
            return;
        }
        if x < 0 || y < 0 || x as u32 >= self.img.width() || y as u32 >= self.img.height() {
            return;
        }
        let px = self.img.get_pixel_mut(x as u32, y as u32);
        let dst = Color::new(px.0[0], px.0[1], px.0[2]);
        let mixed = dst.lerp(color, coverage);
        px.0 = [mixed.r, mixed.g, mixed.b];
    }

    /// Reads one pixel. `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.img.width() || y as u32 >= self.img.height() {
            return None;
        }
        let px = self.img.get_pixel(x as u32, y as u32);
        Some(Color::new(px.0[0], px.0[1], px.0[2]))
    }

    /// Encodes the canvas as PNG bytes (RGB, no alpha).
    pub fn encode_png(&self) -> Result<Vec<u8>, EncodeError> {
        let mut bytes = Vec::new();
        self.img
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(EncodeError)?;
        Ok(bytes)
    }
}

/// PNG encoding failure.
#[derive(Debug)]
pub struct EncodeError(image::ImageError);

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "png encoding failed: {}", self.0)
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::new(20, 21, 38);

    #[test]
    fn new_canvas_is_filled_with_background() {
        let canvas = Canvas::new(4, 3, BG);
        assert_eq!(canvas.pixel(0, 0), Some(BG));
        assert_eq!(canvas.pixel(3, 2), Some(BG));
        assert_eq!(canvas.pixel(4, 2), None);
        assert_eq!(canvas.pixel(-1, 0), None);
    }

    #[test]
    fn put_outside_bounds_is_ignored() {
        let mut canvas = Canvas::new(2, 2, BG);
        canvas.put(-1, 0, Color::new(255, 0, 0));
        canvas.put(0, 5, Color::new(255, 0, 0));
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(canvas.pixel(x, y), Some(BG));
            }
        }
    }

    #[test]
    fn blend_full_coverage_writes_exact_color() {
        let mut canvas = Canvas::new(2, 2, BG);
        let c = Color::new(191, 90, 242);
        canvas.blend(1, 1, c, 1.0);
        assert_eq!(canvas.pixel(1, 1), Some(c));
    }

    #[test]
    fn blend_zero_coverage_is_a_no_op() {
        let mut canvas = Canvas::new(2, 2, BG);
        canvas.blend(0, 0, Color::new(255, 255, 255), 0.0);
        assert_eq!(canvas.pixel(0, 0), Some(BG));
    }

    #[test]
    fn blend_half_coverage_mixes_toward_source() {
        let mut canvas = Canvas::new(1, 1, Color::new(0, 0, 0));
        canvas.blend(0, 0, Color::new(200, 100, 0), 0.5);
        assert_eq!(canvas.pixel(0, 0), Some(Color::new(100, 50, 0)));
    }

    #[test]
    fn encode_png_round_trips_dimensions_and_background() {
        let canvas = Canvas::new(8, 5, BG);
        let bytes = canvas.encode_png().unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 5);
        assert_eq!(decoded.get_pixel(4, 2).0, [BG.r, BG.g, BG.b]);
    }
}
