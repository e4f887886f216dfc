//! # Outline font rasterization
//!
//! Bitmap fonts are decoded in `brl`; outline fonts (TTF/OTF) are a
//! capability consumed from fontdue: given text, a font and a pixel
//! size, produce a greyscale raster. When the font cannot be loaded,
//! an embedded bitmap font stands in, so this module always produces a
//! raster and the caller binarizes it the same way on either path.

use std::path::Path;

use brl::{font::bdf::Font, raster::Canvas};
use image::{GrayImage, Luma};

/// A small 5x7 ASCII font, used when an outline font fails to load
const FALLBACK_FONT: &str = include_str!("fallback.bdf");

/// Rasterize text to a greyscale image
///
/// The image is `char_w * len(text)` pixels wide and `char_h` tall,
/// with dark glyphs on a white background. Every character occupies
/// one fixed cell. `font_size` defaults to the larger cell dimension.
pub fn rasterize_text(
    font_path: &Path,
    text: &str,
    char_size: (u32, u32),
    font_size: Option<u32>,
) -> GrayImage {
    let (char_w, char_h) = char_size;
    let font = match load_outline_font(font_path) {
        Ok(font) => font,
        Err(err) => {
            log::warn!(
                "Failed to load outline font '{}': {}; using the built-in fallback font",
                font_path.display(),
                err
            );
            return fallback_raster(text, char_size);
        }
    };

    let len = text.chars().count() as u32;
    let width = char_w * len;
    let px = font_size.unwrap_or_else(|| char_w.max(char_h)) as f32;
    let ascent = font
        .horizontal_line_metrics(px)
        .map(|metrics| metrics.ascent)
        .unwrap_or(char_h as f32);

    let mut image = GrayImage::from_pixel(width, char_h, Luma([0xFF]));
    for (index, c) in text.chars().enumerate() {
        let (metrics, coverage) = font.rasterize(c, px);
        let cell_x = i64::from(index as u32 * char_w);
        let top = ascent.round() as i64 - i64::from(metrics.ymin) - metrics.height as i64;
        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let x = cell_x + i64::from(metrics.xmin) + col as i64;
                let y = top + row as i64;
                if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(char_h) {
                    continue;
                }
                let value = 0xFF - coverage[row * metrics.width + col];
                let pixel = image.get_pixel_mut(x as u32, y as u32);
                pixel.0[0] = pixel.0[0].min(value);
            }
        }
    }
    image
}

fn load_outline_font(path: &Path) -> Result<fontdue::Font, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()).map_err(|e| e.to_string())
}

/// Render the text with the embedded bitmap font
fn fallback_raster(text: &str, (char_w, char_h): (u32, u32)) -> GrayImage {
    let font = Font::parse(FALLBACK_FONT);
    let len = text.chars().count() as u32;
    let mut canvas = Canvas::new(char_w * len, char_h);

    let mut ascent: i32 = 0;
    for c in text.chars() {
        if let Some(glyph) = font.get(c) {
            ascent = ascent.max(glyph.bounds.height as i32 + glyph.bounds.yoff);
        }
    }
    if ascent == 0 {
        ascent = font.bounds.height as i32;
    }

    for (index, c) in text.chars().enumerate() {
        if let Some(glyph) = font.get(c) {
            let x = (index as u32 * char_w) as i32 + glyph.bounds.xoff;
            let y = ascent - glyph.bounds.height as i32 - glyph.bounds.yoff;
            canvas.draw_glyph(x, y, glyph);
        }
    }
    canvas.to_image()
}
