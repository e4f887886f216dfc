//! Compositing text onto a canvas

use crate::font::bdf::Font;

use super::Canvas;

/// Render text into a canvas using a bitmap font
///
/// Every glyph sits on a common baseline resolved from the ascents and
/// descents of the glyphs that actually occur in `text`. Characters
/// without a glyph in the font advance the cursor but draw nothing.
/// Every character advances by the font-wide default width plus
/// `spacing`; per-glyph advance widths are deliberately not used.
pub fn render_text(text: &str, font: &Font, spacing: u32) -> Canvas {
    let mut max_ascent: i32 = 0;
    let mut max_descent: i32 = 0;
    for c in text.chars() {
        if let Some(glyph) = font.get(c) {
            max_ascent = max_ascent.max(glyph.bounds.height as i32 + glyph.bounds.yoff);
            max_descent = max_descent.max(-glyph.bounds.yoff);
        }
    }

    let len = text.chars().count() as u32;
    let height = match (max_ascent + max_descent).max(0) as u32 {
        0 => font.bounds.height,
        resolved => resolved,
    };
    let width = len * font.bounds.width + len.saturating_sub(1) * spacing;

    let mut canvas = Canvas::new(width, height);
    let mut x: i32 = 0;
    let advance = (font.bounds.width + spacing) as i32;
    for c in text.chars() {
        if let Some(glyph) = font.get(c) {
            let y = max_ascent - glyph.bounds.height as i32 - glyph.bounds.yoff;
            canvas.draw_glyph(x + glyph.bounds.xoff, y, glyph);
        }
        x += advance;
    }
    canvas
}
