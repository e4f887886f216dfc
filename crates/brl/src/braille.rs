//! # The braille cell encoding
//!
//! Every character in the Unicode braille block (`U+2800..=U+28FF`)
//! encodes a 2x4 dot pattern as a bitmask over the base codepoint. The
//! dot numbering is historical: dots 1,2,3,7 run down the left column
//! and dots 4,5,6,8 down the right, so the bit for a dot position is
//! fixed but not in raster order.

use crate::raster::Canvas;

/// The first codepoint of the Unicode braille block
pub const BRAILLE_BASE: u32 = 0x2800;

/// The `(dx, dy) -> bit` mapping of the 8 dot positions in a cell
pub const BRAILLE_DOTS: [(u32, u32, u32); 8] = [
    (0, 0, 0x01),
    (0, 1, 0x02),
    (0, 2, 0x04),
    (0, 3, 0x40),
    (1, 0, 0x08),
    (1, 1, 0x10),
    (1, 2, 0x20),
    (1, 3, 0x80),
];

/// Encode a canvas as a string of braille characters
///
/// The canvas is partitioned into 2x4 cells; cells that run past the
/// canvas edge read the missing pixels as blank. Bands of 4 pixel rows
/// become one output line each, joined with `'\n'`. A canvas with zero
/// width or zero height encodes to the empty string.
pub fn encode(canvas: &Canvas) -> String {
    if canvas.width() == 0 || canvas.height() == 0 {
        return String::new();
    }
    let mut out = String::new();
    for y in (0..canvas.height()).step_by(4) {
        if y > 0 {
            out.push('\n');
        }
        for x in (0..canvas.width()).step_by(2) {
            let mut code = BRAILLE_BASE;
            for &(dx, dy, bit) in BRAILLE_DOTS.iter() {
                if canvas.get(x + dx, y + dy) {
                    code |= bit;
                }
            }
            out.push(char::from_u32(code).unwrap_or(' '));
        }
    }
    out
}
