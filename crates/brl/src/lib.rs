#![warn(missing_docs)]
//! # Text to braille rendering
//!
//! This crate turns text into Unicode braille art. Glyphs come from a
//! [BDF] bitmap font decoded by [`font::bdf`], are composited onto a
//! shared pixel [`raster::Canvas`] and encoded into characters from the
//! braille block (`U+2800..=U+28FF`) by [`braille::encode`].
//!
//! ```
//! use brl::{braille, raster::Canvas};
//!
//! let mut canvas = Canvas::new(2, 4);
//! canvas.set(0, 0);
//! assert_eq!(braille::encode(&canvas), "\u{2801}");
//! ```
//!
//! [BDF]: https://en.wikipedia.org/wiki/Glyph_Bitmap_Distribution_Format

pub mod braille;
pub mod font;
pub mod presets;
pub mod raster;

#[doc(hidden)]
pub use nom;
