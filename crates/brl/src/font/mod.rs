//! # Bitmap font handling
//!
//! The only format implemented from scratch is the textual BDF format
//! in [`bdf`]. Loading goes through [`bdf::Font::load`], which is the
//! single fallible step: once the source text is in memory, decoding is
//! best-effort and always produces a font.

use std::io;

use thiserror::Error;

pub mod bdf;

#[derive(Debug, Error)]
/// An error that occured when loading a font
pub enum LoadError {
    /// The font source could not be read
    #[error("Failed IO")]
    Io(#[from] io::Error),
}
