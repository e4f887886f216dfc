//! # Raster image processing
//!
//! The [`Canvas`] is the shared pixel buffer that both rendering paths
//! produce: the glyph compositor in [`text`] draws bitmap font glyphs
//! onto it directly, while greyscale rasters from an outline font
//! renderer are binarized into one with [`Canvas::from_gray`].

#[cfg(feature = "image")]
use image::{GrayImage, Luma};

use crate::font::bdf::Glyph;

pub mod text;

/// A monochrome pixel canvas
///
/// The width and height are in pixels. Pixels are stored row-major,
/// `true` meaning ink. All drawing operations clip silently at the
/// canvas edges.
#[derive(Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    buffer: Vec<bool>,
}

impl Canvas {
    /// Create a new blank canvas with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Canvas {
            width,
            height,
            buffer: vec![false; (width as usize) * (height as usize)],
        }
    }

    /// The width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at `(x, y)`, `false` outside the canvas
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x < self.width && y < self.height {
            self.buffer[(y * self.width + x) as usize]
        } else {
            false
        }
    }

    /// Set the pixel at `(x, y)`, ignored outside the canvas
    pub fn set(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            self.buffer[(y * self.width + x) as usize] = true;
        }
    }

    fn plot(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 {
            self.set(x as u32, y as u32);
        }
    }

    /// Draw a glyph with its top-left corner at `(x, y)`
    ///
    /// Pixels that fall outside the canvas are clipped, not an error.
    pub fn draw_glyph(&mut self, x: i32, y: i32, glyph: &Glyph) {
        for (row_index, row) in glyph.rows.iter().enumerate() {
            for (col_index, &pixel) in row.iter().enumerate() {
                if pixel {
                    self.plot(x + col_index as i32, y + row_index as i32);
                }
            }
        }
    }

    /// Print a representation of the canvas to the console
    ///
    /// Use this for small images only
    pub fn print(&self) {
        let border = || {
            print!("+");
            for _ in 0..self.width {
                print!("-");
            }
            println!("+");
        };
        border();
        for line in self.buffer.chunks_exact(self.width.max(1) as usize) {
            print!("|");
            for &pixel in line {
                print!("{}", if pixel { '#' } else { ' ' });
            }
            println!("|");
        }
        border();
    }

    /// Binarize a greyscale image: ink iff the value is below `threshold`
    #[cfg(feature = "image")]
    #[cfg_attr(docsrs, doc(cfg(feature = "image")))]
    pub fn from_gray(image: &GrayImage, threshold: u8) -> Self {
        let mut canvas = Canvas::new(image.width(), image.height());
        for (x, y, &Luma([value])) in image.enumerate_pixels() {
            if value < threshold {
                canvas.set(x, y);
            }
        }
        canvas
    }

    /// Turn the canvas into a `GrayImage` from the `image` crate
    ///
    /// Ink becomes black (`0x00`) on a white background.
    #[cfg(feature = "image")]
    #[cfg_attr(docsrs, doc(cfg(feature = "image")))]
    pub fn to_image(&self) -> GrayImage {
        let buffer = self
            .buffer
            .iter()
            .map(|&pixel| if pixel { 0x00 } else { 0xFF })
            .collect();
        GrayImage::from_vec(self.width, self.height, buffer)
            .unwrap_or_else(|| GrayImage::new(self.width, self.height))
    }
}
