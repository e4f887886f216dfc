//! # Braille text rendering tool
//!
//! Renders text as Unicode braille art. BDF bitmap fonts are decoded
//! and composited by the `brl` crate; TTF/OTF fonts are rasterized
//! through fontdue and binarized before encoding.
#![warn(missing_docs)]

mod cli;
mod ttf;

use cli::opt::Options;

fn main() -> color_eyre::Result<()> {
    let options: Options = cli::init()?;
    cli::run(&options)
}
