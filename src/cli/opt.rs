use std::{error::Error, fmt, path::PathBuf, str::FromStr};

use clap::Parser;

/// An output size in braille characters
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SizeSpec {
    /// The width in braille characters
    pub width: u32,
    /// The height in braille characters
    pub height: u32,
}

#[derive(Debug)]
/// Failed to parse a size specification
pub struct SizeSpecError {}

impl fmt::Display for SizeSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Use WIDTHxHEIGHT in braille characters, e.g. `8x4`")?;
        Ok(())
    }
}

impl Error for SizeSpecError {}

impl FromStr for SizeSpec {
    type Err = SizeSpecError;
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        let val = val.to_ascii_lowercase();
        let (w, h) = val.split_once('x').ok_or(SizeSpecError {})?;
        let width = w.trim().parse().map_err(|_| SizeSpecError {})?;
        let height = h.trim().parse().map_err(|_| SizeSpecError {})?;
        Ok(SizeSpec { width, height })
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// OPTIONS
#[derive(Parser)]
#[clap(version, about)]
pub struct Options {
    /// Path to the font file (BDF, TTF or OTF)
    #[clap(required_unless_present = "list_presets")]
    pub font: Option<PathBuf>,

    /// The text to render
    pub text: Vec<String>,

    /// Output size in braille characters, e.g. `8x4`
    #[clap(short, long)]
    pub size: Option<SizeSpec>,

    /// Font size in points (default: the larger cell dimension)
    #[clap(short, long)]
    pub font_size: Option<u32>,

    /// Binarization threshold, 0-255
    #[clap(short, long, default_value = "128")]
    pub threshold: u8,

    /// Extra spacing between characters in pixels
    #[clap(long, default_value = "0")]
    pub spacing: u32,

    /// Write the intermediate raster to a PNG file
    #[clap(short, long)]
    pub out: Option<PathBuf>,

    /// List the available size presets instead of rendering
    #[clap(long)]
    pub list_presets: bool,
}

#[cfg(test)]
mod tests {
    use super::SizeSpec;

    #[test]
    fn test_size_spec() {
        assert_eq!(
            "8x4".parse::<SizeSpec>().unwrap(),
            SizeSpec {
                width: 8,
                height: 4
            }
        );
        assert_eq!(
            "16X8".parse::<SizeSpec>().unwrap(),
            SizeSpec {
                width: 16,
                height: 8
            }
        );
        assert!("8".parse::<SizeSpec>().is_err());
        assert!("ax4".parse::<SizeSpec>().is_err());
        assert!("8x".parse::<SizeSpec>().is_err());
    }
}
