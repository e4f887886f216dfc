//! Output size presets
//!
//! The table maps an output size in braille characters to the pixel
//! dimensions the rasterizer should produce for one character cell.
//! It is process-wide read-only configuration.

/// A named output size
pub struct Preset {
    /// The output size in braille characters `(width, height)`
    pub cells: (u32, u32),
    /// The matching pixel size of one character cell
    pub pixels: (u32, u32),
    /// A human-readable label
    pub label: &'static str,
}

/// The known output sizes
pub const PRESETS: [Preset; 6] = [
    Preset {
        cells: (4, 2),
        pixels: (8, 8),
        label: "8x8 - tiny",
    },
    Preset {
        cells: (4, 4),
        pixels: (8, 16),
        label: "8x16 - compact",
    },
    Preset {
        cells: (8, 4),
        pixels: (16, 16),
        label: "16x16 - standard",
    },
    Preset {
        cells: (8, 6),
        pixels: (16, 24),
        label: "16x24 - tall",
    },
    Preset {
        cells: (12, 6),
        pixels: (24, 24),
        label: "24x24 - large",
    },
    Preset {
        cells: (16, 8),
        pixels: (32, 32),
        label: "32x32 - extra large",
    },
];

/// Get the pixel size for an output size in braille characters
///
/// Sizes not in the preset table derive their pixel size from the 2x4
/// packing of a braille cell.
///
/// ```
/// assert_eq!(brl::presets::pixel_size((8, 4)), (16, 16));
/// assert_eq!(brl::presets::pixel_size((5, 3)), (10, 12));
/// ```
pub fn pixel_size(cells: (u32, u32)) -> (u32, u32) {
    PRESETS
        .iter()
        .find(|preset| preset.cells == cells)
        .map(|preset| preset.pixels)
        .unwrap_or((cells.0 * 2, cells.1 * 4))
}

#[cfg(test)]
mod tests {
    use super::pixel_size;

    #[test]
    fn test_known_presets() {
        assert_eq!(pixel_size((4, 2)), (8, 8));
        assert_eq!(pixel_size((8, 4)), (16, 16));
        assert_eq!(pixel_size((16, 8)), (32, 32));
    }

    #[test]
    fn test_derived_size() {
        assert_eq!(pixel_size((5, 3)), (10, 12));
        assert_eq!(pixel_size((1, 1)), (2, 4));
    }
}
