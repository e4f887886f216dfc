//! End-to-end rendering through the bitmap font path

use brl::{braille, font::bdf::Font, raster::text::render_text};

const BLOCK_FONT: &str = "STARTFONT 2.1\n\
    FONT -test-block\n\
    FONTBOUNDINGBOX 2 4 0 0\n\
    CHARS 2\n\
    STARTCHAR A\n\
    ENCODING 65\n\
    BBX 2 4 0 0\n\
    BITMAP\n\
    C0\nC0\nC0\nC0\n\
    ENDCHAR\n\
    STARTCHAR B\n\
    ENCODING 66\n\
    BBX 1 1 0 0\n\
    BITMAP\n\
    80\n\
    ENDCHAR\n\
    ENDFONT\n";

#[test]
fn test_load_and_render() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("block.bdf");
    std::fs::write(&path, BLOCK_FONT).unwrap();

    let font = Font::load(&path).unwrap();
    assert_eq!(font.glyphs.len(), 2);

    // `A` fills its whole 2x4 cell
    let canvas = render_text("A", &font, 0);
    assert_eq!(braille::encode(&canvas), "\u{28FF}");

    // `B` is a single dot; its canvas is only as tall as the glyph
    let canvas = render_text("B", &font, 0);
    assert_eq!(canvas.height(), 1);
    assert_eq!(braille::encode(&canvas), "\u{2801}");
}

#[test]
fn test_unreadable_source_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bdf");
    assert!(Font::load(&path).is_err());
}

#[test]
fn test_empty_text_renders_empty() {
    let font = Font::parse(BLOCK_FONT);
    let canvas = render_text("", &font, 0);
    assert_eq!(braille::encode(&canvas), "");
}
