//! # The BDF font format
//!
//! [BDF] (*Glyph Bitmap Distribution Format*) is a line-oriented text
//! format. Every glyph is a self-delimiting record between an
//! `ENCODING` declaration and an `ENDCHAR` terminator, with the pixel
//! data as hexadecimal rows after a `BITMAP` line:
//!
//! ```text
//! STARTCHAR A
//! ENCODING 65
//! BBX 5 7 0 0
//! BITMAP
//! 70
//! 88
//! ...
//! ENDCHAR
//! ```
//!
//! Because records are independent, decoding recovers per record: a
//! malformed record is skipped with a warning and the rest of the font
//! still loads. Only an unreadable source is fatal.
//!
//! [BDF]: https://en.wikipedia.org/wiki/Glyph_Bitmap_Distribution_Format

use std::{collections::BTreeMap, path::Path};

use nom::{
    bytes::complete::{tag, take_until},
    character::complete::{char, digit1, line_ending, not_line_ending, space1},
    combinator::{map_res, opt, recognize},
    sequence::{pair, preceded},
    IResult,
};

use super::LoadError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// A glyph or font bounding box (`BBX` / `FONTBOUNDINGBOX`)
pub struct BoundingBox {
    /// The width in pixels
    pub width: u32,
    /// The height in pixels
    pub height: u32,
    /// The horizontal offset from the glyph origin
    pub xoff: i32,
    /// The vertical offset of the bottom edge relative to the baseline
    pub yoff: i32,
}

/// The bounding box used when a font declares none
pub const DEFAULT_BOUNDS: BoundingBox = BoundingBox {
    width: 4,
    height: 8,
    xoff: 0,
    yoff: 0,
};

#[derive(Debug, Clone)]
/// A single decoded glyph
pub struct Glyph {
    /// The dimensions and baseline offsets of the glyph
    pub bounds: BoundingBox,
    /// The pixel matrix, exactly `bounds.height` rows of
    /// `bounds.width` entries, `true` meaning ink
    pub rows: Vec<Vec<bool>>,
}

#[derive(Debug)]
/// A decoded bitmap font
pub struct Font {
    /// The font-wide default bounding box
    pub bounds: BoundingBox,
    /// The glyphs, keyed by character code
    pub glyphs: BTreeMap<u32, Glyph>,
}

impl Font {
    /// Load a font from a file
    ///
    /// The only fatal error is the source being unreadable; see
    /// [`Font::parse`] for how malformed content is handled.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Decode a font from its source text, best-effort
    ///
    /// Records that fail structural matching are skipped, so this
    /// always produces a font, possibly with an empty glyph map.
    pub fn parse(content: &str) -> Self {
        let bounds = content
            .find("FONTBOUNDINGBOX")
            .and_then(|at| font_bounds(&content[at..]).ok())
            .map(|(_, bounds)| bounds)
            .unwrap_or(DEFAULT_BOUNDS);

        let mut glyphs = BTreeMap::new();
        for record in RecordIter::new(content) {
            match parse_glyph(record) {
                Some((encoding, glyph)) => {
                    glyphs.insert(encoding, glyph);
                }
                None => {
                    let head = record.lines().next().unwrap_or("");
                    log::warn!("Skipping malformed glyph record at {:?}", head);
                }
            }
        }
        Font { bounds, glyphs }
    }

    /// Look up the glyph for a character
    pub fn get(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&(c as u32))
    }
}

/// Iterator over the glyph records of a font source
///
/// Records are delimited by their `ENDCHAR` terminator; the content of
/// a record starts at the last `ENCODING` keyword before it. A record
/// that is missing its terminator is dropped without consuming the
/// following well-formed records.
pub struct RecordIter<'a> {
    rest: &'a str,
}

impl<'a> RecordIter<'a> {
    /// Create a new iterator over the records in `content`
    pub fn new(content: &'a str) -> Self {
        RecordIter { rest: content }
    }
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let end = self.rest.find("ENDCHAR")?;
            let chunk = &self.rest[..end];
            self.rest = &self.rest[end + "ENDCHAR".len()..];
            if let Some(start) = chunk.rfind("ENCODING") {
                return Some(&chunk[start..]);
            }
        }
    }
}

fn decimal(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse)(input)
}

fn signed(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse)(input)
}

fn font_bounds(input: &str) -> IResult<&str, BoundingBox> {
    let (input, _) = tag("FONTBOUNDINGBOX")(input)?;
    let (input, _) = space1(input)?;
    let (input, width) = decimal(input)?;
    let (input, _) = space1(input)?;
    let (input, height) = decimal(input)?;
    let (input, xoff) = opt(preceded(space1, signed))(input)?;
    let (input, yoff) = opt(preceded(space1, signed))(input)?;
    Ok((
        input,
        BoundingBox {
            width,
            height,
            xoff: xoff.unwrap_or(0),
            yoff: yoff.unwrap_or(0),
        },
    ))
}

fn glyph_bounds(input: &str) -> IResult<&str, BoundingBox> {
    let (input, _) = tag("BBX")(input)?;
    let (input, _) = space1(input)?;
    let (input, width) = decimal(input)?;
    let (input, _) = space1(input)?;
    let (input, height) = decimal(input)?;
    let (input, _) = space1(input)?;
    let (input, xoff) = signed(input)?;
    let (input, _) = space1(input)?;
    let (input, yoff) = signed(input)?;
    Ok((
        input,
        BoundingBox {
            width,
            height,
            xoff,
            yoff,
        },
    ))
}

fn glyph_header(input: &str) -> IResult<&str, (u32, BoundingBox)> {
    let (input, _) = tag("ENCODING")(input)?;
    let (input, _) = space1(input)?;
    let (input, encoding) = decimal(input)?;
    let (input, _) = take_until("BBX")(input)?;
    let (input, bounds) = glyph_bounds(input)?;
    let (input, _) = take_until("BITMAP")(input)?;
    let (input, _) = tag("BITMAP")(input)?;
    let (input, _) = not_line_ending(input)?;
    let (input, _) = line_ending(input)?;
    Ok((input, (encoding, bounds)))
}

/// Decode one hexadecimal bitmap row into exactly `width` pixels
///
/// Bits are taken most-significant-first from each byte; padding bits
/// beyond `width` are ignored and missing trailing bytes read as 0.
fn decode_hex_row(line: &str, width: usize) -> Option<Vec<bool>> {
    let mut bytes = Vec::with_capacity(line.len() / 2 + 1);
    let mut digits = line.chars();
    while let Some(hi) = digits.next() {
        let hi = hi.to_digit(16)?;
        let lo = match digits.next() {
            Some(c) => c.to_digit(16)?,
            None => 0,
        };
        bytes.push(((hi << 4) | lo) as u8);
    }
    let mut row = Vec::with_capacity(width);
    for bit in 0..width {
        let byte = bytes.get(bit / 8).copied().unwrap_or(0);
        row.push(byte & (0x80 >> (bit % 8)) != 0);
    }
    Some(row)
}

/// Parse a single glyph record, `None` if it is malformed
fn parse_glyph(record: &str) -> Option<(u32, Glyph)> {
    let (rest, (encoding, bounds)) = glyph_header(record).ok()?;

    let width = bounds.width as usize;
    let height = bounds.height as usize;
    let mut rows = Vec::with_capacity(height);
    for line in rest.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rows.push(decode_hex_row(line, width)?);
    }

    // normalize to exactly `height` rows of `width` pixels
    rows.truncate(height);
    while rows.len() < height {
        rows.push(vec![false; width]);
    }

    Some((encoding, Glyph { bounds, rows }))
}

#[cfg(test)]
mod tests {
    use super::{decode_hex_row, Font, DEFAULT_BOUNDS};

    const SAMPLE: &str = "STARTFONT 2.1\n\
        FONT -test-fixed\n\
        FONTBOUNDINGBOX 8 12 0 -2\n\
        CHARS 3\n\
        STARTCHAR A\n\
        ENCODING 65\n\
        SWIDTH 500 0\n\
        DWIDTH 8 0\n\
        BBX 2 2 0 0\n\
        BITMAP\n\
        C0\n\
        40\n\
        ENDCHAR\n\
        STARTCHAR B\n\
        ENCODING 66\n\
        BBX 3 1 1 -1\n\
        BITMAP\n\
        E0\n\
        ENDCHAR\n\
        ENDFONT\n";

    #[test]
    fn test_parse_font() {
        let font = Font::parse(SAMPLE);
        assert_eq!(font.bounds.width, 8);
        assert_eq!(font.bounds.height, 12);
        assert_eq!(font.bounds.yoff, -2);
        assert_eq!(font.glyphs.len(), 2);

        let a = font.get('A').unwrap();
        assert_eq!(a.bounds.width, 2);
        assert_eq!(a.bounds.height, 2);
        assert_eq!(a.rows, vec![vec![true, true], vec![false, true]]);

        let b = font.get('B').unwrap();
        assert_eq!(b.bounds.xoff, 1);
        assert_eq!(b.bounds.yoff, -1);
        assert_eq!(b.rows, vec![vec![true, true, true]]);
    }

    #[test]
    fn test_default_bounds() {
        let font = Font::parse("STARTFONT 2.1\nENDFONT\n");
        assert_eq!(font.bounds, DEFAULT_BOUNDS);
        assert!(font.glyphs.is_empty());
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        // the middle record has no BBX line
        let source = "FONTBOUNDINGBOX 4 8\n\
            ENCODING 65\nBBX 1 1 0 0\nBITMAP\n80\nENDCHAR\n\
            ENCODING 66\nBITMAP\n80\nENDCHAR\n\
            ENCODING 67\nBBX 1 1 0 0\nBITMAP\n80\nENDCHAR\n";
        let font = Font::parse(source);
        assert_eq!(font.glyphs.len(), 2);
        assert!(font.get('A').is_some());
        assert!(font.get('B').is_none());
        assert!(font.get('C').is_some());
    }

    #[test]
    fn test_missing_terminator_drops_only_that_record() {
        let source = "ENCODING 65\nBBX 1 1 0 0\nBITMAP\n80\nENDCHAR\n\
            ENCODING 66\nBBX 1 1 0 0\nBITMAP\n80\n\
            ENCODING 67\nBBX 1 1 0 0\nBITMAP\n80\nENDCHAR\n";
        let font = Font::parse(source);
        assert_eq!(font.glyphs.len(), 2);
        assert!(font.get('B').is_none());
    }

    #[test]
    fn test_non_hex_row_is_malformed() {
        let source = "ENCODING 65\nBBX 1 1 0 0\nBITMAP\nZZ\nENDCHAR\n";
        let font = Font::parse(source);
        assert!(font.glyphs.is_empty());
    }

    #[test]
    fn test_decode_hex_row() {
        // MSB first, only the first `width` bits count
        assert_eq!(
            decode_hex_row("A0", 4),
            Some(vec![true, false, true, false])
        );
        // wide rows span multiple bytes
        assert_eq!(
            decode_hex_row("8180", 9),
            Some(vec![
                true, false, false, false, false, false, false, true, true
            ])
        );
        // missing trailing bytes read as blank
        assert_eq!(
            decode_hex_row("80", 10),
            Some(vec![
                true, false, false, false, false, false, false, false, false, false
            ])
        );
        assert_eq!(decode_hex_row("G0", 4), None);
    }

    #[test]
    fn test_short_bitmap_is_padded() {
        let source = "ENCODING 65\nBBX 2 3 0 0\nBITMAP\nC0\nENDCHAR\n";
        let font = Font::parse(source);
        let glyph = font.get('A').unwrap();
        assert_eq!(glyph.rows.len(), 3);
        assert_eq!(glyph.rows[0], vec![true, true]);
        assert_eq!(glyph.rows[1], vec![false, false]);
        assert_eq!(glyph.rows[2], vec![false, false]);
    }
}
