//! A [Character to Glyph Index Mapping Table](https://docs.microsoft.com/en-us/typography/opentype/spec/cmap)
//! implementation.

use crate::parser::{FromData, NumFrom, Stream};
use crate::GlyphId;

mod format0;
mod format12;
mod format14;
mod format4;
mod format6;

pub use format12::Subtable12;
pub use format14::{GlyphVariationResult, Subtable14};
pub use format4::Subtable4;

#[derive(Clone, Copy, Debug)]
struct EncodingRecord {
    platform_id: u16,
    encoding_id: u16,
    offset: u32,
}

impl FromData for EncodingRecord {
    const SIZE: usize = 8;

    #[inline]
    fn parse(data: &[u8]) -> Option<Self> {
        let mut s = Stream::new(data);
        Some(EncodingRecord {
            platform_id: s.read::<u16>()?,
            encoding_id: s.read::<u16>()?,
            offset: s.read::<u32>()?,
        })
    }
}

// Subtable selection order, as (platform ID, encoding ID) pairs.
// 32-bit capable Unicode encodings first, then the 16-bit ones.
const ENCODING_PRIORITY: &[(u16, u16)] = &[
    (3, 10),
    (0, 6),
    (0, 4),
    (3, 1),
    (0, 3),
    (0, 2),
    (0, 1),
    (0, 0),
    (3, 0),
];

// Unicode Variation Sequences live in their own encoding.
const UVS_ENCODING: (u16, u16) = (0, 5);

/// A character map subtable format.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub enum Format {
    ByteEncodingTable = 0,
    HighByteMappingThroughTable = 2,
    SegmentMappingToDeltaValues = 4,
    TrimmedTableMapping = 6,
    MixedCoverage = 8,
    TrimmedArray = 10,
    SegmentedCoverage = 12,
    ManyToOneRangeMappings = 13,
    UnicodeVariationSequences = 14,
}

impl FromData for Format {
    const SIZE: usize = 2;

    fn parse(data: &[u8]) -> Option<Self> {
        match u16::parse(data)? {
            0 => Some(Format::ByteEncodingTable),
            2 => Some(Format::HighByteMappingThroughTable),
            4 => Some(Format::SegmentMappingToDeltaValues),
            6 => Some(Format::TrimmedTableMapping),
            8 => Some(Format::MixedCoverage),
            10 => Some(Format::TrimmedArray),
            12 => Some(Format::SegmentedCoverage),
            13 => Some(Format::ManyToOneRangeMappings),
            14 => Some(Format::UnicodeVariationSequences),
            _ => None,
        }
    }
}

/// A resolved character map subtable.
///
/// The format tag is examined once, during table parsing. The two formats
/// modern fonts actually use for their best encoding get an accelerated
/// representation; the remaining supported ones go through a one-shot
/// per-format routine.
#[derive(Clone, Copy, Debug)]
pub enum Subtable<'a> {
    /// Segment mapping to delta values, with pre-sliced segment arrays.
    Format4(Subtable4<'a>),
    /// Segmented coverage, searched directly over its range groups.
    Format12(Subtable12<'a>),
    /// Any other recognized format, resolved by its tag on every lookup.
    Generic(Format, &'a [u8]),
    /// An inert subtable that maps nothing.
    Empty,
}

impl<'a> Subtable<'a> {
    fn parse(data: &'a [u8]) -> Self {
        let format = match Stream::read_at::<Format>(data, 0) {
            Some(format) => format,
            None => return Subtable::Empty,
        };

        match format {
            Format::SegmentMappingToDeltaValues => {
                Subtable4::parse(data).map_or(Subtable::Empty, Subtable::Format4)
            }
            Format::SegmentedCoverage => {
                Subtable12::parse(data).map_or(Subtable::Empty, Subtable::Format12)
            }
            _ => Subtable::Generic(format, data),
        }
    }

    /// Maps a code point to a glyph.
    pub fn glyph_index(&self, code_point: u32) -> Option<GlyphId> {
        match self {
            Subtable::Format4(subtable) => subtable.glyph_index(code_point),
            Subtable::Format12(subtable) => subtable.glyph_index(code_point),
            Subtable::Generic(format, data) => glyph_index_generic(*format, data, code_point),
            Subtable::Empty => None,
        }
    }
}

// A one-shot lookup that re-reads the subtable header on every call.
fn glyph_index_generic(format: Format, data: &[u8], code_point: u32) -> Option<GlyphId> {
    let glyph = match format {
        Format::ByteEncodingTable => format0::parse(data, code_point),
        Format::SegmentMappingToDeltaValues => format4::parse(data, code_point),
        Format::TrimmedTableMapping => format6::parse(data, code_point),
        Format::SegmentedCoverage => format12::parse(data, code_point),
        // The legacy mixed and high-byte formats are unsupported.
        _ => None,
    };

    glyph.map(GlyphId)
}

/// A character map accessor.
///
/// Holds the best-priority encoding subtable and the variation sequences
/// subtable, both resolved once at parse time.
#[derive(Clone, Copy)]
pub struct Table<'a> {
    subtable: Subtable<'a>,
    uvs: Option<Subtable14<'a>>,
}

impl<'a> Table<'a> {
    /// Parses an accessor from raw table data.
    ///
    /// Never fails. A missing or malformed table maps nothing.
    pub fn parse(data: Option<&'a [u8]>) -> Self {
        let data = match data {
            Some(data) => data,
            None => return Self::empty(),
        };

        let mut s = Stream::new(data);
        s.skip::<u16>(); // version
        let count = match s.read::<u16>() {
            Some(count) => count,
            None => return Self::empty(),
        };
        let records = match s.read_array16::<EncodingRecord>(count) {
            Some(records) => records,
            None => return Self::empty(),
        };

        let mut subtable = Subtable::Empty;
        'outer: for &(platform_id, encoding_id) in ENCODING_PRIORITY {
            for record in records {
                if (record.platform_id, record.encoding_id) == (platform_id, encoding_id) {
                    if let Some(subtable_data) = data.get(usize::num_from(record.offset)..) {
                        subtable = Subtable::parse(subtable_data);
                        break 'outer;
                    }
                }
            }
        }

        let mut uvs = None;
        for record in records {
            if (record.platform_id, record.encoding_id) == UVS_ENCODING {
                uvs = data
                    .get(usize::num_from(record.offset)..)
                    .and_then(Subtable14::parse);
                break;
            }
        }

        Table { subtable, uvs }
    }

    fn empty() -> Self {
        Table {
            subtable: Subtable::Empty,
            uvs: None,
        }
    }

    /// Maps a code point to a glyph.
    ///
    /// A glyph ID of 0 (`.notdef`) is reported as `None`.
    #[inline]
    pub fn glyph_index(&self, code_point: u32) -> Option<GlyphId> {
        self.subtable.glyph_index(code_point)
    }

    /// Maps a (code point, variation selector) pair to a glyph.
    ///
    /// Fails when the sequence is unknown to the font. A sequence marked
    /// "use the default glyph" falls through to the nominal mapping.
    pub fn glyph_variation_index(&self, code_point: u32, variation: u32) -> Option<GlyphId> {
        match self.uvs?.glyph_variant(code_point, variation)? {
            GlyphVariationResult::Found(glyph) => Some(glyph),
            GlyphVariationResult::UseDefault => self.glyph_index(code_point),
        }
    }
}

impl core::fmt::Debug for Table<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Table {{ ... }}")
    }
}
