//! A [Font Header Table](https://docs.microsoft.com/en-us/typography/opentype/spec/head)
//! implementation.

use crate::parser::Stream;

const TABLE_SIZE: usize = 54;
const UNITS_PER_EM_OFFSET: usize = 18;
const INDEX_TO_LOC_FORMAT_OFFSET: usize = 50;
const GLYPH_DATA_FORMAT_OFFSET: usize = 52;

/// A [Font Header Table](https://docs.microsoft.com/en-us/typography/opentype/spec/head).
#[derive(Clone, Copy, Debug)]
pub struct Table {
    /// Units per EM.
    ///
    /// Guaranteed to be in a 16..=16384 range.
    pub units_per_em: u16,
    /// The offset format used by the index-to-location table.
    ///
    /// Stored as-is. Anything other than 0 or 1 disables glyph outlines.
    pub index_to_location_format: i16,
    /// The glyph data format.
    ///
    /// Stored as-is. Anything other than 0 disables glyph outlines.
    pub glyph_data_format: i16,
}

impl Table {
    /// Parses a table from raw data.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < TABLE_SIZE {
            return None;
        }

        let units_per_em = Stream::read_at::<u16>(data, UNITS_PER_EM_OFFSET)?;
        if !(16..=16384).contains(&units_per_em) {
            return None;
        }

        Some(Table {
            units_per_em,
            index_to_location_format: Stream::read_at::<i16>(data, INDEX_TO_LOC_FORMAT_OFFSET)?,
            glyph_data_format: Stream::read_at::<i16>(data, GLYPH_DATA_FORMAT_OFFSET)?,
        })
    }
}
