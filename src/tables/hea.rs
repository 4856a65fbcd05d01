//! A header-of-metrics table implementation.
//!
//! [hhea](https://docs.microsoft.com/en-us/typography/opentype/spec/hhea) and
//! [vhea](https://docs.microsoft.com/en-us/typography/opentype/spec/vhea)
//! share their layout at every offset this crate reads, so a single accessor
//! serves both.

use crate::parser::Stream;

const TABLE_SIZE: usize = 36;
const ASCENDER_OFFSET: usize = 4;
const DESCENDER_OFFSET: usize = 6;
const LINE_GAP_OFFSET: usize = 8;
const NUMBER_OF_METRICS_OFFSET: usize = 34;

/// A metrics header table.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    /// Face ascender.
    pub ascender: i16,
    /// Face descender.
    pub descender: i16,
    /// Face line gap.
    pub line_gap: i16,
    /// Number of long metric records in the matching hmtx/vmtx table.
    pub number_of_metrics: u16,
}

impl Table {
    /// Parses a table from raw data.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < TABLE_SIZE {
            return None;
        }

        Some(Table {
            ascender: Stream::read_at::<i16>(data, ASCENDER_OFFSET)?,
            descender: Stream::read_at::<i16>(data, DESCENDER_OFFSET)?,
            line_gap: Stream::read_at::<i16>(data, LINE_GAP_OFFSET)?,
            number_of_metrics: Stream::read_at::<u16>(data, NUMBER_OF_METRICS_OFFSET)?,
        })
    }
}
