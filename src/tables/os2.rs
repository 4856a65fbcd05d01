//! A [OS/2 and Windows Metrics Table](https://docs.microsoft.com/en-us/typography/opentype/spec/os2)
//! implementation.

use crate::parser::Stream;

// The version 0 length. Later versions only append fields we don't read.
const MIN_TABLE_SIZE: usize = 78;

const FS_SELECTION_OFFSET: usize = 62;
const TYPO_ASCENDER_OFFSET: usize = 68;
const TYPO_DESCENDER_OFFSET: usize = 70;
const TYPO_LINE_GAP_OFFSET: usize = 72;

const USE_TYPO_METRICS: u16 = 1 << 7;

/// A [OS/2 and Windows Metrics Table](https://docs.microsoft.com/en-us/typography/opentype/spec/os2).
#[derive(Clone, Copy, Debug)]
pub struct Table {
    /// Typographic ascender.
    pub typo_ascender: i16,
    /// Typographic descender.
    pub typo_descender: i16,
    /// Typographic line gap.
    pub typo_line_gap: i16,
    fs_selection: u16,
}

impl Table {
    /// Parses a table from raw data.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < MIN_TABLE_SIZE {
            return None;
        }

        Some(Table {
            typo_ascender: Stream::read_at::<i16>(data, TYPO_ASCENDER_OFFSET)?,
            typo_descender: Stream::read_at::<i16>(data, TYPO_DESCENDER_OFFSET)?,
            typo_line_gap: Stream::read_at::<i16>(data, TYPO_LINE_GAP_OFFSET)?,
            fs_selection: Stream::read_at::<u16>(data, FS_SELECTION_OFFSET)?,
        })
    }

    /// Checks that the font asks for typographic metrics to be preferred
    /// over the hhea ones.
    #[inline]
    pub fn use_typo_metrics(&self) -> bool {
        self.fs_selection & USE_TYPO_METRICS != 0
    }
}
