// https://docs.microsoft.com/en-us/typography/opentype/spec/cmap#format-12-segmented-coverage

use core::convert::TryFrom;

use crate::parser::{FromData, LazyArray32, Stream};
use crate::GlyphId;

#[derive(Clone, Copy, Debug)]
struct SequentialMapGroup {
    start_char_code: u32,
    end_char_code: u32,
    start_glyph_id: u32,
}

impl FromData for SequentialMapGroup {
    const SIZE: usize = 12;

    #[inline]
    fn parse(data: &[u8]) -> Option<Self> {
        let mut s = Stream::new(data);
        Some(SequentialMapGroup {
            start_char_code: s.read::<u32>()?,
            end_char_code: s.read::<u32>()?,
            start_glyph_id: s.read::<u32>()?,
        })
    }
}

/// A format 12 subtable, searched directly over its range groups.
#[derive(Clone, Copy)]
pub struct Subtable12<'a> {
    groups: LazyArray32<'a, SequentialMapGroup>,
}

impl<'a> Subtable12<'a> {
    /// Locates the range group array in raw data.
    pub fn parse(data: &'a [u8]) -> Option<Self> {
        let mut s = Stream::new(data);
        s.skip::<u16>(); // format
        s.skip::<u16>(); // reserved
        s.skip::<u32>(); // length
        s.skip::<u32>(); // language
        let count: u32 = s.read()?;
        let groups = s.read_array32::<SequentialMapGroup>(count)?;
        Some(Subtable12 { groups })
    }

    /// Maps a code point to a glyph.
    pub fn glyph_index(&self, code_point: u32) -> Option<GlyphId> {
        let (_, group) = self.groups.binary_search_by(|group| {
            use core::cmp::Ordering;
            if code_point < group.start_char_code {
                Ordering::Greater
            } else if code_point > group.end_char_code {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })?;

        let id = group
            .start_glyph_id
            .checked_add(code_point)?
            .checked_sub(group.start_char_code)?;

        // Zero is a `.notdef` glyph.
        if id == 0 {
            return None;
        }

        u16::try_from(id).ok().map(GlyphId)
    }
}

impl core::fmt::Debug for Subtable12<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Subtable12 {{ ... }}")
    }
}

// A one-shot lookup: a linear scan over the range groups.
pub fn parse(data: &[u8], code_point: u32) -> Option<u16> {
    let subtable = Subtable12::parse(data)?;
    for group in subtable.groups {
        if code_point < group.start_char_code {
            // Groups are sorted, so there is no later match.
            return None;
        }

        if code_point <= group.end_char_code {
            let id = group
                .start_glyph_id
                .checked_add(code_point)?
                .checked_sub(group.start_char_code)?;
            if id == 0 {
                return None;
            }
            return u16::try_from(id).ok();
        }
    }

    None
}
