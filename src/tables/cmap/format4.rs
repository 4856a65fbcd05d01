// https://docs.microsoft.com/en-us/typography/opentype/spec/cmap#format-4-segment-mapping-to-delta-values

use core::convert::TryFrom;

use crate::parser::{LazyArray16, Stream};
use crate::GlyphId;

/// A format 4 subtable with pre-sliced segment arrays.
///
/// The four per-segment arrays are located once, so a lookup is a plain
/// binary search over segments.
#[derive(Clone, Copy)]
pub struct Subtable4<'a> {
    start_codes: LazyArray16<'a, u16>,
    end_codes: LazyArray16<'a, u16>,
    id_deltas: LazyArray16<'a, i16>,
    id_range_offsets: LazyArray16<'a, u16>,
    id_range_offset_pos: usize,
    // The whole subtable, for reads out of the trailing glyph ID array.
    data: &'a [u8],
}

impl<'a> Subtable4<'a> {
    /// Builds the segment index from raw data.
    pub fn parse(data: &'a [u8]) -> Option<Self> {
        let mut s = Stream::new(data);
        s.advance(6); // format + length + language
        let seg_count_x2: u16 = s.read()?;
        if seg_count_x2 < 2 {
            return None;
        }
        let seg_count = seg_count_x2 / 2;
        s.advance(6); // searchRange + entrySelector + rangeShift

        let end_codes = s.read_array16::<u16>(seg_count)?;
        s.skip::<u16>(); // reservedPad
        let start_codes = s.read_array16::<u16>(seg_count)?;
        let id_deltas = s.read_array16::<i16>(seg_count)?;
        let id_range_offset_pos = s.offset();
        let id_range_offsets = s.read_array16::<u16>(seg_count)?;

        Some(Subtable4 {
            start_codes,
            end_codes,
            id_deltas,
            id_range_offsets,
            id_range_offset_pos,
            data,
        })
    }

    /// Maps a code point to a glyph.
    pub fn glyph_index(&self, code_point: u32) -> Option<GlyphId> {
        // This subtable only supports code points in a u16 range.
        let code_point = u16::try_from(code_point).ok()?;

        // A variant of a binary search where the actual segment bounds are
        // only read once the end code matched.
        let mut start = 0;
        let mut end = self.start_codes.len();
        while end > start {
            let index = (start + end) / 2;
            let end_value = self.end_codes.get(index)?;
            if end_value >= code_point {
                let start_value = self.start_codes.get(index)?;
                if start_value > code_point {
                    end = index;
                } else {
                    return self.glyph_in_segment(index, code_point, start_value);
                }
            } else {
                start = index + 1;
            }
        }

        None
    }

    fn glyph_in_segment(&self, index: u16, code_point: u16, start_value: u16) -> Option<GlyphId> {
        let id_range_offset = self.id_range_offsets.get(index)?;
        let id_delta = self.id_deltas.get(index)?;

        if id_range_offset == 0 {
            return glyph_id_checked(code_point.wrapping_add(id_delta as u16));
        }

        let delta = (u32::from(code_point) - u32::from(start_value)) * 2;
        let delta = u16::try_from(delta).ok()?;

        // The offset is relative to its own position inside the offsets
        // array, a leftover of the format's in-memory heritage.
        let pos = self.id_range_offset_pos.checked_add(usize::from(index) * 2)?;
        let pos = u16::try_from(pos).ok()?;
        let pos = pos.wrapping_add(delta).wrapping_add(id_range_offset);
        let glyph_id: u16 = Stream::read_at(self.data, usize::from(pos))?;
        if glyph_id == 0 {
            return None;
        }

        glyph_id_checked(glyph_id.wrapping_add(id_delta as u16))
    }
}

impl core::fmt::Debug for Subtable4<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Subtable4 {{ ... }}")
    }
}

#[inline]
fn glyph_id_checked(glyph_id: u16) -> Option<GlyphId> {
    // Zero is a `.notdef` glyph.
    if glyph_id != 0 {
        Some(GlyphId(glyph_id))
    } else {
        None
    }
}

// A one-shot lookup: locates the segment arrays and scans them linearly.
pub fn parse(data: &[u8], code_point: u32) -> Option<u16> {
    let subtable = Subtable4::parse(data)?;
    let code_point = u16::try_from(code_point).ok()?;

    for index in 0..subtable.end_codes.len() {
        let end_value = subtable.end_codes.get(index)?;
        if end_value < code_point {
            continue;
        }

        let start_value = subtable.start_codes.get(index)?;
        // End codes are sorted, so there is no later match.
        if start_value > code_point {
            return None;
        }

        return subtable
            .glyph_in_segment(index, code_point, start_value)
            .map(|id| id.0);
    }

    None
}
