//! A glyph outline accessor over the
//! [loca](https://docs.microsoft.com/en-us/typography/opentype/spec/loca) and
//! [glyf](https://docs.microsoft.com/en-us/typography/opentype/spec/glyf)
//! tables.
//!
//! Only the declared bounding box from per-glyph headers is read; contour
//! data is never interpreted.

use core::cmp;

use crate::parser::{NumFrom, Stream};
use crate::tables::head;
use crate::{GlyphExtents, GlyphId};

// numberOfContours + xMin/yMin/xMax/yMax.
const GLYPH_HEADER_SIZE: usize = 10;

/// A glyph outline accessor.
#[derive(Clone, Copy, Debug)]
pub struct Table<'a> {
    short_offset: bool,
    num_glyphs: u32,
    loca: &'a [u8],
    glyf: &'a [u8],
}

impl<'a> Table<'a> {
    /// Builds an accessor out of raw `loca` and `glyf` data.
    ///
    /// Never fails. An unknown offset or glyph data format in `head` yields
    /// a disabled accessor that reports no glyphs at all.
    pub fn parse(head: &head::Table, loca: &'a [u8], glyf: &'a [u8]) -> Self {
        let short_offset = match head.index_to_location_format {
            0 => true,
            1 => false,
            format => {
                warn!("unsupported index-to-location format {}", format);
                return Self::disabled();
            }
        };

        if head.glyph_data_format != 0 {
            warn!("unsupported glyph data format {}", head.glyph_data_format);
            return Self::disabled();
        }

        let entry_size = if short_offset { 2 } else { 4 };
        // The offset array carries one extra entry that marks the end of
        // the last glyph's data. Flooring at one entry keeps a truncated
        // array from underflowing.
        let num_glyphs = cmp::max(1, loca.len() / entry_size) as u32 - 1;

        Table { short_offset, num_glyphs, loca, glyf }
    }

    fn disabled() -> Self {
        Table {
            short_offset: false,
            num_glyphs: 0,
            loca: &[],
            glyf: &[],
        }
    }

    /// Returns the number of glyphs addressable through the offset array.
    #[inline]
    pub fn number_of_glyphs(&self) -> u32 {
        self.num_glyphs
    }

    fn range(&self, glyph_id: GlyphId) -> Option<(usize, usize)> {
        let index = usize::from(glyph_id.0);
        if self.short_offset {
            // Short entries store the actual offset divided by two.
            let start = Stream::read_at::<u16>(self.loca, index * 2)?;
            let end = Stream::read_at::<u16>(self.loca, index * 2 + 2)?;
            Some((usize::from(start) * 2, usize::from(end) * 2))
        } else {
            let start = Stream::read_at::<u32>(self.loca, index * 4)?;
            let end = Stream::read_at::<u32>(self.loca, index * 4 + 4)?;
            Some((usize::num_from(start), usize::num_from(end)))
        }
    }

    /// Returns the declared bounding box of a glyph.
    ///
    /// `None` means the glyph doesn't exist or its offsets are malformed.
    /// A glyph whose data range is too short for a header has no outline
    /// and reports all-zero extents.
    pub fn glyph_extents(&self, glyph_id: GlyphId) -> Option<GlyphExtents> {
        if u32::from(glyph_id.0) >= self.num_glyphs {
            return None;
        }

        let (start, end) = self.range(glyph_id)?;
        if start > end || end > self.glyf.len() {
            return None;
        }

        if end - start < GLYPH_HEADER_SIZE {
            return Some(GlyphExtents::default());
        }

        let x_min = Stream::read_at::<i16>(self.glyf, start + 2)?;
        let y_min = Stream::read_at::<i16>(self.glyf, start + 4)?;
        let x_max = Stream::read_at::<i16>(self.glyf, start + 6)?;
        let y_max = Stream::read_at::<i16>(self.glyf, start + 8)?;

        // Normalize, in case min/max are swapped. The box is anchored at
        // its top-left corner, so the height runs downwards.
        let x_bearing = i32::from(cmp::min(x_min, x_max));
        let y_bearing = i32::from(cmp::max(y_min, y_max));
        Some(GlyphExtents {
            x_bearing,
            y_bearing,
            width: i32::from(cmp::max(x_min, x_max)) - x_bearing,
            height: i32::from(cmp::min(y_min, y_max)) - y_bearing,
        })
    }
}
