//! A glyph metrics accessor.
//!
//! Combines one of
//! [hmtx](https://docs.microsoft.com/en-us/typography/opentype/spec/hmtx)/
//! [vmtx](https://docs.microsoft.com/en-us/typography/opentype/spec/vmtx)
//! with its metrics header and, for the horizontal direction, OS/2.

use core::cmp;

use crate::parser::{FromData, LazyArray16, Stream};
use crate::tables::{hea, os2};
use crate::GlyphId;

#[derive(Clone, Copy, Debug)]
struct LongMetric {
    advance: u16,
    side_bearing: i16,
}

impl FromData for LongMetric {
    const SIZE: usize = 4;

    #[inline]
    fn parse(data: &[u8]) -> Option<Self> {
        let mut s = Stream::new(data);
        Some(LongMetric {
            advance: s.read::<u16>()?,
            side_bearing: s.read::<i16>()?,
        })
    }
}

/// A glyph metrics accessor for one direction.
///
/// Construction never fails. With no metrics data at all the accessor still
/// works, reporting the default advance (one EM) for every glyph.
#[derive(Clone, Copy, Debug)]
pub struct Table<'a> {
    /// Face ascender, typographic or from the metrics header. See [`parse`].
    ///
    /// [`parse`]: Table::parse
    pub ascender: i16,
    /// Face descender.
    pub descender: i16,
    /// Face line gap.
    pub line_gap: i16,
    num_advances: u16,
    num_metrics: u16,
    default_advance: u16,
    metrics: LazyArray16<'a, LongMetric>,
    bearings: LazyArray16<'a, i16>,
}

impl<'a> Table<'a> {
    /// Builds an accessor out of a metrics header, an optional OS/2 table
    /// and raw hmtx/vmtx data.
    ///
    /// Face extents come from OS/2 typographic values when `os2` carries the
    /// USE_TYPO_METRICS flag and at least one of ascender/descender is
    /// non-zero, otherwise from the metrics header. Pass `None` for `os2`
    /// in the vertical direction.
    pub fn parse(
        hea: Option<&hea::Table>,
        os2: Option<&os2::Table>,
        data: Option<&'a [u8]>,
        units_per_em: u16,
    ) -> Self {
        let mut ascender = 0;
        let mut descender = 0;
        let mut line_gap = 0;
        let mut have_extents = false;

        if let Some(os2) = os2 {
            if os2.use_typo_metrics() {
                ascender = os2.typo_ascender;
                descender = os2.typo_descender;
                line_gap = os2.typo_line_gap;
                // All-zero typographic extents are clearly broken.
                have_extents = ascender != 0 || descender != 0;
            }
        }

        let mut num_advances = hea.map_or(0, |hea| hea.number_of_metrics);
        if !have_extents {
            // Unusable typographic extents count for nothing; a missing
            // header zeroes all three fields, the line gap included.
            ascender = hea.map_or(0, |hea| hea.ascender);
            descender = hea.map_or(0, |hea| hea.descender);
            line_gap = hea.map_or(0, |hea| hea.line_gap);
        }

        let data = data.unwrap_or(&[]);
        if usize::from(num_advances) * LongMetric::SIZE > data.len() {
            warn!("the metrics table is shorter than its header declares");
            num_advances = (data.len() / LongMetric::SIZE) as u16;
        }

        if num_advances == 0 {
            // `advance` tells a missing table from an out-of-range glyph
            // by num_metrics being zero.
            return Table {
                ascender,
                descender,
                line_gap,
                num_advances: 0,
                num_metrics: 0,
                default_advance: units_per_em,
                metrics: LazyArray16::default(),
                bearings: LazyArray16::default(),
            };
        }

        let mut s = Stream::new(data);
        let metrics = s.read_array16::<LongMetric>(num_advances).unwrap_or_default();

        // Glyphs past the long metric records reuse the last advance and
        // store only a side bearing each.
        let tail = s.tail();
        let bearings_count = cmp::min(
            tail.len() / i16::SIZE,
            usize::from(u16::MAX - num_advances),
        );
        let bearings = tail
            .get(..bearings_count * i16::SIZE)
            .map(LazyArray16::new)
            .unwrap_or_default();

        Table {
            ascender,
            descender,
            line_gap,
            num_advances,
            num_metrics: num_advances + bearings_count as u16,
            default_advance: units_per_em,
            metrics,
            bearings,
        }
    }

    /// Returns the advance of a glyph.
    ///
    /// Never fails. An out-of-range glyph in a present table gets 0. When
    /// there is no metrics data at all, every glyph gets the default
    /// advance of one EM instead.
    pub fn advance(&self, glyph_id: GlyphId) -> u16 {
        if glyph_id.0 >= self.num_metrics {
            return if self.num_metrics != 0 { 0 } else { self.default_advance };
        }

        // Bearing-only records reuse the last explicit advance.
        let index = cmp::min(glyph_id.0, self.num_advances - 1);
        self.metrics.get(index).map_or(0, |m| m.advance)
    }

    /// Returns the side bearing of a glyph.
    pub fn side_bearing(&self, glyph_id: GlyphId) -> Option<i16> {
        if glyph_id.0 >= self.num_metrics {
            return None;
        }

        if let Some(metric) = self.metrics.get(glyph_id.0) {
            Some(metric.side_bearing)
        } else {
            self.bearings.get(glyph_id.0 - self.num_advances)
        }
    }

    /// Returns the number of long metric records, after length capping.
    #[inline]
    pub fn number_of_advances(&self) -> u16 {
        self.num_advances
    }

    /// Returns the number of glyphs with any metrics data.
    #[inline]
    pub fn number_of_metrics(&self) -> u16 {
        self.num_metrics
    }
}
