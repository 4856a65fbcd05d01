/*!
A safe, zero-copy reader for the OpenType tables a text shaper queries.

Given already-located table slices, a [`Face`] answers the four questions
a shaping engine keeps asking:

- Which glyph does a character map to? (including variation-selector pairs)
- What is a glyph's advance width/height?
- What is a glyph's ink bounding box?
- What are the font-wide ascent/descent/line-gap values?

[`Font`] wraps a face with per-axis scales and converts design units into
the caller's position values.

Locating tables inside an sfnt/TTC wrapper, sanitizing them and managing
the backing storage are the caller's job; this crate only interprets the
table contents.

## Safety

- The library must not panic. Any panic is considered a critical bug.
- The library forbids unsafe code.
- Zero heap allocations, except a single one when the outline accessor is
  first used.

## Error handling

Malformed fonts are expected input, so there is no `Error` enum. A broken
or truncated table degrades into an accessor that reports "not found" or a
documented default for every query; it never fails face construction and
never reads out of bounds.

Some methods may print warnings, when the `logging` feature is enabled.
*/

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

extern crate alloc;

use core::fmt;

#[cfg(feature = "logging")]
macro_rules! warn {
    ($($arg:tt)+) => (
        log::log!(log::Level::Warn, $($arg)+);
    )
}

#[cfg(not(feature = "logging"))]
macro_rules! warn {
    ($($arg:tt)+) => () // do nothing
}

mod font;
mod lazy;
pub mod parser;
pub mod tables;

pub use crate::font::{Font, FontExtents, FontFuncs};

use crate::lazy::LazyTable;
use crate::parser::FromData;
use crate::tables::{cmap, glyf, head, hea, hmtx, os2};

/// A type-safe wrapper for glyph ID.
#[repr(C)]
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Debug, Hash, Default)]
pub struct GlyphId(pub u16);

impl FromData for GlyphId {
    const SIZE: usize = 2;

    #[inline]
    fn parse(data: &[u8]) -> Option<Self> {
        u16::parse(data).map(GlyphId)
    }
}

/// Glyph ink extents.
///
/// The box is anchored at its top-left corner: `y_bearing` is the top edge
/// and `height` runs downwards, so it is negative for any glyph with ink
/// above its bottom edge.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct GlyphExtents {
    /// The left edge.
    pub x_bearing: i32,
    /// The top edge.
    pub y_bearing: i32,
    /// Distance from the left edge to the right one.
    pub width: i32,
    /// Distance from the top edge to the bottom one. Typically negative.
    pub height: i32,
}

/// Already-located, length-known table slices for a single face.
///
/// Each slice is expected to span exactly one table. A `None` simply means
/// the font doesn't have that table.
#[derive(Clone, Copy, Default, Debug)]
#[allow(missing_docs)]
pub struct RawTables<'a> {
    /// A `head` table. The only required one.
    pub head: &'a [u8],
    pub cmap: Option<&'a [u8]>,
    pub hhea: Option<&'a [u8]>,
    pub hmtx: Option<&'a [u8]>,
    pub vhea: Option<&'a [u8]>,
    pub vmtx: Option<&'a [u8]>,
    pub os2: Option<&'a [u8]>,
    pub loca: Option<&'a [u8]>,
    pub glyf: Option<&'a [u8]>,
}

/// A font face: parsed accessor state over borrowed table data.
///
/// The character map and both metrics accessors are resolved up front.
/// The outline accessor is built on the first [`glyph_extents`] call, since
/// plenty of faces are only ever asked about character maps and metrics.
///
/// After construction a face is immutable, so sharing it between threads
/// requires no synchronization.
///
/// [`glyph_extents`]: Face::glyph_extents
pub struct Face<'a> {
    head: head::Table,
    cmap: cmap::Table<'a>,
    h_metrics: hmtx::Table<'a>,
    v_metrics: hmtx::Table<'a>,
    glyf: LazyTable<glyf::Table<'a>>,
    loca_data: &'a [u8],
    glyf_data: &'a [u8],
}

impl<'a> Face<'a> {
    /// Creates a new `Face` from raw tables.
    ///
    /// Returns `None` only when `head` is missing or malformed. Any other
    /// missing or broken table yields an inert accessor instead: lookups
    /// into it fail, they don't crash.
    pub fn from_tables(raw: RawTables<'a>) -> Option<Self> {
        let head = head::Table::parse(raw.head)?;
        let upem = head.units_per_em;

        let os2 = raw.os2.and_then(os2::Table::parse);
        let h_metrics = hmtx::Table::parse(
            raw.hhea.and_then(hea::Table::parse).as_ref(),
            os2.as_ref(),
            raw.hmtx,
            upem,
        );
        // Vertical metrics never consult OS/2.
        let v_metrics = hmtx::Table::parse(
            raw.vhea.and_then(hea::Table::parse).as_ref(),
            None,
            raw.vmtx,
            upem,
        );

        Some(Face {
            head,
            cmap: cmap::Table::parse(raw.cmap),
            h_metrics,
            v_metrics,
            glyf: LazyTable::new(),
            loca_data: raw.loca.unwrap_or(&[]),
            glyf_data: raw.glyf.unwrap_or(&[]),
        })
    }

    /// Returns face's units per EM.
    ///
    /// Guarantee to be in a 16..=16384 range.
    #[inline]
    pub fn units_per_em(&self) -> u16 {
        self.head.units_per_em
    }

    /// Resolves a glyph ID for a code point.
    ///
    /// A glyph ID of 0 (`.notdef`) is reported as `None`.
    #[inline]
    pub fn glyph_index(&self, c: char) -> Option<GlyphId> {
        self.cmap.glyph_index(u32::from(c))
    }

    /// Resolves a glyph ID for a (code point, variation selector) pair.
    ///
    /// Returns `None` when the font doesn't define this sequence at all.
    /// A sequence defined as "use the default glyph" falls through to
    /// [`glyph_index`](Face::glyph_index).
    #[inline]
    pub fn glyph_variation_index(&self, c: char, variation: char) -> Option<GlyphId> {
        self.cmap
            .glyph_variation_index(u32::from(c), u32::from(variation))
    }

    /// Returns glyph's horizontal advance in design units.
    ///
    /// Never fails: see [`tables::hmtx::Table::advance`] for the exact
    /// out-of-range and missing-table policy.
    #[inline]
    pub fn glyph_hor_advance(&self, glyph_id: GlyphId) -> u16 {
        self.h_metrics.advance(glyph_id)
    }

    /// Returns glyph's vertical advance in design units.
    ///
    /// The value is positive-downward, as stored in the font.
    #[inline]
    pub fn glyph_ver_advance(&self, glyph_id: GlyphId) -> u16 {
        self.v_metrics.advance(glyph_id)
    }

    /// Returns glyph's horizontal side bearing in design units.
    #[inline]
    pub fn glyph_hor_side_bearing(&self, glyph_id: GlyphId) -> Option<i16> {
        self.h_metrics.side_bearing(glyph_id)
    }

    /// Returns glyph's vertical side bearing in design units.
    #[inline]
    pub fn glyph_ver_side_bearing(&self, glyph_id: GlyphId) -> Option<i16> {
        self.v_metrics.side_bearing(glyph_id)
    }

    /// Returns face's ascender in design units.
    ///
    /// Prefers OS/2 typographic metrics when the font asks for them via
    /// the fsSelection USE_TYPO_METRICS bit, otherwise reports hhea values.
    #[inline]
    pub fn ascender(&self) -> i16 {
        self.h_metrics.ascender
    }

    /// Returns face's descender in design units.
    #[inline]
    pub fn descender(&self) -> i16 {
        self.h_metrics.descender
    }

    /// Returns face's line gap in design units.
    #[inline]
    pub fn line_gap(&self) -> i16 {
        self.h_metrics.line_gap
    }

    /// Returns face's vertical ascender in design units.
    #[inline]
    pub fn vertical_ascender(&self) -> i16 {
        self.v_metrics.ascender
    }

    /// Returns face's vertical descender in design units.
    #[inline]
    pub fn vertical_descender(&self) -> i16 {
        self.v_metrics.descender
    }

    /// Returns face's vertical line gap in design units.
    #[inline]
    pub fn vertical_line_gap(&self) -> i16 {
        self.v_metrics.line_gap
    }

    /// Returns glyph's declared bounding box in design units.
    ///
    /// This is the box from the glyph header, for simple and composite
    /// glyphs alike; contour data is never interpreted. An existing glyph
    /// without outline data reports all-zero extents, while an out-of-range
    /// glyph ID or malformed offsets report `None`.
    #[inline]
    pub fn glyph_extents(&self, glyph_id: GlyphId) -> Option<GlyphExtents> {
        self.glyf().glyph_extents(glyph_id)
    }

    fn glyf(&self) -> &glyf::Table<'a> {
        self.glyf
            .get_or_init(|| glyf::Table::parse(&self.head, self.loca_data, self.glyf_data))
    }
}

impl fmt::Debug for Face<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Face {{ ... }}")
    }
}
