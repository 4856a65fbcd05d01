//! A scaled font: the glue between a face and a shaping pipeline.

use core::fmt;

use crate::{Face, GlyphExtents, GlyphId};

/// Font-wide extents in the caller's scale.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct FontExtents {
    /// Distance from the baseline to the top of a line. Typically positive.
    pub ascender: i32,
    /// Distance from the baseline to the bottom of a line. Typically negative.
    pub descender: i32,
    /// Extra space between lines.
    pub line_gap: i32,
}

/// The per-font query table a shaping pipeline consumes.
///
/// All positions are in the font's scale, not in design units, and follow
/// the positive-upward y convention.
pub trait FontFuncs {
    /// Resolves the nominal glyph for a character.
    fn nominal_glyph(&self, c: char) -> Option<GlyphId>;

    /// Resolves the glyph for a (character, variation selector) pair.
    fn variation_glyph(&self, c: char, variation: char) -> Option<GlyphId>;

    /// Returns a glyph's horizontal advance.
    fn glyph_h_advance(&self, glyph_id: GlyphId) -> i32;

    /// Returns a glyph's vertical advance. Typically negative.
    fn glyph_v_advance(&self, glyph_id: GlyphId) -> i32;

    /// Returns a glyph's ink box.
    fn glyph_extents(&self, glyph_id: GlyphId) -> Option<GlyphExtents>;

    /// Returns the font-wide extents for horizontal layout.
    fn h_extents(&self) -> FontExtents;

    /// Returns the font-wide extents for vertical layout.
    fn v_extents(&self) -> FontExtents;
}

/// A face scaled to caller units.
pub struct Font<'a> {
    face: Face<'a>,
    x_scale: i32,
    y_scale: i32,
}

impl<'a> Font<'a> {
    /// Creates a font from a face and per-axis scales.
    ///
    /// A scale equal to units-per-em leaves values in design units.
    pub fn new(face: Face<'a>, x_scale: i32, y_scale: i32) -> Self {
        Font { face, x_scale, y_scale }
    }

    /// Returns the underlying face.
    #[inline]
    pub fn face(&self) -> &Face<'a> {
        &self.face
    }

    /// Returns the horizontal scale.
    #[inline]
    pub fn x_scale(&self) -> i32 {
        self.x_scale
    }

    /// Returns the vertical scale.
    #[inline]
    pub fn y_scale(&self) -> i32 {
        self.y_scale
    }

    fn em_scale(v: i32, scale: i32, units_per_em: u16) -> i32 {
        // The widened product cannot overflow and the division truncates
        // towards zero. units_per_em is guaranteed non-zero.
        (i64::from(v) * i64::from(scale) / i64::from(units_per_em)) as i32
    }

    #[inline]
    fn em_scale_x(&self, v: i32) -> i32 {
        Self::em_scale(v, self.x_scale, self.face.units_per_em())
    }

    #[inline]
    fn em_scale_y(&self, v: i32) -> i32 {
        Self::em_scale(v, self.y_scale, self.face.units_per_em())
    }
}

impl FontFuncs for Font<'_> {
    #[inline]
    fn nominal_glyph(&self, c: char) -> Option<GlyphId> {
        self.face.glyph_index(c)
    }

    #[inline]
    fn variation_glyph(&self, c: char, variation: char) -> Option<GlyphId> {
        self.face.glyph_variation_index(c, variation)
    }

    #[inline]
    fn glyph_h_advance(&self, glyph_id: GlyphId) -> i32 {
        self.em_scale_x(i32::from(self.face.glyph_hor_advance(glyph_id)))
    }

    #[inline]
    fn glyph_v_advance(&self, glyph_id: GlyphId) -> i32 {
        // Stored positive-downward, reported positive-upward.
        self.em_scale_y(-i32::from(self.face.glyph_ver_advance(glyph_id)))
    }

    fn glyph_extents(&self, glyph_id: GlyphId) -> Option<GlyphExtents> {
        let extents = self.face.glyph_extents(glyph_id)?;
        Some(GlyphExtents {
            x_bearing: self.em_scale_x(extents.x_bearing),
            y_bearing: self.em_scale_y(extents.y_bearing),
            width: self.em_scale_x(extents.width),
            height: self.em_scale_y(extents.height),
        })
    }

    fn h_extents(&self) -> FontExtents {
        FontExtents {
            ascender: self.em_scale_y(i32::from(self.face.ascender())),
            descender: self.em_scale_y(i32::from(self.face.descender())),
            line_gap: self.em_scale_y(i32::from(self.face.line_gap())),
        }
    }

    fn v_extents(&self) -> FontExtents {
        // Vertical layout lines advance along x, so its extents scale
        // with the cross axis.
        FontExtents {
            ascender: self.em_scale_x(i32::from(self.face.vertical_ascender())),
            descender: self.em_scale_x(i32::from(self.face.vertical_descender())),
            line_gap: self.em_scale_x(i32::from(self.face.vertical_line_gap())),
        }
    }
}

impl fmt::Debug for Font<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Font {{ x_scale: {}, y_scale: {}, ... }}",
            self.x_scale, self.y_scale
        )
    }
}
