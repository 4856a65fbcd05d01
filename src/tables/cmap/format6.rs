// https://docs.microsoft.com/en-us/typography/opentype/spec/cmap#format-6-trimmed-table-mapping

use core::convert::TryFrom;

use crate::parser::Stream;

pub fn parse(data: &[u8], code_point: u32) -> Option<u16> {
    let code_point = u16::try_from(code_point).ok()?;

    let mut s = Stream::new(data);
    s.skip::<u16>(); // format
    s.skip::<u16>(); // length
    s.skip::<u16>(); // language
    let first_code_point: u16 = s.read()?;
    let count: u16 = s.read()?;
    let glyphs = s.read_array16::<u16>(count)?;

    let index = code_point.checked_sub(first_code_point)?;
    let glyph_id = glyphs.get(index)?;

    // Zero is a `.notdef` glyph.
    if glyph_id != 0 {
        Some(glyph_id)
    } else {
        None
    }
}
