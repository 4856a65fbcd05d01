// https://docs.microsoft.com/en-us/typography/opentype/spec/cmap#format-0-byte-encoding-table

use core::convert::TryFrom;

use crate::parser::Stream;

pub fn parse(data: &[u8], code_point: u32) -> Option<u16> {
    let index = u8::try_from(code_point).ok()?;

    let mut s = Stream::new(data);
    s.skip::<u16>(); // format
    s.skip::<u16>(); // length
    s.skip::<u16>(); // language

    // `data` may run past this subtable to the end of the cmap table,
    // so only the glyph array itself is length-checked.
    let glyph_ids = s.read_bytes(256)?;
    let glyph_id = *glyph_ids.get(usize::from(index))?;

    // Zero is a `.notdef` glyph.
    if glyph_id != 0 {
        Some(u16::from(glyph_id))
    } else {
        None
    }
}
