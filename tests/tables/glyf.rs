use ot_font::tables::{glyf, head};
use ot_font::{GlyphExtents, GlyphId};

fn head(index_to_location_format: i16, glyph_data_format: i16) -> head::Table {
    head::Table {
        units_per_em: 1000,
        index_to_location_format,
        glyph_data_format,
    }
}

fn glyph_header(x_min: i16, y_min: i16, x_max: i16, y_max: i16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&1i16.to_be_bytes()); // number of contours
    data.extend_from_slice(&x_min.to_be_bytes());
    data.extend_from_slice(&y_min.to_be_bytes());
    data.extend_from_slice(&x_max.to_be_bytes());
    data.extend_from_slice(&y_max.to_be_bytes());
    data
}

#[test]
fn short_offsets() {
    let loca = &[
        0x00, 0x00, // offset [0]: 0
        0x00, 0x05, // offset [1]: 5 (stored halved, so 10)
        0x00, 0x05, // offset [2]: 5
    ];
    let glyf = glyph_header(50, -20, 450, 700);
    let table = glyf::Table::parse(&head(0, 0), loca, &glyf);

    assert_eq!(table.number_of_glyphs(), 2);
    assert_eq!(
        table.glyph_extents(GlyphId(0)),
        Some(GlyphExtents {
            x_bearing: 50,
            y_bearing: 700,
            width: 400,
            height: -720,
        })
    );
    // An existing glyph without outline data.
    assert_eq!(table.glyph_extents(GlyphId(1)), Some(GlyphExtents::default()));
    // Out of range.
    assert_eq!(table.glyph_extents(GlyphId(2)), None);
}

#[test]
fn long_offsets() {
    let loca = &[
        0x00, 0x00, 0x00, 0x00, // offset [0]: 0
        0x00, 0x00, 0x00, 0x0A, // offset [1]: 10
    ];
    let glyf = glyph_header(0, 0, 100, 100);
    let table = glyf::Table::parse(&head(1, 0), loca, &glyf);

    assert_eq!(table.number_of_glyphs(), 1);
    assert_eq!(
        table.glyph_extents(GlyphId(0)),
        Some(GlyphExtents {
            x_bearing: 0,
            y_bearing: 100,
            width: 100,
            height: -100,
        })
    );
}

#[test]
fn unknown_offset_format_disables_outlines() {
    let loca = &[0x00, 0x00, 0x00, 0x05];
    let glyf = glyph_header(0, 0, 100, 100);

    let table = glyf::Table::parse(&head(2, 0), loca, &glyf);
    assert_eq!(table.number_of_glyphs(), 0);
    assert_eq!(table.glyph_extents(GlyphId(0)), None);
}

#[test]
fn unknown_glyph_data_format_disables_outlines() {
    let loca = &[0x00, 0x00, 0x00, 0x05];
    let glyf = glyph_header(0, 0, 100, 100);

    let table = glyf::Table::parse(&head(0, 1), loca, &glyf);
    assert_eq!(table.number_of_glyphs(), 0);
    assert_eq!(table.glyph_extents(GlyphId(0)), None);
}

#[test]
fn offsets_past_glyph_data() {
    let loca = &[
        0x00, 0x00, // offset [0]: 0
        0x00, 0x40, // offset [1]: 64 (so 128), way past the data
    ];
    let glyf = glyph_header(0, 0, 100, 100);

    let table = glyf::Table::parse(&head(0, 0), loca, &glyf);
    assert_eq!(table.glyph_extents(GlyphId(0)), None);
}

#[test]
fn unordered_offsets() {
    let loca = &[
        0x00, 0x05, // offset [0]: 5 (so 10)
        0x00, 0x00, // offset [1]: 0
    ];
    let glyf = glyph_header(0, 0, 100, 100);

    let table = glyf::Table::parse(&head(0, 0), loca, &glyf);
    assert_eq!(table.glyph_extents(GlyphId(0)), None);
}

#[test]
fn swapped_min_max_is_normalized() {
    let loca = &[
        0x00, 0x00, // offset [0]: 0
        0x00, 0x05, // offset [1]: 5 (so 10)
    ];
    let glyf = glyph_header(450, 700, 50, -20);
    let table = glyf::Table::parse(&head(0, 0), loca, &glyf);

    assert_eq!(
        table.glyph_extents(GlyphId(0)),
        Some(GlyphExtents {
            x_bearing: 50,
            y_bearing: 700,
            width: 400,
            height: -720,
        })
    );
}

#[test]
fn empty_offset_array() {
    let table = glyf::Table::parse(&head(0, 0), &[], &[]);
    assert_eq!(table.number_of_glyphs(), 0);
    assert_eq!(table.glyph_extents(GlyphId(0)), None);
}
