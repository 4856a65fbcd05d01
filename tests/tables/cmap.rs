use ot_font::tables::cmap::Table;
use ot_font::GlyphId;

// A single [0x41, 0x41] segment mapped to glyph 1.
const FORMAT4: &[u8] = &[
    0x00, 0x04, // format: 4
    0x00, 0x20, // subtable size: 32
    0x00, 0x00, // language ID: 0
    0x00, 0x04, // 2 x segCount: 4
    0x00, 0x02, // search range: 2
    0x00, 0x00, // entry selector: 0
    0x00, 0x02, // range shift: 2
    0x00, 0x41, // end codes [0]: 65
    0xFF, 0xFF, // end codes [1]: 65535
    0x00, 0x00, // reserved: 0
    0x00, 0x41, // start codes [0]: 65
    0xFF, 0xFF, // start codes [1]: 65535
    0xFF, 0xC0, // deltas [0]: -64
    0x00, 0x01, // deltas [1]: 1
    0x00, 0x00, // offsets [0]: 0
    0x00, 0x00, // offsets [1]: 0
];

// A single [0x41, 0x45] group mapped to glyphs 5..=9.
const FORMAT12: &[u8] = &[
    0x00, 0x0C, // format: 12
    0x00, 0x00, // reserved: 0
    0x00, 0x00, 0x00, 0x1C, // subtable size: 28
    0x00, 0x00, 0x00, 0x00, // language ID: 0
    0x00, 0x00, 0x00, 0x01, // number of groups: 1
    0x00, 0x00, 0x00, 0x41, // first code point: 0x41
    0x00, 0x00, 0x00, 0x45, // last code point: 0x45
    0x00, 0x00, 0x00, 0x05, // first glyph ID: 5
];

// Two variation selector records for the base character 0x41:
// U+FE00 maps to glyph 77, U+FE01 asks for the default glyph.
const FORMAT14: &[u8] = &[
    0x00, 0x0E, // format: 14
    0x00, 0x00, 0x00, 0x31, // subtable size: 49
    0x00, 0x00, 0x00, 0x02, // number of records: 2
    0x00, 0xFE, 0x00, // var selector [0]: 0xFE00
    0x00, 0x00, 0x00, 0x00, // default UVS offset [0]: 0
    0x00, 0x00, 0x00, 0x28, // non-default UVS offset [0]: 40
    0x00, 0xFE, 0x01, // var selector [1]: 0xFE01
    0x00, 0x00, 0x00, 0x20, // default UVS offset [1]: 32
    0x00, 0x00, 0x00, 0x00, // non-default UVS offset [1]: 0
    0x00, 0x00, 0x00, 0x01, // default UVS: number of ranges: 1
    0x00, 0x00, 0x41, 0x00, // default UVS: range 0x41, +0
    0x00, 0x00, 0x00, 0x01, // non-default UVS: number of mappings: 1
    0x00, 0x00, 0x41, 0x00, 0x4D, // non-default UVS: 0x41 -> 77
];

fn cmap(subtables: &[(u16, u16, &[u8])]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&0u16.to_be_bytes()); // version
    data.extend_from_slice(&(subtables.len() as u16).to_be_bytes());

    let mut offset = 4 + 8 * subtables.len() as u32;
    for &(platform_id, encoding_id, subtable) in subtables {
        data.extend_from_slice(&platform_id.to_be_bytes());
        data.extend_from_slice(&encoding_id.to_be_bytes());
        data.extend_from_slice(&offset.to_be_bytes());
        offset += subtable.len() as u32;
    }

    for &(_, _, subtable) in subtables {
        data.extend_from_slice(subtable);
    }

    data
}

#[test]
fn missing_table_maps_nothing() {
    let table = Table::parse(None);
    assert_eq!(table.glyph_index(0x41), None);
    assert_eq!(table.glyph_variation_index(0x41, 0xFE00), None);
}

#[test]
fn malformed_header_maps_nothing() {
    let table = Table::parse(Some(&[0x00]));
    assert_eq!(table.glyph_index(0x41), None);
}

#[test]
fn full_unicode_outranks_basic_plane() {
    // The (3, 10) subtable wins over (3, 1) regardless of directory order.
    let data = cmap(&[(3, 1, FORMAT4), (3, 10, FORMAT12)]);
    assert_eq!(Table::parse(Some(&data)).glyph_index(0x41), Some(GlyphId(5)));

    let data = cmap(&[(3, 10, FORMAT12), (3, 1, FORMAT4)]);
    assert_eq!(Table::parse(Some(&data)).glyph_index(0x41), Some(GlyphId(5)));
}

#[test]
fn basic_plane_fallback() {
    let data = cmap(&[(3, 1, FORMAT4)]);
    let table = Table::parse(Some(&data));
    assert_eq!(table.glyph_index(0x41), Some(GlyphId(1)));
    assert_eq!(table.glyph_index(0x42), None);
}

#[test]
fn format0_followed_by_another_subtable() {
    let mut format0 = vec![
        0x00, 0x00, // format: 0
        0x01, 0x06, // subtable size: 262
        0x00, 0x00, // language ID: 0
    ];
    format0.resize(262, 0);
    format0[6 + 0x41] = 7;

    // The format 0 subtable is not the last one in the table, so its data
    // slice runs past its own end. That must not break lookups.
    let data = cmap(&[(0, 1, &format0), (0, 5, FORMAT14)]);
    let table = Table::parse(Some(&data));
    assert_eq!(table.glyph_index(0x41), Some(GlyphId(7)));
    assert_eq!(table.glyph_index(0x42), None);
}

#[test]
fn non_unicode_encodings_are_ignored() {
    // (1, 0) is Macintosh Roman, which is never selected.
    let data = cmap(&[(1, 0, FORMAT4)]);
    assert_eq!(Table::parse(Some(&data)).glyph_index(0x41), None);
}

#[test]
fn unsupported_format_wins_but_maps_nothing() {
    let format2 = &[
        0x00, 0x02, // format: 2
        0x00, 0x06, // subtable size: 6
        0x00, 0x00, // language ID: 0
    ];
    // The best-priority subtable is picked by encoding, not by format,
    // so the supported (3, 1) one must not be consulted.
    let data = cmap(&[(3, 10, format2), (3, 1, FORMAT4)]);
    assert_eq!(Table::parse(Some(&data)).glyph_index(0x41), None);
}

#[test]
fn record_offset_past_table_end() {
    let mut data = cmap(&[(3, 10, FORMAT12), (3, 1, FORMAT4)]);
    // Break the (3, 10) record's offset; record 0 starts at offset 4.
    data[8..12].copy_from_slice(&0x00FF_FFFFu32.to_be_bytes());

    // The next candidate by priority takes over.
    assert_eq!(Table::parse(Some(&data)).glyph_index(0x41), Some(GlyphId(1)));
}

#[test]
fn variation_sequences() {
    let data = cmap(&[(3, 1, FORMAT4), (0, 5, FORMAT14)]);
    let table = Table::parse(Some(&data));

    // A non-default mapping overrides the nominal glyph.
    assert_eq!(table.glyph_variation_index(0x41, 0xFE00), Some(GlyphId(77)));
    // A default mapping falls through to the nominal one.
    assert_eq!(table.glyph_variation_index(0x41, 0xFE01), Some(GlyphId(1)));
    // An unknown selector fails outright, even for a mapped character.
    assert_eq!(table.glyph_variation_index(0x41, 0xFE02), None);
    // An unknown character under a known selector.
    assert_eq!(table.glyph_variation_index(0x42, 0xFE00), None);
}

#[test]
fn variation_sequences_without_uvs_subtable() {
    let data = cmap(&[(3, 1, FORMAT4)]);
    let table = Table::parse(Some(&data));
    assert_eq!(table.glyph_variation_index(0x41, 0xFE00), None);
}
