use ot_font::tables::{hea, hmtx, os2};
use ot_font::GlyphId;

const UPEM: u16 = 1000;

fn hea(number_of_metrics: u16) -> hea::Table {
    hea::Table {
        ascender: 1900,
        descender: -483,
        line_gap: 0,
        number_of_metrics,
    }
}

fn os2_data(fs_selection: u16, ascender: i16, descender: i16, line_gap: i16) -> Vec<u8> {
    let mut data = vec![0u8; 78];
    data[62..64].copy_from_slice(&fs_selection.to_be_bytes());
    data[68..70].copy_from_slice(&ascender.to_be_bytes());
    data[70..72].copy_from_slice(&descender.to_be_bytes());
    data[72..74].copy_from_slice(&line_gap.to_be_bytes());
    data
}

#[test]
fn explicit_and_trailing_records() {
    let data = &[
        0x00, 0x0A, 0x00, 0x02, // advance width [0]: 10, side bearing [0]: 2
        0x00, 0x14, 0xFF, 0xFE, // advance width [1]: 20, side bearing [1]: -2
        0x00, 0x1E, 0x00, 0x05, // advance width [2]: 30, side bearing [2]: 5
        0x00, 0x07, // side bearing [3]: 7
        0xFF, 0xF9, // side bearing [4]: -7
    ];
    let table = hmtx::Table::parse(Some(&hea(3)), None, Some(data), UPEM);

    assert_eq!(table.number_of_advances(), 3);
    assert_eq!(table.number_of_metrics(), 5);

    assert_eq!(table.advance(GlyphId(0)), 10);
    assert_eq!(table.advance(GlyphId(1)), 20);
    assert_eq!(table.advance(GlyphId(2)), 30);
    // Trailing records reuse the last explicit advance.
    assert_eq!(table.advance(GlyphId(3)), 30);
    assert_eq!(table.advance(GlyphId(4)), 30);
    // Past the data entirely.
    assert_eq!(table.advance(GlyphId(5)), 0);

    assert_eq!(table.side_bearing(GlyphId(1)), Some(-2));
    assert_eq!(table.side_bearing(GlyphId(3)), Some(7));
    assert_eq!(table.side_bearing(GlyphId(4)), Some(-7));
    assert_eq!(table.side_bearing(GlyphId(5)), None);
}

#[test]
fn declared_count_capped_by_length() {
    let data = &[
        0x00, 0x0A, 0x00, 0x00, // advance width [0]: 10
        0x00, 0x14, 0x00, 0x00, // advance width [1]: 20
        0x00, 0x1E, 0x00, 0x00, // advance width [2]: 30
        0x00, 0x28, 0x00, 0x00, // advance width [3]: 40
    ];
    // The header promises far more records than the data holds.
    let table = hmtx::Table::parse(Some(&hea(10)), None, Some(data), UPEM);

    assert_eq!(table.number_of_advances(), 4);
    assert_eq!(table.number_of_metrics(), 4);
    assert_eq!(table.advance(GlyphId(3)), 40);
    assert_eq!(table.advance(GlyphId(4)), 0);
}

#[test]
fn capped_count_keeps_trailing_remainder() {
    let data = &[
        0x00, 0x0A, 0x00, 0x00, // advance width [0]: 10
        0x00, 0x14, 0x00, 0x00, // advance width [1]: 20
        0x00, 0x03, // side bearing [2]: 3
    ];
    let table = hmtx::Table::parse(Some(&hea(10)), None, Some(data), UPEM);

    assert_eq!(table.number_of_advances(), 2);
    assert_eq!(table.number_of_metrics(), 3);
    assert_eq!(table.advance(GlyphId(2)), 20);
    assert_eq!(table.side_bearing(GlyphId(2)), Some(3));
}

#[test]
fn missing_table_reports_default_advance() {
    let table = hmtx::Table::parse(Some(&hea(2)), None, None, UPEM);

    assert_eq!(table.number_of_advances(), 0);
    assert_eq!(table.number_of_metrics(), 0);
    assert_eq!(table.advance(GlyphId(0)), UPEM);
    assert_eq!(table.advance(GlyphId(1234)), UPEM);
    assert_eq!(table.side_bearing(GlyphId(0)), None);
}

#[test]
fn zero_advances_disable_the_whole_table() {
    let data = &[
        0x00, 0x03, // side bearing: 3
        0x00, 0x07, // side bearing: 7
    ];
    // numberOfLongMetrics is zero, so even present data is unreachable.
    let table = hmtx::Table::parse(Some(&hea(0)), None, Some(data), UPEM);

    assert_eq!(table.number_of_advances(), 0);
    assert_eq!(table.number_of_metrics(), 0);
    assert_eq!(table.advance(GlyphId(0)), UPEM);
    assert_eq!(table.side_bearing(GlyphId(0)), None);
}

#[test]
fn extents_from_hea() {
    let table = hmtx::Table::parse(Some(&hea(1)), None, None, UPEM);
    assert_eq!(table.ascender, 1900);
    assert_eq!(table.descender, -483);
    assert_eq!(table.line_gap, 0);
}

#[test]
fn extents_prefer_selected_typo_metrics() {
    let os2_data = os2_data(1 << 7, 1000, -200, 90);
    let os2 = os2::Table::parse(&os2_data).unwrap();
    let table = hmtx::Table::parse(Some(&hea(1)), Some(&os2), None, UPEM);

    assert_eq!(table.ascender, 1000);
    assert_eq!(table.descender, -200);
    assert_eq!(table.line_gap, 90);
}

#[test]
fn unselected_typo_metrics_are_ignored() {
    let os2_data = os2_data(0, 1000, -200, 90);
    let os2 = os2::Table::parse(&os2_data).unwrap();
    let table = hmtx::Table::parse(Some(&hea(1)), Some(&os2), None, UPEM);

    assert_eq!(table.ascender, 1900);
    assert_eq!(table.descender, -483);
}

#[test]
fn zeroed_typo_metrics_fall_back_to_hea() {
    let os2_data = os2_data(1 << 7, 0, 0, 90);
    let os2 = os2::Table::parse(&os2_data).unwrap();
    let table = hmtx::Table::parse(Some(&hea(1)), Some(&os2), None, UPEM);

    assert_eq!(table.ascender, 1900);
    assert_eq!(table.descender, -483);
    assert_eq!(table.line_gap, 0);
}

#[test]
fn zeroed_typo_metrics_without_hea_zero_everything() {
    // Typo ascender/descender are both zero, so the typo values are
    // unusable; with no metrics header to fall back to, the line gap
    // must not survive either.
    let os2_data = os2_data(1 << 7, 0, 0, 90);
    let os2 = os2::Table::parse(&os2_data).unwrap();
    let table = hmtx::Table::parse(None, Some(&os2), None, UPEM);

    assert_eq!(table.ascender, 0);
    assert_eq!(table.descender, 0);
    assert_eq!(table.line_gap, 0);
}

#[test]
fn no_headers_at_all() {
    let data = &[
        0x00, 0x0A, 0x00, 0x00, // advance width [0]: 10
    ];
    // Without a metrics header the record count is unknown, so the data
    // is unusable.
    let table = hmtx::Table::parse(None, None, Some(data), UPEM);

    assert_eq!(table.number_of_metrics(), 0);
    assert_eq!(table.advance(GlyphId(0)), UPEM);
    assert_eq!(table.ascender, 0);
}
