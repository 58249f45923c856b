//! Extractor behaviour over in-memory workbooks

use ec_reference::extractor::Extractor;
use ec_reference::layout::SheetLayout;
use ec_reference::workbook::{CellValue, MemoryWorkbook, PatternFill, Worksheet};
use ec_reference::EcError;
use pretty_assertions::assert_eq;

const SHEET: &str = "Picturemap v2.6";

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

fn num(n: f64) -> CellValue {
    CellValue::Number(n)
}

/// Sheet with one completion row at `row` and studies from column 9 on
fn completion_sheet(row: u32, name: &str, studies: &[CellValue]) -> Worksheet {
    let mut sheet = Worksheet::new(SHEET).with_value(row, 3, text(name));
    for (i, value) in studies.iter().enumerate() {
        sheet.set_value(row, 9 + i as u32, value.clone());
    }
    sheet
}

fn extract_one(sheet: Worksheet) -> Vec<u16> {
    let mut workbook = MemoryWorkbook::new().with_sheet(sheet);
    let rows = Extractor::new(SheetLayout::default())
        .unwrap()
        .extract(&mut workbook)
        .unwrap();
    assert_eq!(rows.len(), 1);
    rows[0].studies.clone()
}

// ═══════════════════════════════════════════════════════════════════════════
// STUDY SLOTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_hidden_fill_excludes_in_range_study() {
    let sheet = completion_sheet(3, "EC1x1", &[num(11.0), num(61.0), num(72.0)])
        .with_fill(3, 10, PatternFill::solid("FF666666"));
    assert_eq!(extract_one(sheet), vec![11, 72]);
}

#[test]
fn test_second_hidden_colour_also_excludes() {
    let sheet = completion_sheet(3, "EC1x1", &[num(61.0), num(62.0)])
        .with_fill(3, 10, PatternFill::solid("ff434343"));
    assert_eq!(extract_one(sheet), vec![61]);
}

#[test]
fn test_out_of_range_value_excluded() {
    let sheet = completion_sheet(3, "EC1x1", &[num(999.0), num(10.0), num(235.0), num(234.0)]);
    assert_eq!(extract_one(sheet), vec![234]);
}

#[test]
fn test_unparseable_and_empty_slots_skipped() {
    let sheet = completion_sheet(
        3,
        "EC1x1",
        &[
            text("TS"),
            CellValue::Empty,
            text(""),
            CellValue::Bool(true),
            CellValue::Error("#REF!".to_string()),
            text("121"),
        ],
    );
    assert_eq!(extract_one(sheet), vec![121]);
}

#[test]
fn test_duplicates_and_column_order_preserved() {
    let sheet = completion_sheet(3, "EC1x1", &[num(72.0), num(11.0), num(72.0)]);
    assert_eq!(extract_one(sheet), vec![72, 11, 72]);
}

#[test]
fn test_formula_and_rich_text_slots_normalized() {
    let sheet = completion_sheet(
        3,
        "EC1x1",
        &[
            CellValue::Formula {
                formula: "=A1".to_string(),
                result: Box::new(num(131.0)),
            },
            CellValue::RichText(vec!["14".to_string(), "1".to_string()]),
        ],
    );
    assert_eq!(extract_one(sheet), vec![131, 141]);
}

#[test]
fn test_slots_outside_study_columns_ignored() {
    let sheet = completion_sheet(3, "EC1x1", &[num(11.0)])
        .with_value(3, 8, num(21.0))
        .with_value(3, 53, num(22.0));
    assert_eq!(extract_one(sheet), vec![11]);
}

#[test]
fn test_non_pattern_fill_does_not_hide() {
    let fill = PatternFill {
        pattern: Some("none".to_string()),
        fg_argb: Some("FF666666".to_string()),
    };
    let sheet = completion_sheet(3, "EC1x1", &[num(61.0)]).with_fill(3, 9, fill);
    assert_eq!(extract_one(sheet), vec![61]);
}

// ═══════════════════════════════════════════════════════════════════════════
// ROWS AND FIELDS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_only_matching_names_become_rows() {
    let sheet = Worksheet::new(SHEET)
        .with_value(3, 3, text("EC"))
        .with_value(4, 3, text("EC1x1"))
        .with_value(5, 3, text("Notes"))
        .with_value(7, 3, text("EC10x2"))
        .with_value(8, 3, text("EC1x1 (alt)"))
        .with_value(9, 3, num(11.0))
        .with_value(10, 3, CellValue::RichText(vec!["EC12".to_string(), "x5".to_string()]));

    let mut workbook = MemoryWorkbook::new().with_sheet(sheet);
    let rows = Extractor::new(SheetLayout::default())
        .unwrap()
        .extract(&mut workbook)
        .unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["EC1x1", "EC10x2", "EC12x5"]);
}

#[test]
fn test_fields_read_and_normalized() {
    let sheet = Worksheet::new(SHEET)
        .with_value(3, 3, text("EC4x1"))
        .with_value(
            3,
            4,
            CellValue::RichText(vec!["Fail 1 ".to_string(), "for Achievement".to_string()]),
        )
        .with_value(3, 5, num(2750.0))
        .with_value(
            3,
            7,
            CellValue::Formula {
                formula: "=G2+5".to_string(),
                result: Box::new(num(142.0)),
            },
        )
        .with_value(4, 3, text("EC5x1"))
        .with_value(4, 7, text("\""));

    let mut workbook = MemoryWorkbook::new().with_sheet(sheet);
    let rows = Extractor::new(SheetLayout::default())
        .unwrap()
        .extract(&mut workbook)
        .unwrap();

    assert_eq!(rows[0].notes, "Fail 1 for Achievement");
    assert_eq!(rows[0].ip_req, "2750");
    assert_eq!(rows[0].tt, "142");

    assert_eq!(rows[1].notes, "-");
    assert_eq!(rows[1].ip_req, "");
    assert_eq!(rows[1].tt, "\"");
}

#[test]
fn test_custom_layout_columns() {
    let layout = SheetLayout {
        sheet: "Alt".to_string(),
        first_row: 1,
        name_col: 1,
        notes_col: 2,
        ip_req_col: 3,
        tt_col: 4,
        first_study_col: 5,
        last_study_col: 6,
        hidden_fills: vec![],
    };
    let sheet = Worksheet::new("Alt")
        .with_value(1, 1, text("EC6x1"))
        .with_value(1, 3, num(850.0))
        .with_value(1, 4, num(160.0))
        .with_value(1, 5, num(72.0))
        .with_fill(1, 5, PatternFill::solid("FF666666"))
        .with_value(1, 6, num(121.0))
        .with_value(1, 7, num(131.0));

    let mut workbook = MemoryWorkbook::new().with_sheet(sheet);
    let rows = Extractor::new(layout).unwrap().extract(&mut workbook).unwrap();
    assert_eq!(rows[0].tt, "160");
    // No hidden colours configured, and column 7 is past the range
    assert_eq!(rows[0].studies, vec![72, 121]);
}

#[test]
fn test_missing_sheet_is_fatal() {
    let mut workbook = MemoryWorkbook::new()
        .with_sheet(Worksheet::new("Summary"))
        .with_sheet(Worksheet::new("Picturemap v2.5"));

    let err = Extractor::new(SheetLayout::default())
        .unwrap()
        .extract(&mut workbook)
        .unwrap_err();

    match err {
        EcError::SheetNotFound { sheet, available } => {
            assert_eq!(sheet, SHEET);
            assert_eq!(available, vec!["Summary", "Picturemap v2.5"]);
        }
        other => panic!("Expected SheetNotFound, got {:?}", other),
    }
}

#[test]
fn test_empty_sheet_yields_no_rows() {
    let mut workbook = MemoryWorkbook::new().with_sheet(Worksheet::new(SHEET));
    let rows = Extractor::new(SheetLayout::default())
        .unwrap()
        .extract(&mut workbook)
        .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_invalid_layout_rejected_up_front() {
    let layout = SheetLayout {
        first_study_col: 52,
        last_study_col: 9,
        ..SheetLayout::default()
    };
    assert!(matches!(Extractor::new(layout), Err(EcError::InvalidLayout(_))));
}
