//! Shared fixtures: a small Picturemap-style workbook written with rust_xlsxwriter

#![allow(dead_code)]

use rust_xlsxwriter::{Color, Format, FormatPattern, Formula, Workbook, XlsxError};
use std::path::Path;

pub const SHEET: &str = "Picturemap v2.6";

// 0-based positions of the default layout (C, D, E, G, I..AZ)
const NAME_COL: u16 = 2;
const NOTES_COL: u16 = 3;
const IP_COL: u16 = 4;
const TT_COL: u16 = 6;
const FIRST_STUDY_COL: u16 = 8;

fn hidden(rgb: u32) -> Format {
    Format::new()
        .set_pattern(FormatPattern::Solid)
        .set_foreground_color(Color::RGB(rgb))
        .set_font_color(Color::RGB(rgb))
}

/// Write the fixture workbook.
///
/// | row | name  | notes                       | IP   | TT          | studies                          |
/// |-----|-------|-----------------------------|------|-------------|----------------------------------|
/// | 3   | EC1x1 | (empty)                     | 1800 | 130         | 11 22 72 121                     |
/// | 4   | spacer text in the name column, skipped                                         |
/// | 5   | EC2x1 | rich text "Use TS73 path"   | 975  | `"`         | 11 [61 hidden] 73 999 "122"      |
/// | 6   | EC1x2 | "Fail 1 for Achievement"    | 2000 | =140+2      | 11 [62 hidden dark] 72 [123 light green] |
pub fn write_fixture(path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();

    workbook.add_worksheet().set_name("Summary")?.write_string(0, 0, "Overview")?;

    let sheet = workbook.add_worksheet().set_name(SHEET)?;
    let grey = hidden(0x666666);
    let dark_grey = hidden(0x434343);
    let green = Format::new()
        .set_pattern(FormatPattern::Solid)
        .set_foreground_color(Color::RGB(0xD9EAD3));
    let bold = Format::new().set_bold();
    let italic = Format::new().set_italic();

    sheet.write_string(0, NAME_COL, "Eternity Challenges")?;
    sheet.write_string(1, NAME_COL, "EC")?;
    sheet.write_string(1, NOTES_COL, "Notes")?;
    sheet.write_string(1, IP_COL, "IP Req")?;
    sheet.write_string(1, TT_COL, "TT")?;

    // Row 3
    sheet.write_string(2, NAME_COL, "EC1x1")?;
    sheet.write_number(2, IP_COL, 1800)?;
    sheet.write_number(2, TT_COL, 130)?;
    for (i, id) in [11, 22, 72, 121].into_iter().enumerate() {
        sheet.write_number(2, FIRST_STUDY_COL + i as u16, id)?;
    }

    // Row 4
    sheet.write_string(3, NAME_COL, "Group B")?;

    // Row 5
    sheet.write_string(4, NAME_COL, "EC2x1")?;
    sheet.write_rich_string(4, NOTES_COL, &[(&bold, "Use TS73 "), (&italic, "path")])?;
    sheet.write_number(4, IP_COL, 975)?;
    sheet.write_string(4, TT_COL, "\"")?;
    sheet.write_number(4, FIRST_STUDY_COL, 11)?;
    sheet.write_number_with_format(4, FIRST_STUDY_COL + 1, 61, &grey)?;
    sheet.write_number(4, FIRST_STUDY_COL + 2, 73)?;
    sheet.write_number(4, FIRST_STUDY_COL + 3, 999)?;
    sheet.write_string(4, FIRST_STUDY_COL + 4, "122")?;

    // Row 6
    sheet.write_string(5, NAME_COL, "EC1x2")?;
    sheet.write_string(5, NOTES_COL, "Fail 1 for Achievement")?;
    sheet.write_number(5, IP_COL, 2000)?;
    sheet.write_formula(5, TT_COL, Formula::new("=140+2").set_result("142"))?;
    sheet.write_number(5, FIRST_STUDY_COL, 11)?;
    sheet.write_number_with_format(5, FIRST_STUDY_COL + 1, 62, &dark_grey)?;
    sheet.write_number(5, FIRST_STUDY_COL + 2, 72)?;
    sheet.write_number_with_format(5, FIRST_STUDY_COL + 3, 123, &green)?;

    workbook.save(path)?;
    Ok(())
}

/// Write a workbook whose sheet holds one completion row per name, from row 3
pub fn write_named_rows(path: &Path, names: &[&str]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet().set_name(SHEET)?;

    for (i, name) in names.iter().enumerate() {
        let row = 2 + i as u32;
        sheet.write_string(row, NAME_COL, *name)?;
        sheet.write_number(row, TT_COL, 130)?;
        sheet.write_number(row, FIRST_STUDY_COL, 72)?;
    }

    workbook.save(path)?;
    Ok(())
}
