//! Cell fill lookup from the raw `.xlsx` package
//!
//! calamine reads values but not styles, so fills are resolved here:
//! sheet name → part path (`xl/workbook.xml` + relationships), cell → style
//! index (sheet XML `s` attribute), style → fill (`xl/styles.xml`).

use crate::error::EcResult;
use crate::workbook::PatternFill;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::io::{Read, Seek};
use zip::result::ZipError;
use zip::ZipArchive;

/// Fills and the fill index of every cell format
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct WorkbookStyles {
    fills: Vec<PatternFill>,
    /// `cellXfs` entry → `fillId`
    xf_fills: Vec<usize>,
}

impl WorkbookStyles {
    /// Fill applied by a cell's `s` style index
    pub(crate) fn fill_for_style(&self, style: usize) -> Option<&PatternFill> {
        let fill_id = *self.xf_fills.get(style)?;
        self.fills.get(fill_id)
    }
}

/// Read a package part as text; `None` when the part does not exist
pub(crate) fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> EcResult<Option<String>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut xml = String::new();
    file.read_to_string(&mut xml)?;
    Ok(Some(xml))
}

/// Map sheet names to their worksheet part paths inside the package
pub(crate) fn sheet_part_paths<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
) -> EcResult<HashMap<String, String>> {
    let workbook_xml = read_part(archive, "xl/workbook.xml")?.unwrap_or_default();
    let rels_xml = read_part(archive, "xl/_rels/workbook.xml.rels")?.unwrap_or_default();

    let targets = parse_relationships(&rels_xml)?;
    let paths = parse_workbook_sheets(&workbook_xml)?
        .into_iter()
        .filter_map(|(name, rel_id)| {
            targets
                .get(&rel_id)
                .map(|target| (name, normalize_target(target)))
        })
        .collect();
    Ok(paths)
}

/// Load `xl/styles.xml`; a package without one has no fills
pub(crate) fn read_styles<R: Read + Seek>(archive: &mut ZipArchive<R>) -> EcResult<WorkbookStyles> {
    match read_part(archive, "xl/styles.xml")? {
        Some(xml) => parse_styles(&xml),
        None => Ok(WorkbookStyles::default()),
    }
}

fn attr(e: &BytesStart<'_>, name: &[u8]) -> EcResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// `<sheet name=".." r:id=".."/>` entries in workbook order
pub(crate) fn parse_workbook_sheets(xml: &str) -> EcResult<Vec<(String, String)>> {
    let mut reader = Reader::from_str(xml);
    let mut sheets = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sheet" => {
                if let (Some(name), Some(id)) = (attr(&e, b"name")?, attr(&e, b"id")?) {
                    sheets.push((name, id));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(sheets)
}

/// Relationship id → target
pub(crate) fn parse_relationships(xml: &str) -> EcResult<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    let mut targets = HashMap::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                if let (Some(id), Some(target)) = (attr(&e, b"Id")?, attr(&e, b"Target")?) {
                    targets.insert(id, target);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(targets)
}

// Targets are relative to xl/ unless absolute within the package.
fn normalize_target(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("xl/{}", target),
    }
}

/// Parse `<fills>` and `<cellXfs>` from the styles part.
///
/// `<fill>` elements under `<dxfs>` belong to conditional formats and are
/// not counted.
pub(crate) fn parse_styles(xml: &str) -> EcResult<WorkbookStyles> {
    let mut reader = Reader::from_str(xml);
    let mut styles = WorkbookStyles::default();
    let mut in_fills = false;
    let mut in_cell_xfs = false;
    let mut in_pattern = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"fills" => in_fills = true,
                b"cellXfs" => in_cell_xfs = true,
                b"fill" if in_fills => styles.fills.push(PatternFill::default()),
                b"patternFill" if in_fills => {
                    in_pattern = true;
                    set_pattern(&mut styles, &e)?;
                }
                b"fgColor" if in_pattern => set_fg_color(&mut styles, &e)?,
                b"xf" if in_cell_xfs => push_xf(&mut styles, &e)?,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"fill" if in_fills => styles.fills.push(PatternFill::default()),
                b"patternFill" if in_fills => set_pattern(&mut styles, &e)?,
                b"fgColor" if in_pattern => set_fg_color(&mut styles, &e)?,
                b"xf" if in_cell_xfs => push_xf(&mut styles, &e)?,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"fills" => in_fills = false,
                b"cellXfs" => in_cell_xfs = false,
                b"patternFill" => in_pattern = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(styles)
}

fn set_pattern(styles: &mut WorkbookStyles, e: &BytesStart<'_>) -> EcResult<()> {
    let pattern = attr(e, b"patternType")?;
    if let Some(fill) = styles.fills.last_mut() {
        fill.pattern = pattern;
    }
    Ok(())
}

// Only explicit rgb colours are kept; theme and indexed colours never match
// a hidden ARGB code.
fn set_fg_color(styles: &mut WorkbookStyles, e: &BytesStart<'_>) -> EcResult<()> {
    let rgb = attr(e, b"rgb")?;
    if let Some(fill) = styles.fills.last_mut() {
        fill.fg_argb = rgb.map(|c| c.to_ascii_uppercase());
    }
    Ok(())
}

fn push_xf(styles: &mut WorkbookStyles, e: &BytesStart<'_>) -> EcResult<()> {
    let fill_id = attr(e, b"fillId")?
        .and_then(|id| id.parse().ok())
        .unwrap_or(0);
    styles.xf_fills.push(fill_id);
    Ok(())
}

/// Style index of every `<c>` in a worksheet part, 1-based positions
pub(crate) fn parse_cell_styles(xml: &str) -> EcResult<Vec<((u32, u32), usize)>> {
    let mut reader = Reader::from_str(xml);
    let mut styled = Vec::new();
    let mut row = 0u32;
    let mut next_col = 1u32;

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"row" => {
                    row = attr(&e, b"r")?
                        .and_then(|r| r.parse().ok())
                        .unwrap_or(row + 1);
                    next_col = 1;
                }
                b"c" => {
                    let (cell_row, col) = attr(&e, b"r")?
                        .and_then(|r| parse_cell_ref(&r))
                        .unwrap_or((row, next_col));
                    next_col = col + 1;

                    // No `s` means style 0, which may carry a fill of its own
                    let style = attr(&e, b"s")?
                        .and_then(|s| s.parse::<usize>().ok())
                        .unwrap_or(0);
                    styled.push(((cell_row, col), style));
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(styled)
}

/// `"I5"` → `(5, 9)`
pub(crate) fn parse_cell_ref(reference: &str) -> Option<(u32, u32)> {
    let split = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);
    if letters.is_empty() {
        return None;
    }

    let mut col = 0u32;
    for c in letters.chars() {
        if !c.is_ascii_uppercase() {
            return None;
        }
        col = col.checked_mul(26)?.checked_add(c as u32 - 'A' as u32 + 1)?;
    }

    let row = digits.parse::<u32>().ok().filter(|r| *r > 0)?;
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <fills count="4">
    <fill><patternFill patternType="none"/></fill>
    <fill><patternFill patternType="gray125"/></fill>
    <fill><patternFill patternType="solid"><fgColor rgb="ff666666"/><bgColor indexed="64"/></patternFill></fill>
    <fill><patternFill patternType="solid"><fgColor theme="4"/></patternFill></fill>
  </fills>
  <cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="1"/></cellStyleXfs>
  <cellXfs count="3">
    <xf numFmtId="0" fontId="0" fillId="0" xfId="0"/>
    <xf numFmtId="0" fontId="0" fillId="2" xfId="0" applyFill="1"/>
    <xf numFmtId="0" fontId="0" fillId="3" xfId="0" applyFill="1"><alignment horizontal="center"/></xf>
  </cellXfs>
  <dxfs count="1"><dxf><fill><patternFill><bgColor rgb="FFFF0000"/></patternFill></fill></dxf></dxfs>
</styleSheet>"#;

    #[test]
    fn test_parse_styles() {
        let styles = parse_styles(STYLES_XML).unwrap();
        assert_eq!(styles.fills.len(), 4);
        assert_eq!(styles.xf_fills, vec![0, 2, 3]);

        assert_eq!(
            styles.fill_for_style(1),
            Some(&PatternFill::solid("FF666666"))
        );
        let themed = styles.fill_for_style(2).unwrap();
        assert_eq!(themed.pattern.as_deref(), Some("solid"));
        assert_eq!(themed.fg_argb, None);
        assert!(!styles.fill_for_style(0).unwrap().is_visible_pattern());
        assert_eq!(styles.fill_for_style(9), None);
    }

    #[test]
    fn test_parse_workbook_sheets_and_relationships() {
        let workbook = r#"<workbook xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>
    <sheet name="Summary" sheetId="1" r:id="rId1"/>
    <sheet name="Picturemap v2.6" sheetId="2" r:id="rId2"/>
  </sheets>
</workbook>"#;
        let rels = r#"<Relationships>
  <Relationship Id="rId1" Type="worksheet" Target="worksheets/sheet1.xml"/>
  <Relationship Id="rId2" Type="worksheet" Target="/xl/worksheets/sheet2.xml"/>
</Relationships>"#;

        let sheets = parse_workbook_sheets(workbook).unwrap();
        assert_eq!(
            sheets,
            vec![
                ("Summary".to_string(), "rId1".to_string()),
                ("Picturemap v2.6".to_string(), "rId2".to_string()),
            ]
        );

        let targets = parse_relationships(rels).unwrap();
        assert_eq!(normalize_target(&targets["rId1"]), "xl/worksheets/sheet1.xml");
        assert_eq!(normalize_target(&targets["rId2"]), "xl/worksheets/sheet2.xml");
    }

    #[test]
    fn test_parse_cell_styles() {
        let sheet = r#"<worksheet><sheetData>
  <row r="3"><c r="C3" t="s"><v>0</v></c><c r="I3" s="1"><v>61</v></c><c s="2"><v>72</v></c></row>
  <row r="4"><c r="I4" s="0"><v>11</v></c></row>
</sheetData></worksheet>"#;

        let styled = parse_cell_styles(sheet).unwrap();
        assert_eq!(
            styled,
            vec![((3, 3), 0), ((3, 9), 1), ((3, 10), 2), ((4, 9), 0)]
        );
    }

    #[test]
    fn test_default_style_fill_applies() {
        let styles = parse_styles(
            r#"<styleSheet>
  <fills count="2">
    <fill><patternFill patternType="solid"><fgColor rgb="FF666666"/></patternFill></fill>
    <fill><patternFill patternType="none"/></fill>
  </fills>
  <cellXfs count="2"><xf fillId="0"/><xf fillId="1"/></cellXfs>
</styleSheet>"#,
        )
        .unwrap();
        let sheet = r#"<worksheet><sheetData>
  <row r="3"><c r="I3" s="0"><v>61</v></c><c r="J3"><v>62</v></c><c r="K3" s="1"><v>72</v></c></row>
</sheetData></worksheet>"#;

        let fills: Vec<_> = parse_cell_styles(sheet)
            .unwrap()
            .into_iter()
            .map(|(pos, style)| (pos, styles.fill_for_style(style).cloned()))
            .collect();
        assert_eq!(
            fills,
            vec![
                ((3, 9), Some(PatternFill::solid("FF666666"))),
                ((3, 10), Some(PatternFill::solid("FF666666"))),
                ((3, 11), Some(PatternFill { pattern: Some("none".to_string()), fg_argb: None })),
            ]
        );
    }

    #[test]
    fn test_parse_cell_ref() {
        assert_eq!(parse_cell_ref("A1"), Some((1, 1)));
        assert_eq!(parse_cell_ref("I5"), Some((5, 9)));
        assert_eq!(parse_cell_ref("AZ10"), Some((10, 52)));
        assert_eq!(parse_cell_ref("AA100"), Some((100, 27)));
        assert_eq!(parse_cell_ref("5"), None);
        assert_eq!(parse_cell_ref("A"), None);
        assert_eq!(parse_cell_ref("A0"), None);
        assert_eq!(parse_cell_ref("a1"), None);
    }
}
