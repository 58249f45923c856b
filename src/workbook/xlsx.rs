//! `.xlsx` workbook: values from calamine, fills from the package styles

use super::styles::{self, WorkbookStyles};
use super::{CellValue, Workbook, Worksheet};
use crate::error::{EcError, EcResult};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipArchive;

/// Workbook backed by an `.xlsx` file on disk
pub struct XlsxWorkbook {
    path: PathBuf,
    values: Xlsx<BufReader<File>>,
    package: ZipArchive<BufReader<File>>,
    sheet_parts: HashMap<String, String>,
    styles: WorkbookStyles,
}

impl XlsxWorkbook {
    /// Open a workbook; the file is only read, never modified
    pub fn open<P: AsRef<Path>>(path: P) -> EcResult<Self> {
        let path = path.as_ref().to_path_buf();

        let values: Xlsx<_> = open_workbook(&path).map_err(|e| {
            EcError::Workbook(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let mut package = ZipArchive::new(BufReader::new(File::open(&path)?))?;
        let sheet_parts = styles::sheet_part_paths(&mut package)?;
        let styles = styles::read_styles(&mut package)?;

        debug!(
            path = %path.display(),
            sheets = sheet_parts.len(),
            "opened workbook"
        );

        Ok(Self {
            path,
            values,
            package,
            sheet_parts,
            styles,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn apply_fills(&mut self, name: &str, sheet: &mut Worksheet) -> EcResult<()> {
        let Some(part) = self.sheet_parts.get(name) else {
            debug!(sheet = name, "no worksheet part found, fills unavailable");
            return Ok(());
        };

        let Some(xml) = styles::read_part(&mut self.package, part)? else {
            return Ok(());
        };

        for ((row, col), style) in styles::parse_cell_styles(&xml)? {
            if let Some(fill) = self.styles.fill_for_style(style) {
                if fill.is_visible_pattern() {
                    sheet.set_fill(row, col, fill.clone());
                }
            }
        }

        Ok(())
    }
}

impl Workbook for XlsxWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.values.sheet_names()
    }

    fn worksheet(&mut self, name: &str) -> EcResult<Worksheet> {
        let available = self.sheet_names();
        if !available.iter().any(|s| s == name) {
            return Err(EcError::SheetNotFound {
                sheet: name.to_string(),
                available,
            });
        }

        let range = self
            .values
            .worksheet_range(name)
            .map_err(|e| EcError::Workbook(format!("Failed to read sheet '{}': {}", name, e)))?;
        let formulas = self.values.worksheet_formula(name).ok();

        let mut sheet = Worksheet::new(name);
        copy_values(&range, formulas.as_ref(), &mut sheet);
        self.apply_fills(name, &mut sheet)?;

        Ok(sheet)
    }
}

// calamine positions are 0-based and relative to the range start.
fn copy_values(range: &Range<Data>, formulas: Option<&Range<String>>, sheet: &mut Worksheet) {
    let Some((row0, col0)) = range.start() else {
        return;
    };

    for (r, c, data) in range.used_cells() {
        let (row, col) = (row0 + r as u32, col0 + c as u32);
        let result = convert_data(data);

        let value = match formulas.and_then(|f| f.get_value((row, col))) {
            Some(formula) if !formula.is_empty() => CellValue::Formula {
                formula: formula.clone(),
                result: Box::new(result),
            },
            _ => result,
        };

        sheet.set_value(row + 1, col + 1, value);
    }
}

fn convert_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}
