//! Spreadsheet access
//!
//! The extractor only needs sheet names, cell values, and each cell's pattern
//! fill. [`Workbook`] is that seam; [`XlsxWorkbook`] reads `.xlsx` files and
//! [`MemoryWorkbook`] holds sheets built in code.

mod styles;
mod xlsx;

pub use xlsx::XlsxWorkbook;

use crate::error::{EcError, EcResult};
use std::collections::HashMap;
use std::fmt;

/// Raw value of a cell, before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
    /// Formatted text split into runs
    RichText(Vec<String>),
    /// Formula with its cached result
    Formula {
        formula: String,
        result: Box<CellValue>,
    },
    /// Error value such as `#N/A`
    Error(String),
}

impl CellValue {
    /// Collapse rich text and formulas into the value a reader sees.
    ///
    /// Rich text runs are joined without separators; formulas yield their
    /// cached result. Everything else is returned unchanged.
    pub fn normalized(&self) -> CellValue {
        match self {
            CellValue::RichText(runs) => CellValue::Text(runs.concat()),
            CellValue::Formula { result, .. } => result.normalized(),
            other => other.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::RichText(runs) => runs.iter().all(|r| r.is_empty()),
            CellValue::Formula { result, .. } => result.is_empty(),
            _ => false,
        }
    }

    /// Normalized value as display text; empty cells give `None`
    pub fn to_text(&self) -> Option<String> {
        let value = self.normalized();
        if value.is_empty() {
            return None;
        }
        Some(value.to_string())
    }

    /// Coerce to an integer the way a lenient spreadsheet reader would.
    ///
    /// Numbers are truncated toward zero. Text parses an optional sign and
    /// leading digits after leading whitespace.
    pub fn to_integer(&self) -> Option<i64> {
        match self.normalized() {
            CellValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            CellValue::Text(s) => parse_leading_int(&s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.normalized() {
            CellValue::Empty => Ok(()),
            // Whole numbers print without a trailing ".0"
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(&s),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Error(e) => f.write_str(&e),
            CellValue::RichText(_) | CellValue::Formula { .. } => Ok(()),
        }
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Pattern fill of a cell, as stored in the workbook styles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatternFill {
    /// `patternType`, e.g. `solid`; `None` when the fill has no pattern
    pub pattern: Option<String>,
    /// Foreground colour as an ARGB hex string, e.g. `FF666666`
    pub fg_argb: Option<String>,
}

impl PatternFill {
    pub fn solid(argb: impl Into<String>) -> Self {
        Self {
            pattern: Some("solid".to_string()),
            fg_argb: Some(argb.into()),
        }
    }

    /// A fill whose pattern actually paints the cell
    pub fn is_visible_pattern(&self) -> bool {
        matches!(self.pattern.as_deref(), Some(p) if p != "none")
    }
}

/// A cell value and its fill
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub fill: Option<PatternFill>,
}

/// Snapshot of one worksheet, addressed by 1-based `(row, col)`
#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    name: String,
    cells: HashMap<(u32, u32), Cell>,
    last_row: u32,
}

impl Worksheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last row that holds a value or a fill (0 for an empty sheet)
    pub fn last_row(&self) -> u32 {
        self.last_row
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Value at a position, `Empty` when the cell does not exist
    pub fn value(&self, row: u32, col: u32) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.cell(row, col).map(|c| &c.value).unwrap_or(&EMPTY)
    }

    pub fn set_value(&mut self, row: u32, col: u32, value: CellValue) {
        self.entry(row, col).value = value;
    }

    pub fn set_fill(&mut self, row: u32, col: u32, fill: PatternFill) {
        self.entry(row, col).fill = Some(fill);
    }

    /// Builder-style helper for tests and in-code sheets
    pub fn with_value(mut self, row: u32, col: u32, value: CellValue) -> Self {
        self.set_value(row, col, value);
        self
    }

    pub fn with_fill(mut self, row: u32, col: u32, fill: PatternFill) -> Self {
        self.set_fill(row, col, fill);
        self
    }

    fn entry(&mut self, row: u32, col: u32) -> &mut Cell {
        self.last_row = self.last_row.max(row);
        self.cells.entry((row, col)).or_insert(Cell {
            value: CellValue::Empty,
            fill: None,
        })
    }
}

/// Read access to a workbook's sheets
pub trait Workbook {
    /// Sheet names in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Load one sheet; `SheetNotFound` when no sheet has exactly this name
    fn worksheet(&mut self, name: &str) -> EcResult<Worksheet>;
}

/// Workbook held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    sheets: Vec<Worksheet>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, sheet: Worksheet) -> Self {
        self.sheets.push(sheet);
        self
    }
}

impl Workbook for MemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    fn worksheet(&mut self, name: &str) -> EcResult<Worksheet> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| EcError::SheetNotFound {
                sheet: name.to_string(),
                available: self.sheet_names(),
            })
    }
}
