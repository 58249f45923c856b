//! Sheet layout configuration
//!
//! Row and column positions are 1-based, matching what the spreadsheet shows
//! (column 3 is `C`). The defaults describe the `Picturemap v2.6` sheet; a
//! YAML file can override any subset of them.

use crate::error::{EcError, EcResult};
use crate::workbook::PatternFill;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Where the extractor finds each field in the worksheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    /// Exact worksheet name
    pub sheet: String,
    /// First row scanned for completion names
    pub first_row: u32,
    /// Column holding `EC<challenge>x<level>`
    pub name_col: u32,
    pub notes_col: u32,
    /// IP requirement (left cell of a merged pair)
    pub ip_req_col: u32,
    /// TT requirement (left cell of a merged pair)
    pub tt_col: u32,
    /// First time-study slot column
    pub first_study_col: u32,
    /// Last time-study slot column, inclusive
    pub last_study_col: u32,
    /// ARGB fill colours that mark a study slot as hidden
    pub hidden_fills: Vec<String>,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            sheet: "Picturemap v2.6".to_string(),
            first_row: 3,
            name_col: 3,
            notes_col: 4,
            ip_req_col: 5,
            tt_col: 7,
            first_study_col: 9,
            last_study_col: 52,
            hidden_fills: vec!["FF666666".to_string(), "FF434343".to_string()],
        }
    }
}

impl SheetLayout {
    /// Load a layout from YAML; keys not present keep their defaults
    pub fn from_yaml_file(path: &Path) -> EcResult<Self> {
        let content = fs::read_to_string(path)?;
        let layout: SheetLayout = serde_yaml::from_str(&content)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reject positions that cannot address a cell
    pub fn validate(&self) -> EcResult<()> {
        if self.sheet.is_empty() {
            return Err(EcError::InvalidLayout("sheet name is empty".to_string()));
        }

        let positions = [
            ("first_row", self.first_row),
            ("name_col", self.name_col),
            ("notes_col", self.notes_col),
            ("ip_req_col", self.ip_req_col),
            ("tt_col", self.tt_col),
            ("first_study_col", self.first_study_col),
            ("last_study_col", self.last_study_col),
        ];
        if let Some((field, _)) = positions.iter().find(|(_, pos)| *pos == 0) {
            return Err(EcError::InvalidLayout(format!(
                "{} is 1-based and cannot be 0",
                field
            )));
        }

        if self.first_study_col > self.last_study_col {
            return Err(EcError::InvalidLayout(format!(
                "study columns {}..={} are inverted",
                self.first_study_col, self.last_study_col
            )));
        }

        Ok(())
    }

    /// Whether a slot with this fill is hidden (solid grey on grey text)
    pub fn is_hidden_fill(&self, fill: &PatternFill) -> bool {
        if !fill.is_visible_pattern() {
            return false;
        }
        match &fill.fg_argb {
            Some(argb) => self
                .hidden_fills
                .iter()
                .any(|hidden| hidden.eq_ignore_ascii_case(argb)),
            None => false,
        }
    }
}
