//! Completion extraction from the curated spreadsheet
//!
//! Rows whose name column reads `EC<n>x<m>` become completions. The study
//! slots to the right hold time-study ids; slots painted with a hidden fill
//! (grey on grey) are not part of the build and are skipped.

use crate::error::EcResult;
use crate::layout::SheetLayout;
use crate::model::{CompletionNames, RawCompletion, MAX_STUDY, MIN_STUDY, NO_NOTES};
use crate::workbook::{CellValue, Workbook, Worksheet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// One extracted row, owned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedCompletion {
    pub name: String,
    pub notes: String,
    pub ip_req: String,
    pub tt: String,
    pub studies: Vec<u16>,
}

impl ExtractedCompletion {
    /// Borrow as a table row for the model builder
    pub fn as_raw(&self) -> RawCompletion<'_> {
        RawCompletion {
            name: &self.name,
            notes: &self.notes,
            ip_req: &self.ip_req,
            tt: &self.tt,
            studies: &self.studies,
        }
    }
}

/// A study slot read once from the sheet
#[derive(Debug, Clone, PartialEq)]
struct StudySlot {
    value: CellValue,
    hidden: bool,
}

/// Extracts completion rows from a workbook according to a [`SheetLayout`]
pub struct Extractor {
    layout: SheetLayout,
    names: CompletionNames,
}

impl Extractor {
    pub fn new(layout: SheetLayout) -> EcResult<Self> {
        layout.validate()?;
        Ok(Self {
            layout,
            names: CompletionNames::new()?,
        })
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Extract every completion row from the layout's sheet.
    ///
    /// Fails only when the sheet is missing; rows that do not look like
    /// completions, or name a challenge outside 1-12, are skipped.
    pub fn extract<W: Workbook + ?Sized>(&self, workbook: &mut W) -> EcResult<Vec<ExtractedCompletion>> {
        let sheet = workbook.worksheet(&self.layout.sheet)?;
        info!(sheet = sheet.name(), "found sheet");

        let completions = self.extract_sheet(&sheet);
        info!(count = completions.len(), "extracted completions");

        Ok(completions)
    }

    /// Extract rows from an already loaded sheet
    pub fn extract_sheet(&self, sheet: &Worksheet) -> Vec<ExtractedCompletion> {
        let mut completions = Vec::new();

        for row in self.layout.first_row..=sheet.last_row() {
            let Some(completion) = self.extract_row(sheet, row) else {
                continue;
            };

            debug!(
                "{}: {} studies - {}",
                completion.name,
                completion.studies.len(),
                join_studies(&completion.studies)
            );
            completions.push(completion);
        }

        completions
    }

    fn extract_row(&self, sheet: &Worksheet, row: u32) -> Option<ExtractedCompletion> {
        let layout = &self.layout;

        let name = sheet.value(row, layout.name_col).to_text()?;
        if !self.names.is_match(&name) {
            return None;
        }
        // Shaped like a completion but naming no real challenge or level
        if let Err(e) = self.names.parse(&name) {
            warn!(row, "skipping row: {}", e);
            return None;
        }

        let notes = match sheet.value(row, layout.notes_col).to_text() {
            // An empty formula result shows up as 0
            Some(notes) if notes != "0" => notes,
            _ => NO_NOTES.to_string(),
        };
        let ip_req = sheet.value(row, layout.ip_req_col).to_text().unwrap_or_default();
        let tt = sheet.value(row, layout.tt_col).to_text().unwrap_or_default();

        let studies = (layout.first_study_col..=layout.last_study_col)
            .filter_map(|col| self.read_slot(sheet, row, col))
            .filter(|slot| !slot.hidden)
            .filter_map(|slot| study_id(&slot.value))
            .collect();

        Some(ExtractedCompletion {
            name,
            notes,
            ip_req,
            tt,
            studies,
        })
    }

    // Hidden-ness is decided here and nowhere else.
    fn read_slot(&self, sheet: &Worksheet, row: u32, col: u32) -> Option<StudySlot> {
        let cell = sheet.cell(row, col)?;
        let value = cell.value.normalized();
        if value.is_empty() {
            return None;
        }

        let hidden = cell
            .fill
            .as_ref()
            .is_some_and(|fill| self.layout.is_hidden_fill(fill));

        Some(StudySlot { value, hidden })
    }
}

/// Study id held by a slot, if it is a number within the study range
fn study_id(value: &CellValue) -> Option<u16> {
    let id = value.to_integer()?;
    let id = u16::try_from(id).ok()?;
    (MIN_STUDY..=MAX_STUDY).contains(&id).then_some(id)
}

fn join_studies(studies: &[u16]) -> String {
    studies
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Extract with the given layout in one call
pub fn extract<W: Workbook + ?Sized>(
    workbook: &mut W,
    layout: SheetLayout,
) -> EcResult<Vec<ExtractedCompletion>> {
    Extractor::new(layout)?.extract(workbook)
}
