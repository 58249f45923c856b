//! Table artifacts: the generated Rust module and JSON dumps

use crate::error::EcResult;
use crate::extractor::ExtractedCompletion;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Output format of an extracted table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Rust module defining `RAW_COMPLETIONS`
    #[default]
    Rust,
    /// Pretty-printed JSON array
    Json,
}

impl FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(TableFormat::Rust),
            "json" => Ok(TableFormat::Json),
            other => Err(format!("unknown table format '{}' (expected rust or json)", other)),
        }
    }
}

/// Free text as a Rust string literal.
///
/// Newlines become spaces and carriage returns are dropped so every row stays
/// on one line; quotes, backslashes, and other control characters are escaped.
pub fn rust_string_literal(text: &str) -> String {
    let flattened: String = text
        .chars()
        .filter(|c| *c != '\r')
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    format!("{:?}", flattened)
}

/// Render rows as the Rust module compiled into `src/data/table.rs`
pub fn render_rust_table(rows: &[ExtractedCompletion], sheet: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "// @generated by `ec-ref extract` from sheet {}; do not edit by hand.",
        rust_string_literal(sheet)
    );
    out.push('\n');
    out.push_str("use crate::model::RawCompletion;\n\n");
    out.push_str("pub const RAW_COMPLETIONS: &[RawCompletion<'static>] = &[\n");

    for row in rows {
        let studies = row
            .studies
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "    RawCompletion {{ name: {}, notes: {}, ip_req: {}, tt: {}, studies: &[{}] }},",
            rust_string_literal(&row.name),
            rust_string_literal(&row.notes),
            rust_string_literal(&row.ip_req),
            rust_string_literal(&row.tt),
            studies
        );
    }

    out.push_str("];\n");
    out
}

/// Render rows as pretty JSON
pub fn render_json_table(rows: &[ExtractedCompletion]) -> EcResult<String> {
    let mut json = serde_json::to_string_pretty(rows)?;
    json.push('\n');
    Ok(json)
}

/// Render in the requested format
pub fn render_table(
    rows: &[ExtractedCompletion],
    sheet: &str,
    format: TableFormat,
) -> EcResult<String> {
    match format {
        TableFormat::Rust => Ok(render_rust_table(rows, sheet)),
        TableFormat::Json => render_json_table(rows),
    }
}

/// Write a rendered table to disk
pub fn write_table(
    path: &Path,
    rows: &[ExtractedCompletion],
    sheet: &str,
    format: TableFormat,
) -> EcResult<()> {
    let content = render_table(rows, sheet, format)?;
    fs::write(path, content)?;
    Ok(())
}

/// Load rows from a JSON dump written by [`render_json_table`]
pub fn load_json_table(path: &Path) -> EcResult<Vec<ExtractedCompletion>> {
    let content = fs::read_to_string(path)?;
    let rows = serde_json::from_str(&content)?;
    Ok(rows)
}
