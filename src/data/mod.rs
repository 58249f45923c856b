//! Frozen completion table
//!
//! `table.rs` is regenerated by `ec-ref extract` from the curated spreadsheet
//! and checked in, so building the model never needs the workbook.

mod table;

pub use table::RAW_COMPLETIONS;
