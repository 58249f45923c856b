//! ec-reference - Eternity Challenge split reference
//!
//! A curated spreadsheet records, for every Eternity Challenge completion,
//! the time studies to buy. This crate extracts that sheet once into a
//! frozen table and builds the challenge model from it.
//!
//! # Pipeline
//!
//! - [`workbook`]: sheet values and cell fills (`.xlsx` or in memory)
//! - [`extractor`]: completion rows, skipping hidden study slots
//! - [`writer`]: the generated table module (or a JSON dump)
//! - [`model`]: challenges with resolved TT and inferred splits
//! - [`render`]: terminal view of the model
//!
//! # Example
//!
//! ```
//! use ec_reference::model::{challenges, DimensionSplit};
//!
//! let challenges = challenges()?;
//! assert_eq!(challenges.len(), 12);
//!
//! let ec1 = &challenges[0];
//! assert_eq!(ec1.completions[0].dimension_split, DimensionSplit::Infinity);
//! # Ok::<(), ec_reference::error::EcError>(())
//! ```

pub mod cli;
pub mod data;
pub mod error;
pub mod extractor;
pub mod layout;
pub mod logging;
pub mod model;
pub mod render;
pub mod workbook;
pub mod writer;

// Re-export commonly used types
pub use error::{EcError, EcResult};
pub use extractor::{ExtractedCompletion, Extractor};
pub use layout::SheetLayout;
pub use model::{Challenge, Completion, DimensionSplit, PaceSplit, RawCompletion};
