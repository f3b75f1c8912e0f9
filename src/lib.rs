//! Functional-group suggestions for NMR chemical shifts.
//!
//! ```
//! use nmr_helper::{analyze, Modality, ShiftRecord};
//!
//! let result = analyze("9.5, 50", Modality::Proton).unwrap();
//! assert!(matches!(result.records()[0], ShiftRecord::Matched { .. }));
//! assert!(matches!(result.records()[1], ShiftRecord::Unmatched { .. }));
//! ```

pub mod data;
pub mod error;

pub use data::engine::{analyze, AnalysisEngine};
pub use data::model::{
    AnalysisResult, MatchRule, Modality, ReferenceEntry, ShiftRecord, ShiftValue, POINT_TOLERANCE,
};
pub use data::parse::parse_shifts;
pub use data::reference::{ReferenceTable, REFERENCE_VERSION};
pub use data::render::{render_summary, render_text};
pub use error::AnalysisError;
