//! Classification core: reference data, parsing, matching and reporting.
//!
//! Architecture:
//! ```text
//!   free-form text            Modality
//!        │                       │
//!        ▼                       ▼
//!   ┌──────────┐         ┌────────────────┐
//!   │  parse    │         │ ReferenceTable │  compiled, read-only
//!   └──────────┘         └────────────────┘
//!        │  Vec<f64>             │ entries in declaration order
//!        └──────────┬────────────┘
//!                   ▼
//!             ┌──────────┐
//!             │  engine   │  per-shift Matched / Unmatched
//!             └──────────┘
//!                   │ AnalysisResult
//!          ┌────────┴────────┐
//!          ▼                 ▼
//!     ┌──────────┐     ┌──────────┐
//!     │  render   │     │  export   │  .json / .csv / .txt
//!     └──────────┘     └──────────┘
//! ```

pub mod engine;
pub mod export;
pub mod model;
pub mod parse;
pub mod reference;
pub mod render;
