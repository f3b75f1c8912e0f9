// ---------------------------------------------------------------------------
// Core error taxonomy
// ---------------------------------------------------------------------------

/// Failures of the classification core.
///
/// "No shifts in the input" and "no reference rule matched" are ordinary
/// analysis outcomes and never show up here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// The modality identifier is not one the reference table knows.
    #[error("Unknown modality: {0}")]
    UnknownModality(String),

    /// A numeral token extracted from the input could not be converted.
    #[error("Could not convert shift token '{token}' to a number")]
    Parse { token: String },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
