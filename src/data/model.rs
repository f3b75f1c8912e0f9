use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AnalysisError;

/// Half-width of the acceptance band around every [`MatchRule::Point`].
pub const POINT_TOLERANCE: f64 = 0.1;

/// A chemical shift extracted from user input (ppm, not validated).
pub type ShiftValue = f64;

// ---------------------------------------------------------------------------
// Modality – which reference table to classify against
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Modality {
    #[default]
    #[serde(rename = "1H NMR")]
    Proton,
    #[serde(rename = "13C NMR")]
    Carbon13,
    #[serde(rename = "Deuterated Solvent Residuals")]
    SolventResidual,
}

impl Modality {
    pub const ALL: [Modality; 3] = [
        Modality::Proton,
        Modality::Carbon13,
        Modality::SolventResidual,
    ];

    /// Canonical identifier, also used as the UI label.
    pub fn name(self) -> &'static str {
        match self {
            Modality::Proton => "1H NMR",
            Modality::Carbon13 => "13C NMR",
            Modality::SolventResidual => "Deuterated Solvent Residuals",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Modality {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Modality::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| AnalysisError::UnknownModality(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// MatchRule – closed interval or tolerance-banded point
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum MatchRule {
    /// Inclusive on both ends.
    Range { low: f64, high: f64 },
    /// Matches strictly inside `center ± POINT_TOLERANCE`.
    Point { center: f64 },
}

impl MatchRule {
    pub fn matches(&self, shift: ShiftValue) -> bool {
        match *self {
            MatchRule::Range { low, high } => low <= shift && shift <= high,
            MatchRule::Point { center } => (shift - center).abs() < POINT_TOLERANCE,
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchRule::Range { low, high } => write!(f, "{low}–{high} ppm"),
            MatchRule::Point { center } => write!(f, "{center} ± {POINT_TOLERANCE} ppm"),
        }
    }
}

// ---------------------------------------------------------------------------
// ReferenceEntry – one functional-group label and its rule
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceEntry {
    pub label: String,
    #[serde(flatten)]
    pub rule: MatchRule,
}

impl ReferenceEntry {
    pub fn range(label: impl Into<String>, low: f64, high: f64) -> Self {
        debug_assert!(low <= high, "range rule with low > high");
        Self {
            label: label.into(),
            rule: MatchRule::Range { low, high },
        }
    }

    pub fn point(label: impl Into<String>, center: f64) -> Self {
        Self {
            label: label.into(),
            rule: MatchRule::Point { center },
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisResult – what the engine hands back to a front end
// ---------------------------------------------------------------------------

/// Classification of a single parsed shift.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShiftRecord {
    /// Labels are in reference-table declaration order.
    Matched { shift: ShiftValue, labels: Vec<String> },
    Unmatched { shift: ShiftValue },
}

impl ShiftRecord {
    pub fn shift(&self) -> ShiftValue {
        match self {
            ShiftRecord::Matched { shift, .. } | ShiftRecord::Unmatched { shift } => *shift,
        }
    }

    /// Matched labels; empty for an unmatched shift.
    pub fn labels(&self) -> &[String] {
        match self {
            ShiftRecord::Matched { labels, .. } => labels.as_slice(),
            ShiftRecord::Unmatched { .. } => &[],
        }
    }
}

/// Outcome of one `analyze` call.
///
/// `NoValidShifts` is distinct from a list of unmatched records: it means the
/// input held no usable numeral at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisResult {
    NoValidShifts,
    Shifts { records: Vec<ShiftRecord> },
}

impl AnalysisResult {
    /// Records in input order (empty for the sentinel).
    pub fn records(&self) -> &[ShiftRecord] {
        match self {
            AnalysisResult::NoValidShifts => &[],
            AnalysisResult::Shifts { records } => records.as_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Number of shifts that received at least one assignment.
    pub fn matched_count(&self) -> usize {
        self.records()
            .iter()
            .filter(|r| matches!(r, ShiftRecord::Matched { .. }))
            .count()
    }

    /// Parsed shift values in input order.
    pub fn shifts(&self) -> Vec<ShiftValue> {
        self.records().iter().map(ShiftRecord::shift).collect()
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::render::render_text(self))
    }
}
