use super::model::{AnalysisResult, Modality, ShiftRecord};
use super::parse::parse_shifts;
use super::reference::{labels_matching, ReferenceTable};
use crate::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// AnalysisEngine – text + modality → AnalysisResult
// ---------------------------------------------------------------------------

/// Stateless classifier over a borrowed, read-only [`ReferenceTable`].
///
/// Cheap to copy; any number of engines may share one table across threads.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisEngine<'t> {
    table: &'t ReferenceTable,
}

impl Default for AnalysisEngine<'static> {
    fn default() -> Self {
        Self::new(ReferenceTable::builtin())
    }
}

impl<'t> AnalysisEngine<'t> {
    pub fn new(table: &'t ReferenceTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t ReferenceTable {
        self.table
    }

    /// Parse `text` and classify every shift against `modality`.
    ///
    /// Input with no usable numerals yields [`AnalysisResult::NoValidShifts`];
    /// the only error is an unknown modality.
    pub fn analyze(&self, text: &str, modality: Modality) -> Result<AnalysisResult> {
        let entries = self.table.lookup(modality)?;

        let shifts = match parse_shifts(text) {
            Ok(shifts) => shifts,
            Err(e @ AnalysisError::Parse { .. }) => {
                log::warn!("Discarding unparsable input: {e}");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        if shifts.is_empty() {
            log::debug!("No valid shifts in input for {modality}");
            return Ok(AnalysisResult::NoValidShifts);
        }

        let records: Vec<ShiftRecord> = shifts
            .into_iter()
            .map(|shift| {
                let labels = labels_matching(entries, shift);
                if labels.is_empty() {
                    ShiftRecord::Unmatched { shift }
                } else {
                    ShiftRecord::Matched { shift, labels }
                }
            })
            .collect();

        log::debug!(
            "Analyzed {} shifts against {modality} (table {}): {} matched",
            records.len(),
            self.table.version(),
            records
                .iter()
                .filter(|r| matches!(r, ShiftRecord::Matched { .. }))
                .count()
        );

        Ok(AnalysisResult::Shifts { records })
    }
}

/// Analyze `text` against the built-in reference table.
pub fn analyze(text: &str, modality: Modality) -> Result<AnalysisResult> {
    AnalysisEngine::default().analyze(text, modality)
}
