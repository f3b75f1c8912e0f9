use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{AnalysisResult, ShiftRecord};
use super::render::{format_shift, render_text};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Write one analysis result to `path`.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – tagged result, `{"status": "shifts", "records": [...]}`
/// * `.csv`  – columns `shift`, `status`, `labels` (labels joined with `; `)
/// * `.txt`  – the same block layout as the result panel
pub fn save_result(path: &Path, result: &AnalysisResult) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => save_json(path, result),
        "csv" => save_csv(path, result),
        "txt" => std::fs::write(path, render_text(result)).context("writing text report"),
        other => bail!("Unsupported export extension: .{other}"),
    }
}

/// Read a plain-text or CSV file of shifts so it can be fed to the analyzer.
pub fn load_shift_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("reading shift list {}", path.display()))
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

fn save_json(path: &Path, result: &AnalysisResult) -> Result<()> {
    let text = serde_json::to_string_pretty(result).context("serializing result")?;
    std::fs::write(path, text).context("writing JSON file")
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// The sentinel produces a header-only file.
fn save_csv(path: &Path, result: &AnalysisResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    writer
        .write_record(["shift", "status", "labels"])
        .context("writing CSV header")?;

    for (row, record) in result.records().iter().enumerate() {
        let status = match record {
            ShiftRecord::Matched { .. } => "matched",
            ShiftRecord::Unmatched { .. } => "unmatched",
        };
        let shift = format_shift(record.shift());
        let labels = record.labels().join("; ");
        writer
            .write_record([shift.as_str(), status, labels.as_str()])
            .with_context(|| format!("CSV row {row}"))?;
    }

    writer.flush().context("flushing CSV")?;
    Ok(())
}
