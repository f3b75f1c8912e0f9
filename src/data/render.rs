use super::model::{AnalysisResult, ShiftRecord, ShiftValue};

pub const NO_VALID_SHIFTS: &str = "No valid shifts found in input.";
pub const NO_ASSIGNMENTS: &str = "No common assignments found";

/// Shift as printed in reports: shortest round-trip decimal, never in
/// exponent form, always with a fractional part (`50.0`, `7.26`).
pub fn format_shift(shift: ShiftValue) -> String {
    let text = shift.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

/// Block layout shown in the result panel:
///
/// ```text
/// [7.26 ppm]
/// Possible assignments:
/// > Aromatic (Ar-H)
/// > Chloroform-d (CDCl3)
///
/// [50.0 ppm]
/// No common assignments found
///
/// ```
pub fn render_text(result: &AnalysisResult) -> String {
    let records = match result {
        AnalysisResult::NoValidShifts => return NO_VALID_SHIFTS.to_string(),
        AnalysisResult::Shifts { records } => records,
    };

    let mut out = String::new();
    for record in records {
        out.push_str(&format!("[{} ppm]\n", format_shift(record.shift())));
        match record {
            ShiftRecord::Matched { labels, .. } => {
                out.push_str("Possible assignments:\n");
                for label in labels {
                    out.push_str(&format!("> {label}\n"));
                }
            }
            ShiftRecord::Unmatched { .. } => {
                out.push_str(NO_ASSIGNMENTS);
                out.push('\n');
            }
        }
        out.push('\n');
    }
    out
}

/// One line per shift: `7.26 ppm: Possible assignments - a, b`.
pub fn render_summary(result: &AnalysisResult) -> String {
    match result {
        AnalysisResult::NoValidShifts => NO_VALID_SHIFTS.to_string(),
        AnalysisResult::Shifts { records } => records
            .iter()
            .map(|record| match record {
                ShiftRecord::Matched { shift, labels } => format!(
                    "{} ppm: Possible assignments - {}",
                    format_shift(*shift),
                    labels.join(", ")
                ),
                ShiftRecord::Unmatched { shift } => {
                    format!("{} ppm: {NO_ASSIGNMENTS}", format_shift(*shift))
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult::Shifts {
            records: vec![
                ShiftRecord::Matched {
                    shift: 9.5,
                    labels: vec!["Aldehyde (R-CHO)".to_string(), "Other".to_string()],
                },
                ShiftRecord::Unmatched { shift: 50.0 },
            ],
        }
    }

    #[test]
    fn shifts_always_show_a_fraction() {
        assert_eq!(format_shift(50.0), "50.0");
        assert_eq!(format_shift(7.26), "7.26");
        assert_eq!(format_shift(0.9), "0.9");
    }

    #[test]
    fn extreme_shifts_never_use_exponents() {
        assert_eq!(format_shift(1e16), "10000000000000000.0");
        assert_eq!(format_shift(0.00001), "0.00001");
        assert_eq!(
            render_summary(&AnalysisResult::Shifts {
                records: vec![ShiftRecord::Unmatched { shift: 1e16 }],
            }),
            "10000000000000000.0 ppm: No common assignments found"
        );
    }

    #[test]
    fn text_blocks_are_separated_by_blank_lines() {
        let expected = "[9.5 ppm]\n\
                        Possible assignments:\n\
                        > Aldehyde (R-CHO)\n\
                        > Other\n\
                        \n\
                        [50.0 ppm]\n\
                        No common assignments found\n\
                        \n";
        assert_eq!(render_text(&sample()), expected);
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn sentinel_renders_a_single_line() {
        assert_eq!(render_text(&AnalysisResult::NoValidShifts), NO_VALID_SHIFTS);
        assert_eq!(render_summary(&AnalysisResult::NoValidShifts), NO_VALID_SHIFTS);
    }

    #[test]
    fn summary_is_one_line_per_shift() {
        assert_eq!(
            render_summary(&sample()),
            "9.5 ppm: Possible assignments - Aldehyde (R-CHO), Other\n\
             50.0 ppm: No common assignments found"
        );
    }
}
