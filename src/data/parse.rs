use std::sync::LazyLock;

use regex::Regex;

use super::model::ShiftValue;
use crate::error::{AnalysisError, Result};

/// Unsigned decimal numeral: digits, optionally `.` and more digits.
const NUMERAL_PATTERN: &str = r"\d+(?:\.\d+)?";

static NUMERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMERAL_PATTERN).expect("valid regex"));

static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Free-form text → shift values
// ---------------------------------------------------------------------------

/// Extract every numeral token from `text`, in order.
///
/// Newlines and commas act as plain separators; any other non-numeral text
/// (units, letters, stray symbols) is skipped. Digits from any script count
/// (`٣.٥` is 3.5). Conversion is all-or-nothing: one bad token fails the
/// whole parse with [`AnalysisError::Parse`].
pub fn parse_shifts(text: &str) -> Result<Vec<ShiftValue>> {
    let normalized = text.replace(['\n', ','], " ");

    NUMERAL_RE
        .find_iter(&normalized)
        .map(|m| {
            to_ascii_numeral(m.as_str())
                .and_then(|ascii| ascii.parse::<ShiftValue>().ok())
                .ok_or_else(|| AnalysisError::Parse {
                    token: m.as_str().to_string(),
                })
        })
        .collect()
}

/// Rewrite a numeral token with ASCII digits, keeping the decimal point.
fn to_ascii_numeral(token: &str) -> Option<String> {
    token
        .chars()
        .map(|c| match c {
            '.' => Some('.'),
            _ => decimal_value(c).and_then(|d| char::from_digit(d, 10)),
        })
        .collect()
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// Value of a Unicode decimal digit.
///
/// Decimal digits are encoded as contiguous zero-to-nine runs, so the value
/// is the distance to the start of the run, modulo ten.
fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::render::format_shift;

    #[test]
    fn comma_and_newline_are_equivalent() {
        assert_eq!(parse_shifts("0.9, 3.8").unwrap(), vec![0.9, 3.8]);
        assert_eq!(parse_shifts("0.9\n3.8").unwrap(), vec![0.9, 3.8]);
        assert_eq!(parse_shifts("0.9\r\n3.8,\n7.26").unwrap(), vec![0.9, 3.8, 7.26]);
    }

    #[test]
    fn text_without_numerals_is_empty() {
        assert!(parse_shifts("abc").unwrap().is_empty());
        assert!(parse_shifts("").unwrap().is_empty());
        assert!(parse_shifts(" ,\n, ").unwrap().is_empty());
    }

    #[test]
    fn surrounding_noise_is_skipped() {
        assert_eq!(
            parse_shifts("δ 7.26 ppm (s, 1H); 2.5ppm").unwrap(),
            vec![7.26, 1.0, 2.5]
        );
    }

    #[test]
    fn signs_exponents_and_leading_dots_are_not_part_of_a_token() {
        assert_eq!(parse_shifts("-1.5").unwrap(), vec![1.5]);
        assert_eq!(parse_shifts(".5").unwrap(), vec![5.0]);
        assert_eq!(parse_shifts("1e3").unwrap(), vec![1.0, 3.0]);
        assert_eq!(parse_shifts("3.").unwrap(), vec![3.0]);
        assert_eq!(parse_shifts("1.2.3").unwrap(), vec![1.2, 3.0]);
    }

    #[test]
    fn comma_splits_a_european_decimal() {
        assert_eq!(parse_shifts("1,5").unwrap(), vec![1.0, 5.0]);
    }

    #[test]
    fn input_order_is_kept() {
        assert_eq!(parse_shifts("9.5 1.0 4.2").unwrap(), vec![9.5, 1.0, 4.2]);
    }

    #[test]
    fn reparsing_rendered_values_is_stable() {
        let first =
            parse_shifts("0.9, 3.8\n7.26 50 128.5 10000000000000000 0.00001").unwrap();
        let rendered: Vec<String> = first.iter().map(|v| format_shift(*v)).collect();
        let second = parse_shifts(&rendered.join(", ")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn digits_from_other_scripts_are_converted() {
        assert_eq!(parse_shifts("1.5, ٣.٥, 2.0").unwrap(), vec![1.5, 3.5, 2.0]);
        assert_eq!(parse_shifts("۷.۲۶").unwrap(), vec![7.26]);
        assert_eq!(parse_shifts("１２.５").unwrap(), vec![12.5]);
        assert_eq!(parse_shifts("९").unwrap(), vec![9.0]);
    }

    #[test]
    fn adjacent_digit_runs_resolve_per_run() {
        // Mathematical bold seven, then double-struck nine from the next run.
        assert_eq!(parse_shifts("\u{1D7D5} \u{1D7E1}").unwrap(), vec![7.0, 9.0]);
    }

    #[test]
    fn decimal_value_rejects_non_digits() {
        assert_eq!(decimal_value('x'), None);
        assert_eq!(decimal_value('.'), None);
        assert_eq!(decimal_value('٠'), Some(0));
        assert_eq!(to_ascii_numeral("٣.٥").as_deref(), Some("3.5"));
    }
}
