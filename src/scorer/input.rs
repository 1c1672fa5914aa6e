use crate::error::{JudgeError, JudgeResult};

/// Parses a raw numeric edit as a non-negative decimal.
///
/// Either `.` or `,` is accepted as the fractional separator, at most once.
/// A trailing separator reads as `.0`. Empty text, a bare separator, signs
/// and any other character are rejected.
pub fn parse_score_input(raw: &str) -> JudgeResult<f64> {
    let text = raw.trim();
    let invalid = || JudgeError::InvalidInput(format!("'{}'", raw));

    if text.is_empty() {
        return Err(invalid());
    }

    let mut separators = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => {}
            '.' | ',' => separators += 1,
            _ => return Err(invalid()),
        }
    }
    if separators > 1 {
        return Err(invalid());
    }

    let mut normalized = text.replace(',', ".");
    if normalized == "." {
        return Err(invalid());
    }
    if normalized.ends_with('.') {
        normalized.push('0');
    }
    if normalized.starts_with('.') {
        normalized.insert(0, '0');
    }

    normalized.parse::<f64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_and_comma_decimals() {
        assert_eq!(parse_score_input("1.2").unwrap(), 1.2);
        assert_eq!(parse_score_input("1,2").unwrap(), 1.2);
        assert_eq!(parse_score_input(" 7 ").unwrap(), 7.0);
        assert_eq!(parse_score_input(".5").unwrap(), 0.5);
    }

    #[test]
    fn test_trailing_separator_reads_as_zero_fraction() {
        assert_eq!(parse_score_input("3.").unwrap(), 3.0);
        assert_eq!(parse_score_input("3,").unwrap(), 3.0);
    }

    #[test]
    fn test_rejects_invalid_text() {
        for raw in ["", "   ", ".", ",", "1.2.3", "1,2.3", "-1", "+1", "abc", "1e3", "1 2"] {
            assert!(
                matches!(parse_score_input(raw), Err(JudgeError::InvalidInput(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }
}
