//! Raw form input and its parsed form

use serde::{Deserialize, Serialize};

/// The four text fields exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInput {
    pub horizontal_start: String,
    pub horizontal_end: String,
    pub vertical_start: String,
    pub vertical_end: String,
}

impl RawInput {
    /// Build from four string-like values in form order
    pub fn new(
        horizontal_start: impl Into<String>,
        horizontal_end: impl Into<String>,
        vertical_start: impl Into<String>,
        vertical_end: impl Into<String>,
    ) -> Self {
        Self {
            horizontal_start: horizontal_start.into(),
            horizontal_end: horizontal_end.into(),
            vertical_start: vertical_start.into(),
            vertical_end: vertical_end.into(),
        }
    }

    /// Parse every field; unparsable fields become `None`
    #[must_use]
    pub fn parse(&self) -> ParsedBounds {
        ParsedBounds {
            horizontal_start: parse_int(&self.horizontal_start),
            horizontal_end: parse_int(&self.horizontal_end),
            vertical_start: parse_int(&self.vertical_start),
            vertical_end: parse_int(&self.vertical_end),
        }
    }
}

/// Parsed bounds. `None` marks a field that is not a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParsedBounds {
    pub horizontal_start: Option<i64>,
    pub horizontal_end: Option<i64>,
    pub vertical_start: Option<i64>,
    pub vertical_end: Option<i64>,
}

impl ParsedBounds {
    /// Fields in form order
    #[must_use]
    pub fn values(&self) -> [Option<i64>; 4] {
        [
            self.horizontal_start,
            self.horizontal_end,
            self.vertical_start,
            self.vertical_end,
        ]
    }
}

/// Base-10 integer prefix parsing.
///
/// Leading whitespace is skipped, one optional `+`/`-` sign is accepted, then
/// the leading run of ASCII digits is read and anything after it is ignored.
/// Returns `None` when no digit follows. Runs too long for `i64` saturate.
#[must_use]
pub fn parse_int(text: &str) -> Option<i64> {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    // 按符号方向累加，溢出时停在 i64 边界
    let value = digits.iter().fold(0_i64, |acc, &d| {
        if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        }
    });
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_plain() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("+5"), Some(5));
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("-0"), Some(0));
    }

    #[test]
    fn test_parse_int_prefix_semantics() {
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("3.9"), Some(3));
        assert_eq!(parse_int("   7"), Some(7));
        assert_eq!(parse_int("1e3"), Some(1));
        assert_eq!(parse_int("-50 "), Some(-50));
    }

    #[test]
    fn test_parse_int_not_a_number() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("   "), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("+-3"), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("Infinity"), None);
        assert_eq!(parse_int(".5"), None);
    }

    #[test]
    fn test_parse_int_saturates() {
        assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int("-99999999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_raw_input_parse() {
        let parsed = RawInput::new("1", "x", " -3", "").parse();
        assert_eq!(parsed.values(), [Some(1), None, Some(-3), None]);
    }
}
