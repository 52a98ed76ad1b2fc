//! 输入校验与归一化

use crate::error::{CoreResult, ValidationErrors, ValidationIssue};
use crate::types::{NormalizedBounds, RawInput, MAX_BOUND, MAX_CELLS, MIN_BOUND};

/// Validate the four raw fields and normalize their order.
///
/// Every check runs, so all applicable messages surface together, in this
/// order: non-numeric, out of range, empty range, too large. Each pair is
/// swapped into ascending order when both members parsed.
pub fn validate(input: &RawInput) -> CoreResult<NormalizedBounds> {
    let parsed = input.parse();
    let mut issues = Vec::new();

    if parsed.values().iter().any(Option::is_none) {
        issues.push(ValidationIssue::NonNumericInput);
    }

    // 非数字字段同样视为越界，与数字校验的提示一并给出
    if !parsed.values().iter().all(|v| v.is_some_and(in_range)) {
        issues.push(ValidationIssue::OutOfRange);
    }

    let (hs, he) = ordered(parsed.horizontal_start, parsed.horizontal_end);
    let (vs, ve) = ordered(parsed.vertical_start, parsed.vertical_end);

    let cells = span(vs, ve).saturating_mul(span(hs, he));
    if cells <= 0 {
        issues.push(ValidationIssue::EmptyRange);
    }
    if cells > MAX_CELLS {
        issues.push(ValidationIssue::TooLarge { cells });
    }

    let bounds = match (hs, he, vs, ve) {
        (Some(hs), Some(he), Some(vs), Some(ve)) => Some(NormalizedBounds::new(hs, he, vs, ve)),
        _ => None,
    };

    match (ValidationErrors::from_issues(issues), bounds) {
        (None, Some(bounds)) => {
            log::debug!("Accepted bounds {bounds:?}");
            Ok(bounds)
        }
        (Some(errors), _) => {
            log::debug!("Rejected input {input:?}: {errors}");
            Err(errors)
        }
        // 字段缺失时必然已记录 NonNumericInput
        (None, None) => Err(ValidationErrors::single(ValidationIssue::NonNumericInput)),
    }
}

fn in_range(value: i64) -> bool {
    (MIN_BOUND..=MAX_BOUND).contains(&value)
}

/// Swap into ascending order when both ends are numbers
fn ordered(start: Option<i64>, end: Option<i64>) -> (Option<i64>, Option<i64>) {
    match (start, end) {
        (Some(s), Some(e)) if s > e => (Some(e), Some(s)),
        other => other,
    }
}

/// Inclusive length of a range, 0 when either end is missing
fn span(start: Option<i64>, end: Option<i64>) -> i128 {
    match (start, end) {
        (Some(s), Some(e)) => i128::from(e) - i128::from(s) + 1,
        _ => 0,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn input(hs: &str, he: &str, vs: &str, ve: &str) -> RawInput {
        RawInput::new(hs, he, vs, ve)
    }

    #[test]
    fn test_validate_accepts_valid_bounds() {
        let bounds = validate(&input("1", "10", "2", "5")).unwrap();
        assert_eq!(bounds.horizontal_start(), 1);
        assert_eq!(bounds.horizontal_end(), 10);
        assert_eq!(bounds.vertical_start(), 2);
        assert_eq!(bounds.vertical_end(), 5);
        assert_eq!(bounds.dimensions().rows, 4);
        assert_eq!(bounds.dimensions().columns, 10);
    }

    #[test]
    fn test_validate_swaps_each_pair_independently() {
        let bounds = validate(&input("5", "-5", "0", "3")).unwrap();
        assert_eq!(bounds.columns(), -5..=5);
        assert_eq!(bounds.rows(), 0..=3);

        let bounds = validate(&input("1", "2", "9", "-9")).unwrap();
        assert_eq!(bounds.columns(), 1..=2);
        assert_eq!(bounds.rows(), -9..=9);
    }

    #[test]
    fn test_validate_single_cell() {
        let bounds = validate(&input("0", "0", "0", "0")).unwrap();
        assert_eq!(bounds.dimensions().cells(), 1);
    }

    #[test]
    fn test_validate_inclusive_limits() {
        let bounds = validate(&input("-50", "50", "-50", "50")).unwrap();
        assert_eq!(bounds.dimensions().cells(), 10_201);
    }

    #[test]
    fn test_validate_out_of_range_only() {
        let errors = validate(&input("51", "0", "0", "0")).unwrap_err();
        assert_eq!(errors.issues(), &[ValidationIssue::OutOfRange]);
        assert!(errors.to_string().contains("between -50 and 50"));
    }

    #[test]
    fn test_validate_non_numeric_compounds_messages() {
        let errors = validate(&input("", "5", "0", "0")).unwrap_err();
        assert_eq!(
            errors.issues(),
            &[
                ValidationIssue::NonNumericInput,
                ValidationIssue::OutOfRange,
                ValidationIssue::EmptyRange,
            ]
        );
    }

    #[test]
    fn test_validate_unswapped_pair_with_missing_member() {
        // 垂直方向完好，但水平方向缺一个值 → 列数为 0
        let errors = validate(&input("9", "abc", "3", "1")).unwrap_err();
        assert_eq!(
            errors.issues(),
            &[
                ValidationIssue::NonNumericInput,
                ValidationIssue::OutOfRange,
                ValidationIssue::EmptyRange,
            ]
        );
    }

    #[test]
    fn test_validate_too_large_reports_cell_count() {
        let errors = validate(&input("-1000", "1000", "-1000", "1000")).unwrap_err();
        assert_eq!(
            errors.issues(),
            &[
                ValidationIssue::OutOfRange,
                ValidationIssue::TooLarge { cells: 4_004_001 },
            ]
        );
        assert!(errors
            .to_string()
            .ends_with("Table too large (4004001). Please reduce the range."));
    }

    #[test]
    fn test_validate_wide_but_small_table_is_only_out_of_range() {
        // 201 × 1 单元格，不超过上限
        let errors = validate(&input("-100", "100", "0", "0")).unwrap_err();
        assert_eq!(errors.issues(), &[ValidationIssue::OutOfRange]);
    }

    #[test]
    fn test_validate_saturated_values_do_not_overflow() {
        let errors = validate(&input(
            "-99999999999999999999",
            "99999999999999999999",
            "-99999999999999999999",
            "99999999999999999999",
        ))
        .unwrap_err();
        assert!(errors.contains(&ValidationIssue::OutOfRange));
        assert!(matches!(
            errors.issues().last(),
            Some(ValidationIssue::TooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_all_empty() {
        let errors = validate(&RawInput::default()).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "All four values must be real numbers. \
             Values must be between -50 and 50 (INCLUSIVE). \
             Ranges must produce at least one row and one column."
        );
    }
}
