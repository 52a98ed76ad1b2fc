//! Unified error type definition

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A single user input problem found while validating the four bounds.
///
/// The `Display` output of each variant is the exact message shown to the user.
/// Variants are declared in the order the checks run, which is also the order
/// the messages appear in.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ValidationIssue {
    /// At least one field did not parse to an integer
    #[error("All four values must be real numbers.")]
    NonNumericInput,

    /// At least one field lies outside `[MIN_BOUND, MAX_BOUND]` (the sentinel included)
    #[error("Values must be between -50 and 50 (INCLUSIVE).")]
    OutOfRange,

    /// The normalized ranges give zero rows or columns
    #[error("Ranges must produce at least one row and one column.")]
    EmptyRange,

    /// The table would exceed `MAX_CELLS`
    #[error("Table too large ({cells}). Please reduce the range.")]
    TooLarge { cells: i128 },
}

/// Ordered, non-empty collection of validation issues.
///
/// `Display` joins every message with a single space, which is the text the
/// error region shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    /// Wrap the collected issues. Returns `None` when nothing was found.
    #[must_use]
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self { issues })
        }
    }

    /// A single issue
    #[must_use]
    pub fn single(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// Issues in check order
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Whether a specific kind of issue was reported
    #[must_use]
    pub fn contains(&self, issue: &ValidationIssue) -> bool {
        self.issues.contains(issue)
    }

    /// One message per issue, in check order
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, ValidationErrors>;
