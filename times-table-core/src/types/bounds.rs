//! 归一化后的表格边界

use serde::Serialize;

use super::TableDimensions;

/// Smallest accepted bound
pub const MIN_BOUND: i64 = -50;

/// Largest accepted bound
pub const MAX_BOUND: i64 = 50;

/// Upper limit on rows × columns of a generated table
pub const MAX_CELLS: i128 = 100_000;

/// Validated bounds with `horizontal_start <= horizontal_end` and
/// `vertical_start <= vertical_end`.
///
/// Only the validation service constructs these, so every instance is known
/// to describe a non-empty table within `MAX_CELLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBounds {
    horizontal_start: i64,
    horizontal_end: i64,
    vertical_start: i64,
    vertical_end: i64,
}

impl NormalizedBounds {
    pub(crate) fn new(
        horizontal_start: i64,
        horizontal_end: i64,
        vertical_start: i64,
        vertical_end: i64,
    ) -> Self {
        debug_assert!(horizontal_start <= horizontal_end);
        debug_assert!(vertical_start <= vertical_end);
        Self {
            horizontal_start,
            horizontal_end,
            vertical_start,
            vertical_end,
        }
    }

    pub fn horizontal_start(&self) -> i64 {
        self.horizontal_start
    }

    pub fn horizontal_end(&self) -> i64 {
        self.horizontal_end
    }

    pub fn vertical_start(&self) -> i64 {
        self.vertical_start
    }

    pub fn vertical_end(&self) -> i64 {
        self.vertical_end
    }

    /// Column values, left to right
    pub fn columns(&self) -> std::ops::RangeInclusive<i64> {
        self.horizontal_start..=self.horizontal_end
    }

    /// Row values, top to bottom
    pub fn rows(&self) -> std::ops::RangeInclusive<i64> {
        self.vertical_start..=self.vertical_end
    }

    /// Body rows × data columns
    pub fn dimensions(&self) -> TableDimensions {
        TableDimensions {
            rows: span(self.vertical_start, self.vertical_end),
            columns: span(self.horizontal_start, self.horizontal_end),
        }
    }
}

fn span(start: i64, end: i64) -> usize {
    usize::try_from(end - start + 1).unwrap_or(0)
}
