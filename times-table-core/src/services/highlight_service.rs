//! 行列悬停高亮
//!
//! 高亮计算是纯函数；UI 层在指针进入单元格时调用 [`HoverState::pointer_enter`]，
//! 离开时调用 [`HoverState::pointer_leave`]，再按 [`HoverState::marks`] 给单元格着色。

use crate::types::{CellMarks, CellPosition, Highlight, TableDimensions};

/// Highlight for hovering `position`.
///
/// Header row cells and first column cells produce no highlight, nor do
/// positions outside the table.
pub fn highlight_for(position: CellPosition, dimensions: TableDimensions) -> Option<Highlight> {
    if position.is_header_row() || position.is_first_column() || !dimensions.contains(position) {
        return None;
    }
    Some(Highlight {
        row: position.row,
        column: position.column,
    })
}

/// Highlight currently applied to a rendered table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    active: Option<Highlight>,
    hovered: Option<CellPosition>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered `position`. Guarded cells leave the state untouched.
    pub fn pointer_enter(&mut self, position: CellPosition, dimensions: TableDimensions) {
        self.hovered = Some(position);
        if let Some(highlight) = highlight_for(position, dimensions) {
            self.active = Some(highlight);
        }
    }

    /// Pointer left a cell: every marker is cleared, whichever cell it was
    pub fn pointer_leave(&mut self) {
        self.active = None;
        self.hovered = None;
    }

    /// Cell under the pointer, guarded cells included
    pub fn hovered(&self) -> Option<CellPosition> {
        self.hovered
    }

    /// Table-level "column hovering" marker
    pub fn is_column_hovering(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<Highlight> {
        self.active
    }

    /// Markers for `position`
    pub fn marks(&self, position: CellPosition) -> CellMarks {
        self.active
            .map(|h| h.marks(position))
            .unwrap_or_default()
    }
}
