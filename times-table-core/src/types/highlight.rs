//! 悬停高亮类型

use serde::Serialize;

use super::{CellPosition, TableDimensions};

/// Markers applied to one cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellMarks {
    /// Shares the hovered column (body rows only)
    pub column_hover: bool,
    /// Belongs to the hovered row
    pub row_hover: bool,
}

impl CellMarks {
    pub fn any(&self) -> bool {
        self.column_hover || self.row_hover
    }
}

/// Highlight produced by hovering a body data cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    /// Hovered body row (1-based, never the header row)
    pub row: usize,
    /// Hovered column (1-based, never the first column)
    pub column: usize,
}

impl Highlight {
    /// Markers for `position`
    pub fn marks(&self, position: CellPosition) -> CellMarks {
        CellMarks {
            column_hover: !position.is_header_row() && position.column == self.column,
            row_hover: position.row == self.row,
        }
    }

    /// Every marked position: the hovered column across all body rows, then
    /// the rest of the hovered row.
    pub fn cells(&self, dimensions: TableDimensions) -> Vec<CellPosition> {
        let column = (1..=dimensions.rows).map(|row| CellPosition::new(row, self.column));
        let row = (1..=dimensions.columns + 1)
            .filter(|&c| c != self.column)
            .map(|c| CellPosition::new(self.row, c));
        column.chain(row).collect()
    }
}
