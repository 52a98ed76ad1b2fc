//! Table model handed to the rendering adapter

use serde::Serialize;

use super::NormalizedBounds;

/// Label of the top-left cell
pub const CORNER_LABEL: &str = "x";

/// What a cell represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellKind {
    /// Top-left cell of the header row
    Corner,
    /// Header row cell holding a column value
    ColumnHeader,
    /// First cell of a body row holding the row value
    RowHeader,
    /// Product of its row and column values
    Data,
}

impl CellKind {
    /// Header cells are everything but data cells
    pub fn is_header(self) -> bool {
        !matches!(self, Self::Data)
    }
}

/// One cell of the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub kind: CellKind,
    /// Decimal text shown in the cell
    pub label: String,
    /// Numeric value, `None` only for the corner
    pub value: Option<i64>,
}

impl TableCell {
    pub(crate) fn new(kind: CellKind, value: i64) -> Self {
        Self {
            kind,
            label: value.to_string(),
            value: Some(value),
        }
    }

    pub(crate) fn corner() -> Self {
        Self {
            kind: CellKind::Corner,
            label: CORNER_LABEL.to_string(),
            value: None,
        }
    }
}

/// One row of cells, left to right
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// Position of a cell inside the rendered table.
///
/// `row` 0 is the header row, body rows are `1..=rows`.
/// `column` is 1-based within the row: column 1 holds the corner or the row
/// header, data columns are `2..=columns + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellPosition {
    pub row: usize,
    pub column: usize,
}

impl CellPosition {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// In the header row
    pub fn is_header_row(&self) -> bool {
        self.row == 0
    }

    /// In the corner / row header column
    pub fn is_first_column(&self) -> bool {
        self.column == 1
    }
}

/// Size of the table body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableDimensions {
    /// Body rows (header row excluded)
    pub rows: usize,
    /// Data columns (row header column excluded)
    pub columns: usize,
}

impl TableDimensions {
    /// Number of data cells
    pub fn cells(&self) -> usize {
        self.rows * self.columns
    }

    /// Whether `position` addresses a cell of the rendered table
    pub fn contains(&self, position: CellPosition) -> bool {
        position.row <= self.rows && (1..=self.columns + 1).contains(&position.column)
    }
}

/// The complete multiplication table as an ordered nested record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableModel {
    pub(crate) bounds: NormalizedBounds,
    pub(crate) header_row: TableRow,
    pub(crate) body_rows: Vec<TableRow>,
}

impl TableModel {
    pub fn bounds(&self) -> &NormalizedBounds {
        &self.bounds
    }

    pub fn dimensions(&self) -> TableDimensions {
        self.bounds.dimensions()
    }

    pub fn header_row(&self) -> &TableRow {
        &self.header_row
    }

    pub fn body_rows(&self) -> &[TableRow] {
        &self.body_rows
    }

    /// Header row followed by body rows
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        std::iter::once(&self.header_row).chain(self.body_rows.iter())
    }

    /// Look up a cell by its position
    pub fn cell(&self, position: CellPosition) -> Option<&TableCell> {
        let row = if position.row == 0 {
            &self.header_row
        } else {
            self.body_rows.get(position.row - 1)?
        };
        row.cells.get(position.column.checked_sub(1)?)
    }

    /// Widest label in the table, in characters
    pub fn max_label_len(&self) -> usize {
        self.rows()
            .flat_map(|row| row.cells.iter())
            .map(|cell| cell.label.chars().count())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_position_guards() {
        assert!(CellPosition::new(0, 3).is_header_row());
        assert!(CellPosition::new(2, 1).is_first_column());
        assert!(!CellPosition::new(2, 2).is_first_column());
    }

    #[test]
    fn test_dimensions_contains() {
        let dims = TableDimensions { rows: 2, columns: 3 };
        assert_eq!(dims.cells(), 6);
        assert!(dims.contains(CellPosition::new(0, 1)));
        assert!(dims.contains(CellPosition::new(2, 4)));
        assert!(!dims.contains(CellPosition::new(3, 2)));
        assert!(!dims.contains(CellPosition::new(1, 5)));
        assert!(!dims.contains(CellPosition::new(1, 0)));
    }
}
