//! 乘法表构建

use crate::types::{CellKind, NormalizedBounds, TableCell, TableModel, TableRow};

/// Build the ordered table record for validated bounds.
///
/// The header row is the corner followed by one header per column value, left
/// to right ascending. Each body row starts with its row value followed by one
/// product per column.
pub fn build_table(bounds: &NormalizedBounds) -> TableModel {
    let dims = bounds.dimensions();

    let mut header = Vec::with_capacity(dims.columns + 1);
    header.push(TableCell::corner());
    header.extend(
        bounds
            .columns()
            .map(|x| TableCell::new(CellKind::ColumnHeader, x)),
    );

    let body_rows = bounds
        .rows()
        .map(|y| {
            let mut cells = Vec::with_capacity(dims.columns + 1);
            cells.push(TableCell::new(CellKind::RowHeader, y));
            cells.extend(
                bounds
                    .columns()
                    .map(|x| TableCell::new(CellKind::Data, x * y)),
            );
            TableRow { cells }
        })
        .collect();

    log::debug!(
        "Built {} x {} table for {bounds:?}",
        dims.rows,
        dims.columns
    );

    TableModel {
        bounds: *bounds,
        header_row: TableRow { cells: header },
        body_rows,
    }
}
