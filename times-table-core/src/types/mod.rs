//! 类型定义模块

mod bounds;
mod highlight;
mod input;
mod table;

pub use bounds::{NormalizedBounds, MAX_BOUND, MAX_CELLS, MIN_BOUND};
pub use highlight::{CellMarks, Highlight};
pub use input::{parse_int, ParsedBounds, RawInput};
pub use table::{CellKind, CellPosition, TableCell, TableDimensions, TableModel, TableRow};
