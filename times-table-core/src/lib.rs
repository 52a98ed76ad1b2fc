//! Times Table Core Library
//!
//! Provides the toolkit-independent logic of the multiplication table page:
//! - Input parsing and validation (Validation Service)
//! - Table model construction (Table Builder)
//! - Row/column hover highlighting (Highlight)
//! - Submit / reset flow against an abstract page surface (Page Service)
//!
//! The UI layer is abstracted through the [`PageSurface`] trait, so the same
//! flow drives the terminal front end and the tests.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreResult, ValidationErrors, ValidationIssue};
pub use services::{build_table, highlight_for, page_service, validate, HoverState};
pub use traits::PageSurface;
pub use types::{
    CellKind, CellMarks, CellPosition, Highlight, NormalizedBounds, ParsedBounds, RawInput,
    TableCell, TableDimensions, TableModel, TableRow, MAX_BOUND, MAX_CELLS, MIN_BOUND,
};
