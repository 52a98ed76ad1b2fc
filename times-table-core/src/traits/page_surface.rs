//! Page surface abstraction

use crate::types::{RawInput, TableModel};

/// The page the table lives on: four inputs, an error region and the mount
/// point for the generated table.
///
/// Implemented by the UI layer; only [`crate::page_service`] drives it.
pub trait PageSurface {
    /// Current text of the four inputs
    fn read_input(&self) -> RawInput;

    /// Set all four inputs to empty strings
    fn clear_inputs(&mut self);

    /// Replace the error region text
    fn show_errors(&mut self, text: &str);

    /// Empty the error region
    fn clear_errors(&mut self);

    /// Replace whatever is mounted with `table`
    fn mount_table(&mut self, table: TableModel);

    /// Remove the mounted table, if any
    fn unmount_table(&mut self);
}
