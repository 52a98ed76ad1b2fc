//! Submit / reset flow of the table page

use crate::error::CoreResult;
use crate::services::{build_table, validate};
use crate::traits::PageSurface;
use crate::types::TableDimensions;

/// Handle a form submission.
///
/// The previous errors and table are cleared first. On invalid input the joined
/// messages are shown and nothing is mounted; otherwise the new table is
/// mounted and its dimensions returned.
pub fn submit<S: PageSurface + ?Sized>(surface: &mut S) -> CoreResult<TableDimensions> {
    surface.clear_errors();
    surface.unmount_table();

    let input = surface.read_input();
    match validate(&input) {
        Ok(bounds) => {
            let table = build_table(&bounds);
            let dimensions = table.dimensions();
            surface.mount_table(table);
            log::info!(
                "Mounted {} x {} table",
                dimensions.rows,
                dimensions.columns
            );
            Ok(dimensions)
        }
        Err(errors) => {
            surface.show_errors(&errors.to_string());
            log::warn!("Validation failed: {errors}");
            Err(errors)
        }
    }
}

/// Reset the page: empty inputs, no errors, no table
pub fn reset<S: PageSurface + ?Sized>(surface: &mut S) {
    surface.clear_inputs();
    surface.clear_errors();
    surface.unmount_table();
    log::info!("Page reset");
}
