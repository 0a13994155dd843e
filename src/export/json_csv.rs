use crate::core::grid::{COLUMNS, Grid};
use crate::errors::{AppError, AppResult};
use crate::export::model::grid_to_rows;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the grid as CSV: header row first, then one row per displayed
/// record. The csv crate handles quoting of embedded commas, quotes and
/// newlines.
pub(crate) fn export_csv(grid: &Grid, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(COLUMNS)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in grid.rows() {
        wtr.write_record(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Write the grid as pretty-printed JSON.
pub(crate) fn export_json(grid: &Grid, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let rows = grid_to_rows(grid);
    let json_data = serde_json::to_string_pretty(&rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
