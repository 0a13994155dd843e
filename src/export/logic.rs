use crate::core::grid::Grid;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the grid's current contents.
    ///
    /// The grid, not the store, is the source: what gets written is exactly
    /// what is displayed, cell by cell. An empty grid still produces the
    /// header row.
    pub fn export(grid: &Grid, format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if !ensure_writable(path, force)? {
            warning("Export cancelled: existing file kept.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(grid, path)?,
            ExportFormat::Json => export_json(grid, path)?,
        }

        Ok(())
    }
}
