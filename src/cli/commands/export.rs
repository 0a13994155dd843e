use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::Grid;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Export the displayed entries.
/// The grid is reloaded first; the export then reads the grid, not the
/// store, so the file matches what `list` would show.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = RecordStore::new(&cfg.database);
        store.initialize()?;

        let mut grid = Grid::new();
        grid.reload(&store)?;

        ExportLogic::export(&grid, format, file, *force)?;
    }
    Ok(())
}
