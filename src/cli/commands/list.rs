use crate::config::Config;
use crate::core::grid::Grid;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Show all recorded entries as a table.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::new(&cfg.database);
    store.initialize()?;

    let mut grid = Grid::new();
    let n = grid.reload(&store)?;

    if grid.is_empty() {
        info("No records yet.");
        return Ok(());
    }

    print!("{}", grid.render());
    println!("{} record(s)", n);
    Ok(())
}
