use crate::config::Config;
use crate::db::store::RecordStore;
use crate::errors::AppResult;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database with the `pelanggaran` table
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let path = Config::config_file();
    let cfg = Config::load()?;
    let db_path = if let Some(custom) = &cli.db {
        custom.clone()
    } else {
        cfg.database.clone()
    };

    println!("⚙️  Initializing tilang…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    let store = RecordStore::new(&db_path);
    store.initialize()?;

    println!("✅ Database initialized at {}", &db_path);
    println!("🎉 tilang initialization completed!");
    Ok(())
}
