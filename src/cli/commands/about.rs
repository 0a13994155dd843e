use crate::errors::AppResult;

/// Show information about this application.
pub fn handle() -> AppResult<()> {
    println!("tilang {}", env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("Entries are kept in a single local SQLite file; nothing leaves");
    println!("your machine. Use `tilang export` to dump the current table to");
    println!("CSV or JSON.");
    Ok(())
}
