use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// Ensures the `pelanggaran` table exists. Safe to call on every start.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS pelanggaran (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            nama    TEXT NOT NULL,
            usia    INTEGER NOT NULL CHECK (usia BETWEEN 0 AND 99),
            gender  TEXT NOT NULL CHECK (gender IN ('male','female')),
            tanggal TEXT NOT NULL,       -- YYYY-MM-DD
            detail  TEXT
        );
        ",
    )?;
    Ok(())
}
