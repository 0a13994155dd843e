//! Record store over a single SQLite file.
//!
//! Every operation opens its own connection, runs one statement, and drops
//! the connection before returning. No connection is held across operations
//! and no transaction spans more than one statement.

use crate::db::{initialize, queries};
use crate::errors::AppResult;
use crate::models::record::{NewRecord, Record};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn open(&self) -> AppResult<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Ensure the backing table exists. Idempotent.
    pub fn initialize(&self) -> AppResult<()> {
        let conn = self.open()?;
        initialize::init_db(&conn)
    }

    /// Append a new record and return it with the assigned id.
    pub fn insert(&self, rec: &NewRecord) -> AppResult<Record> {
        let conn = self.open()?;
        let id = queries::insert_record(&conn, rec)?;
        Ok(Record {
            id,
            name: rec.name.clone(),
            age: rec.age,
            gender: rec.gender,
            date: rec.date,
            detail: rec.detail.clone(),
        })
    }

    /// Return all records in insertion order; empty table → empty Vec.
    pub fn fetch_all(&self) -> AppResult<Vec<Record>> {
        let conn = self.open()?;
        queries::load_all(&conn)
    }

    pub fn count(&self) -> AppResult<i64> {
        let conn = self.open()?;
        queries::count_records(&conn)
    }
}
