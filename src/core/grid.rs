//! Read-only results grid mirroring the record store.

use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::record::Record;
use crate::utils::table::Table;

/// Display column labels, in fixed order. Also the export header row.
pub const COLUMNS: [&str; 5] = [
    "Nama",
    "Usia",
    "Gender",
    "Tanggal Kejadian",
    "Detail Pelanggaran",
];

#[derive(Debug, Default)]
pub struct Grid {
    rows: Vec<[String; 5]>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the grid from the store.
    /// Fetches first and only replaces the rows on success, so a failed
    /// fetch leaves the previous contents visible.
    pub fn reload(&mut self, store: &RecordStore) -> AppResult<usize> {
        let records = store.fetch_all()?;
        self.rows = records.iter().map(record_to_row).collect();
        Ok(self.rows.len())
    }

    pub fn rows(&self) -> &[[String; 5]] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the grid as a terminal table.
    pub fn render(&self) -> String {
        let mut table = Table::new(COLUMNS.iter().map(|c| c.to_string()).collect());
        for row in &self.rows {
            table.add_row(row.to_vec());
        }
        table.render()
    }
}

/// Each cell is the string form of the field, in display-column order.
fn record_to_row(rec: &Record) -> [String; 5] {
    [
        rec.name.clone(),
        rec.age.to_string(),
        rec.gender.to_db_str().to_string(),
        rec.date_str(),
        rec.detail.clone(),
    ]
}
