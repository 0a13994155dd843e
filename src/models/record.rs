use super::gender::Gender;
use chrono::NaiveDate;
use serde::Serialize;

/// A violation record as stored in the `pelanggaran` table.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub id: i64,            // ⇔ pelanggaran.id (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub name: String,       // ⇔ pelanggaran.nama (TEXT NOT NULL)
    pub age: u8,            // ⇔ pelanggaran.usia (INTEGER, 0-99)
    pub gender: Gender,     // ⇔ pelanggaran.gender ('male' | 'female')
    pub date: NaiveDate,    // ⇔ pelanggaran.tanggal (TEXT "YYYY-MM-DD")
    pub detail: String,     // ⇔ pelanggaran.detail (TEXT, may be empty)
}

impl Record {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// A record ready for insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub date: NaiveDate,
    pub detail: String,
}

impl NewRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
