use crate::errors::{AppError, AppResult};
use crate::models::gender::Gender;
use crate::models::record::{NewRecord, Record};
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

/// Insert a new record; the id is assigned by SQLite.
pub fn insert_record(conn: &Connection, rec: &NewRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO pelanggaran (nama, usia, gender, tanggal, detail)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            rec.name,
            rec.age,
            rec.gender.to_db_str(),
            rec.date_str(),
            rec.detail,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Load every record.
/// No ORDER BY: rowid order is stable and matches insertion order.
pub fn load_all(conn: &Connection) -> AppResult<Vec<Record>> {
    let mut stmt =
        conn.prepare("SELECT id, nama, usia, gender, tanggal, detail FROM pelanggaran")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    let mut stmt = conn.prepare("SELECT COUNT(*) FROM pelanggaran")?;
    let n: i64 = stmt.query_row([], |r| r.get(0))?;
    Ok(n)
}

pub fn map_row(row: &Row) -> Result<Record> {
    let date_str: String = row.get("tanggal")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let gender_str: String = row.get("gender")?;
    let gender = Gender::from_db_str(&gender_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidGender(gender_str.clone())),
        )
    })?;

    Ok(Record {
        id: row.get("id")?,
        name: row.get("nama")?,
        age: row.get("usia")?,
        gender,
        date,
        detail: row.get::<_, Option<String>>("detail")?.unwrap_or_default(),
    })
}
