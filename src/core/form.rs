//! Entry form state and submit logic.
//!
//! The five input fields live in an explicit struct so the whole
//! validate → insert → reset flow can run (and be tested) without any
//! display surface attached.

use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::gender::Gender;
use crate::models::record::{NewRecord, Record};
use crate::utils::date;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct FormState {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub date: NaiveDate,
    pub detail: String,

    // age the form returns to after a successful submit
    default_age: u8,
}

impl FormState {
    /// Fresh form: empty name, configured age, first gender option, today.
    pub fn with_defaults(default_age: u8) -> Self {
        Self {
            name: String::new(),
            age: default_age,
            gender: Gender::Male,
            date: date::today(),
            detail: String::new(),
            default_age,
        }
    }

    /// Only the name is validated here; age and gender are constrained by
    /// the input layer, mirroring range-limited widgets.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name required".to_string()));
        }
        Ok(())
    }

    /// Validate, insert, and reset the form on success.
    /// On a storage error the fields keep their values so the user can retry.
    pub fn submit(&mut self, store: &RecordStore) -> AppResult<Record> {
        self.validate()?;

        let rec = NewRecord {
            name: self.name.trim().to_string(),
            age: self.age,
            gender: self.gender,
            date: self.date,
            detail: self.detail.trim().to_string(),
        };

        let saved = store.insert(&rec)?;
        self.reset();
        Ok(saved)
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.age = self.default_age;
        self.gender = Gender::Male;
        self.date = date::today();
        self.detail.clear();
    }
}
