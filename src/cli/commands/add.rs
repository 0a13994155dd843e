use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::FormState;
use crate::core::grid::Grid;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::gender::Gender;
use crate::ui::messages::success;
use crate::utils::date;

/// Record a new violation entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        age,
        gender,
        date,
        detail,
    } = cmd
    {
        //
        // 1. Parse gender (default = first option, male)
        //
        let gender_final = match gender {
            Some(code) => {
                Gender::from_code(code).ok_or_else(|| AppError::InvalidGender(code.clone()))?
            }
            None => Gender::Male,
        };

        //
        // 2. Parse incident date (default = today)
        //
        let date_final = match date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        //
        // 3. Open store; schema creation is idempotent
        //
        let store = RecordStore::new(&cfg.database);
        store.initialize()?;

        //
        // 4. Fill the form and submit
        //
        let mut form = FormState::with_defaults(cfg.default_age);
        form.name = name.clone();
        form.age = age.unwrap_or(cfg.default_age);
        form.gender = gender_final;
        form.date = date_final;
        form.detail = detail.clone().unwrap_or_default();

        let saved = form.submit(&store)?;
        success(format!("Record '{}' added with id {}.", saved.name, saved.id));

        //
        // 5. Refresh the grid so the new row is visible right away
        //
        let mut grid = Grid::new();
        grid.reload(&store)?;
        print!("{}", grid.render());
    }

    Ok(())
}
