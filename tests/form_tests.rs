//! Library-level tests for the form/grid workflow, exercised without the
//! CLI surface.

use tilang::core::form::FormState;
use tilang::core::grid::Grid;
use tilang::db::store::RecordStore;
use tilang::models::gender::Gender;
use tilang::utils::date;

use std::env;
use std::fs;
use std::path::PathBuf;

fn setup_store(name: &str) -> RecordStore {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tilang.sqlite", name));
    fs::remove_file(&path).ok();

    let store = RecordStore::new(&path);
    store.initialize().expect("initialize store");
    store
}

fn filled_form() -> FormState {
    let mut form = FormState::with_defaults(17);
    form.name = "Budi".to_string();
    form.age = 20;
    form.gender = Gender::Male;
    form.date = date::parse_date("2024-01-15").unwrap();
    form.detail = "No helmet".to_string();
    form
}

#[test]
fn test_submit_resets_form_to_defaults() {
    let store = setup_store("form_reset");
    let mut form = filled_form();
    form.gender = Gender::Female;

    let saved = form.submit(&store).expect("submit record");
    assert_eq!(saved.id, 1);

    assert_eq!(form.name, "");
    assert_eq!(form.age, 17);
    assert_eq!(form.gender, Gender::Male);
    assert_eq!(form.date, date::today());
    assert_eq!(form.detail, "");
}

#[test]
fn test_submit_trims_name_and_detail() {
    let store = setup_store("form_trims");
    let mut form = filled_form();
    form.name = "  Budi  ".to_string();
    form.detail = " No helmet ".to_string();

    let saved = form.submit(&store).expect("submit record");
    assert_eq!(saved.name, "Budi");
    assert_eq!(saved.detail, "No helmet");
}

#[test]
fn test_validate_rejects_whitespace_name() {
    let mut form = FormState::with_defaults(17);
    form.name = "   ".to_string();

    assert!(form.validate().is_err());
}

#[test]
fn test_failed_submit_keeps_form_populated() {
    // a store whose parent directory does not exist cannot be opened
    let bad = RecordStore::new("/nonexistent_tilang_dir/tilang.sqlite");
    let mut form = filled_form();

    assert!(form.submit(&bad).is_err());

    // no reset happened
    assert_eq!(form.name, "Budi");
    assert_eq!(form.age, 20);
    assert_eq!(form.detail, "No helmet");
}

#[test]
fn test_submit_increments_count_by_one() {
    let store = setup_store("form_count");

    let mut form = filled_form();
    form.submit(&store).expect("first submit");
    assert_eq!(store.count().expect("count"), 1);

    let mut form = filled_form();
    form.name = "Siti".to_string();
    let saved = form.submit(&store).expect("second submit");
    assert_eq!(store.count().expect("count"), 2);
    assert_eq!(saved.id, 2);
}

#[test]
fn test_grid_reload_mirrors_store_order() {
    let store = setup_store("grid_reload");

    let mut form = filled_form();
    form.submit(&store).expect("submit Budi");
    let mut form = filled_form();
    form.name = "Siti".to_string();
    form.gender = Gender::Female;
    form.submit(&store).expect("submit Siti");

    let mut grid = Grid::new();
    let n = grid.reload(&store).expect("reload grid");
    assert_eq!(n, 2);

    let rows = grid.rows();
    assert_eq!(
        rows[0],
        [
            "Budi".to_string(),
            "20".to_string(),
            "male".to_string(),
            "2024-01-15".to_string(),
            "No helmet".to_string(),
        ]
    );
    assert_eq!(rows[1][0], "Siti");
    assert_eq!(rows[1][2], "female");
}

#[test]
fn test_grid_keeps_rows_when_reload_fails() {
    let store = setup_store("grid_keeps_rows");
    let mut form = filled_form();
    form.submit(&store).expect("submit record");

    let mut grid = Grid::new();
    grid.reload(&store).expect("reload grid");
    assert_eq!(grid.len(), 1);

    let bad = RecordStore::new("/nonexistent_tilang_dir/tilang.sqlite");
    assert!(grid.reload(&bad).is_err());

    // previous contents survive the failed reload
    assert_eq!(grid.len(), 1);
    assert_eq!(grid.rows()[0][0], "Budi");
}
