#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tilang() -> Command {
    cargo_bin_cmd!("tilang")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tilang.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates the pelanggaran table)
    tilang()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tilang()
        .args([
            "--db",
            db_path,
            "add",
            "Budi",
            "--age",
            "20",
            "--gender",
            "male",
            "--date",
            "2024-01-15",
            "--detail",
            "No helmet",
        ])
        .assert()
        .success();

    tilang()
        .args([
            "--db",
            db_path,
            "add",
            "Siti",
            "--age",
            "31",
            "--gender",
            "female",
            "--date",
            "2024-02-02",
            "--detail",
            "Ran a red light",
        ])
        .assert()
        .success();
}
