#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use timetracker::db::initialize::init_db;
use timetracker::db::pool::DbPool;

pub fn tt() -> Command {
    cargo_bin_cmd!("timetracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timetracker.sqlite", name));
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

/// Fresh in-memory store with the schema in place.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool, false).expect("init db");
    pool
}

/// Initialize DB and add a small dataset useful for many tests:
/// two projects, three sessions (8.50h Website, 2.00h + 3.25h Backend).
pub fn init_db_with_data(db_path: &str) {
    tt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", db_path, "project", "add", "P-100", "Website"])
        .assert()
        .success();

    tt().args(["--db", db_path, "project", "add", "P-200", "Backend"])
        .assert()
        .success();

    add_session(db_path, "Website", "2025-01-02", "09:00", "17:30");
    add_session(db_path, "Backend", "2025-02-10", "09:00", "11:00");
    add_session(db_path, "Backend", "2025-03-05", "13:00", "16:15");
}

pub fn add_session(db_path: &str, project: &str, date: &str, start: &str, end: &str) {
    tt().args([
        "--db", db_path, "session", "add", "-p", project, "-d", date, "-s", start, "-e", end,
    ])
    .assert()
    .success();
}
