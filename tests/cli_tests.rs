use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{add_session, init_db_with_data, setup_test_db, temp_out, tt};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_project_add_and_list() {
    let db_path = setup_test_db("cli_projects");
    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "project", "list"])
        .assert()
        .success()
        .stdout(contains("No projects yet"));

    tt().args(["--db", &db_path, "project", "add", "P-100", "Website"])
        .assert()
        .success()
        .stdout(contains("1 - P-100: Website"));

    tt().args(["--db", &db_path, "project", "add", "", "Nameless"])
        .assert()
        .failure()
        .stderr(contains("Input error"));

    tt().args(["--db", &db_path, "project", "list"])
        .assert()
        .success()
        .stdout(contains("1 - P-100: Website"))
        .stdout(contains("Nameless").not());
}

#[test]
fn test_session_add_refreshes_grids() {
    let db_path = setup_test_db("cli_session_add");
    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    tt().args(["--db", &db_path, "project", "add", "P-100", "Website"])
        .assert()
        .success();

    tt().args([
        "--db",
        &db_path,
        "session",
        "add",
        "--project",
        "1 - P-100: Website",
        "--date",
        "2025-01-02",
        "--start",
        "09:00",
        "--end",
        "17:30",
    ])
    .assert()
    .success()
    .stdout(contains("8.50 hours"))
    .stdout(contains("Sessions"))
    .stdout(contains("Summary"));
}

#[test]
fn test_session_add_errors() {
    let db_path = setup_test_db("cli_session_errors");
    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    tt().args(["--db", &db_path, "project", "add", "P-100", "Website"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "session", "add", "-p", "Website", "-s", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Input error"));

    tt().args([
        "--db", &db_path, "session", "add", "-p", "Website", "-d", "2025-01-02", "-s", "10:00",
        "-e", "09:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Order error"));

    tt().args([
        "--db", &db_path, "session", "add", "-p", "Website", "-d", "2025/01/02", "-s", "09:00",
        "-e", "10:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Format error"));

    tt().args([
        "--db", &db_path, "session", "add", "-p", "Mobile", "-d", "2025-01-02", "-s", "09:00",
        "-e", "10:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Not found"));

    tt().args(["--db", &db_path, "session", "list"])
        .assert()
        .success()
        .stdout(contains("No sessions recorded"));
}

#[test]
fn test_session_date_defaults_to_today() {
    let db_path = setup_test_db("cli_session_today");
    tt().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    tt().args(["--db", &db_path, "project", "add", "P-100", "Website"])
        .assert()
        .success();

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

    tt().args(["--db", &db_path, "session", "add", "-p", "Website", "-s", "09:00", "-e", "10:00"])
        .assert()
        .success()
        .stdout(contains(today));
}

#[test]
fn test_summary_totals() {
    let db_path = setup_test_db("cli_summary");
    init_db_with_data(&db_path);

    tt().args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Backend"))
        .stdout(contains("5.25"))
        .stdout(contains("Website"))
        .stdout(contains("8.50"));
}

#[test]
fn test_session_del_renumbers_and_updates_summary() {
    let db_path = setup_test_db("cli_session_del");
    init_db_with_data(&db_path);

    tt().args(["--db", &db_path, "session", "del"])
        .assert()
        .failure()
        .stderr(contains("Select error"));

    tt().args(["--db", &db_path, "session", "del", "1"])
        .assert()
        .success()
        .stdout(contains("Session deleted"));

    tt().args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Website").not())
        .stdout(contains("5.25"));

    // Ids are contiguous again: 1 and 2 remain, 3 is gone.
    tt().args(["--db", &db_path, "session", "del", "3"])
        .assert()
        .failure()
        .stderr(contains("Not found"));
    tt().args(["--db", &db_path, "session", "del", "2"])
        .assert()
        .success();
}

#[test]
fn test_session_edit() {
    let db_path = setup_test_db("cli_session_edit");
    init_db_with_data(&db_path);

    tt().args(["--db", &db_path, "session", "edit", "1", "start", "10:30"])
        .assert()
        .success()
        .stdout(contains("Start = 10:30"))
        .stdout(contains("7.00"));

    tt().args(["--db", &db_path, "session", "edit", "1", "date", "2024-13-01"])
        .assert()
        .failure()
        .stderr(contains("Format error"));

    tt().args(["--db", &db_path, "session", "edit", "1", "id", "7"])
        .assert()
        .failure()
        .stderr(contains("Input error"));

    tt().args(["--db", &db_path, "session", "edit", "1", "project", "Backend"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Website").not())
        .stdout(contains("12.25"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);
    tt().args(["--db", &db_path, "session", "del", "1"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "log"])
        .assert()
        .success()
        .stdout(contains("add_project"))
        .stdout(contains("add_session"))
        .stdout(contains("del_session"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("cli_db");
    init_db_with_data(&db_path);

    tt().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    tt().args(["--db", &db_path, "db"])
        .assert()
        .success()
        .stdout(contains("2025-01-02"))
        .stdout(contains("2025-03-05"));
}

#[test]
fn test_init_reset_clears_data() {
    let db_path = setup_test_db("cli_reset");
    init_db_with_data(&db_path);

    tt().args(["--db", &db_path, "--test", "init", "--reset"])
        .assert()
        .success();

    tt().args(["--db", &db_path, "project", "list"])
        .assert()
        .success()
        .stdout(contains("No projects yet"));

    // The schema is usable right after a reset.
    tt().args(["--db", &db_path, "project", "add", "P-1", "Fresh"])
        .assert()
        .success();
    add_session(&db_path, "Fresh", "2025-05-01", "08:00", "09:00");
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("cli_backup");
    init_db_with_data(&db_path);
    let out = temp_out("cli_backup", "sqlite");

    tt().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&out).exists());

    tt().args(["--db", &db_path, "backup", "--file", "relative.sqlite"])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}

#[cfg(unix)]
#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("cli_backup_gz");
    init_db_with_data(&db_path);
    let out = temp_out("cli_backup_gz", "sqlite");
    let gz = format!("{out}.tar.gz");
    fs::remove_file(&gz).ok();

    tt().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    assert!(Path::new(&gz).exists());
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_build_script_to_custom_path() {
    let ext = if cfg!(windows) { "bat" } else { "sh" };
    let out = temp_out("cli_build_script", ext);

    tt().args(["build-script", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Build script created"));

    let script = fs::read_to_string(&out).expect("read script");
    assert!(script.contains("cargo build --release"));

    // The build runs from the crate root, not from the binary's directory.
    let source_root = env!("CARGO_MANIFEST_DIR");
    assert!(script.contains(&format!("\"{source_root}\"")));
    let exe_dir = Path::new(env!("CARGO_BIN_EXE_timetracker"))
        .parent()
        .expect("binary directory")
        .display()
        .to_string();
    assert!(!script.contains(&format!("cd \"{exe_dir}\"")));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&out).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
