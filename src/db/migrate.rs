use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn create_projects_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            project_number TEXT,
            project_name   TEXT
        );
        "#,
    )?;
    Ok(())
}

fn create_work_sessions_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_sessions (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id INTEGER,
            work_date  TEXT,
            start_time TEXT,
            end_time   TEXT,
            duration   REAL,
            FOREIGN KEY (project_id) REFERENCES projects (id)
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// The index is recreated whenever it is missing (a schema reset drops it
/// with its table); the migration is recorded once.
fn migrate_add_session_project_index(conn: &Connection) -> AppResult<()> {
    let version = "20251001_0001_index_sessions_project";

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_work_sessions_project ON work_sessions(project_id);",
    )
    .map_err(|e| AppError::Migration(format!("{version}: {e}")))?;

    if migration_applied(conn, version)? {
        return Ok(());
    }

    ttlog(
        conn,
        "migration_applied",
        version,
        "Added project index to work_sessions",
    )?;
    tracing::info!(version, "migration applied");

    Ok(())
}

/// Drop both domain tables so they are recreated empty.
///
/// `work_sessions` goes first because it references `projects`.
pub fn reset_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS work_sessions;
        DROP TABLE IF EXISTS projects;
        "#,
    )?;

    ensure_log_table(conn)?;
    ttlog(conn, "reset_schema", "", "Dropped projects and work_sessions")?;
    tracing::warn!("domain tables dropped");

    Ok(())
}

/// Public entry point: create missing tables and run all pending migrations.
///
/// With `reset` set, the domain tables are dropped first.
pub fn run_pending_migrations(conn: &Connection, reset: bool) -> AppResult<()> {
    ensure_log_table(conn)?;

    if reset {
        reset_schema(conn)?;
    }

    if !table_exists(conn, "work_sessions")? {
        tracing::info!("creating projects and work_sessions tables");
    }
    create_projects_table(conn)?;
    create_work_sessions_table(conn)?;

    migrate_add_session_project_index(conn)?;

    Ok(())
}
