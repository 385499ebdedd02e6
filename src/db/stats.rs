use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub struct DbStats {
    pub projects: i64,
    pub sessions: i64,
    pub total_hours: f64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

pub fn collect(pool: &DbPool) -> AppResult<DbStats> {
    pool.with_conn(|conn| {
        let projects: i64 = conn.query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0))?;
        let sessions: i64 =
            conn.query_row("SELECT COUNT(*) FROM work_sessions", [], |row| row.get(0))?;
        let total_hours: f64 = conn.query_row(
            "SELECT IFNULL(SUM(duration), 0.0) FROM work_sessions",
            [],
            |row| row.get(0),
        )?;

        let first_date: Option<String> = conn
            .query_row(
                "SELECT work_date FROM work_sessions ORDER BY work_date ASC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        let last_date: Option<String> = conn
            .query_row(
                "SELECT work_date FROM work_sessions ORDER BY work_date DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        Ok(DbStats {
            projects,
            sessions,
            total_hours,
            first_date,
            last_date,
        })
    })
}

pub fn print_db_info(pool: &DbPool) -> AppResult<()> {
    let stats = collect(pool)?;
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(pool.path()).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, pool.path(), RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COUNTS
    //
    println!("{}• Projects:{} {}{}{}", CYAN, RESET, GREEN, stats.projects, RESET);
    println!("{}• Sessions:{} {}{}{}", CYAN, RESET, GREEN, stats.sessions, RESET);
    println!("{}• Total hours:{} {:.2}", CYAN, RESET, stats.total_hours);

    //
    // 3) DATE RANGE
    //
    let fmt_first = stats
        .first_date
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = stats
        .last_date
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
