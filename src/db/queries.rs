use crate::errors::AppResult;
use crate::models::field::{FieldValue, SessionField};
use crate::models::project::Project;
use crate::models::session::{NewSession, SessionRow, WorkSession};
use crate::models::summary::ProjectSummary;
use crate::utils::{date, time};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SESSION_ROWS_SQL: &str = "
    SELECT work_sessions.id, projects.project_name, work_sessions.work_date,
           work_sessions.start_time, work_sessions.end_time, work_sessions.duration
    FROM work_sessions
    JOIN projects ON work_sessions.project_id = projects.id";

fn map_project(row: &Row) -> Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        number: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        name: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
    })
}

fn map_session_row(row: &Row) -> Result<SessionRow> {
    Ok(SessionRow {
        id: row.get(0)?,
        project: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        date: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        start: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        end: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        duration: row.get::<_, Option<f64>>(5)?.unwrap_or(0.0),
    })
}

fn map_session(row: &Row) -> Result<WorkSession> {
    Ok(WorkSession {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        work_date: row.get::<_, Option<String>>("work_date")?.unwrap_or_default(),
        start_time: row.get::<_, Option<String>>("start_time")?.unwrap_or_default(),
        end_time: row.get::<_, Option<String>>("end_time")?.unwrap_or_default(),
        duration: row.get::<_, Option<f64>>("duration")?.unwrap_or(0.0),
    })
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

pub fn insert_project(conn: &Connection, number: &str, name: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO projects (project_number, project_name) VALUES (?1, ?2)",
        params![number, name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_projects(conn: &Connection) -> AppResult<Vec<Project>> {
    let mut stmt =
        conn.prepare("SELECT id, project_number, project_name FROM projects ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_project)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_project(conn: &Connection, id: i64) -> AppResult<Option<Project>> {
    let project = conn
        .query_row(
            "SELECT id, project_number, project_name FROM projects WHERE id = ?1",
            [id],
            map_project,
        )
        .optional()?;
    Ok(project)
}

/// Exact (case-sensitive) name match. The lowest id wins on duplicates.
pub fn find_project_by_name(conn: &Connection, name: &str) -> AppResult<Option<Project>> {
    let project = conn
        .query_row(
            "SELECT id, project_number, project_name FROM projects
             WHERE project_name = ?1
             ORDER BY id ASC
             LIMIT 1",
            [name],
            map_project,
        )
        .optional()?;
    Ok(project)
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

pub fn insert_session(conn: &Connection, s: &NewSession) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO work_sessions (project_id, work_date, start_time, end_time, duration)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            s.project_id,
            date::format_date(s.work_date),
            time::format_time(s.start),
            time::format_time(s.end),
            s.duration,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All sessions joined with their project, ascending by id.
pub fn list_sessions(conn: &Connection) -> AppResult<Vec<SessionRow>> {
    let sql = format!("{SESSION_ROWS_SQL} ORDER BY work_sessions.id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_session_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Sessions whose work date falls within `[start, end]`, ascending by id.
pub fn list_sessions_between(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<SessionRow>> {
    let sql = format!(
        "{SESSION_ROWS_SQL}
         WHERE work_sessions.work_date BETWEEN ?1 AND ?2
         ORDER BY work_sessions.id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![date::format_date(start), date::format_date(end)],
        map_session_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_session_row(conn: &Connection, id: i64) -> AppResult<Option<SessionRow>> {
    let sql = format!("{SESSION_ROWS_SQL} WHERE work_sessions.id = ?1");
    let row = conn.query_row(&sql, [id], map_session_row).optional()?;
    Ok(row)
}

pub fn get_session(conn: &Connection, id: i64) -> AppResult<Option<WorkSession>> {
    let session = conn
        .query_row(
            "SELECT id, project_id, work_date, start_time, end_time, duration
             FROM work_sessions WHERE id = ?1",
            [id],
            map_session,
        )
        .optional()?;
    Ok(session)
}

/// Returns the number of rows removed (0 or 1).
pub fn delete_session(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM work_sessions WHERE id = ?1", [id])?;
    Ok(n)
}

/// Reassign ids 1..N to the remaining sessions in ascending original-id order,
/// and rewind the id sequence so the next insert gets N+1.
///
/// Each target id is never larger than the id it replaces and all smaller
/// ids are already taken by earlier rows, so updates never collide.
pub fn renumber_sessions(conn: &Connection) -> AppResult<usize> {
    let ids: Vec<i64> = {
        let mut stmt = conn.prepare("SELECT id FROM work_sessions ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        rows.collect::<Result<_>>()?
    };

    let mut stmt = conn.prepare_cached("UPDATE work_sessions SET id = ?1 WHERE id = ?2")?;
    let mut changed = 0;
    for (idx, old) in ids.iter().enumerate() {
        let new_id = idx as i64 + 1;
        if new_id != *old {
            stmt.execute(params![new_id, old])?;
            changed += 1;
        }
    }

    conn.execute(
        "UPDATE sqlite_sequence SET seq = ?1 WHERE name = 'work_sessions'",
        [ids.len() as i64],
    )?;
    Ok(changed)
}

/// Delete a session and, optionally, close the id gap it leaves, all in
/// one transaction.
pub fn delete_session_tx(conn: &mut Connection, id: i64, renumber: bool) -> AppResult<usize> {
    let tx = conn.transaction()?;
    let deleted = delete_session(&tx, id)?;
    if deleted > 0 && renumber {
        renumber_sessions(&tx)?;
    }
    tx.commit()?;
    Ok(deleted)
}

/// Write one column of a session. The column name comes from the field
/// table, never from user input.
pub fn update_session_field(
    conn: &Connection,
    id: i64,
    field: SessionField,
    value: &FieldValue,
) -> AppResult<usize> {
    let sql = format!("UPDATE work_sessions SET {} = ?1 WHERE id = ?2", field.column());
    let n = conn.execute(&sql, params![value, id])?;
    Ok(n)
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

pub fn sum_duration_by_project(conn: &Connection) -> AppResult<Vec<ProjectSummary>> {
    let mut stmt = conn.prepare(
        "SELECT projects.project_name, SUM(work_sessions.duration)
         FROM work_sessions
         JOIN projects ON work_sessions.project_id = projects.id
         GROUP BY projects.project_name
         ORDER BY projects.project_name ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(ProjectSummary {
            project: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
            total_hours: row.get::<_, Option<f64>>(1)?.unwrap_or(0.0),
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
