use crate::config::IdPolicy;
use crate::core::project::ProjectLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_session_tx, get_session_row, insert_session, list_sessions};
use crate::errors::{AppError, AppResult};
use crate::models::session::{NewSession, SessionRow};
use crate::utils::date::require_date;
use crate::utils::time::{format_hours, hours_between, require_time};

/// High-level business logic for work sessions.
pub struct SessionLogic;

impl SessionLogic {
    /// Validate and store a new session, returning it as a grid row.
    ///
    /// Errors, in the order they are checked:
    /// - `Validation` when any field is blank
    /// - `Format` when the date is not YYYY-MM-DD or a time is not HH:MM
    /// - `Order` when end is not strictly after start
    /// - `Lookup` when the project selection matches no project
    pub fn add(
        pool: &DbPool,
        project_selection: &str,
        work_date: &str,
        start: &str,
        end: &str,
    ) -> AppResult<SessionRow> {
        if [project_selection, work_date, start, end]
            .iter()
            .any(|f| f.trim().is_empty())
        {
            return Err(AppError::Validation(
                "please select project, date, and enter times".into(),
            ));
        }

        let date = require_date(work_date)?;
        let start = require_time("start", start)?;
        let end = require_time("end", end)?;

        if end <= start {
            return Err(AppError::Order(format!(
                "end time {} must be after start time {}",
                end.format("%H:%M"),
                start.format("%H:%M")
            )));
        }

        let duration = hours_between(start, end);

        pool.with_conn(|conn| {
            let project = ProjectLogic::resolve(conn, project_selection)?;

            let new = NewSession {
                project_id: project.id,
                work_date: date,
                start,
                end,
                duration,
            };
            let id = insert_session(conn, &new)?;

            ttlog(
                conn,
                "add_session",
                &id.to_string(),
                &format!(
                    "{} on {}: {} hours",
                    project.name,
                    date,
                    format_hours(duration)
                ),
            )?;
            tracing::info!(id, project = %project.name, duration, "session added");

            get_session_row(conn, id)?
                .ok_or_else(|| AppError::Other(format!("session {id} vanished after insert")))
        })
    }

    /// Delete one session.
    ///
    /// With [`IdPolicy::Contiguous`] the remaining sessions are renumbered
    /// 1..N in the same transaction as the delete.
    pub fn delete(pool: &DbPool, id: Option<i64>, policy: IdPolicy) -> AppResult<()> {
        let id = id.ok_or_else(|| {
            AppError::Selection("please select a session to delete".into())
        })?;

        pool.with_conn(|conn| {
            let renumber = policy == IdPolicy::Contiguous;
            let deleted = delete_session_tx(conn, id, renumber)?;

            if deleted == 0 {
                return Err(AppError::Lookup(format!("session {id} not found")));
            }

            ttlog(
                conn,
                "del_session",
                &id.to_string(),
                &format!("Session deleted (id policy: {policy})"),
            )?;
            tracing::info!(id, %policy, "session deleted");
            Ok(())
        })
    }

    pub fn list(pool: &DbPool) -> AppResult<Vec<SessionRow>> {
        pool.with_conn(|conn| list_sessions(conn))
    }
}
