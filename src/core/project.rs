use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_project, find_project_by_name, insert_project, list_projects};
use crate::errors::{AppError, AppResult};
use crate::models::project::Project;
use rusqlite::Connection;

/// Business logic for projects.
pub struct ProjectLogic;

impl ProjectLogic {
    /// Create a project. Both fields are trimmed and must be non-empty.
    pub fn add(pool: &DbPool, number: &str, name: &str) -> AppResult<Project> {
        let number = number.trim();
        let name = name.trim();

        if number.is_empty() || name.is_empty() {
            return Err(AppError::Validation(
                "please enter both project number and name".into(),
            ));
        }

        pool.with_conn(|conn| {
            let id = insert_project(conn, number, name)?;
            let project = Project {
                id,
                number: number.to_string(),
                name: name.to_string(),
            };
            ttlog(conn, "add_project", &id.to_string(), &project.label())?;
            tracing::info!(id, number, name, "project added");
            Ok(project)
        })
    }

    pub fn list(pool: &DbPool) -> AppResult<Vec<Project>> {
        pool.with_conn(|conn| list_projects(conn))
    }

    /// Resolve user text to an existing project.
    ///
    /// Accepted forms, tried in order:
    /// - a selector label `"{id} - {number}: {name}"` (leading id must exist)
    /// - an exact project name
    /// - a bare project id
    pub fn resolve(conn: &Connection, selection: &str) -> AppResult<Project> {
        let selection = selection.trim();

        if let Some(id) = Project::id_from_label(selection)
            && let Some(p) = find_project(conn, id)?
        {
            return Ok(p);
        }

        if let Some(p) = find_project_by_name(conn, selection)? {
            return Ok(p);
        }

        if let Ok(id) = selection.parse::<i64>()
            && let Some(p) = find_project(conn, id)?
        {
            return Ok(p);
        }

        Err(AppError::Lookup(format!(
            "project '{selection}' not found; enter an existing 'id - number: name' or an exact project name"
        )))
    }
}
