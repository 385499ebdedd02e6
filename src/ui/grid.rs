//! Display models for the project selector, the session grid and the
//! summary grid.
//!
//! Grids hold transient copies of store rows. After any mutation they are
//! reloaded from the store; the only in-place patch is a successful cell
//! edit, which takes the values returned by the store.

use crate::core::edit::EditLogic;
use crate::core::project::ProjectLogic;
use crate::core::session::SessionLogic;
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::field::SessionField;
use crate::models::session::SessionRow;
use crate::models::summary::ProjectSummary;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;

#[derive(Debug, Default)]
pub struct ProjectDropdown {
    labels: Vec<String>,
}

impl ProjectDropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reload(&mut self, pool: &DbPool) -> AppResult<()> {
        self.labels = ProjectLogic::list(pool)?
            .iter()
            .map(|p| p.label())
            .collect();
        Ok(())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn render(&self) -> String {
        if self.labels.is_empty() {
            return "No projects yet.\n".to_string();
        }
        self.labels.iter().map(|l| format!("{l}\n")).collect()
    }
}

#[derive(Debug, Default)]
pub struct SessionGrid {
    rows: Vec<SessionRow>,
}

impl SessionGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reload(&mut self, pool: &DbPool) -> AppResult<()> {
        self.rows = SessionLogic::list(pool)?;
        Ok(())
    }

    pub fn rows(&self) -> &[SessionRow] {
        &self.rows
    }

    pub fn row(&self, id: i64) -> Option<&SessionRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Commit an inline edit of one cell.
    ///
    /// On success the row is replaced by the stored, recomputed values.
    /// On failure the attempted edit is discarded: the whole grid is
    /// reloaded from the store and the original error is returned.
    pub fn commit_edit(
        &mut self,
        pool: &DbPool,
        id: i64,
        field: SessionField,
        value: &str,
    ) -> AppResult<SessionRow> {
        match EditLogic::apply(pool, id, field, value) {
            Ok(updated) => {
                if let Some(slot) = self.rows.iter_mut().find(|r| r.id == id) {
                    *slot = updated.clone();
                } else {
                    self.reload(pool)?;
                }
                Ok(updated)
            }
            Err(e) => {
                if let Err(reload_err) = self.reload(pool) {
                    tracing::warn!(error = %reload_err, "grid reload after failed edit");
                }
                Err(e)
            }
        }
    }

    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return "No sessions recorded.\n".to_string();
        }

        let mut table = Table::new(
            SessionField::ALL
                .iter()
                .map(|f| match f {
                    SessionField::Id | SessionField::Duration => Column::right(f.header()),
                    _ => Column::left(f.header()),
                })
                .collect(),
        );

        for r in &self.rows {
            table.add_row(SessionField::ALL.iter().map(|f| r.display_value(*f)).collect());
        }

        table.render()
    }
}

#[derive(Debug, Default)]
pub struct SummaryGrid {
    rows: Vec<ProjectSummary>,
}

impl SummaryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reload(&mut self, pool: &DbPool) -> AppResult<()> {
        self.rows = SummaryLogic::summarize(pool)?;
        Ok(())
    }

    pub fn rows(&self) -> &[ProjectSummary] {
        &self.rows
    }

    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return "No hours logged.\n".to_string();
        }

        let mut table = Table::new(vec![Column::left("Project"), Column::right("Total Hours")]);
        for r in &self.rows {
            table.add_row(vec![r.project.clone(), format_hours(r.total_hours)]);
        }
        table.render()
    }
}

/// Reload and print both grids, as after every mutating command.
pub fn refresh_and_print(pool: &DbPool) -> AppResult<()> {
    let mut sessions = SessionGrid::new();
    sessions.reload(pool)?;
    let mut summary = SummaryGrid::new();
    summary.reload(pool)?;

    crate::ui::messages::header("Sessions");
    print!("{}", sessions.render());
    println!();
    crate::ui::messages::header("Summary");
    print!("{}", summary.render());
    Ok(())
}
