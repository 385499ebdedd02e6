use crate::models::field::SessionField;
use crate::utils::time::format_hours;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// A stored work session, as kept in `work_sessions`.
///
/// Dates and times are kept as the stored text: edits may store values
/// that are individually valid but no longer ordered, and rows are never
/// rejected on read.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkSession {
    pub id: i64,
    pub project_id: i64,
    pub work_date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: f64,
}

/// Validated input for a new session.
#[derive(Debug, Clone, Copy)]
pub struct NewSession {
    pub project_id: i64,
    pub work_date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration: f64,
}

/// A session joined with its project, as displayed in the session grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRow {
    pub id: i64,
    pub project: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub duration: f64,
}

impl SessionRow {
    /// Cell text for one grid column.
    pub fn display_value(&self, field: SessionField) -> String {
        match field {
            SessionField::Id => self.id.to_string(),
            SessionField::Project => self.project.clone(),
            SessionField::Date => self.date.clone(),
            SessionField::Start => self.start.clone(),
            SessionField::End => self.end.clone(),
            SessionField::Duration => format_hours(self.duration),
        }
    }
}
