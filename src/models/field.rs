use clap::ValueEnum;
use rusqlite::ToSql;
use rusqlite::types::{ToSqlOutput, Value};
use std::fmt;

/// Columns of the session grid, addressed by name rather than position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SessionField {
    Id,
    Project,
    Date,
    Start,
    End,
    Duration,
}

impl SessionField {
    pub const ALL: [SessionField; 6] = [
        SessionField::Id,
        SessionField::Project,
        SessionField::Date,
        SessionField::Start,
        SessionField::End,
        SessionField::Duration,
    ];

    /// Column in `work_sessions` backing this field.
    pub fn column(&self) -> &'static str {
        match self {
            SessionField::Id => "id",
            SessionField::Project => "project_id",
            SessionField::Date => "work_date",
            SessionField::Start => "start_time",
            SessionField::End => "end_time",
            SessionField::Duration => "duration",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            SessionField::Id => "ID",
            SessionField::Project => "Project",
            SessionField::Date => "Date",
            SessionField::Start => "Start",
            SessionField::End => "End",
            SessionField::Duration => "Duration",
        }
    }
}

impl fmt::Display for SessionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// A parsed value ready to be written into a session column.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    Real(f64),
}

impl ToSql for FieldValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            FieldValue::Int(v) => ToSqlOutput::Owned(Value::Integer(*v)),
            FieldValue::Text(v) => ToSqlOutput::Owned(Value::Text(v.clone())),
            FieldValue::Real(v) => ToSqlOutput::Owned(Value::Real(*v)),
        })
    }
}
