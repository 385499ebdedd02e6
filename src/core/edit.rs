//! Inline editing of a single session field.
//!
//! Each editable field is described once in [`FIELD_SPECS`]: how the raw
//! text is parsed into a column value, and whether the duration must be
//! recomputed once the new value is stored.

use crate::core::project::ProjectLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{get_session, get_session_row, update_session_field};
use crate::errors::{AppError, AppResult};
use crate::models::field::{FieldValue, SessionField};
use crate::models::session::SessionRow;
use crate::utils::date::{format_date, require_date};
use crate::utils::time::{format_time, hours_between, parse_time, require_time};
use rusqlite::Connection;

type ParseFn = fn(&Connection, &str) -> AppResult<FieldValue>;

struct FieldSpec {
    field: SessionField,
    parse: ParseFn,
    recompute_duration: bool,
}

const FIELD_SPECS: &[FieldSpec] = &[
    FieldSpec {
        field: SessionField::Project,
        parse: parse_project,
        recompute_duration: false,
    },
    FieldSpec {
        field: SessionField::Date,
        parse: parse_date,
        recompute_duration: false,
    },
    FieldSpec {
        field: SessionField::Start,
        parse: parse_start,
        recompute_duration: true,
    },
    FieldSpec {
        field: SessionField::End,
        parse: parse_end,
        recompute_duration: true,
    },
    FieldSpec {
        field: SessionField::Duration,
        parse: parse_duration,
        recompute_duration: false,
    },
];

fn parse_project(conn: &Connection, raw: &str) -> AppResult<FieldValue> {
    let project = ProjectLogic::resolve(conn, raw)?;
    Ok(FieldValue::Int(project.id))
}

fn parse_date(_: &Connection, raw: &str) -> AppResult<FieldValue> {
    Ok(FieldValue::Text(format_date(require_date(raw)?)))
}

fn parse_start(_: &Connection, raw: &str) -> AppResult<FieldValue> {
    Ok(FieldValue::Text(format_time(require_time("start", raw)?)))
}

fn parse_end(_: &Connection, raw: &str) -> AppResult<FieldValue> {
    Ok(FieldValue::Text(format_time(require_time("end", raw)?)))
}

fn parse_duration(_: &Connection, raw: &str) -> AppResult<FieldValue> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(FieldValue::Real(v)),
        _ => Err(AppError::Format(format!(
            "duration must be a number, got '{raw}'"
        ))),
    }
}

fn spec_for(field: SessionField) -> AppResult<&'static FieldSpec> {
    FIELD_SPECS
        .iter()
        .find(|s| s.field == field)
        .ok_or_else(|| AppError::Validation(format!("the {field} column cannot be edited")))
}

/// Recompute duration from the stored start/end pair.
///
/// Only applied when both parse and end is after start; otherwise the
/// stored duration is left as it was.
fn recompute_duration(conn: &Connection, id: i64) -> AppResult<Option<f64>> {
    let Some(session) = get_session(conn, id)? else {
        return Ok(None);
    };

    match (parse_time(&session.start_time), parse_time(&session.end_time)) {
        (Some(st), Some(et)) if et > st => {
            let hours = hours_between(st, et);
            update_session_field(conn, id, SessionField::Duration, &FieldValue::Real(hours))?;
            Ok(Some(hours))
        }
        _ => Ok(None),
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Apply one field edit to a session and return the refreshed row.
    ///
    /// The field write and any dependent duration update commit together.
    pub fn apply(pool: &DbPool, id: i64, field: SessionField, raw: &str) -> AppResult<SessionRow> {
        let spec = spec_for(field)?;
        let raw = raw.trim();

        pool.with_conn(|conn| {
            if get_session(conn, id)?.is_none() {
                return Err(AppError::Lookup(format!("session {id} not found")));
            }

            let value = (spec.parse)(conn, raw)?;

            let tx = conn.transaction()?;
            update_session_field(&tx, id, spec.field, &value)?;
            let recomputed = if spec.recompute_duration {
                recompute_duration(&tx, id)?
            } else {
                None
            };
            ttlog(&tx, "edit_session", &id.to_string(), &format!("{field} = {raw}"))?;
            tx.commit()?;

            tracing::info!(id, %field, value = raw, ?recomputed, "session edited");

            get_session_row(conn, id)?
                .ok_or_else(|| AppError::Lookup(format!("session {id} not found")))
        })
    }
}
