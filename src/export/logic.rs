use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{list_sessions, list_sessions_between};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_range;
use crate::models::session::SessionRow;
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

pub const REPORT_TITLE: &str = "Work Sessions Report";

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export sessions in ascending id order.
    ///
    /// - `range`: `None`, `"all"` or one of `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
    ///   and their `start:end` forms, matched against the work date.
    ///
    /// A PDF is written even when there are no sessions (title only);
    /// CSV and JSON exports are skipped with a warning instead.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &Path,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        ensure_writable(file, force)?;

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let sessions: Vec<SessionRow> = pool.with_conn(|conn| match bounds {
            None => list_sessions(conn),
            Some((start, end)) => list_sessions_between(conn, start, end),
        })?;

        match format {
            ExportFormat::Pdf => {
                let pages = export_pdf(&sessions, file, &build_pdf_title(range))?;
                tracing::info!(pages, rows = sessions.len(), "pdf report written");
            }
            _ if sessions.is_empty() => {
                warning("No sessions found for the selected range.");
                return Ok(file.to_path_buf());
            }
            ExportFormat::Csv => export_csv(&sessions, file)?,
            ExportFormat::Json => export_json(&sessions, file)?,
        }

        pool.with_conn(|conn| {
            ttlog(
                conn,
                "export",
                &file.to_string_lossy(),
                &format!("{} sessions as {}", sessions.len(), format.as_str()),
            )
        })?;

        Ok(file.to_path_buf())
    }
}

/// Output path used when `--file` is not given.
///
/// `report_file` names the PDF report; the other formats reuse its stem
/// with their own extension so they never overwrite the PDF.
pub fn default_report_path(report_file: &Path, format: ExportFormat) -> PathBuf {
    match format {
        ExportFormat::Pdf => report_file.to_path_buf(),
        _ => report_file.with_extension(format.as_str()),
    }
}

fn build_pdf_title(range: Option<&str>) -> String {
    match range {
        Some(r) if !r.eq_ignore_ascii_case("all") => match r.split_once(':') {
            Some((from, to)) => format!("{REPORT_TITLE} ({from} to {to})"),
            None => format!("{REPORT_TITLE} ({r})"),
        },
        _ => REPORT_TITLE.to_string(),
    }
}
