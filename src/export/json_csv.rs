use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::notify_export_success;
use crate::models::session::SessionRow;
use crate::ui::messages::info;
use crate::utils::time::format_hours;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(sessions: &[SessionRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(sessions)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with a header row. Durations keep two decimals, as in the grid.
pub(crate) fn export_csv(sessions: &[SessionRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let csv_err = |e: csv::Error| AppError::Export(format!("CSV write error: {e}"));

    let mut wtr = csv::Writer::from_path(path).map_err(csv_err)?;
    wtr.write_record(get_headers()).map_err(csv_err)?;

    for s in sessions {
        wtr.write_record([
            s.id.to_string(),
            s.project.clone(),
            s.date.clone(),
            s.start.clone(),
            s.end.clone(),
            format_hours(s.duration),
        ])
        .map_err(csv_err)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
