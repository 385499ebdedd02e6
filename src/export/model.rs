use crate::models::session::SessionRow;
use crate::utils::time::format_hours;

/// Header for CSV / JSON / PDF table output.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["id", "project", "date", "start", "end", "duration"]
}

/// One report line per session:
/// `ID: 1 | Project: Website | Date: 2025-01-02 | 09:00 - 17:30 | 8.50h`
pub fn report_line(s: &SessionRow) -> String {
    format!(
        "ID: {} | Project: {} | Date: {} | {} - {} | {}h",
        s.id,
        s.project,
        s.date,
        s.start,
        s.end,
        format_hours(s.duration)
    )
}

pub(crate) fn report_lines(sessions: &[SessionRow]) -> Vec<String> {
    sessions.iter().map(report_line).collect()
}
