use crate::errors::{AppError, AppResult};
use crate::export::model::report_lines;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::session::SessionRow;
use crate::ui::messages::info;
use std::path::Path;

/// Export the session report as PDF. Returns the number of pages written.
pub(crate) fn export_pdf(sessions: &[SessionRow], path: &Path, title: &str) -> AppResult<usize> {
    info(format!("Exporting to PDF: {}", path.display()));

    let lines = report_lines(sessions);

    let mut pdf = PdfManager::new();
    pdf.write_lines(title, &lines);
    let pages = pdf.page_count();

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(pages)
}
