use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse `--range` into inclusive date bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start_raw, end_raw) = r.split_once(':').unwrap_or((r, r));
    let start = start_raw.trim();
    let end = end_raw.trim();

    if start.len() != end.len() {
        return Err(AppError::Format(
            "range start and end must have the same format".into(),
        ));
    }

    let (first, _) = period_bounds(start)?;
    let (_, last) = period_bounds(end)?;

    if last < first {
        return Err(AppError::Order(format!("range end {last} is before start {first}")));
    }

    Ok((first, last))
}

/// First and last day covered by a single YYYY, YYYY-MM or YYYY-MM-DD value.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::Format(format!("unsupported range value '{p}'"));

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            let next = if d1.month() == 12 {
                NaiveDate::from_ymd_opt(d1.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(d1.year(), d1.month() + 1, 1)
            };
            let d2 = next.and_then(|n| n.pred_opt()).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}
