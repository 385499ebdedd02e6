use crate::cli::parser::SessionAction;
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::grid::{SessionGrid, refresh_and_print};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::format_hours;

pub fn handle(action: &SessionAction, cfg: &Config, pool: &DbPool) -> AppResult<()> {
    match action {
        SessionAction::Add {
            project,
            date: work_date,
            start,
            end,
        } => {
            // The date defaults to today, like a date picker would.
            let work_date = work_date
                .clone()
                .unwrap_or_else(|| date::format_date(date::today()));

            let row = SessionLogic::add(
                pool,
                project.as_deref().unwrap_or_default(),
                &work_date,
                start.as_deref().unwrap_or_default(),
                end.as_deref().unwrap_or_default(),
            )?;

            success(format!(
                "Session saved on {}: {} hours",
                row.date,
                format_hours(row.duration)
            ));
            refresh_and_print(pool)?;
        }

        SessionAction::List => {
            let mut grid = SessionGrid::new();
            grid.reload(pool)?;
            print!("{}", grid.render());
        }

        SessionAction::Del { id } => {
            SessionLogic::delete(pool, *id, cfg.id_policy)?;
            success("Session deleted successfully.");
            refresh_and_print(pool)?;
        }

        SessionAction::Edit { id, field, value } => {
            let mut grid = SessionGrid::new();
            grid.reload(pool)?;

            let row = grid.commit_edit(pool, *id, *field, value)?;
            success(format!(
                "Session {} updated: {} = {}",
                row.id,
                field,
                row.display_value(*field)
            ));
            refresh_and_print(pool)?;
        }
    }

    Ok(())
}
