use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::grid::SummaryGrid;

pub fn handle(pool: &DbPool) -> AppResult<()> {
    let mut grid = SummaryGrid::new();
    grid.reload(pool)?;
    print!("{}", grid.render());
    Ok(())
}
