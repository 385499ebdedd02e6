use crate::cli::parser::ProjectAction;
use crate::core::project::ProjectLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::grid::ProjectDropdown;
use crate::ui::messages::success;

pub fn handle(action: &ProjectAction, pool: &DbPool) -> AppResult<()> {
    match action {
        ProjectAction::Add { number, name } => {
            let project = ProjectLogic::add(pool, number, name)?;
            success(format!("Project added: {}", project.label()));
        }
        ProjectAction::List => {
            let mut dropdown = ProjectDropdown::new();
            dropdown.reload(pool)?;
            print!("{}", dropdown.render());
        }
    }
    Ok(())
}
