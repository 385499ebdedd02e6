use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, pool: &DbPool) -> AppResult<()> {
    if let Commands::Log { limit } = cmd {
        LogLogic::print_log(pool, *limit)?;
    }

    Ok(())
}
