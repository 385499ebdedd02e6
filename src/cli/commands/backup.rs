use crate::cli::parser::Commands;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, pool: &DbPool) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let dest = expand_tilde(file);
        if !dest.is_absolute() {
            return Err(AppError::Validation(format!(
                "backup path must be absolute: {file}"
            )));
        }
        BackupLogic::backup(pool, &dest, *compress)?;
    }

    Ok(())
}
