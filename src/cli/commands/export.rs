use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportLogic, default_report_path};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config, pool: &DbPool) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let path = match file {
            Some(f) => expand_tilde(f),
            None => default_report_path(&expand_tilde(&cfg.report_file), *format),
        };
        ExportLogic::export(pool, *format, &path, range.as_deref(), *force)?;
    }
    Ok(())
}
