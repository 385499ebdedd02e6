use crate::cli::parser::Commands;
use crate::core::build_script::BuildScriptLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::BuildScript { file } = cmd {
        let dest = file.as_deref().map(expand_tilde);
        BuildScriptLogic::generate(dest.as_deref())?;
    }
    Ok(())
}
