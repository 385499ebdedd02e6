//! Path utilities: resolve the executable directory, expand ~.

use std::env;
use std::path::PathBuf;

/// Directory containing the running executable.
/// Falls back to the current working directory when it cannot be resolved.
pub fn base_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Full path of the running executable, as written into generated scripts.
pub fn current_exe_path() -> PathBuf {
    env::current_exe().unwrap_or_else(|_| base_dir().join(env!("CARGO_PKG_NAME")))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
