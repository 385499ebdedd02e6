use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::{base_dir, current_exe_path};
use std::fs;
use std::path::{Path, PathBuf};

/// Target shell for the generated packaging script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFlavor {
    Batch,
    Shell,
}

impl ScriptFlavor {
    pub fn native() -> Self {
        if cfg!(target_os = "windows") {
            ScriptFlavor::Batch
        } else {
            ScriptFlavor::Shell
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ScriptFlavor::Batch => "build.bat",
            ScriptFlavor::Shell => "build.sh",
        }
    }
}

/// Crate root the running binary was built from. `cargo build` must run
/// here so that `target/release` resolves against it.
pub fn source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub struct BuildScriptLogic;

impl BuildScriptLogic {
    /// Fixed template: change to the `source` crate root, build a release
    /// binary, then copy it over `exe`.
    pub fn render(flavor: ScriptFlavor, source: &Path, exe: &Path) -> String {
        let pkg = env!("CARGO_PKG_NAME");
        let source = source.display();
        let exe = exe.display();

        match flavor {
            ScriptFlavor::Batch => format!(
                "@echo off\r\n\
                 cd /d \"{source}\"\r\n\
                 cargo build --release\r\n\
                 copy /Y \"target\\release\\{pkg}.exe\" \"{exe}\"\r\n\
                 pause\r\n"
            ),
            ScriptFlavor::Shell => format!(
                "#!/bin/sh\n\
                 cd \"{source}\" || exit 1\n\
                 cargo build --release || exit 1\n\
                 cp \"target/release/{pkg}\" \"{exe}\"\n"
            ),
        }
    }

    /// Write the script for this platform, next to the executable unless
    /// `dest` is given. Returns the written path.
    pub fn generate(dest: Option<&Path>) -> AppResult<PathBuf> {
        let flavor = ScriptFlavor::native();
        let path = dest
            .map(Path::to_path_buf)
            .unwrap_or_else(|| base_dir().join(flavor.file_name()));

        let script = Self::render(flavor, &source_dir(), &current_exe_path());
        fs::write(&path, script)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        }

        tracing::info!(path = %path.display(), "build script written");
        success(format!("Build script created at {}", path.display()));
        Ok(path)
    }
}
