use crate::errors::{AppError, AppResult};
use crate::utils::path::base_dir;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "timetracker.conf";
pub const DATABASE_FILE_NAME: &str = "time_tracker.db";
pub const REPORT_FILE_NAME: &str = "work_sessions.pdf";

/// How session ids behave after a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// Remaining sessions are renumbered 1..N after every delete and the
    /// next session gets N+1.
    #[default]
    Contiguous,
    /// Ids are assigned by the store, never rewritten and never reused,
    /// not even the id of the most recently deleted session.
    Monotonic,
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::Contiguous => write!(f, "contiguous"),
            IdPolicy::Monotonic => write!(f, "monotonic"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub id_policy: IdPolicy,
    /// Drop and recreate the domain tables every time the database is opened.
    #[serde(default)]
    pub reset_schema_on_start: bool,
    #[serde(default = "default_report_file")]
    pub report_file: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_report_file() -> String {
    base_dir()
        .join(REPORT_FILE_NAME)
        .to_string_lossy()
        .to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            id_policy: IdPolicy::default(),
            reset_schema_on_start: false,
            report_file: default_report_file(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Directory holding the config file and, by default, the database:
    /// the directory of the running executable.
    pub fn config_dir() -> PathBuf {
        base_dir()
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE_NAME)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database files.
    ///
    /// In test mode the config file is left untouched so that tests never
    /// overwrite a real configuration sitting next to the test binary.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
