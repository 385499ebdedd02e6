use crate::export::ExportFormat;
use crate::models::field::SessionField;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timetracker
#[derive(Parser)]
#[command(
    name = "timetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log work sessions against projects and see total hours per project (SQLite)",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        /// Drop and recreate the projects and work_sessions tables (destroys all data)
        #[arg(long = "reset")]
        reset: bool,
    },

    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage work sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Show total hours per project
    Summary,

    /// Export all sessions as a report
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        /// Output file path (default: work_sessions.pdf next to the executable, or
        /// the `report_file` configured)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Only sessions whose date falls in the range.
        ///
        /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD and `start:end`
        /// ranges in the same format (e.g. 2025-06:2025-08). `all` exports
        /// every session.
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Write a packaging script (build.sh / build.bat) next to the executable
    BuildScript {
        /// Write the script to this path instead
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip on Windows, tar.gz on Unix)
        #[arg(long)]
        compress: bool,
    },

    /// Inspect and maintain the database
    Db {
        /// Show database statistics
        #[arg(long)]
        info: bool,

        /// Run SQLite integrity check
        #[arg(long)]
        check: bool,

        /// Compact the database file
        #[arg(long)]
        vacuum: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration
        #[arg(long = "print")]
        print_config: bool,

        /// Edit the configuration file (default editor: $EDITOR, or nano/notepad)
        #[arg(long = "edit")]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor")]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        /// Number of most recent rows to show
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Add a project
    Add {
        /// Project number (free-text code)
        number: String,
        /// Project name
        name: String,
    },
    /// List projects as `id - number: name`
    List,
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// Record a work session
    Add {
        /// Project: `id - number: name`, an exact project name, or an id
        #[arg(long, short = 'p')]
        project: Option<String>,

        /// Work date (YYYY-MM-DD, default: today)
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long, short = 's')]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(long, short = 'e')]
        end: Option<String>,
    },

    /// List all sessions
    List,

    /// Delete a session by id
    Del {
        /// Session id
        id: Option<i64>,
    },

    /// Edit one field of a session
    Edit {
        /// Session id
        id: i64,

        /// Field to change
        #[arg(value_enum)]
        field: SessionField,

        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}
