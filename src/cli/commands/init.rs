use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

use crate::cli::parser::{Cli, Commands};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file next to the executable (skipped in test mode)
///  - the SQLite database with all pending migrations
///  - optionally, a reset of the domain tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let reset = matches!(cli.command, Commands::Init { reset: true });

    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing timetracker…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    if reset {
        warning("Resetting projects and work sessions: all data will be removed.");
    }

    let pool = open_db(&cfg.database, reset)?;
    pool.with_conn(|conn| ttlog(conn, "init", &cfg.database, "Database initialized"))?;

    success(format!("Database initialized at {}", &cfg.database));
    Ok(())
}
