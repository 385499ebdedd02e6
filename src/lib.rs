//! timetracker library root.
//! Exposes the CLI parser, the high-level run() function, and the store,
//! domain, presentation and export modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use db::initialize::open_db;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher.
///
/// Commands that touch the database open it here, once, and receive the
/// handle; the others never open it.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let open = || open_db(&cfg.database, cfg.reset_schema_on_start);

    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::BuildScript { .. } => cli::commands::build_script::handle(&cli.command),
        Commands::Project { action } => cli::commands::project::handle(action, &open()?),
        Commands::Session { action } => cli::commands::session::handle(action, cfg, &open()?),
        Commands::Summary => cli::commands::summary::handle(&open()?),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, &open()?),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, &open()?),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, &open()?),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, &open()?),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    init_tracing(&cfg.log_level);

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    tracing::debug!(db = %cfg.database, policy = %cfg.id_policy, "configuration loaded");

    dispatch(&cli, &cfg)
}
