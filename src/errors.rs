//! Unified application error type.
//! All modules (db, core, cli, ui, export) return AppError so that every
//! failure is reported the same way at the point of the triggering command.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Domain taxonomy
    // ---------------------------
    /// A required field is missing or blank.
    #[error("Input error: {0}")]
    Validation(String),

    /// A date, time or number could not be parsed.
    #[error("Format error: {0}")]
    Format(String),

    /// End time is not after start time.
    #[error("Order error: {0}")]
    Order(String),

    /// A referenced project or session does not exist.
    #[error("Not found: {0}")]
    Lookup(String),

    /// An operation that needs a target row was invoked without one.
    #[error("Select error: {0}")]
    Selection(String),

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
