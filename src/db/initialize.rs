use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(pool: &DbPool, reset: bool) -> AppResult<()> {
    pool.with_conn(|conn| run_pending_migrations(conn, reset))
}

/// Open the database at `path` and make sure its schema is current.
pub fn open_db(path: &str, reset: bool) -> AppResult<DbPool> {
    let pool = DbPool::new(path)?;
    init_db(&pool, reset)?;
    Ok(pool)
}
