use crate::cli::parser::Commands;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, pool: &DbPool) -> AppResult<()> {
    if let Commands::Db {
        info,
        check,
        vacuum,
    } = cmd
    {
        //
        // 1) INFO (also the default when no flag is given)
        //
        if *info || !(*check || *vacuum) {
            stats::print_db_info(pool)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool.with_conn(|conn| {
                Ok(conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?)
            })?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.with_conn(|conn| Ok(conn.execute_batch("VACUUM;")?))?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
