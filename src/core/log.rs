use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

/// ANSI color for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add_project" | "add_session" => Colour::Green,
        "del_session" | "reset_schema" => Colour::Red,
        "edit_session" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(e: &LogEntry) -> String {
    let s = if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    };

    if s.chars().count() > MAX_OP_WIDTH {
        let mut cut: String = s.chars().take(MAX_OP_WIDTH - 3).collect();
        cut.push_str("...");
        cut
    } else {
        s
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Print the most recent `limit` audit lines, oldest first.
    pub fn print_log(pool: &DbPool, limit: usize) -> AppResult<()> {
        let mut entries = pool.with_conn(|conn| load_log(conn, limit))?;
        entries.reverse();

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let labels: Vec<String> = entries.iter().map(op_target).collect();
        let op_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for (e, label) in entries.iter().zip(labels) {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or_else(|_| e.date.clone());

            // Pad before coloring so ANSI codes do not skew the width.
            let padded = format!("{:<op_w$}", label, op_w = op_w);
            let (op, rest) = padded.split_at(e.operation.len().min(padded.len()));
            let colored = format!("{}{}", color_for_operation(&e.operation).paint(op), rest);

            println!(
                "{:>id_w$}: {} | {} => {}",
                e.id,
                date,
                colored,
                e.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
