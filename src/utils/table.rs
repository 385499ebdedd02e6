//! Table rendering utilities for CLI outputs.

use crate::utils::colors::{BOLD, RESET};

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align_right: bool,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: header.len(),
            align_right: false,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            align_right: true,
            ..Self::left(header)
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row, widening columns to fit. Missing cells render empty.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(row.iter()) {
            col.width = col.width.max(cell.chars().count());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        out.push_str(BOLD);
        for col in &self.columns {
            out.push_str(&Self::cell(&col.header, col));
        }
        out.push_str(RESET);
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&"-".repeat(total.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&Self::cell(value, col));
            }
            out.push('\n');
        }

        out
    }

    fn cell(value: &str, col: &Column) -> String {
        if col.align_right {
            format!("{:>width$} ", value, width = col.width)
        } else {
            format!("{:<width$} ", value, width = col.width)
        }
    }
}
