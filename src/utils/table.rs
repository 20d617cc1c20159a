//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::pad_display;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.to_string(),
                width: UnicodeWidthStr::width(*h),
            })
            .collect();
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row, widening columns to fit.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            let w = UnicodeWidthStr::width(cell.as_str());
            if w > col.width {
                col.width = w;
            }
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_display(&col.header, col.width));
            out.push_str("  ");
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push_str("  ");
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (cell, col) in row.iter().zip(&self.columns) {
                out.push_str(&pad_display(cell, col.width));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}
