//! CSV report generator.
//!
//! Each table becomes a `# Title` line, a header row and its data rows,
//! with a blank line between tables. Text fields are always quoted.

use std::fmt::Write as _;

use super::escape::escape_csv;
use super::{Cell, ExportFormat, Report, ReportGenerator};
use crate::error::Result;

/// CSV report generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for CsvReporter {
    fn generate_report(&self, report: &Report) -> Result<String> {
        let mut content = String::new();
        for (i, table) in report.sections.iter().enumerate() {
            if i > 0 {
                content.push('\n');
            }
            let _ = writeln!(content, "# {}", table.title);
            let headers: Vec<String> = table.headers.iter().map(|h| csv_field(h)).collect();
            let _ = writeln!(content, "{}", headers.join(","));
            for row in &table.rows {
                let fields: Vec<String> = row.iter().map(csv_cell).collect();
                let _ = writeln!(content, "{}", fields.join(","));
            }
        }
        Ok(content)
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }
}

fn csv_field(s: &str) -> String {
    format!("\"{}\"", escape_csv(s))
}

fn csv_cell(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => csv_field(s),
        other => other.to_string(),
    }
}
