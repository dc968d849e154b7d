//! Markdown report generator.

use std::fmt::Write as _;

use super::escape::{escape_markdown_inline, escape_markdown_table};
use super::{Cell, ExportFormat, Report, ReportGenerator};
use crate::error::Result;

/// Markdown report generator: a heading, an optional filter line and one
/// table per section.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_report(&self, report: &Report) -> Result<String> {
        let mut md = String::new();
        let meta = &report.metadata;

        let _ = writeln!(md, "# Renewals Dashboard: {}", escape_markdown_inline(&meta.title));
        md.push('\n');
        if let Some(filters) = &meta.filters {
            let _ = writeln!(
                md,
                "**Filters:** {}",
                escape_markdown_inline(&filters.describe().join(", "))
            );
            md.push('\n');
        }

        for table in &report.sections {
            let _ = writeln!(md, "## {}", escape_markdown_inline(&table.title));
            md.push('\n');
            if table.is_empty() {
                md.push_str("_No rows._\n\n");
                continue;
            }

            let headers: Vec<String> = table
                .headers
                .iter()
                .map(|h| escape_markdown_table(h))
                .collect();
            let _ = writeln!(md, "| {} |", headers.join(" | "));
            let aligns: Vec<&str> = table
                .rows
                .first()
                .map(|first| {
                    first
                        .iter()
                        .map(|c| if c.is_text() { "---" } else { "---:" })
                        .collect()
                })
                .unwrap_or_default();
            let _ = writeln!(md, "|{}|", aligns.join("|"));

            for row in &table.rows {
                let cells: Vec<String> = row.iter().map(markdown_cell).collect();
                let _ = writeln!(md, "| {} |", cells.join(" | "));
            }
            md.push('\n');
        }
        Ok(md)
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }
}

fn markdown_cell(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => escape_markdown_table(s),
        Cell::Empty => "-".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DashboardView, FilterField, FilterSelection};
    use crate::reports::table::{row, Table};
    use crate::reports::ReportMetadata;

    fn report(filters: &FilterSelection, table: Table) -> Report {
        Report {
            metadata: ReportMetadata::new(DashboardView::Concerning.into(), filters),
            sections: vec![table],
        }
    }

    #[test]
    fn test_markdown_table_layout() {
        let mut table = Table::new("Cases", &["Policy", "Dues"]);
        table.push(row!["POL|1", 25_000.0]);
        let md = MarkdownReporter::new()
            .generate_report(&report(&FilterSelection::new(), table))
            .unwrap();
        assert!(md.starts_with("# Renewals Dashboard: Concerning Cases\n"));
        assert!(md.contains("| Policy | Dues |\n|---|---:|\n| POL\\|1 | 25000 |\n"));
        assert!(!md.contains("Filters"));
    }

    #[test]
    fn test_markdown_filters_and_empty_table() {
        let filters = FilterSelection::new().update(FilterField::Region, "West");
        let table = Table::new("Cases", &["Policy"]);
        let md = MarkdownReporter::new()
            .generate_report(&report(&filters, table))
            .unwrap();
        assert!(md.contains("**Filters:** Region: West"));
        assert!(md.contains("_No rows._"));
    }
}
