//! Exports of dashboard views.
//!
//! Every view is first flattened into format-neutral [`Table`]s, which the
//! reporters then render:
//! - JSON: structured data for automation
//! - CSV: spreadsheet import, one block per table
//! - Markdown: human-readable tables for documentation
//!
//! The `all` scope skips the tables and writes the filtered dataset itself,
//! in the shape the JSON data source reads back.
//!
//! # Escaping
//!
//! The `escape` module keeps free-text fields (customer names, reasons,
//! actions) from breaking CSV columns or Markdown tables.

mod csv;
pub mod escape;
mod json;
mod markdown;
mod table;
mod tables;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use table::{Cell, Report, Table};
pub use tables::{build_report, filtered_dataset};
pub use types::{ExportFormat, ExportScope, ReportMetadata, ToolInfo};

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::data::DashboardData;
use crate::error::{DashboardError, ExportErrorKind, Result};
use crate::model::FilterSelection;

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a report to a string.
    fn generate_report(&self, report: &Report) -> Result<String>;

    /// Write a report to a writer.
    fn write_report(&self, report: &Report, writer: &mut dyn Write) -> Result<()> {
        let content = self.generate_report(report)?;
        writer.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ExportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ExportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ExportFormat::Json => Box::new(JsonReporter::new()),
        ExportFormat::Csv => Box::new(CsvReporter::new()),
        ExportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

/// Render a scope in a format.
///
/// Filters narrow the record-level tables (renewals and concerning cases);
/// aggregate tables are exported as stored.
pub fn export_view(
    data: &DashboardData,
    scope: ExportScope,
    filters: &FilterSelection,
    format: ExportFormat,
) -> Result<String> {
    match build_report(data, scope, filters) {
        Some(report) => create_reporter(format).generate_report(&report),
        None if format == ExportFormat::Json => {
            JsonReporter::new().generate_dataset(&filtered_dataset(data, filters))
        }
        None => Err(DashboardError::export(
            format!("exporting {scope}"),
            ExportErrorKind::UnsupportedFormat {
                format: format.to_string(),
                view: scope.tag().to_string(),
            },
        )),
    }
}

/// Default file name for an export, e.g. `renewals-concerning-20250815-143000.csv`.
#[must_use]
pub fn default_file_name(scope: ExportScope, format: ExportFormat) -> String {
    format!(
        "renewals-{}-{}.{}",
        scope.tag(),
        chrono::Local::now().format("%Y%m%d-%H%M%S"),
        format.extension()
    )
}

/// Export a scope into a file, creating parent directories as needed.
pub fn export_to_file(
    data: &DashboardData,
    scope: ExportScope,
    filters: &FilterSelection,
    format: ExportFormat,
    path: &Path,
) -> Result<PathBuf> {
    let content = export_view(data, scope, filters, format)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| DashboardError::io(parent, e))?;
        }
    }
    std::fs::write(path, content).map_err(|e| DashboardError::io(path, e))?;
    tracing::debug!(path = %path.display(), %scope, %format, "export written");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{mock, DataSource, JsonFileSource};
    use crate::model::{DashboardView, FilterField};

    #[test]
    fn test_all_scope_rejects_tabular_formats() {
        let data = mock::dashboard_data();
        for format in [ExportFormat::Csv, ExportFormat::Markdown] {
            let err = export_view(&data, ExportScope::All, &FilterSelection::new(), format)
                .unwrap_err();
            assert!(matches!(
                err,
                DashboardError::Export {
                    source: ExportErrorKind::UnsupportedFormat { .. },
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_all_scope_roundtrips_through_json_source() {
        let data = mock::dashboard_data();
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("data.json");
        export_to_file(
            &data,
            ExportScope::All,
            &FilterSelection::new(),
            ExportFormat::Json,
            &path,
        )
        .unwrap();
        let loaded = JsonFileSource::new(&path).load().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_reporter_formats() {
        for format in [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Markdown] {
            assert_eq!(create_reporter(format).format(), format);
        }
    }

    #[test]
    fn test_write_report_to_writer() {
        let data = mock::dashboard_data();
        let filters = FilterSelection::new().update(FilterField::Branch, "BR002");
        let report = build_report(&data, DashboardView::Concerning.into(), &filters).unwrap();
        let mut buf = Vec::new();
        CsvReporter::new().write_report(&report, &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert!(csv.contains("\"POL009012\""));
        assert!(!csv.contains("\"POL001234\""));
    }

    #[test]
    fn test_default_file_name() {
        let name = default_file_name(DashboardView::Regional.into(), ExportFormat::Markdown);
        assert!(name.starts_with("renewals-regional-"));
        assert!(name.ends_with(".md"));
    }
}
