//! Export command handler.
//!
//! Implements the `export` subcommand: one view's table (or the whole
//! dataset) as JSON, CSV or Markdown, on stdout or into a file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::data::DashboardData;
use crate::model::{parse_month_tag, FilterSelection};
use crate::reports::{export_to_file, export_view, ExportFormat, ExportScope};

/// A fully resolved export invocation.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub scope: ExportScope,
    pub format: ExportFormat,
    /// Output file; stdout when `None`
    pub output: Option<PathBuf>,
    pub filters: FilterSelection,
}

/// Parse a month bound: `2025-06`, `2025-06-15` or a feed tag like `JUN-25`.
pub fn parse_month_arg(value: &str) -> std::result::Result<NaiveDate, String> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d"))
        .ok()
        .or_else(|| parse_month_tag(value))
        .ok_or_else(|| format!("'{value}' is not a month (use 2025-06 or JUN-25)"))
}

/// Run the export command
pub fn run_export(data: &DashboardData, request: &ExportRequest, out: &mut dyn Write) -> Result<i32> {
    if request.filters.has_active_filters() && !request.scope.is_filtered() {
        tracing::warn!(
            scope = %request.scope,
            "filters only narrow the renewals and concerning exports; ignoring them"
        );
    }

    match &request.output {
        Some(path) => {
            let written = export_to_file(data, request.scope, &request.filters, request.format, path)
                .with_context(|| format!("failed to export {}", request.scope))?;
            tracing::info!("Exported {} to {}", request.scope.title(), written.display());
        }
        None => {
            let content = export_view(data, request.scope, &request.filters, request.format)
                .with_context(|| format!("failed to export {}", request.scope))?;
            out.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                writeln!(out)?;
            }
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;
    use crate::model::{DashboardView, FilterField};

    #[test]
    fn test_parse_month_arg_forms() {
        let june = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(parse_month_arg("2025-06"), Ok(june));
        assert_eq!(parse_month_arg("JUN-25"), Ok(june));
        assert_eq!(
            parse_month_arg("2025-06-15"),
            Ok(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
        );
        assert!(parse_month_arg("june").is_err());
    }

    #[test]
    fn test_export_to_stdout() {
        let request = ExportRequest {
            scope: ExportScope::View(DashboardView::Concerning),
            format: ExportFormat::Csv,
            output: None,
            filters: FilterSelection::new().update(FilterField::Region, "South"),
        };
        let mut buf = Vec::new();
        run_export(&mock::dashboard_data(), &request, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("POL009012"));
        assert!(!text.contains("POL001234"));
    }

    #[test]
    fn test_all_as_csv_fails() {
        let request = ExportRequest {
            scope: ExportScope::All,
            format: ExportFormat::Csv,
            output: None,
            filters: FilterSelection::new(),
        };
        let mut buf = Vec::new();
        assert!(run_export(&mock::dashboard_data(), &request, &mut buf).is_err());
    }
}
