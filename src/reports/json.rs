//! JSON report generator.

use indexmap::IndexMap;
use serde::Serialize;

use super::{Cell, ExportFormat, Report, ReportGenerator, ReportMetadata};
use crate::data::DashboardData;
use crate::error::{DashboardError, ExportErrorKind, Result};

/// JSON report generator
#[derive(Debug, Clone, Copy)]
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Serialize a whole dataset in the shape `JsonFileSource` reads.
    pub fn generate_dataset(&self, data: &DashboardData) -> Result<String> {
        self.to_json(data)
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.map_err(|e| {
            DashboardError::export("serializing JSON", ExportErrorKind::Json(e.to_string()))
        })
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_report(&self, report: &Report) -> Result<String> {
        let sections = report
            .sections
            .iter()
            .map(|table| JsonSection {
                title: &table.title,
                rows: table
                    .rows
                    .iter()
                    .map(|row| table.headers.iter().copied().zip(row).collect())
                    .collect(),
            })
            .collect();
        self.to_json(&JsonReport {
            metadata: &report.metadata,
            sections,
        })
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: &'a ReportMetadata,
    sections: Vec<JsonSection<'a>>,
}

#[derive(Serialize)]
struct JsonSection<'a> {
    title: &'a str,
    rows: Vec<IndexMap<&'static str, &'a Cell>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DashboardView, FilterSelection};
    use crate::reports::table::{row, Table};

    #[test]
    fn test_json_rows_keyed_by_header() {
        let mut table = Table::new("Regions", &["Region", "Collection Rate (%)"]);
        table.push(row!["North", 94.2]);
        let report = Report {
            metadata: ReportMetadata::new(DashboardView::Overview.into(), &FilterSelection::new()),
            sections: vec![table],
        };
        let json = JsonReporter::new().pretty(false).generate_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["metadata"]["view"], "overview");
        assert_eq!(value["metadata"]["tool"]["name"], "renewals-dash");
        assert!(value["metadata"].get("filters").is_none());
        assert_eq!(value["sections"][0]["rows"][0]["Region"], "North");
        assert_eq!(value["sections"][0]["rows"][0]["Collection Rate (%)"], 94.2);
        assert!(json.find("\"Region\"") < json.find("\"Collection Rate (%)\""));
    }

    #[test]
    fn test_compact_output_has_no_newlines() {
        let data = crate::data::mock::dashboard_data();
        let json = JsonReporter::new().pretty(false).generate_dataset(&data).unwrap();
        assert!(!json.contains('\n'));
    }
}
