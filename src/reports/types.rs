//! Export type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DashboardError, ExportErrorKind};
use crate::model::{DashboardView, FilterSelection};

/// Output format for exports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Structured JSON output
    #[default]
    Json,
    /// CSV for spreadsheet import
    Csv,
    /// Human-readable Markdown tables
    #[value(alias = "md")]
    Markdown,
}

impl ExportFormat {
    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Markdown => "md",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// What an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// The tables behind one dashboard view
    View(DashboardView),
    /// The raw renewal records
    Renewals,
    /// The whole dataset, in the shape the JSON data source reads
    All,
}

impl ExportScope {
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "renewals" => Some(Self::Renewals),
            other => DashboardView::from_tag(other).map(Self::View),
        }
    }

    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::View(view) => view.tag(),
            Self::Renewals => "renewals",
            Self::All => "all",
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::View(view) => view.title(),
            Self::Renewals => "Renewal Records",
            Self::All => "Full Dataset",
        }
    }

    /// Whether filters narrow this export.
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        matches!(
            self,
            Self::View(DashboardView::Concerning) | Self::Renewals | Self::All
        )
    }

    /// Every accepted tag, for help and error messages.
    #[must_use]
    pub fn valid_tags() -> Vec<&'static str> {
        let mut tags: Vec<&'static str> = DashboardView::ALL.iter().map(DashboardView::tag).collect();
        tags.extend(["renewals", "all"]);
        tags
    }
}

impl From<DashboardView> for ExportScope {
    fn from(view: DashboardView) -> Self {
        Self::View(view)
    }
}

impl FromStr for ExportScope {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| {
            DashboardError::export(
                format!(
                    "'{}' is not one of {}",
                    s.trim(),
                    Self::valid_tags().join(", ")
                ),
                ExportErrorKind::UnknownView(s.trim().to_string()),
            )
        })
    }
}

impl fmt::Display for ExportScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Tool information embedded in JSON exports.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl Default for ToolInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Descriptive header for an export.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub tool: ToolInfo,
    pub generated_at: String,
    pub view: String,
    pub title: String,
    /// Filters that narrowed the export, when any were active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterSelection>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(scope: ExportScope, filters: &FilterSelection) -> Self {
        Self {
            tool: ToolInfo::default(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            view: scope.tag().to_string(),
            title: scope.title().to_string(),
            filters: (scope.is_filtered() && filters.has_active_filters()).then(|| filters.clone()),
        }
    }
}
