//! **Terminal analytics for insurance policy renewals.**
//!
//! `renewals-dash` loads a renewals dataset (the built-in sample or a JSON
//! snapshot) and presents it as an interactive ratatui dashboard with six
//! tabs: portfolio overview, branch performance, product mix, concerning
//! cases, channel performance and regional breakdown. The same data feeds
//! a scriptable `summary` command and exporters for JSON, CSV and Markdown.
//!
//! ## Modules
//!
//! - **[`data`]**: the [`DashboardData`] tables and the [`DataSource`] trait
//!   with its mock and JSON-file implementations.
//! - **[`model`]**: record types, the [`FilterSelection`] and the
//!   [`DashboardView`] tabs.
//! - **[`metrics`]**: pure derived figures such as collection rates, branch
//!   series, peer gaps and the display formatters.
//! - **[`reports`]**: table builders and the exporters.
//! - **[`config`]**: YAML configuration, presets and saved TUI preferences.
//! - **[`tui`]**: the interactive dashboard.
//!
//! ## Getting Started
//!
//! ```no_run
//! use renewals_dash::{data, metrics, FilterSelection, MockDataSource};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = data::load_from(&MockDataSource)?;
//!     let totals = metrics::record_totals(dataset.filtered_renewals(&FilterSelection::new()));
//!
//!     println!(
//!         "{} records, {} collected",
//!         totals.records,
//!         metrics::format_percent(totals.collection_rate())
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ### Exporting a View
//!
//! ```no_run
//! use renewals_dash::{data, reports, DashboardView, ExportFormat, ExportScope, FilterSelection};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = data::load_from(&data::MockDataSource)?;
//!     let csv = reports::export_view(
//!         &dataset,
//!         ExportScope::View(DashboardView::Concerning),
//!         &FilterSelection::new(),
//!         ExportFormat::Csv,
//!     )?;
//!     print!("{csv}");
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Layout math and rupee figures convert between integer counts and f64
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    // State structs use bools for toggle flags
    clippy::struct_excessive_bools,
    clippy::unused_self,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod model;
pub mod reports;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset, TuiConfig};
pub use config::{ConfigError, Validatable};
pub use data::{DashboardData, DataSource, JsonFileSource, MockDataSource};
pub use error::{DashboardError, ErrorContext, OptionContext, Result};
pub use model::{ActiveView, DashboardView, FilterField, FilterSelection};
pub use reports::{ExportFormat, ExportScope, ReportGenerator};

pub use tui::{DashboardApp, ListNavigation, ListState, OverlayState, StatusMessage};
