//! CLI command handlers.
//!
//! Each handler implements one subcommand and returns the process exit
//! code; `main.rs` only parses arguments and dispatches.

mod config;
mod dashboard;
mod export;
mod summary;

pub use config::{run_config_init, run_config_path, run_config_show};
pub use dashboard::{run_dashboard, DashboardOptions};
pub use export::{parse_month_arg, run_export, ExportRequest};
pub use summary::{build_summary, render_summary_text, run_summary, Summary, SummaryFormat};

use crate::config::AppConfig;
use crate::data::{load_from, source_for, DashboardData};
use anyhow::{Context, Result};

/// Load the dataset named by the effective config, or the built-in sample.
pub fn load_data(config: &AppConfig) -> Result<DashboardData> {
    let source = source_for(config.data.source.as_deref());
    load_from(source.as_ref()).with_context(|| format!("failed to load {}", source.name()))
}
