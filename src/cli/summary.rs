//! Summary command handler.
//!
//! Prints the overview KPIs, the latest month and the insights without
//! starting the terminal UI.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::data::DashboardData;
use crate::metrics::{
    format_grouped, format_millions, format_percent, format_signed_percent, monthly_performance,
    overview_insights, record_totals, Insight, MonthlyPerformance, RecordTotals,
};
use crate::model::{FilterSelection, KpiOverview};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Plain text for terminals
    #[default]
    Text,
    /// JSON for scripts
    Json,
}

/// Everything the summary prints.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub kpi: KpiOverview,
    pub latest_month: MonthlyPerformance,
    pub records: RecordTotals,
    pub insights: Vec<Insight>,
}

#[must_use]
pub fn build_summary(data: &DashboardData, filters: &FilterSelection) -> Summary {
    Summary {
        kpi: data.kpi.clone(),
        latest_month: monthly_performance(&data.monthly_trends),
        records: record_totals(data.filtered_renewals(filters)),
        insights: overview_insights(data),
    }
}

/// Human-readable rendering of a [`Summary`].
#[must_use]
pub fn render_summary_text(summary: &Summary) -> String {
    let kpi = &summary.kpi;
    let mut out = String::new();

    let _ = writeln!(out, "Renewals Dashboard Summary");
    let _ = writeln!(out, "==========================");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Total Policies:       {:>10}  ({} vs last month)",
        format_grouped(i64::from(kpi.total_policies)),
        format_signed_percent(kpi.trends.policies)
    );
    let _ = writeln!(
        out,
        "Collection Rate:      {:>10}  ({})",
        format_percent(kpi.collection_rate),
        format_signed_percent(kpi.trends.collection_rate)
    );
    let _ = writeln!(
        out,
        "Total Collections:    {:>10}  of {} due",
        format_millions(kpi.total_collections),
        format_millions(kpi.total_dues)
    );
    let _ = writeln!(
        out,
        "Concerning Cases:     {:>10}  ({})",
        kpi.concerning_policies,
        format_signed_percent(kpi.trends.concerning_cases)
    );
    let _ = writeln!(
        out,
        "Premium Leakage:      {:>10}",
        format_millions(kpi.premium_leakage)
    );
    let _ = writeln!(
        out,
        "Surrender Propensity: {:>10}",
        format_percent(kpi.surrender_propensity)
    );

    let month = &summary.latest_month;
    if !month.month.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Latest month ({})", month.month);
        let _ = writeln!(
            out,
            "  Collections {} ({}), gap {}, {}-month average {}",
            format_millions(month.collections),
            format_signed_percent(month.collections_change),
            format_millions(month.collection_gap),
            month.history_months,
            format_percent(month.average_rate)
        );
    }

    let records = &summary.records;
    if records.records > 0 {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Renewal records: {} ({} concerning), {} collected of {} due ({})",
            records.records,
            records.concerning,
            format_millions(records.collected),
            format_millions(records.dues),
            format_percent(records.collection_rate())
        );
    }

    if !summary.insights.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Insights");
        for insight in &summary.insights {
            let _ = writeln!(out, "  - {}: {}", insight.title, insight.message);
        }
    }
    out
}

/// Run the summary command
pub fn run_summary(
    data: &DashboardData,
    filters: &FilterSelection,
    format: SummaryFormat,
    out: &mut dyn Write,
) -> Result<i32> {
    let summary = build_summary(data, filters);
    match format {
        SummaryFormat::Text => out.write_all(render_summary_text(&summary).as_bytes())?,
        SummaryFormat::Json => {
            let json =
                serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;

    #[test]
    fn test_text_summary_has_headline_numbers() {
        let summary = build_summary(&mock::dashboard_data(), &FilterSelection::new());
        let text = render_summary_text(&summary);
        assert!(text.contains("12,847"));
        assert!(text.contains("91.1%"));
        assert!(text.contains("₹58.4M"));
        assert!(text.contains("Immediate Actions"));
    }

    #[test]
    fn test_json_summary_parses() {
        let mut buf = Vec::new();
        let code = run_summary(
            &mock::dashboard_data(),
            &FilterSelection::new(),
            SummaryFormat::Json,
            &mut buf,
        )
        .unwrap();
        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["kpi"]["total_policies"], 12_847);
        assert_eq!(value["insights"].as_array().unwrap().len(), 3);
    }
}
