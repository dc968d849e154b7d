//! Table builders for each export scope.

use crate::data::DashboardData;
use crate::metrics::{
    branch_monthly_series, channel_badge, group_by_region, overview_insights, performance_label,
    risk_label, ChannelMetric,
};
use crate::model::{DashboardView, FilterSelection};

use super::table::{row, Report, Table};
use super::types::{ExportScope, ReportMetadata};

/// Build the tables for a scope.
///
/// Returns `None` for [`ExportScope::All`], which exports the dataset itself
/// rather than tables.
#[must_use]
pub fn build_report(
    data: &DashboardData,
    scope: ExportScope,
    filters: &FilterSelection,
) -> Option<Report> {
    let sections = match scope {
        ExportScope::View(DashboardView::Overview) => overview_tables(data),
        ExportScope::View(DashboardView::Branch) => branch_tables(data),
        ExportScope::View(DashboardView::Product) => product_tables(data),
        ExportScope::View(DashboardView::Concerning) => vec![concerning_table(data, filters)],
        ExportScope::View(DashboardView::Channel) => channel_tables(data),
        ExportScope::View(DashboardView::Regional) => regional_tables(data),
        ExportScope::Renewals => renewal_tables(data, filters),
        ExportScope::All => return None,
    };
    Some(Report {
        metadata: ReportMetadata::new(scope, filters),
        sections,
    })
}

/// A copy of the dataset with record-level tables narrowed by `filters`.
#[must_use]
pub fn filtered_dataset(data: &DashboardData, filters: &FilterSelection) -> DashboardData {
    DashboardData {
        renewals: data.filtered_renewals(filters).cloned().collect(),
        concerning_cases: data.filtered_cases(filters).cloned().collect(),
        ..data.clone()
    }
}

fn overview_tables(data: &DashboardData) -> Vec<Table> {
    let kpi = &data.kpi;
    let mut metrics = Table::new("Key Metrics", &["Metric", "Value", "Trend (%)"]);
    metrics.push(row!["Total Policies", kpi.total_policies, kpi.trends.policies]);
    metrics.push(row!["Total Dues", kpi.total_dues, None::<f64>]);
    metrics.push(row!["Total Collections", kpi.total_collections, kpi.trends.collections]);
    metrics.push(row!["Collection Rate (%)", kpi.collection_rate, kpi.trends.collection_rate]);
    metrics.push(row![
        "Concerning Cases",
        kpi.concerning_policies,
        kpi.trends.concerning_cases
    ]);
    metrics.push(row!["Premium Leakage", kpi.premium_leakage, None::<f64>]);
    metrics.push(row!["Surrender Propensity (%)", kpi.surrender_propensity, None::<f64>]);
    metrics.push(row!["Payment Methods", data.payment_mechanisms.len(), None::<f64>]);
    metrics.push(row!["Product Portfolio", data.products.len(), None::<f64>]);

    let mut regions = Table::new(
        "Regional Performance",
        &["Region", "Policies", "Collection Rate (%)", "Collections"],
    );
    for r in &data.regions {
        regions.push(row![&r.region, r.policies, r.collection_rate, r.collections]);
    }

    let mut products = Table::new(
        "Product Contribution",
        &["Product", "Contribution (%)", "Amount"],
    );
    for p in &data.products {
        products.push(row![&p.product, p.contribution, p.amount]);
    }

    let mut mechanisms = Table::new(
        "Payment Mechanism Success",
        &["Mechanism", "Success Rate (%)", "Average Collection"],
    );
    for m in &data.payment_mechanisms {
        mechanisms.push(row![&m.mechanism, m.success_rate, m.avg_collection]);
    }

    let mut channels = Table::new(
        "Channel Performance",
        &["Channel", "Score", "Policies", "Collections"],
    );
    for c in &data.channels {
        channels.push(row![&c.channel, c.score, c.policies, c.collections]);
    }

    let mut concerning = Table::new(
        "Concerning Cases by Product",
        &["Product", "Cases", "Potential Loss"],
    );
    for c in &data.concerning_summary {
        concerning.push(row![&c.product, c.cases, c.potential_loss]);
    }

    let mut trends = Table::new(
        "Monthly Trends",
        &[
            "Month",
            "Policies",
            "Collection Rate (%)",
            "Collections",
            "Total Due",
        ],
    );
    for t in &data.monthly_trends {
        trends.push(row![
            &t.month,
            t.policies,
            t.collection_rate,
            t.collections,
            t.total_due().round()
        ]);
    }

    let mut insights = Table::new("Insights", &["Title", "Message"]);
    for insight in overview_insights(data) {
        insights.push(row![insight.title, insight.message]);
    }

    vec![
        metrics, regions, products, mechanisms, channels, concerning, trends, insights,
    ]
}

fn branch_tables(data: &DashboardData) -> Vec<Table> {
    let mut branches = Table::new(
        "Branches",
        &[
            "Code",
            "Name",
            "Region",
            "Size",
            "Manager",
            "Policies",
            "Collections",
            "Collection Rate (%)",
            "Productivity",
            "Growth (%)",
            "Risk Score",
            "Performance",
            "Risk",
        ],
    );
    for b in &data.branches {
        branches.push(row![
            &b.code,
            &b.name,
            &b.region,
            b.size.label(),
            &b.manager,
            b.policies,
            b.collections,
            b.collection_rate,
            b.productivity,
            b.growth,
            b.risk_score,
            performance_label(b.collection_rate),
            risk_label(b.risk_score)
        ]);
    }

    let mut monthly = Table::new(
        "Branch Monthly Series",
        &[
            "Branch",
            "Month",
            "Total Due",
            "Collection",
            "Forecast",
            "Collection Rate (%)",
            "Efficiency (%)",
        ],
    );
    for b in &data.branches {
        for m in branch_monthly_series(&data.branch_monthly_base, &data.branches, &b.code) {
            monthly.push(row![
                &b.code,
                m.month,
                m.total_due,
                m.total_collection,
                m.forecast,
                m.collection_rate,
                m.efficiency
            ]);
        }
    }

    let mut productivity = Table::new(
        "Branch Productivity",
        &["Branch", "Region", "Productivity", "Active Policies"],
    );
    for p in &data.branch_productivity {
        productivity.push(row![&p.branch, &p.region, p.productivity, p.active_policies]);
    }

    vec![branches, monthly, productivity]
}

fn product_tables(data: &DashboardData) -> Vec<Table> {
    let mut lines = Table::new(
        "Product Lines",
        &[
            "Product",
            "Contribution (%)",
            "Amount",
            "Policies",
            "Growth (%)",
            "Average Premium",
        ],
    );
    let mut subs = Table::new(
        "Sub-Products",
        &["Product", "Sub-Product", "Contribution (%)", "Amount", "Policies"],
    );
    for p in &data.product_lines {
        lines.push(row![
            &p.name,
            p.contribution,
            p.amount,
            p.policies,
            p.growth,
            p.avg_premium
        ]);
        for s in &p.sub_products {
            subs.push(row![&p.name, &s.name, s.contribution, s.amount, s.policies]);
        }
    }
    vec![lines, subs]
}

fn concerning_table(data: &DashboardData, filters: &FilterSelection) -> Table {
    let mut cases = Table::new(
        "Concerning Cases",
        &[
            "Policy",
            "Customer",
            "Phone",
            "Email",
            "Branch",
            "Region",
            "Product",
            "Due Days",
            "Dues",
            "Claims",
            "Withdrawals",
            "Last Contact",
            "Risk Score",
            "Risk",
            "Reasons",
            "Actions",
        ],
    );
    for c in data.filtered_cases(filters) {
        cases.push(row![
            &c.policy_number,
            &c.customer.name,
            &c.customer.phone,
            &c.customer.email,
            &c.branch_code,
            &c.region,
            &c.product,
            c.due_days,
            c.dues,
            c.claims,
            c.withdrawals,
            c.last_contact.to_string(),
            c.risk_score,
            c.risk_band().label(),
            c.reasons.join("; "),
            c.actions.join("; ")
        ]);
    }
    cases
}

fn channel_tables(data: &DashboardData) -> Vec<Table> {
    let mut metrics = Table::new(
        "Channel Metrics",
        &[
            "Channel",
            "Policies",
            "Collections",
            "Collection Rate (%)",
            "Average Deal Size",
            "Conversion Rate (%)",
            "Customer Satisfaction",
            "Growth (%)",
            "Cost per Acquisition",
            "Retention Rate (%)",
            "Profitability (%)",
        ],
    );
    let mut ratings = Table::new(
        "Channel Ratings",
        &[
            "Channel",
            "Collection Rate",
            "Growth",
            "Profitability",
            "Customer Satisfaction",
        ],
    );
    for c in &data.channel_metrics {
        metrics.push(row![
            &c.channel,
            c.policies,
            c.collections,
            c.collection_rate,
            c.avg_deal_size,
            c.conversion_rate,
            c.customer_satisfaction,
            c.growth,
            c.cost_per_acquisition,
            c.retention_rate,
            c.profitability
        ]);
        ratings.push(row![
            &c.channel,
            channel_badge(c.collection_rate, ChannelMetric::CollectionRate).label,
            channel_badge(c.growth, ChannelMetric::Growth).label,
            channel_badge(c.profitability, ChannelMetric::Profitability).label,
            channel_badge(c.customer_satisfaction, ChannelMetric::CustomerSatisfaction).label
        ]);
    }
    vec![metrics, ratings]
}

fn regional_tables(data: &DashboardData) -> Vec<Table> {
    let mut regions = Table::new(
        "Regions",
        &[
            "Region",
            "Branches",
            "Policies",
            "Collection Rate (%)",
            "Collections",
            "Growth (%)",
        ],
    );
    let mut top = Table::new(
        "Top Branches",
        &[
            "Region",
            "Code",
            "Name",
            "Policies",
            "Collection Rate (%)",
            "Standing",
        ],
    );
    for r in &data.region_details {
        regions.push(row![
            &r.region,
            r.branches,
            r.policies,
            r.collection_rate,
            r.collections,
            r.growth
        ]);
        for b in &r.top_branches {
            let standing = if r.is_above_average(b) {
                "Above Avg"
            } else {
                "Below Avg"
            };
            top.push(row![
                &r.region,
                &b.code,
                &b.name,
                b.policies,
                b.collection_rate,
                standing
            ]);
        }
    }
    vec![regions, top]
}

fn renewal_tables(data: &DashboardData, filters: &FilterSelection) -> Vec<Table> {
    let mut records = Table::new(
        "Renewals",
        &[
            "Policy",
            "Branch",
            "Bank Technical ID",
            "Channel",
            "Region",
            "Product",
            "Payment Mechanism",
            "In Force",
            "Claims",
            "Withdrawals",
            "Due Month",
            "Dues",
            "Collection Month",
            "Collected",
            "Collection Rate (%)",
            "Concerning",
        ],
    );
    for r in data.filtered_renewals(filters) {
        records.push(row![
            &r.policy_number,
            &r.branch_code,
            &r.bank_technical_id,
            &r.channel,
            &r.region,
            &r.product,
            &r.payment_mechanism,
            r.inforce_count,
            r.claim_count,
            r.withdrawal_count,
            &r.due_month,
            r.dues,
            &r.collection_month,
            r.collected,
            crate::metrics::round1(r.collection_rate()),
            if r.is_concerning() { "Yes" } else { "No" }
        ]);
    }

    let mut totals = Table::new(
        "Totals by Region",
        &[
            "Region",
            "Records",
            "Dues",
            "Collected",
            "Collection Rate (%)",
            "Leakage",
            "Concerning",
        ],
    );
    for (region, t) in group_by_region(data.filtered_renewals(filters)) {
        totals.push(row![
            region,
            t.records,
            t.dues,
            t.collected,
            crate::metrics::round1(t.collection_rate()),
            t.leakage(),
            t.concerning
        ]);
    }
    vec![records, totals]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;
    use crate::model::FilterField;
    use crate::reports::Cell;

    fn report(scope: ExportScope) -> Report {
        build_report(&mock::dashboard_data(), scope, &FilterSelection::new()).unwrap()
    }

    #[test]
    fn test_all_scope_has_no_tables() {
        let data = mock::dashboard_data();
        assert!(build_report(&data, ExportScope::All, &FilterSelection::new()).is_none());
    }

    #[test]
    fn test_every_view_builds_tables() {
        for view in DashboardView::ALL {
            let report = report(view.into());
            assert!(!report.sections.is_empty(), "{view} has no tables");
            for table in &report.sections {
                for row in &table.rows {
                    assert_eq!(row.len(), table.headers.len(), "{}", table.title);
                }
            }
        }
    }

    #[test]
    fn test_overview_rates_match_stored_values() {
        let data = mock::dashboard_data();
        let report = report(DashboardView::Overview.into());
        let regions = &report.sections[1];
        for (row, region) in regions.rows.iter().zip(&data.regions) {
            assert_eq!(row[2], Cell::Number(region.collection_rate));
        }
    }

    #[test]
    fn test_product_subrows_flattened() {
        let report = report(DashboardView::Product.into());
        assert_eq!(report.sections[1].len(), 15);
    }

    #[test]
    fn test_branch_series_covers_every_branch() {
        let report = report(DashboardView::Branch.into());
        assert_eq!(report.sections[1].len(), 5 * 9);
    }

    #[test]
    fn test_concerning_respects_filters() {
        let data = mock::dashboard_data();
        let filters = FilterSelection::new().update(FilterField::Region, "East");
        let report = build_report(&data, DashboardView::Concerning.into(), &filters).unwrap();
        assert_eq!(report.sections[0].len(), 1);
        assert_eq!(report.sections[0].rows[0][0], Cell::from("POL005678"));
        assert!(report.metadata.filters.is_some());
    }

    #[test]
    fn test_renewal_totals_follow_filters() {
        let data = mock::dashboard_data();
        let filters = FilterSelection::new().update(FilterField::Region, "South");
        let report = build_report(&data, ExportScope::Renewals, &filters).unwrap();
        assert_eq!(report.sections[1].len(), 1);
        assert_eq!(report.sections[1].rows[0][0], Cell::from("South"));
    }

    #[test]
    fn test_filtered_dataset_keeps_aggregates() {
        let data = mock::dashboard_data();
        let filters = FilterSelection::new().update(FilterField::Region, "North");
        let filtered = filtered_dataset(&data, &filters);
        assert_eq!(filtered.regions, data.regions);
        assert!(filtered.renewals.iter().all(|r| r.region == "North"));
        assert_eq!(filtered.concerning_cases.len(), 1);
    }
}
