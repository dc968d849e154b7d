//! Portfolio-level sums, averages and the overview insights.

use indexmap::IndexMap;
use serde::Serialize;

use crate::data::DashboardData;
use crate::model::{MonthlyTrend, RenewalRecord};

use super::format::{format_millions, format_percent};
use super::safe_ratio;

/// Mean of a set of rates, 0 for an empty set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_rate<I>(rates: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = rates
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), r| (sum + r, count + 1));
    safe_ratio(sum, count as f64)
}

/// Totals over a set of renewal records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordTotals {
    pub records: usize,
    pub dues: f64,
    pub collected: f64,
    pub claims: u64,
    pub withdrawals: u64,
    pub concerning: usize,
}

impl RecordTotals {
    fn add(&mut self, record: &RenewalRecord) {
        self.records += 1;
        self.dues += record.dues;
        self.collected += record.collected;
        self.claims += u64::from(record.claim_count);
        self.withdrawals += u64::from(record.withdrawal_count);
        if record.is_concerning() {
            self.concerning += 1;
        }
    }

    #[must_use]
    pub fn collection_rate(&self) -> f64 {
        safe_ratio(self.collected, self.dues) * 100.0
    }

    /// Dues not collected.
    #[must_use]
    pub fn leakage(&self) -> f64 {
        (self.dues - self.collected).max(0.0)
    }
}

#[must_use]
pub fn record_totals<'a, I>(records: I) -> RecordTotals
where
    I: IntoIterator<Item = &'a RenewalRecord>,
{
    let mut totals = RecordTotals::default();
    for record in records {
        totals.add(record);
    }
    totals
}

/// Record totals per region, in first-seen order.
#[must_use]
pub fn group_by_region<'a, I>(records: I) -> IndexMap<String, RecordTotals>
where
    I: IntoIterator<Item = &'a RenewalRecord>,
{
    let mut groups: IndexMap<String, RecordTotals> = IndexMap::new();
    for record in records {
        groups
            .entry(record.region.clone())
            .or_default()
            .add(record);
    }
    groups
}

/// Average of `collections / total_due` over every month except the
/// latest, as a percentage. Needs at least two months.
#[must_use]
pub fn average_historical_rate(trends: &[MonthlyTrend]) -> f64 {
    match trends.split_last() {
        Some((_, history)) if !history.is_empty() => average_rate(
            history
                .iter()
                .map(|t| safe_ratio(t.collections, t.total_due()) * 100.0),
        ),
        _ => 0.0,
    }
}

/// The latest month of the portfolio trend table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlyPerformance {
    pub month: String,
    pub collections: f64,
    pub total_due: f64,
    /// Dues left uncollected in the latest month.
    pub collection_gap: f64,
    /// Change in collections against the previous month, in percent.
    pub collections_change: f64,
    pub average_rate: f64,
    /// Number of months behind `average_rate`.
    pub history_months: usize,
}

#[must_use]
pub fn monthly_performance(trends: &[MonthlyTrend]) -> MonthlyPerformance {
    let Some(latest) = trends.last() else {
        return MonthlyPerformance::default();
    };
    let total_due = latest.total_due();
    let previous = trends
        .len()
        .checked_sub(2)
        .and_then(|i| trends.get(i))
        .map_or(0.0, |t| t.collections);
    let collections_change = if previous > 0.0 {
        safe_ratio(latest.collections - previous, previous) * 100.0
    } else {
        0.0
    };

    MonthlyPerformance {
        month: latest.month.clone(),
        collections: latest.collections,
        total_due,
        collection_gap: (total_due - latest.collections).max(0.0),
        collections_change,
        average_rate: average_historical_rate(trends),
        history_months: trends.len().saturating_sub(1),
    }
}

/// A headline recommendation on the overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub title: &'static str,
    pub message: String,
}

/// The three overview insights, worded from the current tables.
#[must_use]
pub fn overview_insights(data: &DashboardData) -> Vec<Insight> {
    let immediate = format!(
        "{} concerning cases requiring immediate attention. Focus on policies with \
         claims/withdrawals but zero collections.",
        data.kpi.concerning_policies
    );

    let best_mechanism = data
        .payment_mechanisms
        .iter()
        .max_by(|a, b| a.success_rate.total_cmp(&b.success_rate));
    let revenue = match best_mechanism {
        Some(m) => format!(
            "{} premium leakage identified. {} shows highest success rate at {}.",
            format_millions(data.kpi.premium_leakage),
            m.mechanism,
            format_percent(m.success_rate)
        ),
        None => format!(
            "{} premium leakage identified.",
            format_millions(data.kpi.premium_leakage)
        ),
    };

    let best_region = data
        .regions
        .iter()
        .max_by(|a, b| a.collection_rate.total_cmp(&b.collection_rate));
    let best_channel = data
        .channels
        .iter()
        .max_by(|a, b| a.collections.total_cmp(&b.collections));
    let mut leaders = Vec::new();
    if let Some(region) = best_region {
        leaders.push(format!(
            "{} region leads with {} collection rate.",
            region.region,
            format_percent(region.collection_rate)
        ));
    }
    if let Some(channel) = best_channel {
        leaders.push(format!(
            "{} channel shows strongest performance.",
            channel.channel
        ));
    }
    if leaders.is_empty() {
        leaders.push("No regional or channel data loaded.".to_string());
    }

    vec![
        Insight {
            title: "Immediate Actions",
            message: immediate,
        },
        Insight {
            title: "Revenue Opportunity",
            message: revenue,
        },
        Insight {
            title: "Performance Leaders",
            message: leaders.join(" "),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;

    fn trend(month: &str, rate: f64, collections: f64) -> MonthlyTrend {
        MonthlyTrend {
            month: month.to_string(),
            policies: 100,
            collection_rate: rate,
            collections,
        }
    }

    #[test]
    fn test_totals_hold_counts_past_u32() {
        let mut record = mock::dashboard_data().renewals[0].clone();
        record.claim_count = u32::MAX;
        record.withdrawal_count = u32::MAX;
        let totals = record_totals([&record, &record]);
        assert_eq!(totals.claims, 2 * u64::from(u32::MAX));
        assert_eq!(totals.withdrawals, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_average_rate_empty_is_zero() {
        assert_eq!(average_rate(std::iter::empty()), 0.0);
        assert!((average_rate([90.0, 92.0]) - 91.0).abs() < 1e-9);
    }

    #[test]
    fn test_historical_rate_skips_latest_month() {
        let trends = vec![
            trend("JAN-25", 80.0, 800.0),
            trend("FEB-25", 90.0, 900.0),
            trend("MAR-25", 10.0, 100.0),
        ];
        assert!((average_historical_rate(&trends) - 85.0).abs() < 1e-9);
        assert_eq!(average_historical_rate(&trends[..1]), 0.0);
        assert_eq!(average_historical_rate(&[]), 0.0);
    }

    #[test]
    fn test_monthly_performance_latest() {
        let trends = vec![trend("JUL-25", 90.0, 900.0), trend("AUG-25", 80.0, 990.0)];
        let perf = monthly_performance(&trends);
        assert_eq!(perf.month, "AUG-25");
        assert!((perf.total_due - 1237.5).abs() < 1e-9);
        assert!((perf.collection_gap - 247.5).abs() < 1e-9);
        assert!((perf.collections_change - 10.0).abs() < 1e-9);
        assert_eq!(perf.history_months, 1);
        assert_eq!(monthly_performance(&[]), MonthlyPerformance::default());
    }

    #[test]
    fn test_group_by_region_preserves_order() {
        let data = mock::dashboard_data();
        let groups = group_by_region(&data.renewals);
        let first = groups.keys().next().map(String::as_str);
        assert_eq!(first, Some(data.renewals[0].region.as_str()));
        let total: usize = groups.values().map(|t| t.records).sum();
        assert_eq!(total, data.renewals.len());
    }

    #[test]
    fn test_overview_insights_follow_data() {
        let data = mock::dashboard_data();
        let insights = overview_insights(&data);
        assert_eq!(insights.len(), 3);
        assert!(insights[0].message.starts_with("342 concerning cases"));
        assert_eq!(
            insights[1].message,
            "₹5.8M premium leakage identified. Auto Debit shows highest success rate at 94.7%."
        );
        assert_eq!(
            insights[2].message,
            "North region leads with 94.2% collection rate. Direct Sales channel shows strongest performance."
        );
    }

    #[test]
    fn test_insights_on_empty_tables() {
        let mut data = mock::dashboard_data();
        data.payment_mechanisms.clear();
        data.regions.clear();
        data.channels.clear();
        let insights = overview_insights(&data);
        assert_eq!(insights[1].message, "₹5.8M premium leakage identified.");
        assert_eq!(insights[2].message, "No regional or channel data loaded.");
    }
}
