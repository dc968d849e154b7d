//! Branch-level derivations: the scaled monthly series and peer comparison.

use crate::model::{BranchMonth, BranchProfile};

use super::{round1, safe_ratio};

/// Collection rate at which a branch follows the base series unscaled.
pub const BASELINE_RATE: f64 = 94.0;

/// Position of the current month in the branch series.
pub const CURRENT_MONTH_INDEX: usize = 5;

/// Position of the most recent month with both an actual and a forecast
/// worth checking.
pub const FORECAST_CHECK_INDEX: usize = 4;

/// Scale factor applied to the base series for a branch.
///
/// Unknown branch codes fall back to 1.0.
#[must_use]
pub fn performance_multiplier(branches: &[BranchProfile], code: &str) -> f64 {
    branches
        .iter()
        .find(|b| b.code == code)
        .map_or(1.0, |b| b.collection_rate / BASELINE_RATE)
}

/// The base monthly series scaled to a branch's performance.
///
/// Amounts are rounded to whole rupees and percentages to one decimal.
/// A missing or zero collection (and rate) stays absent.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn branch_monthly_series(
    base: &[BranchMonth],
    branches: &[BranchProfile],
    code: &str,
) -> Vec<BranchMonth> {
    let multiplier = performance_multiplier(branches, code);
    base.iter()
        .map(|month| BranchMonth {
            month: month.month.clone(),
            total_due: month.total_due,
            total_collection: month
                .total_collection
                .filter(|c| *c != 0.0)
                .map(|c| (c * multiplier).round()),
            forecast: (month.forecast * multiplier).round(),
            collection_rate: month
                .collection_rate
                .filter(|r| *r != 0.0)
                .map(|r| round1(r * multiplier)),
            efficiency: round1(month.efficiency * multiplier),
        })
        .collect()
}

/// Collection for the current month, 0 when it has no actuals yet.
#[must_use]
pub fn current_month_collection(series: &[BranchMonth]) -> f64 {
    series
        .get(CURRENT_MONTH_INDEX)
        .and_then(|m| m.total_collection)
        .unwrap_or(0.0)
}

/// Actual over forecast for the check month, as a percentage.
#[must_use]
pub fn forecast_accuracy(series: &[BranchMonth]) -> f64 {
    series
        .get(FORECAST_CHECK_INDEX)
        .and_then(|m| m.total_collection.map(|c| safe_ratio(c, m.forecast) * 100.0))
        .unwrap_or(0.0)
}

/// Uncollected dues in the current month.
#[must_use]
pub fn collection_opportunity(series: &[BranchMonth]) -> f64 {
    series.get(CURRENT_MONTH_INDEX).map_or(0.0, |m| {
        m.total_due - m.total_collection.unwrap_or(0.0)
    })
}

/// The comparison baseline for a branch.
///
/// Prefers another branch in the same region with the same size band and
/// falls back to the first other branch.
#[must_use]
pub fn find_peer<'a>(
    branches: &'a [BranchProfile],
    selected: &BranchProfile,
) -> Option<&'a BranchProfile> {
    let others = || branches.iter().filter(|b| b.code != selected.code);
    others()
        .find(|b| b.region == selected.region && b.size == selected.size)
        .or_else(|| others().next())
}

/// How a branch stacks up against its peer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeerComparison {
    /// Peer rate minus selected rate, in percentage points.
    pub performance_gap: f64,
    /// Peer policies minus selected policies.
    pub policy_gap: i64,
    /// Extra collection if the selected branch matched the peer's rate.
    pub opportunity: f64,
}

impl PeerComparison {
    #[must_use]
    pub fn between(selected: &BranchProfile, peer: &BranchProfile) -> Self {
        let performance_gap = peer.collection_rate - selected.collection_rate;
        Self {
            performance_gap,
            policy_gap: i64::from(peer.policies) - i64::from(selected.policies),
            opportunity: performance_gap / 100.0 * selected.collections,
        }
    }
}
