//! Derived figures for the dashboard.
//!
//! Everything here is a pure function of the loaded tables: ratios and
//! averages, the scaled branch series, peer comparisons, threshold labels
//! and the display formatters shared by the TUI, the summary command and
//! the exporters.

mod aggregate;
mod branch;
mod format;
mod labels;

pub use aggregate::{
    average_historical_rate, average_rate, group_by_region, monthly_performance,
    overview_insights, record_totals, Insight, MonthlyPerformance, RecordTotals,
};
pub use branch::{
    branch_monthly_series, collection_opportunity, current_month_collection, find_peer,
    forecast_accuracy, performance_multiplier, PeerComparison, BASELINE_RATE,
    CURRENT_MONTH_INDEX, FORECAST_CHECK_INDEX,
};
pub use format::{
    format_grouped, format_inr, format_millions, format_millions_precise, format_percent,
    format_signed, format_signed_percent, format_thousands,
};
pub use labels::{
    channel_badge, performance_label, risk_label, trend_label, Badge, BadgeLevel,
    ChannelMetric,
};

/// `numerator / denominator`, or 0 when the result would not be finite.
#[must_use]
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !numerator.is_finite() || !denominator.is_finite() {
        return 0.0;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

/// Round to one decimal place.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_ratio_guards() {
        assert_eq!(safe_ratio(5.0, 0.0), 0.0);
        assert_eq!(safe_ratio(f64::NAN, 2.0), 0.0);
        assert_eq!(safe_ratio(1.0, f64::INFINITY), 0.0);
        assert_eq!(safe_ratio(f64::MAX, f64::MIN_POSITIVE), 0.0);
        assert!((safe_ratio(1.0, 4.0) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round1() {
        assert!((round1(92.04) - 92.0).abs() < 1e-9);
        assert!((round1(95.26) - 95.3).abs() < 1e-9);
    }
}
