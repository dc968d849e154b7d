//! Threshold labels shown next to branch and channel figures.

use std::fmt;

/// Branch risk band for a 0-100 risk score.
#[must_use]
pub fn risk_label(risk_score: f64) -> &'static str {
    if risk_score < 20.0 {
        "Low Risk"
    } else if risk_score < 30.0 {
        "Medium Risk"
    } else {
        "High Risk"
    }
}

#[must_use]
pub fn performance_label(collection_rate: f64) -> &'static str {
    if collection_rate > 95.0 {
        "Excellent"
    } else if collection_rate > 90.0 {
        "Good"
    } else {
        "Needs Improvement"
    }
}

#[must_use]
pub fn trend_label(growth: f64) -> &'static str {
    if growth > 5.0 {
        "Growing"
    } else if growth > 0.0 {
        "Stable"
    } else {
        "Declining"
    }
}

/// Channel metrics that carry a performance badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMetric {
    CollectionRate,
    Growth,
    Profitability,
    CustomerSatisfaction,
}

impl ChannelMetric {
    #[must_use]
    pub const fn threshold(self) -> f64 {
        match self {
            Self::CollectionRate => 85.0,
            Self::Growth => 5.0,
            Self::Profitability => 20.0,
            Self::CustomerSatisfaction => 4.0,
        }
    }
}

/// Strength of a badge, used to pick its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeLevel {
    Strong,
    Moderate,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub level: BadgeLevel,
    pub label: &'static str,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Badge for a channel metric value.
///
/// Growth compares against zero for its middle band; every other metric
/// uses 80% of its threshold.
#[must_use]
pub fn channel_badge(value: f64, metric: ChannelMetric) -> Badge {
    let threshold = metric.threshold();
    let (level, label) = if metric == ChannelMetric::Growth {
        if value > threshold {
            (BadgeLevel::Strong, "High Growth")
        } else if value > 0.0 {
            (BadgeLevel::Moderate, "Moderate Growth")
        } else {
            (BadgeLevel::Weak, "Declining")
        }
    } else if value > threshold {
        (BadgeLevel::Strong, "Excellent")
    } else if value > threshold * 0.8 {
        (BadgeLevel::Moderate, "Good")
    } else {
        (BadgeLevel::Weak, "Needs Improvement")
    };
    Badge { level, label }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_labels() {
        assert_eq!(risk_label(15.0), "Low Risk");
        assert_eq!(risk_label(20.0), "Medium Risk");
        assert_eq!(risk_label(30.0), "High Risk");
        assert_eq!(performance_label(96.8), "Excellent");
        assert_eq!(performance_label(95.0), "Good");
        assert_eq!(performance_label(89.7), "Needs Improvement");
        assert_eq!(trend_label(8.5), "Growing");
        assert_eq!(trend_label(3.1), "Stable");
        assert_eq!(trend_label(0.0), "Declining");
    }

    #[test]
    fn test_channel_badges() {
        assert_eq!(
            channel_badge(89.5, ChannelMetric::CollectionRate).label,
            "Excellent"
        );
        assert_eq!(
            channel_badge(76.3, ChannelMetric::CollectionRate).label,
            "Good"
        );
        assert_eq!(channel_badge(18.5, ChannelMetric::Profitability).label, "Good");
        assert_eq!(
            channel_badge(15.8, ChannelMetric::Profitability).label,
            "Needs Improvement"
        );
        assert_eq!(
            channel_badge(4.3, ChannelMetric::CustomerSatisfaction).label,
            "Excellent"
        );
        assert_eq!(channel_badge(18.7, ChannelMetric::Growth).label, "High Growth");
        assert_eq!(channel_badge(2.1, ChannelMetric::Growth).label, "Moderate Growth");
        assert_eq!(channel_badge(-4.2, ChannelMetric::Growth).level, BadgeLevel::Weak);
    }
}
