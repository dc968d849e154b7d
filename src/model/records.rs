//! Renewal records and the precomputed aggregate tables.

use serde::{Deserialize, Serialize};

use crate::metrics::safe_ratio;

/// One policy-month row from the renewals feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenewalRecord {
    pub policy_number: String,
    pub branch_code: String,
    pub bank_technical_id: String,
    pub channel: String,
    pub region: String,
    pub product: String,
    pub payment_mechanism: String,
    pub inforce_count: u32,
    pub claim_count: u32,
    pub withdrawal_count: u32,
    /// Due month tag such as `AUG-25`
    pub due_month: String,
    pub dues: f64,
    pub collection_month: String,
    pub collected: f64,
}

impl RenewalRecord {
    /// Collection rate for this row as a percentage.
    #[must_use]
    pub fn collection_rate(&self) -> f64 {
        safe_ratio(self.collected, self.dues) * 100.0
    }

    /// Claim or withdrawal activity with a collection shortfall.
    #[must_use]
    pub fn is_concerning(&self) -> bool {
        (self.claim_count > 0 || self.withdrawal_count > 0) && self.collected < self.dues
    }
}

/// Region-level aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionAggregate {
    pub region: String,
    pub policies: u32,
    pub collection_rate: f64,
    pub collections: f64,
}

/// Channel-level aggregate with a composite performance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelAggregate {
    pub channel: String,
    pub score: f64,
    pub policies: u32,
    pub collections: f64,
}

/// Revenue contribution of a product type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductContribution {
    pub product: String,
    pub contribution: f64,
    pub amount: f64,
}

/// Success rate per payment mechanism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMechanismStat {
    pub mechanism: String,
    pub success_rate: f64,
    pub avg_collection: f64,
}

/// Portfolio-wide monthly figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub policies: u32,
    pub collection_rate: f64,
    pub collections: f64,
}

impl MonthlyTrend {
    /// Dues implied by the collections and the collection rate.
    ///
    /// The trend table carries no dues column, so it is reconstructed here;
    /// a zero rate yields zero.
    #[must_use]
    pub fn total_due(&self) -> f64 {
        safe_ratio(self.collections, self.collection_rate / 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchProductivity {
    pub branch: String,
    pub region: String,
    pub productivity: f64,
    pub active_policies: u32,
}

/// High-risk case counts per product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcerningProductSummary {
    pub product: String,
    pub cases: u32,
    pub potential_loss: f64,
}

/// Month-over-month deltas shown on the primary KPI cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiTrends {
    pub policies: f64,
    pub collection_rate: f64,
    pub collections: f64,
    pub concerning_cases: f64,
}

/// Headline portfolio numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiOverview {
    pub total_policies: u32,
    pub total_dues: f64,
    pub total_collections: f64,
    pub collection_rate: f64,
    pub concerning_policies: u32,
    pub premium_leakage: f64,
    pub surrender_propensity: f64,
    #[serde(default)]
    pub trends: KpiTrends,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(dues: f64, collected: f64, claims: u32, withdrawals: u32) -> RenewalRecord {
        RenewalRecord {
            policy_number: "POL900".to_string(),
            branch_code: "BR001".to_string(),
            bank_technical_id: "BANK001".to_string(),
            channel: "Direct Sales".to_string(),
            region: "North".to_string(),
            product: "Term Life".to_string(),
            payment_mechanism: "Auto Debit".to_string(),
            inforce_count: 1,
            claim_count: claims,
            withdrawal_count: withdrawals,
            due_month: "AUG-25".to_string(),
            dues,
            collection_month: "AUG-25".to_string(),
            collected,
        }
    }

    #[test]
    fn test_record_collection_rate() {
        assert!((record(5000.0, 2500.0, 0, 0).collection_rate() - 50.0).abs() < f64::EPSILON);
        assert_eq!(record(0.0, 0.0, 0, 0).collection_rate(), 0.0);
    }

    #[test]
    fn test_record_concerning() {
        assert!(record(5000.0, 0.0, 1, 0).is_concerning());
        assert!(record(5000.0, 4000.0, 0, 2).is_concerning());
        assert!(!record(5000.0, 5000.0, 1, 0).is_concerning());
        assert!(!record(5000.0, 0.0, 0, 0).is_concerning());
    }

    #[test]
    fn test_monthly_total_due() {
        let trend = MonthlyTrend {
            month: "JAN-25".to_string(),
            policies: 100,
            collection_rate: 80.0,
            collections: 800.0,
        };
        assert!((trend.total_due() - 1000.0).abs() < 1e-9);

        let zero = MonthlyTrend {
            collection_rate: 0.0,
            ..trend
        };
        assert_eq!(zero.total_due(), 0.0);
    }
}
