//! Flagged policies that need follow-up.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Risk band derived from a case's risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Band for a 0-100 risk score: 80 and above is high, 60 and above medium.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::High
        } else if score >= 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Medium => "Medium Risk",
            Self::Low => "Low Risk",
        }
    }
}

/// Customer contact details for a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// A high-risk policy with claims or withdrawals and missing collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcerningCase {
    pub policy_number: String,
    pub branch_code: String,
    pub region: String,
    pub product: String,
    pub customer: CustomerContact,
    pub due_days: u32,
    pub dues: f64,
    pub claims: u32,
    pub withdrawals: u32,
    pub last_contact: NaiveDate,
    pub risk_score: u8,
    pub reasons: Vec<String>,
    pub actions: Vec<String>,
}

impl ConcerningCase {
    #[must_use]
    pub fn risk_band(&self) -> RiskBand {
        RiskBand::from_score(self.risk_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_band_boundaries() {
        assert_eq!(RiskBand::from_score(100), RiskBand::High);
        assert_eq!(RiskBand::from_score(80), RiskBand::High);
        assert_eq!(RiskBand::from_score(79), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(60), RiskBand::Medium);
        assert_eq!(RiskBand::from_score(59), RiskBand::Low);
        assert_eq!(RiskBand::from_score(0), RiskBand::Low);
    }

    #[test]
    fn test_risk_band_labels() {
        assert_eq!(RiskBand::High.label(), "High Risk");
        assert_eq!(RiskBand::Low.label(), "Low Risk");
    }
}
