//! Branch profiles and the per-branch monthly series.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size band used to pick comparable peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchSize {
    Small,
    Medium,
    Large,
}

impl BranchSize {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

impl fmt::Display for BranchSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A branch with its headline performance numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchProfile {
    pub code: String,
    pub name: String,
    pub region: String,
    pub policies: u32,
    pub collections: f64,
    pub collection_rate: f64,
    pub productivity: f64,
    pub growth: f64,
    pub risk_score: f64,
    pub manager: String,
    pub size: BranchSize,
}

/// One month of the branch-level series.
///
/// Future months carry a forecast but no actuals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchMonth {
    pub month: String,
    pub total_due: f64,
    pub total_collection: Option<f64>,
    pub forecast: f64,
    pub collection_rate: Option<f64>,
    pub efficiency: f64,
}

impl BranchMonth {
    /// Uncollected dues for months with actuals.
    #[must_use]
    pub fn shortfall(&self) -> Option<f64> {
        self.total_collection.map(|c| self.total_due - c)
    }
}
