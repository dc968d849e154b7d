//! Drill-down tables for products, regions and channels.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubProduct {
    pub name: String,
    pub contribution: f64,
    pub amount: f64,
    pub policies: u32,
}

/// A product with its revenue split into sub-products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductLine {
    pub name: String,
    pub contribution: f64,
    pub amount: f64,
    pub policies: u32,
    pub growth: f64,
    pub avg_premium: f64,
    pub sub_products: Vec<SubProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopBranch {
    pub code: String,
    pub name: String,
    pub policies: u32,
    pub collection_rate: f64,
}

/// A region with its branch network and best branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionDetail {
    pub region: String,
    pub branches: u32,
    pub policies: u32,
    pub collection_rate: f64,
    pub collections: f64,
    pub growth: f64,
    pub top_branches: Vec<TopBranch>,
}

impl RegionDetail {
    /// Whether a branch beats its region's collection rate.
    #[must_use]
    pub fn is_above_average(&self, branch: &TopBranch) -> bool {
        branch.collection_rate > self.collection_rate
    }
}

/// Sales channel metrics used by the channel analysis view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelMetrics {
    pub channel: String,
    pub policies: u32,
    pub collections: f64,
    pub collection_rate: f64,
    pub avg_deal_size: f64,
    pub conversion_rate: f64,
    pub customer_satisfaction: f64,
    pub growth: f64,
    pub cost_per_acquisition: f64,
    pub retention_rate: f64,
    pub profitability: f64,
}

impl ChannelMetrics {
    /// Metrics rescaled onto a common 0-100 axis for side-by-side comparison.
    #[must_use]
    pub fn scaled_profile(&self) -> [(&'static str, f64); 5] {
        [
            ("Collection Rate", self.collection_rate),
            ("Conversion", self.conversion_rate * 2.0),
            ("Satisfaction", self.customer_satisfaction * 20.0),
            ("Retention", self.retention_rate),
            ("Profitability", self.profitability * 4.0),
        ]
    }
}
