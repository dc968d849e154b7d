//! Dataset loading.
//!
//! A [`DataSource`] produces a [`DashboardData`] snapshot. The built-in
//! [`MockDataSource`] serves the demonstration tables; [`JsonFileSource`]
//! reads the same shape from disk, which is also what `export --view all
//! -f json` writes.

pub mod mock;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DashboardError, DataErrorKind, ErrorContext, Result};
use crate::model::{
    BranchMonth, BranchProductivity, BranchProfile, ChannelAggregate, ChannelMetrics,
    ConcerningCase, ConcerningProductSummary, FilterOptions, FilterSelection, KpiOverview,
    MonthlyTrend, PaymentMechanismStat, ProductContribution, ProductLine, RegionAggregate,
    RegionDetail, RenewalRecord,
};

/// Every table the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub renewals: Vec<RenewalRecord>,
    pub kpi: KpiOverview,
    #[serde(default)]
    pub regions: Vec<RegionAggregate>,
    #[serde(default)]
    pub channels: Vec<ChannelAggregate>,
    #[serde(default)]
    pub products: Vec<ProductContribution>,
    #[serde(default)]
    pub payment_mechanisms: Vec<PaymentMechanismStat>,
    #[serde(default)]
    pub monthly_trends: Vec<MonthlyTrend>,
    #[serde(default)]
    pub branch_productivity: Vec<BranchProductivity>,
    #[serde(default)]
    pub concerning_summary: Vec<ConcerningProductSummary>,
    #[serde(default)]
    pub branches: Vec<BranchProfile>,
    #[serde(default)]
    pub branch_monthly_base: Vec<BranchMonth>,
    #[serde(default)]
    pub concerning_cases: Vec<ConcerningCase>,
    #[serde(default)]
    pub product_lines: Vec<ProductLine>,
    #[serde(default)]
    pub region_details: Vec<RegionDetail>,
    #[serde(default)]
    pub channel_metrics: Vec<ChannelMetrics>,
    #[serde(default)]
    pub filter_options: FilterOptions,
}

impl DashboardData {
    /// Renewal records passing the filter.
    pub fn filtered_renewals<'a>(
        &'a self,
        filters: &'a FilterSelection,
    ) -> impl Iterator<Item = &'a RenewalRecord> + 'a {
        self.renewals.iter().filter(|r| filters.matches_record(r))
    }

    /// Concerning cases passing the filter.
    pub fn filtered_cases<'a>(
        &'a self,
        filters: &'a FilterSelection,
    ) -> impl Iterator<Item = &'a ConcerningCase> + 'a {
        self.concerning_cases
            .iter()
            .filter(|c| filters.matches_case(c))
    }

    #[must_use]
    pub fn branch(&self, code: &str) -> Option<&BranchProfile> {
        self.branches.iter().find(|b| b.code == code)
    }

    /// True when no aggregate table carries a row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
            && self.channels.is_empty()
            && self.products.is_empty()
            && self.payment_mechanisms.is_empty()
            && self.monthly_trends.is_empty()
            && self.branches.is_empty()
    }
}

/// Something that can produce a dashboard snapshot.
pub trait DataSource {
    /// Human-readable origin, used in logs and the header.
    fn name(&self) -> String;

    fn load(&self) -> Result<DashboardData>;
}

/// The built-in demonstration tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataSource;

impl DataSource for MockDataSource {
    fn name(&self) -> String {
        "built-in sample data".to_string()
    }

    fn load(&self) -> Result<DashboardData> {
        Ok(mock::dashboard_data())
    }
}

/// A JSON file in the [`DashboardData`] shape.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<DashboardData> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| DashboardError::io(&self.path, e))?;
        let data: DashboardData = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        if data.is_empty() {
            return Err(DashboardError::data(
                format!("loading {}", self.path.display()),
                DataErrorKind::EmptyDataset,
            ));
        }
        Ok(data)
    }
}

/// Pick the source for an optional data file path.
#[must_use]
pub fn source_for(path: Option<&Path>) -> Box<dyn DataSource> {
    match path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(MockDataSource),
    }
}

/// Load from a source, logging where the data came from.
pub fn load_from(source: &dyn DataSource) -> Result<DashboardData> {
    let data = source.load()?;
    tracing::debug!(
        source = %source.name(),
        renewals = data.renewals.len(),
        cases = data.concerning_cases.len(),
        "dashboard data loaded"
    );
    Ok(data)
}
