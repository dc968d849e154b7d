//! Data model for the renewals dashboard.
//!
//! Records are flat and keyed by natural keys (policy number, branch code,
//! region name). No referential integrity is enforced between the raw
//! renewal rows and the precomputed aggregates; they are authored
//! independently and may drift.

mod branch;
mod cases;
pub mod filter;
mod portfolio;
mod records;
mod view;

pub use branch::{BranchMonth, BranchProfile, BranchSize};
pub use cases::{ConcerningCase, CustomerContact, RiskBand};
pub use filter::{parse_month_tag, DateRange, FilterField, FilterOptions, FilterSelection, ALL};
pub use portfolio::{ChannelMetrics, ProductLine, RegionDetail, SubProduct, TopBranch};
pub use records::{
    BranchProductivity, ChannelAggregate, ConcerningProductSummary, KpiOverview, KpiTrends,
    MonthlyTrend, PaymentMechanismStat, ProductContribution, RegionAggregate, RenewalRecord,
};
pub use view::{ActiveView, DashboardView};
