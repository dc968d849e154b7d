//! Dashboard filter selection.
//!
//! Every dimension is a plain string where `"all"` (or an empty string) means
//! "no filter applied". Updates never mutate in place: they return a new
//! selection with a single field changed.

use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::cases::ConcerningCase;
use super::records::RenewalRecord;

/// Neutral sentinel for select-style dimensions.
pub const ALL: &str = "all";

/// A filterable dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Region,
    Branch,
    Product,
    Channel,
    PaymentMechanism,
    Search,
}

impl FilterField {
    /// Fields in panel order.
    pub const ALL_FIELDS: [Self; 6] = [
        Self::Region,
        Self::Branch,
        Self::Product,
        Self::Channel,
        Self::PaymentMechanism,
        Self::Search,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Region => "Region",
            Self::Branch => "Branch",
            Self::Product => "Product",
            Self::Channel => "Channel",
            Self::PaymentMechanism => "Payment Method",
            Self::Search => "Search",
        }
    }

    /// Whether the field is free text rather than a select.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Search)
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Optional inclusive date bounds, compared at month granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Whether the month containing `date` overlaps the range.
    #[must_use]
    pub fn contains_month(&self, date: NaiveDate) -> bool {
        let month = month_start(date);
        if let Some(from) = self.from {
            if month < month_start(from) {
                return false;
            }
        }
        if let Some(to) = self.to {
            if month > month_start(to) {
                return false;
            }
        }
        true
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Parse a month tag such as `AUG-25` into the first day of that month.
#[must_use]
pub fn parse_month_tag(tag: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("01-{}", tag.trim()), "%d-%b-%y").ok()
}

/// The user's current filter choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FilterSelection {
    pub region: String,
    pub branch: String,
    pub product: String,
    pub channel: String,
    pub payment_mechanism: String,
    pub date_range: DateRange,
    pub search: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            region: ALL.to_string(),
            branch: ALL.to_string(),
            product: ALL.to_string(),
            channel: ALL.to_string(),
            payment_mechanism: ALL.to_string(),
            date_range: DateRange::default(),
            search: String::new(),
        }
    }
}

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    #[must_use]
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Region => &self.region,
            FilterField::Branch => &self.branch,
            FilterField::Product => &self.product,
            FilterField::Channel => &self.channel,
            FilterField::PaymentMechanism => &self.payment_mechanism,
            FilterField::Search => &self.search,
        }
    }

    /// A copy of this selection with one field replaced.
    #[must_use]
    pub fn update(&self, field: FilterField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            FilterField::Region => next.region = value,
            FilterField::Branch => next.branch = value,
            FilterField::Product => next.product = value,
            FilterField::Channel => next.channel = value,
            FilterField::PaymentMechanism => next.payment_mechanism = value,
            FilterField::Search => next.search = value,
        }
        next
    }

    /// A copy of this selection with new date bounds.
    #[must_use]
    pub fn with_date_range(&self, date_range: DateRange) -> Self {
        Self {
            date_range,
            ..self.clone()
        }
    }

    /// Reset every field to its neutral sentinel.
    #[must_use]
    pub fn clear() -> Self {
        Self::default()
    }

    /// True when any dimension narrows the data.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        FilterField::ALL_FIELDS
            .iter()
            .any(|field| is_active(self.get(*field)))
            || self.date_range.is_set()
    }

    /// Number of dimensions currently narrowing the data.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let selects = FilterField::ALL_FIELDS
            .iter()
            .filter(|field| is_active(self.get(**field)))
            .count();
        selects + usize::from(self.date_range.is_set())
    }

    /// Human-readable description of each active dimension, in panel order.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        let mut parts: Vec<String> = FilterField::ALL_FIELDS
            .iter()
            .filter(|field| is_active(self.get(**field)))
            .map(|field| format!("{}: {}", field.label(), self.get(*field)))
            .collect();
        match (self.date_range.from, self.date_range.to) {
            (Some(from), Some(to)) => parts.push(format!("Due: {from} to {to}")),
            (Some(from), None) => parts.push(format!("Due: from {from}")),
            (None, Some(to)) => parts.push(format!("Due: until {to}")),
            (None, None) => {}
        }
        parts
    }

    /// Whether a renewal record passes every active dimension.
    #[must_use]
    pub fn matches_record(&self, record: &RenewalRecord) -> bool {
        if !(field_matches(&self.region, &record.region)
            && field_matches(&self.branch, &record.branch_code)
            && field_matches(&self.product, &record.product)
            && field_matches(&self.channel, &record.channel)
            && field_matches(&self.payment_mechanism, &record.payment_mechanism))
        {
            return false;
        }

        if self.date_range.is_set() {
            match parse_month_tag(&record.due_month) {
                Some(month) if self.date_range.contains_month(month) => {}
                _ => return false,
            }
        }

        search_matches(&self.search, &[&record.policy_number, &record.branch_code])
    }

    /// Whether a concerning case passes the dimensions it carries.
    ///
    /// Cases have no channel or payment mechanism, so those are ignored.
    #[must_use]
    pub fn matches_case(&self, case: &ConcerningCase) -> bool {
        field_matches(&self.region, &case.region)
            && field_matches(&self.branch, &case.branch_code)
            && field_matches(&self.product, &case.product)
            && (!self.date_range.is_set() || self.date_range.contains_month(case.last_contact))
            && search_matches(
                &self.search,
                &[&case.policy_number, &case.branch_code, &case.customer.name],
            )
    }
}

fn is_active(value: &str) -> bool {
    !value.is_empty() && value != ALL
}

fn field_matches(filter: &str, value: &str) -> bool {
    !is_active(filter) || filter.eq_ignore_ascii_case(value)
}

fn search_matches(term: &str, haystacks: &[&str]) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

/// Declared choices for each select dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub branches: Vec<String>,
    pub products: Vec<String>,
    pub channels: Vec<String>,
    pub payment_mechanisms: Vec<String>,
}

impl FilterOptions {
    /// Choices for a select field, empty for free-text fields.
    #[must_use]
    pub fn options_for(&self, field: FilterField) -> &[String] {
        match field {
            FilterField::Region => &self.regions,
            FilterField::Branch => &self.branches,
            FilterField::Product => &self.products,
            FilterField::Channel => &self.channels,
            FilterField::PaymentMechanism => &self.payment_mechanisms,
            FilterField::Search => &[],
        }
    }

    /// Next value after `current` in the cycle `all -> options... -> all`.
    #[must_use]
    pub fn cycle(&self, field: FilterField, current: &str, forward: bool) -> String {
        let options = self.options_for(field);
        if options.is_empty() {
            return ALL.to_string();
        }
        // Position 0 is "all", options follow.
        let len = options.len() + 1;
        let pos = options
            .iter()
            .position(|o| o.eq_ignore_ascii_case(current))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        if next == 0 {
            ALL.to_string()
        } else {
            options[next - 1].clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> FilterOptions {
        FilterOptions {
            regions: vec!["North".to_string(), "South".to_string()],
            ..FilterOptions::default()
        }
    }

    #[test]
    fn test_default_is_inactive() {
        let selection = FilterSelection::new();
        assert!(!selection.has_active_filters());
        assert_eq!(selection.active_count(), 0);
    }

    #[test]
    fn test_update_changes_one_field() {
        let base = FilterSelection::new();
        let next = base.update(FilterField::Region, "North");
        assert_eq!(next.region, "North");
        assert_eq!(next.branch, ALL);
        assert_eq!(base.region, ALL);
        assert!(next.has_active_filters());
    }

    #[test]
    fn test_empty_string_is_neutral() {
        let selection = FilterSelection::new().update(FilterField::Product, "");
        assert!(!selection.has_active_filters());
    }

    #[test]
    fn test_date_range_activates() {
        let range = DateRange {
            from: NaiveDate::from_ymd_opt(2025, 8, 1),
            to: None,
        };
        let selection = FilterSelection::new().with_date_range(range);
        assert!(selection.has_active_filters());
        assert_eq!(selection.active_count(), 1);
    }

    #[test]
    fn test_describe_lists_active_dimensions() {
        let selection = FilterSelection::new()
            .update(FilterField::Region, "North")
            .update(FilterField::Search, "pol")
            .with_date_range(DateRange {
                from: NaiveDate::from_ymd_opt(2025, 6, 1),
                to: None,
            });
        assert_eq!(
            selection.describe(),
            vec!["Region: North", "Search: pol", "Due: from 2025-06-01"]
        );
        assert!(FilterSelection::clear().describe().is_empty());
    }

    #[test]
    fn test_parse_month_tag() {
        assert_eq!(parse_month_tag("AUG-25"), NaiveDate::from_ymd_opt(2025, 8, 1));
        assert_eq!(parse_month_tag("jan-24"), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(parse_month_tag("13-25"), None);
    }

    #[test]
    fn test_contains_month_is_inclusive() {
        let range = DateRange {
            from: NaiveDate::from_ymd_opt(2025, 6, 20),
            to: NaiveDate::from_ymd_opt(2025, 8, 3),
        };
        assert!(range.contains_month(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
        assert!(range.contains_month(NaiveDate::from_ymd_opt(2025, 8, 31).unwrap()));
        assert!(!range.contains_month(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()));
        assert!(!range.contains_month(NaiveDate::from_ymd_opt(2025, 5, 31).unwrap()));
    }

    #[test]
    fn test_cycle_wraps_through_all() {
        let opts = options();
        assert_eq!(opts.cycle(FilterField::Region, ALL, true), "North");
        assert_eq!(opts.cycle(FilterField::Region, "North", true), "South");
        assert_eq!(opts.cycle(FilterField::Region, "South", true), ALL);
        assert_eq!(opts.cycle(FilterField::Region, ALL, false), "South");
        assert_eq!(opts.cycle(FilterField::Search, "x", true), ALL);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert!(search_matches("pol0", &["POL001"]));
        assert!(search_matches("  ", &["anything"]));
        assert!(!search_matches("BR9", &["POL001", "BR001"]));
    }
}
