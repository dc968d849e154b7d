//! Filter behaviour over the sample dataset.

use chrono::NaiveDate;
use renewals_dash::{
    data::mock,
    metrics::record_totals,
    model::{parse_month_tag, DateRange, FilterField, ALL},
    FilterSelection,
};

fn month(year: i32, m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, m, 1).expect("valid date")
}

fn policies<'a>(iter: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    iter.collect()
}

#[test]
fn test_no_filters_keeps_everything() {
    let data = mock::dashboard_data();
    let filters = FilterSelection::new();
    assert_eq!(data.filtered_renewals(&filters).count(), data.renewals.len());
    assert_eq!(
        data.filtered_cases(&filters).count(),
        data.concerning_cases.len()
    );
}

#[test]
fn test_region_narrows_records_and_cases() {
    let data = mock::dashboard_data();
    let filters = FilterSelection::new().update(FilterField::Region, "South");

    let records = policies(
        data.filtered_renewals(&filters)
            .map(|r| r.policy_number.as_str()),
    );
    assert_eq!(records, ["POL002", "POL007", "POL008", "POL010"]);

    let cases = policies(
        data.filtered_cases(&filters)
            .map(|c| c.policy_number.as_str()),
    );
    assert_eq!(cases, ["POL009012"]);
}

#[test]
fn test_region_totals_snapshot() {
    let data = mock::dashboard_data();
    let filters = FilterSelection::new().update(FilterField::Region, "south");
    let totals = record_totals(data.filtered_renewals(&filters));
    insta::assert_json_snapshot!(totals, @r###"
    {
      "records": 4,
      "dues": 19100.0,
      "collected": 11000.0,
      "claims": 1,
      "withdrawals": 3,
      "concerning": 2
    }
    "###);
}

#[test]
fn test_dimensions_combine() {
    let data = mock::dashboard_data();
    let filters = FilterSelection::new()
        .update(FilterField::Region, "South")
        .update(FilterField::Channel, "Online");
    let records = policies(
        data.filtered_renewals(&filters)
            .map(|r| r.policy_number.as_str()),
    );
    assert_eq!(records, ["POL008"]);

    // Cases carry no channel, so the channel dimension does not hide them.
    assert_eq!(data.filtered_cases(&filters).count(), 1);
}

#[test]
fn test_date_range_is_month_inclusive() {
    let data = mock::dashboard_data();
    let filters = FilterSelection::new().with_date_range(DateRange {
        from: Some(month(2025, 6)),
        to: Some(NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid date")),
    });
    let records = policies(
        data.filtered_renewals(&filters)
            .map(|r| r.policy_number.as_str()),
    );
    assert_eq!(records, ["POL004", "POL005", "POL006", "POL007", "POL008"]);
}

#[test]
fn test_open_ended_ranges() {
    let data = mock::dashboard_data();
    let from_august = FilterSelection::new().with_date_range(DateRange {
        from: parse_month_tag("AUG-25"),
        to: None,
    });
    assert!(data
        .filtered_renewals(&from_august)
        .all(|r| r.due_month == "AUG-25"));

    let until_may = FilterSelection::new().with_date_range(DateRange {
        from: None,
        to: Some(month(2025, 5)),
    });
    assert_eq!(data.filtered_renewals(&until_may).count(), 1);
}

#[test]
fn test_search_matches_customer_name() {
    let data = mock::dashboard_data();
    let filters = FilterSelection::new().update(FilterField::Search, "priya");
    let cases = policies(
        data.filtered_cases(&filters)
            .map(|c| c.policy_number.as_str()),
    );
    assert_eq!(cases, ["POL005678"]);
}

#[test]
fn test_clear_restores_defaults() {
    let filters = FilterSelection::new()
        .update(FilterField::Branch, "BR001")
        .with_date_range(DateRange {
            from: Some(month(2025, 6)),
            to: None,
        });
    assert_eq!(filters.active_count(), 2);

    let cleared = FilterSelection::clear();
    assert!(!cleared.has_active_filters());
    assert_eq!(cleared.branch, ALL);
    assert!(cleared.describe().is_empty());
}

#[test]
fn test_describe_snapshot() {
    let filters = FilterSelection::new()
        .update(FilterField::Region, "South")
        .update(FilterField::Search, "POL0")
        .with_date_range(DateRange {
            from: Some(month(2025, 6)),
            to: Some(month(2025, 8)),
        });
    insta::assert_debug_snapshot!(filters.describe(), @r###"
    [
        "Region: South",
        "Search: POL0",
        "Due: 2025-06-01 to 2025-08-01",
    ]
    "###);
}

#[test]
fn test_cycle_through_declared_options() {
    let data = mock::dashboard_data();
    let options = &data.filter_options;
    let first = options.cycle(FilterField::Region, ALL, true);
    assert_eq!(first, "North");
    let back = options.cycle(FilterField::Region, &first, false);
    assert_eq!(back, ALL);
    let last = options.cycle(FilterField::Region, ALL, false);
    assert_eq!(last, "Central");
}
