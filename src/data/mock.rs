//! Hand-authored demonstration tables.
//!
//! The aggregate tables and the record tables are maintained separately and
//! are not reconciled with each other.

use chrono::NaiveDate;

use super::DashboardData;
use crate::model::{
    BranchMonth, BranchProductivity, BranchProfile, BranchSize, ChannelAggregate, ChannelMetrics,
    ConcerningCase, ConcerningProductSummary, CustomerContact, FilterOptions, KpiOverview,
    KpiTrends, MonthlyTrend, PaymentMechanismStat, ProductContribution, ProductLine,
    RegionAggregate, RegionDetail, RenewalRecord, SubProduct, TopBranch,
};

/// The full demonstration dataset.
#[must_use]
pub fn dashboard_data() -> DashboardData {
    DashboardData {
        renewals: renewals(),
        kpi: kpi_overview(),
        regions: region_performance(),
        channels: channel_performance(),
        products: product_contribution(),
        payment_mechanisms: payment_mechanism_success(),
        monthly_trends: monthly_trends(),
        branch_productivity: branch_productivity(),
        concerning_summary: concerning_summary(),
        branches: branch_profiles(),
        branch_monthly_base: branch_monthly_base(),
        concerning_cases: concerning_cases(),
        product_lines: product_hierarchy(),
        region_details: regional_details(),
        channel_metrics: channel_metrics(),
        filter_options: filter_options(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

// policy, branch, bank, channel, region, product, mechanism,
// claims, withdrawals, month, dues, collected
type RenewalRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    u32,
    u32,
    &'static str,
    f64,
    f64,
);

const RENEWALS: [RenewalRow; 12] = [
    ("POL001", "BR001", "BANK001", "Direct Sales", "North", "Term Life", "Auto Debit", 0, 0, "AUG-25", 5000.0, 5000.0),
    ("POL002", "BR002", "BANK002", "Bancassurance", "South", "Whole Life", "Net Banking", 0, 0, "AUG-25", 8000.0, 8000.0),
    ("POL003", "BR003", "BANK001", "Broker", "East", "ULIP", "Credit Card", 1, 0, "AUG-25", 5900.0, 0.0),
    ("POL004", "BR004", "BANK003", "Online", "West", "Health", "UPI", 0, 0, "JUL-25", 2000.0, 2000.0),
    ("POL005", "BR005", "BANK002", "Corporate", "Central", "Endowment", "Cheque", 0, 1, "JUL-25", 4500.0, 2250.0),
    ("POL006", "BR001", "BANK001", "Bancassurance", "North", "ULIP", "Auto Debit", 0, 0, "JUL-25", 6000.0, 6000.0),
    ("POL007", "BR021", "BANK004", "Direct Sales", "South", "Term Life", "Cash", 1, 1, "JUN-25", 4500.0, 0.0),
    ("POL008", "BR022", "BANK004", "Online", "South", "Health", "UPI", 0, 0, "JUN-25", 1800.0, 1800.0),
    ("POL009", "BR003", "BANK003", "Direct Sales", "East", "Whole Life", "Auto Debit", 0, 0, "AUG-25", 8200.0, 8200.0),
    ("POL010", "BR002", "BANK002", "Broker", "South", "Term Life", "Credit Card", 0, 2, "AUG-25", 4800.0, 1200.0),
    ("POL011", "BR004", "BANK003", "Bancassurance", "West", "Endowment", "Net Banking", 0, 0, "MAY-25", 4400.0, 4400.0),
    ("POL012", "BR005", "BANK005", "Corporate", "Central", "Health", "Cheque", 2, 0, "AUG-25", 2100.0, 0.0),
];

fn renewals() -> Vec<RenewalRecord> {
    RENEWALS
        .iter()
        .map(
            |&(policy, branch, bank, channel, region, product, mechanism, claims, withdrawals, month, dues, collected)| {
                RenewalRecord {
                    policy_number: policy.to_string(),
                    branch_code: branch.to_string(),
                    bank_technical_id: bank.to_string(),
                    channel: channel.to_string(),
                    region: region.to_string(),
                    product: product.to_string(),
                    payment_mechanism: mechanism.to_string(),
                    inforce_count: 1,
                    claim_count: claims,
                    withdrawal_count: withdrawals,
                    due_month: month.to_string(),
                    dues,
                    collection_month: month.to_string(),
                    collected,
                }
            },
        )
        .collect()
}

fn kpi_overview() -> KpiOverview {
    KpiOverview {
        total_policies: 12_847,
        total_dues: 64_235_000.0,
        total_collections: 58_412_000.0,
        collection_rate: 91.1,
        concerning_policies: 342,
        premium_leakage: 5_823_000.0,
        surrender_propensity: 4.2,
        trends: KpiTrends {
            policies: 2.4,
            collection_rate: 1.2,
            collections: 3.8,
            concerning_cases: -8.5,
        },
    }
}

fn region_performance() -> Vec<RegionAggregate> {
    [
        ("North", 3200, 94.2, 18_500_000.0),
        ("South", 2800, 89.7, 15_200_000.0),
        ("East", 3500, 87.3, 19_800_000.0),
        ("West", 2400, 92.8, 12_400_000.0),
        ("Central", 947, 86.1, 8_500_000.0),
    ]
    .into_iter()
    .map(|(region, policies, collection_rate, collections)| RegionAggregate {
        region: region.to_string(),
        policies,
        collection_rate,
        collections,
    })
    .collect()
}

fn channel_performance() -> Vec<ChannelAggregate> {
    [
        ("Direct Sales", 89.5, 4200, 22_000_000.0),
        ("Bancassurance", 87.2, 3800, 19_500_000.0),
        ("Broker", 82.4, 2900, 14_200_000.0),
        ("Online", 91.8, 1500, 8_800_000.0),
        ("Corporate", 76.3, 447, 3_900_000.0),
    ]
    .into_iter()
    .map(|(channel, score, policies, collections)| ChannelAggregate {
        channel: channel.to_string(),
        score,
        policies,
        collections,
    })
    .collect()
}

fn product_contribution() -> Vec<ProductContribution> {
    [
        ("Term Life", 32.5, 19_000_000.0),
        ("Whole Life", 28.7, 16_800_000.0),
        ("ULIP", 18.2, 10_600_000.0),
        ("Endowment", 12.4, 7_200_000.0),
        ("Health", 8.2, 4_800_000.0),
    ]
    .into_iter()
    .map(|(product, contribution, amount)| ProductContribution {
        product: product.to_string(),
        contribution,
        amount,
    })
    .collect()
}

fn payment_mechanism_success() -> Vec<PaymentMechanismStat> {
    [
        ("Auto Debit", 94.7, 4850.0),
        ("Credit Card", 89.2, 5200.0),
        ("Net Banking", 87.5, 4920.0),
        ("UPI", 91.3, 3800.0),
        ("Cash", 76.8, 3200.0),
        ("Cheque", 72.4, 5800.0),
    ]
    .into_iter()
    .map(|(mechanism, success_rate, avg_collection)| PaymentMechanismStat {
        mechanism: mechanism.to_string(),
        success_rate,
        avg_collection,
    })
    .collect()
}

fn monthly_trends() -> Vec<MonthlyTrend> {
    [
        ("JAN-25", 11_200, 88.5, 52_000_000.0),
        ("FEB-25", 11_800, 89.2, 54_500_000.0),
        ("MAR-25", 12_100, 90.1, 56_200_000.0),
        ("APR-25", 12_300, 87.8, 55_800_000.0),
        ("MAY-25", 12_500, 89.7, 57_400_000.0),
        ("JUN-25", 12_650, 91.2, 58_900_000.0),
        ("JUL-25", 12_720, 90.8, 59_200_000.0),
        ("AUG-25", 12_847, 91.1, 58_412_000.0),
    ]
    .into_iter()
    .map(|(month, policies, collection_rate, collections)| MonthlyTrend {
        month: month.to_string(),
        policies,
        collection_rate,
        collections,
    })
    .collect()
}

fn branch_productivity() -> Vec<BranchProductivity> {
    [
        ("BR001", "North", 18_750.0, 450),
        ("BR002", "South", 16_200.0, 380),
        ("BR003", "East", 19_800.0, 520),
        ("BR004", "West", 15_600.0, 340),
        ("BR005", "Central", 14_200.0, 290),
    ]
    .into_iter()
    .map(|(branch, region, productivity, active_policies)| BranchProductivity {
        branch: branch.to_string(),
        region: region.to_string(),
        productivity,
        active_policies,
    })
    .collect()
}

fn concerning_summary() -> Vec<ConcerningProductSummary> {
    [
        ("Term Life", 89, 1_250_000.0),
        ("Whole Life", 76, 1_680_000.0),
        ("ULIP", 65, 980_000.0),
        ("Endowment", 58, 1_120_000.0),
        ("Health", 54, 793_000.0),
    ]
    .into_iter()
    .map(|(product, cases, potential_loss)| ConcerningProductSummary {
        product: product.to_string(),
        cases,
        potential_loss,
    })
    .collect()
}

fn branch_profiles() -> Vec<BranchProfile> {
    use BranchSize::{Large, Medium};
    [
        ("BR001", "Delhi Central", "North", 450, 2_250_000.0, 96.8, 5000.0, 8.5, 15.0, "Rajesh Kumar", Large),
        ("BR002", "Mumbai West", "West", 520, 2_860_000.0, 94.2, 5500.0, 12.3, 18.0, "Priya Sharma", Large),
        ("BR003", "Bangalore South", "South", 380, 1_900_000.0, 92.1, 5000.0, 6.8, 22.0, "Suresh Reddy", Medium),
        ("BR004", "Chennai Central", "South", 420, 2_100_000.0, 89.7, 4000.0, 3.1, 28.0, "Amit Roy", Large),
        ("BR005", "Kolkata North", "East", 350, 1_750_000.0, 91.4, 5000.0, 4.2, 25.0, "Anita Das", Medium),
    ]
    .into_iter()
    .map(
        |(code, name, region, policies, collections, collection_rate, productivity, growth, risk_score, manager, size)| {
            BranchProfile {
                code: code.to_string(),
                name: name.to_string(),
                region: region.to_string(),
                policies,
                collections,
                collection_rate,
                productivity,
                growth,
                risk_score,
                manager: manager.to_string(),
                size,
            }
        },
    )
    .collect()
}

fn branch_monthly_base() -> Vec<BranchMonth> {
    [
        ("Apr", 850_000.0, Some(782_000.0), 795_000.0, Some(92.0), 92.0),
        ("May", 920_000.0, Some(856_400.0), 874_000.0, Some(93.1), 93.1),
        ("Jun", 880_000.0, Some(825_600.0), 845_000.0, Some(93.8), 93.8),
        ("Jul", 950_000.0, Some(893_500.0), 912_000.0, Some(94.1), 94.1),
        ("Aug", 1_020_000.0, Some(969_900.0), 985_000.0, Some(95.1), 95.1),
        ("Sep", 1_100_000.0, Some(1_045_000.0), 1_065_000.0, Some(95.0), 95.0),
        ("Oct", 1_150_000.0, None, 1_104_000.0, None, 96.0),
        ("Nov", 1_200_000.0, None, 1_152_000.0, None, 96.0),
        ("Dec", 1_180_000.0, None, 1_133_000.0, None, 96.1),
    ]
    .into_iter()
    .map(
        |(month, total_due, total_collection, forecast, collection_rate, efficiency)| BranchMonth {
            month: month.to_string(),
            total_due,
            total_collection,
            forecast,
            collection_rate,
            efficiency,
        },
    )
    .collect()
}

fn concerning_cases() -> Vec<ConcerningCase> {
    vec![
        ConcerningCase {
            policy_number: "POL001234".to_string(),
            branch_code: "BR001".to_string(),
            region: "North".to_string(),
            product: "Term Life".to_string(),
            customer: CustomerContact {
                name: "Rajesh Kumar".to_string(),
                phone: "+91-9876543210".to_string(),
                email: "rajesh.kumar@email.com".to_string(),
            },
            due_days: 45,
            dues: 25_000.0,
            claims: 1,
            withdrawals: 0,
            last_contact: date(2024, 7, 15),
            risk_score: 85,
            reasons: strings(&["High claim activity", "45 days overdue", "No recent payment"]),
            actions: strings(&["Immediate follow-up", "Offer payment plan", "Review claim status"]),
        },
        ConcerningCase {
            policy_number: "POL005678".to_string(),
            branch_code: "BR003".to_string(),
            region: "East".to_string(),
            product: "ULIP".to_string(),
            customer: CustomerContact {
                name: "Priya Singh".to_string(),
                phone: "+91-8765432109".to_string(),
                email: "priya.singh@email.com".to_string(),
            },
            due_days: 32,
            dues: 18_500.0,
            claims: 0,
            withdrawals: 2,
            last_contact: date(2024, 7, 20),
            risk_score: 72,
            reasons: strings(&["Multiple withdrawals", "32 days overdue", "Decreasing policy value"]),
            actions: strings(&["Schedule meeting", "Explain policy benefits", "Offer top-up options"]),
        },
        ConcerningCase {
            policy_number: "POL009012".to_string(),
            branch_code: "BR002".to_string(),
            region: "South".to_string(),
            product: "Whole Life".to_string(),
            customer: CustomerContact {
                name: "Amit Patel".to_string(),
                phone: "+91-7654321098".to_string(),
                email: "amit.patel@email.com".to_string(),
            },
            due_days: 67,
            dues: 35_000.0,
            claims: 2,
            withdrawals: 1,
            last_contact: date(2024, 6, 30),
            risk_score: 92,
            reasons: strings(&[
                "Multiple claims",
                "67 days overdue",
                "No contact response",
                "High premium amount",
            ]),
            actions: strings(&[
                "Escalate to manager",
                "Legal notice preparation",
                "Offer settlement options",
            ]),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn product_line(
    name: &str,
    contribution: f64,
    amount: f64,
    policies: u32,
    growth: f64,
    avg_premium: f64,
    subs: [(&str, f64, f64, u32); 3],
) -> ProductLine {
    ProductLine {
        name: name.to_string(),
        contribution,
        amount,
        policies,
        growth,
        avg_premium,
        sub_products: subs
            .into_iter()
            .map(|(name, contribution, amount, policies)| SubProduct {
                name: name.to_string(),
                contribution,
                amount,
                policies,
            })
            .collect(),
    }
}

fn product_hierarchy() -> Vec<ProductLine> {
    vec![
        product_line("Term Life", 32.5, 19_000_000.0, 4200, 8.2, 4524.0, [
            ("Basic Term", 18.5, 11_000_000.0, 2500),
            ("Term with Return", 8.9, 5_200_000.0, 950),
            ("Group Term", 5.1, 2_800_000.0, 750),
        ]),
        product_line("Whole Life", 28.7, 16_800_000.0, 2100, 3.5, 8000.0, [
            ("Traditional Whole Life", 16.2, 9_500_000.0, 1200),
            ("Limited Payment", 8.1, 4_800_000.0, 600),
            ("Single Premium", 4.4, 2_500_000.0, 300),
        ]),
        product_line("ULIP", 18.2, 10_600_000.0, 1800, -2.3, 5889.0, [
            ("Equity ULIP", 11.8, 6_900_000.0, 1100),
            ("Debt ULIP", 4.2, 2_500_000.0, 450),
            ("Balanced ULIP", 2.2, 1_200_000.0, 250),
        ]),
        product_line("Endowment", 12.4, 7_200_000.0, 1600, 1.8, 4500.0, [
            ("Money Back", 7.1, 4_200_000.0, 900),
            ("Traditional Endowment", 3.8, 2_200_000.0, 500),
            ("Market Linked", 1.5, 800_000.0, 200),
        ]),
        product_line("Health", 8.2, 4_800_000.0, 2400, 12.5, 2000.0, [
            ("Individual Health", 4.8, 2_800_000.0, 1400),
            ("Family Floater", 2.2, 1_300_000.0, 650),
            ("Critical Illness", 1.2, 700_000.0, 350),
        ]),
    ]
}

fn region_detail(
    region: &str,
    branches: u32,
    policies: u32,
    collection_rate: f64,
    collections: f64,
    growth: f64,
    top: [(&str, &str, u32, f64); 3],
) -> RegionDetail {
    RegionDetail {
        region: region.to_string(),
        branches,
        policies,
        collection_rate,
        collections,
        growth,
        top_branches: top
            .into_iter()
            .map(|(code, name, policies, collection_rate)| TopBranch {
                code: code.to_string(),
                name: name.to_string(),
                policies,
                collection_rate,
            })
            .collect(),
    }
}

fn regional_details() -> Vec<RegionDetail> {
    vec![
        region_detail("North", 45, 3200, 94.2, 18_500_000.0, 5.2, [
            ("BR001", "Delhi Central", 450, 96.8),
            ("BR002", "Gurgaon", 380, 95.2),
            ("BR003", "Noida", 320, 93.1),
        ]),
        region_detail("South", 38, 2800, 89.7, 15_200_000.0, -2.1, [
            ("BR021", "Bangalore Tech", 520, 92.4),
            ("BR022", "Chennai Port", 410, 88.9),
            ("BR023", "Hyderabad IT", 365, 87.2),
        ]),
        region_detail("East", 42, 3500, 87.3, 19_800_000.0, 3.8, [
            ("BR041", "Kolkata Commercial", 485, 89.7),
            ("BR042", "Bhubaneswar", 425, 88.1),
            ("BR043", "Guwahati", 390, 85.9),
        ]),
        region_detail("West", 51, 2400, 92.8, 12_400_000.0, 7.3, [
            ("BR061", "Mumbai Central", 680, 95.1),
            ("BR062", "Pune Tech Park", 445, 93.8),
            ("BR063", "Ahmedabad", 385, 90.2),
        ]),
        region_detail("Central", 28, 947, 86.1, 8_500_000.0, -1.5, [
            ("BR081", "Indore", 285, 88.4),
            ("BR082", "Bhopal", 245, 85.1),
            ("BR083", "Nagpur", 220, 84.7),
        ]),
    ]
}

fn channel_metrics() -> Vec<ChannelMetrics> {
    [
        ("Direct Sales", 4200, 22_000_000.0, 89.5, 5238.0, 24.8, 4.2, 8.5, 1250.0, 92.1, 18.5),
        ("Bancassurance", 3800, 19_500_000.0, 87.2, 5132.0, 31.2, 4.0, 5.2, 890.0, 89.4, 22.1),
        ("Broker", 2900, 14_200_000.0, 82.4, 4897.0, 18.9, 3.8, 2.1, 1450.0, 85.2, 15.8),
        ("Online", 1500, 8_800_000.0, 91.8, 5867.0, 12.4, 4.3, 18.7, 650.0, 94.2, 28.9),
        ("Corporate", 447, 3_900_000.0, 76.3, 8724.0, 45.2, 3.9, -4.2, 2100.0, 78.9, 12.4),
    ]
    .into_iter()
    .map(
        |(channel, policies, collections, collection_rate, avg_deal_size, conversion_rate, customer_satisfaction, growth, cost_per_acquisition, retention_rate, profitability)| {
            ChannelMetrics {
                channel: channel.to_string(),
                policies,
                collections,
                collection_rate,
                avg_deal_size,
                conversion_rate,
                customer_satisfaction,
                growth,
                cost_per_acquisition,
                retention_rate,
                profitability,
            }
        },
    )
    .collect()
}

fn filter_options() -> FilterOptions {
    FilterOptions {
        regions: strings(&["North", "South", "East", "West", "Central"]),
        branches: strings(&["BR001", "BR002", "BR003", "BR004", "BR005", "BR021", "BR022"]),
        products: strings(&["Term Life", "Whole Life", "ULIP", "Endowment", "Health"]),
        channels: strings(&["Direct Sales", "Bancassurance", "Broker", "Online", "Corporate"]),
        payment_mechanisms: strings(&[
            "Auto Debit",
            "Credit Card",
            "Net Banking",
            "UPI",
            "Cash",
            "Cheque",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_populated() {
        let data = dashboard_data();
        assert_eq!(data.regions.len(), 5);
        assert_eq!(data.payment_mechanisms.len(), 6);
        assert_eq!(data.monthly_trends.len(), 8);
        assert_eq!(data.branches.len(), 5);
        assert_eq!(data.branch_monthly_base.len(), 9);
        assert_eq!(data.concerning_cases.len(), 3);
        assert!(data.product_lines.iter().all(|p| p.sub_products.len() == 3));
    }

    #[test]
    fn test_future_branch_months_have_no_actuals() {
        let base = branch_monthly_base();
        assert!(base[6..].iter().all(|m| m.total_collection.is_none()));
        assert!(base[..6].iter().all(|m| m.total_collection.is_some()));
    }

    #[test]
    fn test_case_dates_are_valid() {
        assert!(concerning_cases()
            .iter()
            .all(|c| c.last_contact != NaiveDate::default()));
    }
}
