//! Payslip text analysis: label/amount extraction plus the tiered salary
//! eligibility check layered on top of it.
//!
//! The input is text already extracted from a payslip; pulling text out of a
//! PDF is a concern of the caller. Parsing returns an explicit map rather
//! than accumulating into shared state, so repeated calls are independent.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const TOTAL_DEDUCTIONS: &str = "Total Deductions";

/// Labels that are aggregates or counters, not earnings lines.
const NON_EARNING_LABELS: [&str; 2] = [TOTAL_DEDUCTIONS, "Days Paid"];

fn line_item_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([A-Za-z &]+?)\s+(\d{1,3}(?:,\d{3})*(?:\.\d{1,2})?|\d+\.?\d*)")
            .expect("payslip line item pattern is valid")
    })
}

/// Extract label/amount pairs from payslip text. Later occurrences of a label
/// overwrite earlier ones, matching how payslips repeat section totals.
pub fn parse_salary_lines(text: &str) -> BTreeMap<String, f64> {
    let mut entries = BTreeMap::new();

    for captures in line_item_pattern().captures_iter(text) {
        let label = captures[1].trim();
        if label.is_empty() {
            continue;
        }
        if let Ok(amount) = captures[2].replace(',', "").parse::<f64>() {
            entries.insert(label.to_string(), amount);
        }
    }

    entries
}

/// Sum of earning lines, skipping deduction totals and day counters.
pub fn total_earnings(entries: &BTreeMap<String, f64>) -> f64 {
    entries
        .iter()
        .filter(|(label, _)| !NON_EARNING_LABELS.contains(&label.as_str()))
        .map(|(_, amount)| amount)
        .sum()
}

/// Earnings less the deduction total; zero deductions when the payslip did
/// not report any.
pub fn net_salary(entries: &BTreeMap<String, f64>) -> f64 {
    let deductions = entries.get(TOTAL_DEDUCTIONS).copied().unwrap_or(0.0);
    total_earnings(entries) - deductions
}

/// Tiered eligibility derived from net salary alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayslipEligibility {
    NotEligible,
    Limited,
    Moderate,
    Full,
}

impl PayslipEligibility {
    pub fn for_net_salary(net_salary: f64) -> Self {
        if net_salary < 20_000.0 {
            PayslipEligibility::NotEligible
        } else if net_salary < 30_000.0 {
            PayslipEligibility::Limited
        } else if net_salary < 50_000.0 {
            PayslipEligibility::Moderate
        } else {
            PayslipEligibility::Full
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            PayslipEligibility::NotEligible => "not eligible: net salary is too low",
            PayslipEligibility::Limited => {
                "partially eligible: only a limited loan amount can be approved"
            }
            PayslipEligibility::Moderate => "eligible for a moderate loan",
            PayslipEligibility::Full => "eligible for a loan",
        }
    }
}

/// Aggregate view over one parsed payslip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayslipSummary {
    pub total_earnings: f64,
    pub net_salary: f64,
    pub eligibility: PayslipEligibility,
}

pub fn summarize(entries: &BTreeMap<String, f64>) -> PayslipSummary {
    let total = total_earnings(entries);
    let net = net_salary(entries);
    PayslipSummary {
        total_earnings: total,
        net_salary: net,
        eligibility: PayslipEligibility::for_net_salary(net),
    }
}
