use super::super::domain::{ApplicantFinancials, FinancialRatios};
use super::config::EligibilityThresholds;

/// Share of gross income that disposable income must exceed to count as strong.
const STRONG_DISPOSABLE_SHARE: f64 = 0.3;

pub(crate) const REJECTED_FALLBACK: &str =
    "The application does not meet the general criteria for approval. Please review the financial details.";
pub(crate) const APPROVED_FALLBACK: &str =
    "The application meets the general criteria for approval.";

pub(crate) fn financial_ratios(applicant: &ApplicantFinancials) -> FinancialRatios {
    let debt_to_income = if applicant.gross_income > 0.0 {
        applicant.existing_loan_amount / applicant.gross_income
    } else {
        f64::INFINITY
    };

    let expense_ratio = if applicant.bank_credit > 0.0 {
        applicant.debit / applicant.bank_credit
    } else {
        f64::INFINITY
    };

    FinancialRatios {
        debt_to_income,
        expense_ratio,
        disposable_income: applicant.disposable_income(),
    }
}

/// Reasons explaining a rejection. Checks run in fixed order so identical
/// inputs always yield an identical list.
pub(crate) fn rejection_reasons(
    applicant: &ApplicantFinancials,
    ratios: &FinancialRatios,
    thresholds: &EligibilityThresholds,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if ratios.debt_to_income > thresholds.max_debt_to_income {
        reasons.push(format!(
            "Debt-to-income ratio ({:.2}) exceeds maximum allowed ({:.2}).",
            ratios.debt_to_income, thresholds.max_debt_to_income
        ));
    }
    if applicant.gross_income < thresholds.low_income_cutoff() {
        reasons.push(format!(
            "Gross income ({}) is lower than typical approval requirements.",
            format_amount(applicant.gross_income)
        ));
    }
    if applicant.existing_loan_amount > thresholds.max_existing_loan {
        reasons.push(format!(
            "Existing loan amount ({}) is considerably high.",
            format_amount(applicant.existing_loan_amount)
        ));
    }
    if applicant.assets < thresholds.low_assets_cutoff() {
        reasons.push(format!(
            "Assets ({}) are insufficient.",
            format_amount(applicant.assets)
        ));
    }
    if ratios.expense_ratio > thresholds.max_expense_ratio {
        reasons.push(format!(
            "Expense ratio ({:.2}) is unfavorable.",
            ratios.expense_ratio
        ));
    }

    reasons
}

/// Reasons supporting an approval, in fixed order.
pub(crate) fn approval_reasons(
    applicant: &ApplicantFinancials,
    ratios: &FinancialRatios,
    thresholds: &EligibilityThresholds,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if applicant.gross_income >= thresholds.min_gross_income {
        reasons.push(format!(
            "Gross income ({}) meets requirements.",
            format_amount(applicant.gross_income)
        ));
    }
    if ratios.disposable_income > STRONG_DISPOSABLE_SHARE * applicant.gross_income {
        reasons.push(format!(
            "Disposable income ({}) is strong.",
            format_amount(ratios.disposable_income)
        ));
    }
    if ratios.debt_to_income <= thresholds.max_debt_to_income {
        reasons.push(format!(
            "Debt-to-income ratio ({:.2}) is healthy.",
            ratios.debt_to_income
        ));
    }
    if ratios.expense_ratio <= thresholds.max_expense_ratio {
        reasons.push(format!(
            "Expense ratio ({:.2}) is favorable.",
            ratios.expense_ratio
        ));
    }
    if applicant.years_experience >= thresholds.min_years_experience {
        reasons.push(format!(
            "Years of experience ({}) provide stability.",
            applicant.years_experience
        ));
    }
    if applicant.assets >= thresholds.min_assets {
        reasons.push(format!(
            "Substantial assets ({}) provide additional financial strength.",
            format_amount(applicant.assets)
        ));
    } else if applicant.assets > 0.0 {
        reasons.push(format!(
            "Assets ({}) contribute to financial health.",
            format_amount(applicant.assets)
        ));
    }

    reasons
}

/// Round to whole units and group digits by thousands for reason text.
pub(crate) fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
