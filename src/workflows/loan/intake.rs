use std::collections::BTreeMap;

use super::domain::{ApplicantFinancials, LoanStatus};

/// Dataset column names carried over from the upstream applicant spreadsheet,
/// spelling quirks included.
pub const GROSS_INCOME: &str = "Gross Income";
pub const EXISTING_LOAN_AMOUNT: &str = "Existing loan amount";
pub const DEBIT: &str = "debit";
pub const BANK_CREDIT: &str = "Bank credit";
pub const ASSETS: &str = "Assets";
pub const YEARS_EXPERIENCE: &str = "Years of experiance";
pub const TAX_PAYABLE: &str = "Tax Payble";
pub const PREDICTED_STATUS: &str = "Loan Approved status";

/// Boundary validation failures. These fail fast and are never retried; the
/// engine downstream is pure, so a retry would fail identically.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("required field '{field}' is missing from the applicant record")]
    MissingField { field: &'static str },
    #[error("field '{field}' has value '{value}', expected a non-negative number")]
    InvalidNumber { field: &'static str, value: String },
    #[error("predicted status '{value}' is not one of Approved/Rejected")]
    InvalidStatus { value: String },
}

/// Build validated financials from one loosely-typed record row. All numeric
/// conversion happens here, once, so the core never sees raw strings.
pub fn applicant_from_fields(
    fields: &BTreeMap<String, String>,
) -> Result<ApplicantFinancials, IntakeError> {
    Ok(ApplicantFinancials {
        gross_income: amount_field(fields, GROSS_INCOME)?,
        existing_loan_amount: amount_field(fields, EXISTING_LOAN_AMOUNT)?,
        debit: amount_field(fields, DEBIT)?,
        bank_credit: amount_field(fields, BANK_CREDIT)?,
        assets: amount_field(fields, ASSETS)?,
        years_experience: years_field(fields, YEARS_EXPERIENCE)?,
        tax_payable: amount_field(fields, TAX_PAYABLE)?,
    })
}

/// Parse the classifier's label from one record row.
pub fn status_from_fields(fields: &BTreeMap<String, String>) -> Result<LoanStatus, IntakeError> {
    let raw = fields
        .get(PREDICTED_STATUS)
        .ok_or(IntakeError::MissingField {
            field: PREDICTED_STATUS,
        })?;
    parse_status(raw)
}

pub fn parse_status(value: &str) -> Result<LoanStatus, IntakeError> {
    LoanStatus::parse(value).ok_or_else(|| IntakeError::InvalidStatus {
        value: value.trim().to_string(),
    })
}

/// Require a numeric field already deserialized by the transport layer
/// (e.g. a JSON payload with optional members).
pub(crate) fn require_amount(
    field: &'static str,
    value: Option<f64>,
) -> Result<f64, IntakeError> {
    let value = value.ok_or(IntakeError::MissingField { field })?;
    if !value.is_finite() || value < 0.0 {
        return Err(IntakeError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn amount_field(fields: &BTreeMap<String, String>, field: &'static str) -> Result<f64, IntakeError> {
    let raw = fields
        .get(field)
        .ok_or(IntakeError::MissingField { field })?;
    parse_amount(field, raw)
}

fn years_field(fields: &BTreeMap<String, String>, field: &'static str) -> Result<u32, IntakeError> {
    let raw = fields
        .get(field)
        .ok_or(IntakeError::MissingField { field })?;
    let value = parse_amount(field, raw)?;
    if value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(IntakeError::InvalidNumber {
            field,
            value: raw.trim().to_string(),
        });
    }
    Ok(value as u32)
}

fn parse_amount(field: &'static str, raw: &str) -> Result<f64, IntakeError> {
    let trimmed = raw.trim();
    let normalized = trimmed.replace(',', "");

    let invalid = || IntakeError::InvalidNumber {
        field,
        value: trimmed.to_string(),
    };

    if normalized.is_empty() {
        return Err(IntakeError::MissingField { field });
    }

    let value = normalized.parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok(value)
}
