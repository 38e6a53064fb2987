use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{CandidateId, ScreeningRequest};
use super::intake::{self, IntakeError};

/// Failures while loading an applicant dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read applicant dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} is invalid: {source}")]
    Row { row: usize, source: IntakeError },
    #[error("row {index} not found, dataset has {len} row(s)")]
    RowOutOfRange { index: usize, len: usize },
}

/// Load and validate every applicant row from a CSV export of the upstream
/// dataset. Rows carry the classifier's stored label alongside the raw
/// financial columns.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ScreeningRequest>, DatasetError> {
    let file = std::fs::File::open(path)?;
    from_reader(file)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ScreeningRequest>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut requests = Vec::new();
    for (index, record) in csv_reader.deserialize::<ApplicantRow>().enumerate() {
        let row = record?;
        let request = row
            .into_request()
            .map_err(|source| DatasetError::Row { row: index, source })?;
        requests.push(request);
    }

    Ok(requests)
}

/// Select one row out of a validated dataset.
pub fn select_row(
    requests: &[ScreeningRequest],
    index: usize,
) -> Result<&ScreeningRequest, DatasetError> {
    requests.get(index).ok_or(DatasetError::RowOutOfRange {
        index,
        len: requests.len(),
    })
}

/// Raw CSV row keyed by the upstream spreadsheet headers. Every cell is kept
/// as text so that numeric validation happens in exactly one place (intake).
#[derive(Debug, Deserialize)]
struct ApplicantRow {
    #[serde(rename = "Candidate ID", default)]
    candidate_id: Option<String>,
    #[serde(rename = "Gross Income", default)]
    gross_income: Option<String>,
    #[serde(rename = "Existing loan amount", default)]
    existing_loan_amount: Option<String>,
    #[serde(rename = "debit", default)]
    debit: Option<String>,
    #[serde(rename = "Bank credit", default)]
    bank_credit: Option<String>,
    #[serde(rename = "Assets", default)]
    assets: Option<String>,
    #[serde(rename = "Years of experiance", default)]
    years_experience: Option<String>,
    #[serde(rename = "Tax Payble", default)]
    tax_payable: Option<String>,
    #[serde(rename = "Loan Approved status", default)]
    predicted_status: Option<String>,
}

impl ApplicantRow {
    fn into_request(self) -> Result<ScreeningRequest, IntakeError> {
        let mut fields = BTreeMap::new();
        let cells = [
            (intake::GROSS_INCOME, self.gross_income),
            (intake::EXISTING_LOAN_AMOUNT, self.existing_loan_amount),
            (intake::DEBIT, self.debit),
            (intake::BANK_CREDIT, self.bank_credit),
            (intake::ASSETS, self.assets),
            (intake::YEARS_EXPERIENCE, self.years_experience),
            (intake::TAX_PAYABLE, self.tax_payable),
            (intake::PREDICTED_STATUS, self.predicted_status),
        ];
        for (name, cell) in cells {
            if let Some(value) = cell.filter(|value| !value.trim().is_empty()) {
                fields.insert(name.to_string(), value);
            }
        }

        let financials = intake::applicant_from_fields(&fields)?;
        let predicted_status = intake::status_from_fields(&fields)?;

        Ok(ScreeningRequest {
            candidate_id: self
                .candidate_id
                .filter(|id| !id.trim().is_empty())
                .map(CandidateId),
            financials,
            predicted_status,
        })
    }
}
