use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::loan::domain::{
    ApplicantFinancials, CandidateId, LoanStatus, ScreeningRequest,
};
use crate::workflows::loan::eligibility::{EligibilityEngine, EligibilityThresholds};
use crate::workflows::loan::router::decision_router;
use crate::workflows::loan::service::LoanScreeningService;

pub(super) fn thresholds() -> EligibilityThresholds {
    EligibilityThresholds::default()
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(thresholds())
}

pub(super) fn service() -> LoanScreeningService {
    LoanScreeningService::new(thresholds())
}

pub(super) fn router() -> axum::Router {
    decision_router(Arc::new(service()))
}

/// Rejected applicant whose only tripped rule is the DTI check
/// (60000 / 100000 = 0.60 > 0.40; assets sit exactly on the 50% cutoff).
pub(super) fn high_dti_applicant() -> ApplicantFinancials {
    ApplicantFinancials {
        gross_income: 100_000.0,
        existing_loan_amount: 60_000.0,
        debit: 20_000.0,
        bank_credit: 100_000.0,
        assets: 50_000.0,
        years_experience: 3,
        tax_payable: 10_000.0,
    }
}

/// Approved applicant satisfying all six favorable checks.
pub(super) fn strong_applicant() -> ApplicantFinancials {
    ApplicantFinancials {
        gross_income: 150_000.0,
        existing_loan_amount: 20_000.0,
        debit: 20_000.0,
        bank_credit: 150_000.0,
        assets: 200_000.0,
        years_experience: 8,
        tax_payable: 15_000.0,
    }
}

/// Approved applicant failing every favorable check, so only the generic
/// fallback reason applies.
pub(super) fn weak_applicant() -> ApplicantFinancials {
    ApplicantFinancials {
        gross_income: 60_000.0,
        existing_loan_amount: 30_000.0,
        debit: 40_000.0,
        bank_credit: 50_000.0,
        assets: 0.0,
        years_experience: 3,
        tax_payable: 15_000.0,
    }
}

pub(super) fn request(
    financials: ApplicantFinancials,
    predicted_status: LoanStatus,
) -> ScreeningRequest {
    ScreeningRequest {
        candidate_id: Some(CandidateId("CAND0001".to_string())),
        financials,
        predicted_status,
    }
}

/// Complete raw record keyed by the upstream spreadsheet headers.
pub(super) fn record_fields() -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    fields.insert("Gross Income".to_string(), "100000".to_string());
    fields.insert("Existing loan amount".to_string(), "60,000".to_string());
    fields.insert("debit".to_string(), "20000".to_string());
    fields.insert("Bank credit".to_string(), "100000".to_string());
    fields.insert("Assets".to_string(), "50000".to_string());
    fields.insert("Years of experiance".to_string(), "3".to_string());
    fields.insert("Tax Payble".to_string(), "10000".to_string());
    fields.insert("Loan Approved status".to_string(), "Rejected".to_string());
    fields
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
