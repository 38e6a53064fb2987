use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{ApplicantFinancials, CandidateId, ScreeningOutcome, ScreeningRequest};
use super::intake::{self, IntakeError};
use super::service::LoanScreeningService;

/// Router builder exposing the decision endpoint used by the web form.
pub fn decision_router(service: Arc<LoanScreeningService>) -> Router {
    Router::new()
        .route("/api/v1/loans/decisions", post(decide_handler))
        .with_state(service)
}

/// Inbound payload with every member optional so that required-field
/// validation produces an intake error instead of a deserializer rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    #[serde(default)]
    pub candidate_id: Option<String>,
    #[serde(default)]
    pub gross_income: Option<f64>,
    #[serde(default)]
    pub existing_loan_amount: Option<f64>,
    #[serde(default)]
    pub debit: Option<f64>,
    #[serde(default)]
    pub bank_credit: Option<f64>,
    #[serde(default)]
    pub assets: Option<f64>,
    #[serde(default)]
    pub years_experience: Option<u32>,
    #[serde(default)]
    pub tax_payable: Option<f64>,
    #[serde(default)]
    pub predicted_status: Option<String>,
}

impl DecisionRequest {
    fn into_screening_request(self) -> Result<ScreeningRequest, IntakeError> {
        let financials = ApplicantFinancials {
            gross_income: intake::require_amount("gross_income", self.gross_income)?,
            existing_loan_amount: intake::require_amount(
                "existing_loan_amount",
                self.existing_loan_amount,
            )?,
            debit: intake::require_amount("debit", self.debit)?,
            bank_credit: intake::require_amount("bank_credit", self.bank_credit)?,
            assets: intake::require_amount("assets", self.assets)?,
            years_experience: self.years_experience.ok_or(IntakeError::MissingField {
                field: "years_experience",
            })?,
            tax_payable: intake::require_amount("tax_payable", self.tax_payable)?,
        };

        let raw_status = self.predicted_status.ok_or(IntakeError::MissingField {
            field: "predicted_status",
        })?;
        let predicted_status = intake::parse_status(&raw_status)?;

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

/// Response view for the presentation layer. Non-finite ratios are omitted
/// rather than serialized as nulls.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<String>,
    pub status: &'static str,
    pub reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_to_income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_ratio: Option<f64>,
    pub disposable_income: f64,
    pub evaluated_at: DateTime<Utc>,
}

impl DecisionView {
    pub fn from_outcome(outcome: ScreeningOutcome) -> Self {
        let finite = |value: f64| value.is_finite().then_some(value);

        Self {
            candidate_id: outcome.candidate_id.map(|id| id.0),
            status: outcome.decision.status.label(),
            reasons: outcome.decision.reasons,
            debt_to_income: finite(outcome.ratios.debt_to_income),
            expense_ratio: finite(outcome.ratios.expense_ratio),
            disposable_income: outcome.ratios.disposable_income,
            evaluated_at: Utc::now(),
        }
    }
}

pub(crate) async fn decide_handler(
    State(service): State<Arc<LoanScreeningService>>,
    axum::Json(payload): axum::Json<DecisionRequest>,
) -> Response {
    match payload.into_screening_request() {
        Ok(request) => {
            let outcome = service.screen(&request);
            let view = DecisionView::from_outcome(outcome);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
