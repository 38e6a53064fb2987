use tracing::info;

use super::domain::{ScreeningOutcome, ScreeningRequest};
use super::eligibility::{EligibilityEngine, EligibilityThresholds};

/// Stateless facade over the eligibility engine. Each request is screened and
/// discarded; nothing is persisted between calls, so the service can be shared
/// freely across threads.
pub struct LoanScreeningService {
    engine: EligibilityEngine,
}

impl LoanScreeningService {
    pub fn new(thresholds: EligibilityThresholds) -> Self {
        Self {
            engine: EligibilityEngine::new(thresholds),
        }
    }

    pub fn engine(&self) -> &EligibilityEngine {
        &self.engine
    }

    /// Screen one validated request: derive ratios, explain the classifier's
    /// label, and return the combined outcome.
    pub fn screen(&self, request: &ScreeningRequest) -> ScreeningOutcome {
        let ratios = self.engine.ratios(&request.financials);
        let decision = self
            .engine
            .explain(&request.financials, request.predicted_status);

        info!(
            candidate = request
                .candidate_id
                .as_ref()
                .map(|id| id.0.as_str())
                .unwrap_or("unidentified"),
            status = decision.status.label(),
            reasons = decision.reasons.len(),
            "screened loan application"
        );

        ScreeningOutcome {
            candidate_id: request.candidate_id.clone(),
            decision,
            ratios,
        }
    }

    /// Screen a batch of dataset rows in order. Rows are independent, so the
    /// output order is the input order and nothing carries over between rows.
    pub fn screen_all(&self, requests: &[ScreeningRequest]) -> Vec<ScreeningOutcome> {
        requests.iter().map(|request| self.screen(request)).collect()
    }
}

impl Default for LoanScreeningService {
    fn default() -> Self {
        Self::new(EligibilityThresholds::default())
    }
}
