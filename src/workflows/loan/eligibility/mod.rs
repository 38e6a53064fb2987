mod config;
mod rules;

pub use config::EligibilityThresholds;

use super::domain::{ApplicantFinancials, Decision, FinancialRatios, LoanStatus};

/// Stateless engine that explains a classifier label with deterministic,
/// threshold-based reasons. Holds only its threshold configuration, so
/// concurrent callers need no coordination.
pub struct EligibilityEngine {
    thresholds: EligibilityThresholds,
}

impl EligibilityEngine {
    pub fn new(thresholds: EligibilityThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &EligibilityThresholds {
        &self.thresholds
    }

    /// Derive the ratio snapshot for an applicant. Total: zero denominators
    /// map to positive infinity instead of an error.
    pub fn ratios(&self, applicant: &ApplicantFinancials) -> FinancialRatios {
        rules::financial_ratios(applicant)
    }

    /// Explain `predicted_status` for the applicant. The returned decision
    /// carries the same status and at least one reason; when no specific rule
    /// fires, a generic fallback reason is substituted.
    pub fn explain(&self, applicant: &ApplicantFinancials, predicted_status: LoanStatus) -> Decision {
        let ratios = rules::financial_ratios(applicant);

        let mut reasons = match predicted_status {
            LoanStatus::Rejected => rules::rejection_reasons(applicant, &ratios, &self.thresholds),
            LoanStatus::Approved => rules::approval_reasons(applicant, &ratios, &self.thresholds),
        };

        if reasons.is_empty() {
            let fallback = match predicted_status {
                LoanStatus::Rejected => rules::REJECTED_FALLBACK,
                LoanStatus::Approved => rules::APPROVED_FALLBACK,
            };
            reasons.push(fallback.to_string());
        }

        Decision {
            status: predicted_status,
            reasons,
        }
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new(EligibilityThresholds::default())
    }
}
