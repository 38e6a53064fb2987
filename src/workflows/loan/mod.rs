//! Loan screening workflow: boundary validation of applicant records, the
//! deterministic eligibility explanation engine, dataset and payslip helpers,
//! and the HTTP surface wrapping them.

pub mod dataset;
pub mod domain;
pub(crate) mod eligibility;
pub mod intake;
pub mod payslip;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use dataset::DatasetError;
pub use domain::{
    ApplicantFinancials, CandidateId, Decision, FinancialRatios, LoanStatus, ScreeningOutcome,
    ScreeningRequest,
};
pub use eligibility::{EligibilityEngine, EligibilityThresholds};
pub use intake::IntakeError;
pub use payslip::{PayslipEligibility, PayslipSummary};
pub use router::{decision_router, DecisionRequest, DecisionView};
pub use service::LoanScreeningService;
