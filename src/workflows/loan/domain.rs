use serde::{Deserialize, Serialize};

/// Identifier wrapper for screened candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Financial attributes for one applicant, fixed for the lifetime of a single
/// evaluation. All monetary fields are non-negative once intake validation has
/// run; the core never re-checks them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantFinancials {
    pub gross_income: f64,
    pub existing_loan_amount: f64,
    pub debit: f64,
    pub bank_credit: f64,
    pub assets: f64,
    pub years_experience: u32,
    pub tax_payable: f64,
}

impl ApplicantFinancials {
    /// Discretionary surplus after periodic expenses and tax. Negative values
    /// are a valid, simply unfavorable, state.
    pub fn disposable_income(&self) -> f64 {
        self.gross_income - (self.debit + self.tax_payable)
    }
}

/// Categorical label produced by the upstream classifier. The rule engine
/// explains this label; it never overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    Approved,
    Rejected,
}

impl LoanStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LoanStatus::Approved => "approved",
            LoanStatus::Rejected => "rejected",
        }
    }

    /// Lenient parse for labels arriving from datasets and API payloads.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "approved" => Some(LoanStatus::Approved),
            "rejected" => Some(LoanStatus::Rejected),
            _ => None,
        }
    }
}

/// Ratio snapshot derived per evaluation and never stored. Zero denominators
/// substitute positive infinity rather than failing, so every ratio is total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialRatios {
    pub debt_to_income: f64,
    pub expense_ratio: f64,
    pub disposable_income: f64,
}

/// Explanation attached to a classifier label. `reasons` is never empty and
/// preserves rule evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub status: LoanStatus,
    pub reasons: Vec<String>,
}

/// One screening request: validated financials plus the classifier's label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRequest {
    pub candidate_id: Option<CandidateId>,
    pub financials: ApplicantFinancials,
    pub predicted_status: LoanStatus,
}

/// Outcome of screening a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    pub candidate_id: Option<CandidateId>,
    pub decision: Decision,
    pub ratios: FinancialRatios,
}
