use serde::{Deserialize, Serialize};

/// Threshold configuration backing the eligibility rules. Values are fixed for
/// the lifetime of an engine instance; nothing is derived at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityThresholds {
    pub max_debt_to_income: f64,
    pub min_gross_income: f64,
    pub max_existing_loan: f64,
    pub min_assets: f64,
    pub min_years_experience: u32,
    pub max_expense_ratio: f64,
}

impl EligibilityThresholds {
    /// Gross income below this is flagged on rejections (80% of the approval
    /// minimum, so borderline incomes do not produce contradictory reasons).
    pub fn low_income_cutoff(&self) -> f64 {
        self.min_gross_income * 0.8
    }

    /// Assets below this are flagged as insufficient on rejections.
    pub fn low_assets_cutoff(&self) -> f64 {
        self.min_assets * 0.5
    }
}

impl Default for EligibilityThresholds {
    fn default() -> Self {
        Self {
            max_debt_to_income: 0.40,
            min_gross_income: 70_000.0,
            max_existing_loan: 500_000.0,
            min_assets: 100_000.0,
            min_years_experience: 5,
            max_expense_ratio: 0.50,
        }
    }
}
