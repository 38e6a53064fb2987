use super::common::*;
use crate::workflows::loan::domain::{CandidateId, LoanStatus};

#[test]
fn screen_passes_the_classifier_label_through() {
    let service = service();

    let approved = service.screen(&request(strong_applicant(), LoanStatus::Approved));
    assert_eq!(approved.decision.status, LoanStatus::Approved);

    let rejected = service.screen(&request(strong_applicant(), LoanStatus::Rejected));
    assert_eq!(rejected.decision.status, LoanStatus::Rejected);
}

#[test]
fn screen_carries_the_candidate_identity() {
    let service = service();
    let outcome = service.screen(&request(high_dti_applicant(), LoanStatus::Rejected));

    assert_eq!(
        outcome.candidate_id,
        Some(CandidateId("CAND0001".to_string()))
    );
}

#[test]
fn screen_attaches_the_ratio_snapshot() {
    let service = service();
    let outcome = service.screen(&request(high_dti_applicant(), LoanStatus::Rejected));

    assert_eq!(outcome.ratios.debt_to_income, 0.6);
    assert_eq!(outcome.ratios.expense_ratio, 0.2);
    assert_eq!(outcome.ratios.disposable_income, 70_000.0);
}

#[test]
fn screen_all_yields_one_outcome_per_request() {
    let service = service();
    let requests = vec![
        request(strong_applicant(), LoanStatus::Approved),
        request(weak_applicant(), LoanStatus::Approved),
        request(high_dti_applicant(), LoanStatus::Rejected),
    ];

    let outcomes = service.screen_all(&requests);

    assert_eq!(outcomes.len(), 3);
    for (request, outcome) in requests.iter().zip(&outcomes) {
        assert_eq!(outcome.decision.status, request.predicted_status);
        assert!(!outcome.decision.reasons.is_empty());
    }
}
