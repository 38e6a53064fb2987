use super::common::*;
use crate::workflows::loan::dataset::{from_reader, select_row, DatasetError};
use crate::workflows::loan::domain::{CandidateId, LoanStatus};
use crate::workflows::loan::intake::{self, IntakeError};

const HEADER: &str = "Candidate ID,Gross Income,Existing loan amount,debit,Bank credit,Assets,Years of experiance,Tax Payble,Loan Approved status";

#[test]
fn loads_and_validates_rows() {
    let csv = format!(
        "{HEADER}\nCAND0001,150000,20000,20000,150000,200000,8,15000,Approved\nCAND0002,100000,60000,20000,100000,50000,3,10000,Rejected\n"
    );

    let requests = from_reader(csv.as_bytes()).expect("dataset parses");

    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].candidate_id,
        Some(CandidateId("CAND0001".to_string()))
    );
    assert_eq!(requests[0].predicted_status, LoanStatus::Approved);
    assert_eq!(requests[1].financials.existing_loan_amount, 60_000.0);
    assert_eq!(requests[1].predicted_status, LoanStatus::Rejected);
}

#[test]
fn invalid_rows_carry_their_index() {
    let csv = format!(
        "{HEADER}\nCAND0001,150000,20000,20000,150000,200000,8,15000,Approved\nCAND0002,oops,60000,20000,100000,50000,3,10000,Rejected\n"
    );

    let error = from_reader(csv.as_bytes()).expect_err("bad cell rejected");
    match error {
        DatasetError::Row { row, source } => {
            assert_eq!(row, 1);
            assert!(matches!(
                source,
                IntakeError::InvalidNumber {
                    field: intake::GROSS_INCOME,
                    ..
                }
            ));
        }
        other => panic!("expected row error, got {other:?}"),
    }
}

#[test]
fn rows_without_a_classifier_label_are_rejected() {
    let csv = "Candidate ID,Gross Income,Existing loan amount,debit,Bank credit,Assets,Years of experiance,Tax Payble\nCAND0001,150000,20000,20000,150000,200000,8,15000\n";

    let error = from_reader(csv.as_bytes()).expect_err("missing label rejected");
    assert!(matches!(
        error,
        DatasetError::Row {
            row: 0,
            source: IntakeError::MissingField {
                field: intake::PREDICTED_STATUS
            }
        }
    ));
}

#[test]
fn row_selection_is_bounds_checked() {
    let csv = format!("{HEADER}\nCAND0001,150000,20000,20000,150000,200000,8,15000,Approved\n");
    let requests = from_reader(csv.as_bytes()).expect("dataset parses");

    assert!(select_row(&requests, 0).is_ok());
    match select_row(&requests, 3) {
        Err(DatasetError::RowOutOfRange { index: 3, len: 1 }) => {}
        other => panic!("expected out-of-range error, got {other:?}"),
    }
}

#[test]
fn screened_batch_preserves_row_order() {
    let csv = format!(
        "{HEADER}\nCAND0001,150000,20000,20000,150000,200000,8,15000,Approved\nCAND0002,100000,60000,20000,100000,50000,3,10000,Rejected\n"
    );
    let requests = from_reader(csv.as_bytes()).expect("dataset parses");

    let outcomes = service().screen_all(&requests);

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].decision.status, LoanStatus::Approved);
    assert_eq!(outcomes[1].decision.status, LoanStatus::Rejected);
}
