//! Loan screening advisor: a deterministic rule engine that explains the
//! Approved/Rejected label produced by an upstream classifier, plus the
//! service plumbing around it.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
