use serde::{Deserialize, Serialize};
use std::fmt;

/// unique identifier for a loan
pub type LoanId = i64;

/// unique identifier for a payment record
pub type PaymentId = i64;

/// repayment status derived from a loan's due date and its last payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanStatus {
    /// paid no later than the on-time cutoff after the due date
    #[serde(rename = "On Time")]
    OnTime,
    /// paid past the on-time cutoff but within the late window
    #[serde(rename = "Late")]
    Late,
    /// paid after the late window closed
    #[serde(rename = "Defaulted")]
    Defaulted,
    /// no payment on record
    #[serde(rename = "Unpaid")]
    Unpaid,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::OnTime => "On Time",
            LoanStatus::Late => "Late",
            LoanStatus::Defaulted => "Defaulted",
            LoanStatus::Unpaid => "Unpaid",
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// which branch of the payment upsert ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpsertKind {
    Created,
    Updated,
}
