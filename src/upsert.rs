//! payment create-or-update
//!
//! A loan has at most one payment reachable from here: the first record whose
//! `loan_id` matches is updated in place, otherwise a new one is appended.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TrackerError};
use crate::loan::Payment;
use crate::store::LoanStore;
use crate::types::{LoanId, UpsertKind};

pub const CREATED_MESSAGE: &str = "Loan payment record created successfully.";
pub const UPDATED_MESSAGE: &str = "Loan payment updated successfully.";

/// payment request as submitted by a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub loan_id: LoanId,
    /// recorded in the event log only; taken as given, no range checks
    pub amount: f64,
    /// defaults to the tracker's current date when absent
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
}

impl PaymentRequest {
    pub fn new(loan_id: LoanId, amount: f64) -> Self {
        Self {
            loan_id,
            amount,
            payment_date: None,
        }
    }

    pub fn on(mut self, payment_date: NaiveDate) -> Self {
        self.payment_date = Some(payment_date);
        self
    }
}

/// structured result of a payment request; callers branch on `success`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    pub success: bool,
    pub message: String,
    pub payment: Option<Payment>,
}

impl PaymentOutcome {
    pub fn applied(kind: UpsertKind, payment: Payment) -> Self {
        let message = match kind {
            UpsertKind::Created => CREATED_MESSAGE,
            UpsertKind::Updated => UPDATED_MESSAGE,
        };
        Self {
            success: true,
            message: message.to_string(),
            payment: Some(payment),
        }
    }

    pub fn failed(error: &TrackerError) -> Self {
        Self {
            success: false,
            message: error.client_message(),
            payment: None,
        }
    }
}

/// applied upsert, with the payment date it replaced when updating
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertResult {
    pub kind: UpsertKind,
    pub payment: Payment,
    pub previous_date: Option<NaiveDate>,
}

/// create or update the payment for `loan_id`
///
/// Fails with `LoanNotFound` before touching either collection.
pub fn upsert_payment(
    store: &mut LoanStore,
    loan_id: LoanId,
    payment_date: NaiveDate,
) -> Result<UpsertResult> {
    if store.loan(loan_id).is_none() {
        return Err(TrackerError::LoanNotFound { loan_id });
    }

    if let Some(existing) = store.first_payment_mut(loan_id) {
        let previous_date = existing.payment_date;
        existing.loan_id = loan_id;
        existing.payment_date = payment_date;
        return Ok(UpsertResult {
            kind: UpsertKind::Updated,
            payment: existing.clone(),
            previous_date: Some(previous_date),
        });
    }

    let payment = Payment {
        id: store.next_payment_id(),
        loan_id,
        payment_date,
    };
    let stored = store.push_payment(payment).clone();
    Ok(UpsertResult {
        kind: UpsertKind::Created,
        payment: stored,
        previous_date: None,
    })
}
