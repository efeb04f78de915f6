//! repayment status resolution
//!
//! Pure functions over any payment slice; nothing here reads tracker state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TrackerError};
use crate::loan::{Loan, Payment};
use crate::types::{LoanId, LoanStatus};

/// day cutoffs, measured from the due date to the last payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusThresholds {
    /// last day (inclusive) still counted as on time
    pub on_time_days: i64,
    /// last day (inclusive) counted as late; anything after is a default
    pub late_days: i64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            on_time_days: 5,
            late_days: 30,
        }
    }
}

impl StatusThresholds {
    pub fn validate(&self) -> Result<()> {
        if self.on_time_days >= self.late_days {
            return Err(TrackerError::InvalidConfiguration {
                message: format!(
                    "on_time_days ({}) must be below late_days ({})",
                    self.on_time_days, self.late_days
                ),
            });
        }
        Ok(())
    }

    /// classify a signed day offset; negative means paid before the due date
    pub fn classify(&self, days_since_due: i64) -> LoanStatus {
        if days_since_due <= self.on_time_days {
            LoanStatus::OnTime
        } else if days_since_due <= self.late_days {
            LoanStatus::Late
        } else {
            LoanStatus::Defaulted
        }
    }
}

/// resolved repayment fields for one loan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResolution {
    pub last_payment_date: Option<NaiveDate>,
    pub status: LoanStatus,
}

/// latest payment date among payments recorded for `loan_id`
pub fn last_payment_date(loan_id: LoanId, payments: &[Payment]) -> Option<NaiveDate> {
    payments
        .iter()
        .filter(|p| p.loan_id == loan_id)
        .map(|p| p.payment_date)
        .max()
}

/// status for a due date given the last payment, if any
pub fn status_for(
    due_date: NaiveDate,
    last_payment: Option<NaiveDate>,
    thresholds: &StatusThresholds,
) -> LoanStatus {
    match last_payment {
        Some(paid) => thresholds.classify((paid - due_date).num_days()),
        None => LoanStatus::Unpaid,
    }
}

pub fn resolve(loan: &Loan, payments: &[Payment], thresholds: &StatusThresholds) -> StatusResolution {
    let last_payment_date = last_payment_date(loan.id, payments);
    let status = status_for(loan.due_date, last_payment_date, thresholds);
    log::debug!(
        "resolved loan {}: last payment {:?}, status {}",
        loan.id,
        last_payment_date,
        status
    );
    StatusResolution {
        last_payment_date,
        status,
    }
}
