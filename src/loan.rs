use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{percentage_float, whole_number, Money, Rate};
use crate::types::{LoanId, LoanStatus, PaymentId};

/// loan record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub name: String,
    #[serde(with = "percentage_float")]
    pub interest_rate: Rate,
    #[serde(with = "whole_number")]
    pub principal: Money,
    pub due_date: NaiveDate,
}

impl Loan {
    pub fn new(
        id: LoanId,
        name: impl Into<String>,
        interest_rate: Rate,
        principal: Money,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            interest_rate,
            principal,
            due_date,
        }
    }

    /// flat interest over a number of months: principal * rate * months
    pub fn simple_interest(&self, months: u32) -> Money {
        self.principal * (self.interest_rate.as_decimal() * Decimal::from(months))
    }
}

/// payment record; at most one per loan is reachable through the upsert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub loan_id: LoanId,
    pub payment_date: NaiveDate,
}

/// loan as exposed by the read side, with its resolved repayment fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanView {
    pub id: LoanId,
    pub name: String,
    #[serde(with = "percentage_float")]
    pub interest_rate: Rate,
    #[serde(with = "whole_number")]
    pub principal: Money,
    pub due_date: NaiveDate,
    pub payment_date: Option<NaiveDate>,
    pub status: LoanStatus,
}

impl LoanView {
    pub fn from_loan(loan: &Loan, payment_date: Option<NaiveDate>, status: LoanStatus) -> Self {
        LoanView {
            id: loan.id,
            name: loan.name.clone(),
            interest_rate: loan.interest_rate,
            principal: loan.principal,
            due_date: loan.due_date,
            payment_date,
            status,
        }
    }
}
