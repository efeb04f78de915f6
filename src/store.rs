use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::decimal::{Money, Rate};
use crate::errors::{Result, TrackerError};
use crate::loan::{Loan, Payment};
use crate::types::{LoanId, PaymentId};

/// in-memory loan and payment collections
#[derive(Debug, Clone, Default)]
pub struct LoanStore {
    loans: Vec<Loan>,
    payments: Vec<Payment>,
}

impl LoanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// build a store from explicit records; loan ids must be unique
    pub fn with_records(loans: Vec<Loan>, payments: Vec<Payment>) -> Result<Self> {
        let mut store = Self::new();
        for loan in loans {
            store.add_loan(loan)?;
        }
        store.payments = payments;
        Ok(store)
    }

    /// sample portfolio the service boots with
    pub fn seeded() -> Self {
        let due = date(2025, 3, 1);
        Self {
            loans: vec![
                Loan::new(1, "Tom's Loan", Rate::from_percentage(5), Money::from_major(10_000), due),
                Loan::new(
                    2,
                    "Chris Wailaka",
                    Rate::from_percentage_decimal(dec!(3.5)),
                    Money::from_major(500_000),
                    due,
                ),
                Loan::new(
                    3,
                    "NP Mobile Money",
                    Rate::from_percentage_decimal(dec!(4.5)),
                    Money::from_major(30_000),
                    due,
                ),
                Loan::new(
                    4,
                    "Esther's Autoparts",
                    Rate::from_percentage_decimal(dec!(1.5)),
                    Money::from_major(40_000),
                    due,
                ),
            ],
            payments: vec![
                Payment { id: 1, loan_id: 1, payment_date: date(2024, 3, 4) },
                Payment { id: 2, loan_id: 2, payment_date: date(2024, 3, 15) },
                Payment { id: 3, loan_id: 3, payment_date: date(2024, 4, 5) },
            ],
        }
    }

    pub fn add_loan(&mut self, loan: Loan) -> Result<()> {
        if self.loan(loan.id).is_some() {
            return Err(TrackerError::DuplicateLoanId { loan_id: loan.id });
        }
        self.loans.push(loan);
        Ok(())
    }

    pub fn loan(&self, loan_id: LoanId) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id == loan_id)
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// first payment recorded against a loan, if any
    pub fn first_payment_mut(&mut self, loan_id: LoanId) -> Option<&mut Payment> {
        self.payments.iter_mut().find(|p| p.loan_id == loan_id)
    }

    /// next payment id: current count + 1, not collision-free after removals
    pub fn next_payment_id(&self) -> PaymentId {
        self.payments.len() as PaymentId + 1
    }

    pub(crate) fn push_payment(&mut self, payment: Payment) -> &Payment {
        self.payments.push(payment);
        &self.payments[self.payments.len() - 1]
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
