use chrono::NaiveDate;
use hourglass_rs::{SafeTimeProvider, TimeSource};
use log::{info, warn};

use crate::config::TrackerConfig;
use crate::errors::Result;
use crate::events::{Event, EventStore};
use crate::loan::{LoanView, Payment};
use crate::status::{self, StatusThresholds};
use crate::store::LoanStore;
use crate::types::UpsertKind;
use crate::upsert::{self, PaymentOutcome, PaymentRequest};

/// loan tracker: store, status rules, clock and event log
pub struct LoanTracker {
    pub store: LoanStore,
    pub thresholds: StatusThresholds,
    pub events: EventStore,
    time: SafeTimeProvider,
}

impl LoanTracker {
    /// create tracker over an existing store using the system clock
    pub fn new(store: LoanStore) -> Self {
        Self::with_time(store, SafeTimeProvider::new(TimeSource::System))
    }

    pub fn with_time(store: LoanStore, time: SafeTimeProvider) -> Self {
        Self {
            store,
            thresholds: StatusThresholds::default(),
            events: EventStore::new(),
            time,
        }
    }

    /// build from configuration, seeding the sample portfolio when enabled
    pub fn from_config(config: &TrackerConfig, time: SafeTimeProvider) -> Result<Self> {
        config.validate()?;
        let store = if config.seed_sample_data {
            LoanStore::seeded()
        } else {
            LoanStore::new()
        };
        let mut tracker = Self::with_time(store, time);
        tracker.thresholds = config.status;
        tracker.events = EventStore::with_capacity(config.event_capacity);
        Ok(tracker)
    }

    /// current date according to the tracker's clock
    pub fn today(&self) -> NaiveDate {
        self.time.now().date_naive()
    }

    /// all loans with their last payment date and status
    pub fn list_loans(&self) -> Vec<LoanView> {
        let payments = self.store.payments();
        self.store
            .loans()
            .iter()
            .map(|loan| {
                let resolved = status::resolve(loan, payments, &self.thresholds);
                LoanView::from_loan(loan, resolved.last_payment_date, resolved.status)
            })
            .collect()
    }

    pub fn list_payments(&self) -> &[Payment] {
        self.store.payments()
    }

    /// record a payment against a loan; failures come back as an outcome
    pub fn update_loan_payment(&mut self, request: PaymentRequest) -> PaymentOutcome {
        let payment_date = request.payment_date.unwrap_or_else(|| self.today());

        match upsert::upsert_payment(&mut self.store, request.loan_id, payment_date) {
            Ok(result) => {
                match result.kind {
                    UpsertKind::Created => {
                        info!(
                            "created payment {} for loan {} on {}",
                            result.payment.id, request.loan_id, payment_date
                        );
                        self.events.emit(Event::PaymentCreated {
                            payment_id: result.payment.id,
                            loan_id: request.loan_id,
                            amount: request.amount,
                            payment_date,
                        });
                    }
                    UpsertKind::Updated => {
                        info!(
                            "updated payment {} for loan {} to {}",
                            result.payment.id, request.loan_id, payment_date
                        );
                        self.events.emit(Event::PaymentUpdated {
                            payment_id: result.payment.id,
                            loan_id: request.loan_id,
                            amount: request.amount,
                            previous_date: result.previous_date.unwrap_or(payment_date),
                            payment_date,
                        });
                    }
                }
                PaymentOutcome::applied(result.kind, result.payment)
            }
            Err(error) => {
                warn!("payment rejected for loan {}: {}", request.loan_id, error);
                self.events.emit(Event::PaymentRejected {
                    loan_id: request.loan_id,
                    amount: request.amount,
                    reason: error.to_string(),
                });
                PaymentOutcome::failed(&error)
            }
        }
    }

    /// current loans and payments as pretty json
    pub fn json(&self) -> Result<String> {
        let snapshot = serde_json::json!({
            "loans": self.list_loans(),
            "payments": self.list_payments(),
        });
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }
}
