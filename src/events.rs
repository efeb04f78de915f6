use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{LoanId, PaymentId};

/// events emitted by the tracker's payment operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    PaymentCreated {
        payment_id: PaymentId,
        loan_id: LoanId,
        amount: f64,
        payment_date: NaiveDate,
    },
    PaymentUpdated {
        payment_id: PaymentId,
        loan_id: LoanId,
        amount: f64,
        previous_date: NaiveDate,
        payment_date: NaiveDate,
    },
    PaymentRejected {
        loan_id: LoanId,
        amount: f64,
        reason: String,
    },
}

/// events kept when no capacity is configured
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// event store for collecting events during operations; keeps the most
/// recent `capacity` events and drops the oldest beyond that
#[derive(Debug)]
pub struct EventStore {
    events: Vec<Event>,
    capacity: usize,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            capacity,
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
        if self.events.len() > self.capacity {
            let excess = self.events.len() - self.capacity;
            self.events.drain(..excess);
        }
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
