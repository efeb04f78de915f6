pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
#[cfg(feature = "http")]
pub mod http;
pub mod loan;
pub mod status;
pub mod store;
pub mod tracker;
pub mod types;
pub mod upsert;

// re-export key types
pub use config::{ServerConfig, TrackerConfig};
pub use decimal::{Money, Rate};
pub use errors::{Result, TrackerError};
pub use events::{Event, EventStore};
pub use loan::{Loan, LoanView, Payment};
pub use status::{StatusResolution, StatusThresholds};
pub use store::LoanStore;
pub use tracker::LoanTracker;
pub use types::{LoanId, LoanStatus, PaymentId, UpsertKind};
pub use upsert::{PaymentOutcome, PaymentRequest};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
