//! HTTP transport for the tracker.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /` — welcome text.
//! - `GET /health` — `{ "ok": true, "loans": n, "payments": m }`.
//! - `GET /loans` — loans with their last payment date and status.
//! - `GET /payments` — payment records.
//! - `POST /payments` — body `{ "loan_id", "amount", "payment_date"? }`.
//!   200 with the outcome on success, 400 with the outcome for an unknown loan.
//!
//! ## Example
//!
//! ```ignore
//! use loan_tracker::{http, LoanStore, LoanTracker};
//!
//! let tracker = http::shared(LoanTracker::new(LoanStore::seeded()));
//! http::serve(tracker, "0.0.0.0:5000").await?;
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::tracker::LoanTracker;
use crate::upsert::PaymentRequest;

pub const WELCOME: &str = "Welcome to the Loan Application API";

/// tracker shared across request handlers; one lock covers a whole upsert
pub type SharedTracker = Arc<Mutex<LoanTracker>>;

pub fn shared(tracker: LoanTracker) -> SharedTracker {
    Arc::new(Mutex::new(tracker))
}

/// Build an axum `Router` serving the tracker.
pub fn router(tracker: SharedTracker) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/loans", get(loans_handler))
        .route("/payments", get(payments_handler).post(update_payment_handler))
        .with_state(tracker)
}

/// Serve the tracker over HTTP at the given address (e.g. `"0.0.0.0:5000"`).
pub async fn serve(tracker: SharedTracker, addr: &str) -> Result<(), std::io::Error> {
    let app = router(tracker);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

// a poisoned lock still guards consistent data: every mutation is a single upsert
fn lock(tracker: &SharedTracker) -> MutexGuard<'_, LoanTracker> {
    tracker.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

async fn home_handler() -> &'static str {
    WELCOME
}

async fn health_handler(State(tracker): State<SharedTracker>) -> impl IntoResponse {
    let tracker = lock(&tracker);
    Json(json!({
        "ok": true,
        "loans": tracker.store.loans().len(),
        "payments": tracker.list_payments().len(),
    }))
}

async fn loans_handler(State(tracker): State<SharedTracker>) -> impl IntoResponse {
    Json(lock(&tracker).list_loans())
}

async fn payments_handler(State(tracker): State<SharedTracker>) -> impl IntoResponse {
    Json(lock(&tracker).list_payments().to_vec())
}

async fn update_payment_handler(
    State(tracker): State<SharedTracker>,
    Json(request): Json<PaymentRequest>,
) -> Response {
    let outcome = lock(&tracker).update_loan_payment(request);
    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(outcome)).into_response()
}
