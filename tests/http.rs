//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use chrono::{TimeZone, Utc};
use loan_tracker::http::{self, SharedTracker};
use loan_tracker::{LoanStore, LoanTracker, SafeTimeProvider, TimeSource, TrackerConfig};
use serde_json::{json, Value};

fn test_time() -> SafeTimeProvider {
    SafeTimeProvider::new(TimeSource::Test(Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap()))
}

fn seeded_tracker() -> SharedTracker {
    http::shared(LoanTracker::with_time(LoanStore::seeded(), test_time()))
}

/// Bind to port 0 and return the actual address.
async fn start_server(tracker: SharedTracker) -> String {
    let app = http::router(tracker);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn home_page() {
    let base = start_server(seeded_tracker()).await;

    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "Welcome to the Loan Application API");
}

#[tokio::test]
async fn health_check() {
    let base = start_server(seeded_tracker()).await;

    let body: Value = reqwest::get(format!("{base}/health")).await.unwrap().json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["loans"], 4);
    assert_eq!(body["payments"], 3);
}

#[tokio::test]
async fn list_loans_with_status() {
    let base = start_server(seeded_tracker()).await;

    let resp = reqwest::get(format!("{base}/loans")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let loans: Value = resp.json().await.unwrap();
    let loans = loans.as_array().unwrap();
    assert_eq!(loans.len(), 4);
    assert_eq!(loans[0]["name"], "Tom's Loan");
    assert_eq!(loans[0]["interest_rate"].as_f64(), Some(5.0));
    assert_eq!(loans[0]["principal"], 10000);
    assert!(loans[0]["principal"].is_i64());
    assert_eq!(loans[1]["principal"], 500000);
    assert_eq!(loans[0]["due_date"], "2025-03-01");
    assert_eq!(loans[0]["payment_date"], "2024-03-04");
    assert_eq!(loans[0]["status"], "On Time");
    assert!(loans[3]["payment_date"].is_null());
    assert_eq!(loans[3]["status"], "Unpaid");
}

#[tokio::test]
async fn update_existing_payment() {
    let base = start_server(seeded_tracker()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/payments"))
        .json(&json!({ "loan_id": 2, "amount": 5000.0, "payment_date": "2025-03-20" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Loan payment updated successfully.");
    assert_eq!(body["payment"]["id"], 2);
    assert_eq!(body["payment"]["payment_date"], "2025-03-20");

    let loans: Value = client.get(format!("{base}/loans")).send().await.unwrap().json().await.unwrap();
    assert_eq!(loans[1]["status"], "Late");

    let payments: Value = client.get(format!("{base}/payments")).send().await.unwrap().json().await.unwrap();
    assert_eq!(payments.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_payment_defaults_to_today() {
    let base = start_server(seeded_tracker()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/payments"))
        .json(&json!({ "loan_id": 4, "amount": 1200 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Loan payment record created successfully.");
    assert_eq!(body["payment"]["id"], 4);
    assert_eq!(body["payment"]["loan_id"], 4);
    assert_eq!(body["payment"]["payment_date"], "2025-03-10");

    let loans: Value = client.get(format!("{base}/loans")).send().await.unwrap().json().await.unwrap();
    assert_eq!(loans[3]["status"], "Late");
}

#[tokio::test]
async fn unknown_loan_is_bad_request() {
    let base = start_server(seeded_tracker()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/payments"))
        .json(&json!({ "loan_id": 42, "amount": 5000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Loan with the provided ID does not exist.");
    assert!(body["payment"].is_null());

    let payments: Value = client.get(format!("{base}/payments")).send().await.unwrap().json().await.unwrap();
    assert_eq!(payments.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let base = start_server(seeded_tracker()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/payments"))
        .json(&json!({ "amount": 5000 }))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn large_amount_is_accepted() {
    let base = start_server(seeded_tracker()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/payments"))
        .json(&json!({ "loan_id": 2, "amount": 1e30, "payment_date": "2025-03-02" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["payment"]["payment_date"], "2025-03-02");
}

#[tokio::test]
async fn events_stay_bounded_after_many_posts() {
    let config = TrackerConfig { event_capacity: 16, ..TrackerConfig::default() };
    let shared = http::shared(LoanTracker::from_config(&config, test_time()).unwrap());
    let base = start_server(shared.clone()).await;
    let client = reqwest::Client::new();

    for i in 0..100 {
        let loan_id = if i % 2 == 0 { 1 } else { 42 };
        client
            .post(format!("{base}/payments"))
            .json(&json!({ "loan_id": loan_id, "amount": 100 }))
            .send()
            .await
            .unwrap();
    }

    let tracker = shared.lock().unwrap();
    assert_eq!(tracker.events.events().len(), 16);
    assert_eq!(tracker.list_payments().len(), 3);
}
