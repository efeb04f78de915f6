/// upsert - create, update and reject payments with a controlled clock
use loan_tracker::{LoanStore, LoanTracker, PaymentRequest, SafeTimeProvider, TimeSource};
use chrono::{Duration, NaiveDate, TimeZone, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== payment upsert ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    let mut tracker = LoanTracker::with_time(LoanStore::seeded(), time);

    // loan 4 has no payment yet: a record is created
    let outcome = tracker.update_loan_payment(PaymentRequest::new(4, 40_000.0));
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    // a week later the same loan is paid again: the record is moved
    controller.advance(Duration::days(7));
    let outcome = tracker.update_loan_payment(PaymentRequest::new(4, 500.0));
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    // explicit date on an existing seeded payment
    let paid_on = NaiveDate::from_ymd_opt(2025, 4, 15).ok_or("bad date")?;
    let outcome = tracker.update_loan_payment(PaymentRequest::new(1, 10_000.0).on(paid_on));
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    // unknown loan
    let outcome = tracker.update_loan_payment(PaymentRequest::new(99, 1.0));
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    println!("\nstatuses:");
    for loan in tracker.list_loans() {
        println!("  {}: {}", loan.name, loan.status);
    }

    println!("\nevents:");
    for event in tracker.events.take_events() {
        println!("  {:?}", event);
    }

    Ok(())
}
