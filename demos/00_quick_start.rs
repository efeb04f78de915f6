/// quick start - list the sample portfolio with derived repayment status
use loan_tracker::{LoanStore, LoanTracker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tracker = LoanTracker::new(LoanStore::seeded());

    for loan in tracker.list_loans() {
        println!(
            "{:<20} {:>8} @ {:<5} due {}  last paid {:<10}  {}",
            loan.name,
            loan.principal,
            loan.interest_rate,
            loan.due_date,
            loan.payment_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
            loan.status,
        );
    }

    println!("\n{}", tracker.json()?);

    Ok(())
}
