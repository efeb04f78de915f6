use hourglass_rs::{SafeTimeProvider, TimeSource};
use log::info;
use simple_logger::SimpleLogger;

use loan_tracker::{http, LoanTracker, TrackerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = TrackerConfig::load()?;
    SimpleLogger::new()
        .with_level(config.server.level_filter()?)
        .init()?;

    let tracker = LoanTracker::from_config(&config, SafeTimeProvider::new(TimeSource::System))?;
    info!(
        "loaded {} loans and {} payments",
        tracker.store.loans().len(),
        tracker.list_payments().len()
    );

    http::serve(http::shared(tracker), &config.server.bind_address).await?;
    Ok(())
}
