//! Manual demo runner for the finance reporting gateway client.
//!
//! Reads the target environment from `FINREP_*` variables (or a `.env` file)
//! and fetches a driver's 2019 trip transactions and trip summaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use finrep_client::reports::{
    DriverTripSummaryReportRequest, DriverTripTransactionReportRequest, ReportGatewayClient,
    Sorter,
};
use finrep_client::ClientConfig;

#[tokio::main]
async fn main() -> Result<(), finrep_client::ClientError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finrep_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;
    let client = ReportGatewayClient::new(config)?;

    let mut transactions = DriverTripTransactionReportRequest::new();
    transactions.driver_id = Some(223);
    transactions.from_date = Some("2019-01-01".to_string());
    transactions.to_date = Some("2019-12-31".to_string());
    transactions.with_driver_profile = true;
    transactions
        .base
        .sorters
        .push(Sorter::new("transactionId", true));

    let data = client.fetch_driver_trip_transaction(&transactions).await?;
    match data.transactions() {
        Ok(records) if records.is_empty() => println!("No driver trip transaction fetched"),
        Ok(records) => {
            for record in records {
                println!("{}", record);
            }
        }
        Err(e) => eprintln!("{}", e),
    }

    let mut summaries = DriverTripSummaryReportRequest::new();
    summaries.driver_id = Some(223);

    let data = client.fetch_driver_trip_summary(&summaries).await?;
    match data.summaries() {
        Ok(records) if records.is_empty() => println!("No driver trip summary fetched"),
        Ok(records) => {
            for record in records {
                println!("{}", record);
            }
        }
        Err(e) => eprintln!("{}", e),
    }

    Ok(())
}
