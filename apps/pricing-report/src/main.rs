//! # pricing-report
//!
//! Prints the discount and shipping quote of a sample order for every user
//! in the user file.
//!
//! ## Usage
//! ```bash
//! PRICING_USERS_FILE=./users.csv cargo run -p pricing-report
//! PRICING_OUTPUT=json PRICING_ORDER_TOTAL=250 cargo run -p pricing-report
//! ```

use pricing_report::{build_report, ReportConfig};
use pricing_store::UserRepository;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ReportConfig::load()?;
    info!(
        users_file = %config.users_file.display(),
        order_total = config.params.order_total,
        weight_kg = config.params.weight_kg,
        distance_km = config.params.distance_km,
        "Configuration loaded"
    );

    let repository = UserRepository::new(&config.users_file);
    let report = build_report(&repository, config.params).await?;

    print!("{}", report.render(config.output)?);

    info!(quotes = report.quotes.len(), "Report complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: `info,pricing=debug`
///
/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pricing=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
