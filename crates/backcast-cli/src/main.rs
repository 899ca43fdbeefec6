//! Backcast CLI
//!
//! Runs the cost projection for a scenario file (TOML or JSON) and prints
//! the full JSON breakdown to stdout, followed by a per-year summary.
//! Logs go to stderr so the JSON stays pipeable.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backcast_common::VERSION;
use backcast_engine::estimate;

mod scenario;

use scenario::Scenario;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::args().nth(1);
    let scenario = Scenario::load(path.as_deref())?;

    info!(
        version = VERSION,
        clients = scenario.inputs.num_clients,
        years = scenario.inputs.years,
        regions = scenario.inputs.num_regions,
        "estimating state-backend costs"
    );

    let report = estimate(&scenario.inputs, &scenario.rates)?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    let year_totals: Vec<String> = report
        .by_year
        .iter()
        .map(|year| format!("Y{}: ${:.2}", year.year_index, year.year_total_cost))
        .collect();
    println!();
    println!("Year totals: {}", year_totals.join(", "));
    println!("Grand total: ${:.2}", report.grand_total);

    Ok(())
}
