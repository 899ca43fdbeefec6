//! Scenario loading
//!
//! A scenario bundles the scale inputs with the unit-price table. It is
//! loaded from a TOML or JSON file, with `BACKCAST_*` environment
//! variables overriding the growth knobs; with no file the built-in
//! example scenario is used.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use backcast_engine::{Inputs, Rates};

/// One complete projection scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub inputs: Inputs,
    pub rates: Rates,
}

impl Scenario {
    /// Load a scenario file, or the example scenario when no path is
    /// given, then apply environment overrides.
    pub fn load(path: Option<&str>) -> Result<Self> {
        // A .env file is optional
        let _ = dotenvy::dotenv();

        let mut scenario = match path {
            Some(path) => {
                let cfg = config::Config::builder()
                    .add_source(config::File::with_name(path))
                    .build()
                    .with_context(|| format!("failed to read scenario file '{path}'"))?;
                cfg.try_deserialize::<Scenario>()
                    .with_context(|| format!("failed to parse scenario file '{path}'"))?
            }
            None => Self::example(),
        };

        if let Ok(val) = std::env::var("BACKCAST_YEARS") {
            if let Ok(years) = val.parse() {
                scenario.inputs.years = years;
            }
        }
        if let Ok(val) = std::env::var("BACKCAST_GROWTH_RATE") {
            if let Ok(rate) = val.parse() {
                scenario.inputs.growth_rate_clients = rate;
            }
        }

        Ok(scenario)
    }

    /// Built-in example: 100 clients with 3.5 environments each, 1 MB
    /// states, 200 deployments and 16 PR runs a year, 3 regions with 2
    /// storage accounts each, +25% yearly growth over 5 years, vaulted
    /// backup. Prices are placeholders, not live quotes.
    pub fn example() -> Self {
        Self {
            inputs: Inputs::new(100, 3.5, 1.0, 200, 16, 3, 2)
                .with_growth(0.25, 5)
                .with_vaulted_backup(8.0, 0.057, 5000.0, 10.0, 0.023),
            rates: Rates {
                storage_gb_month_price: 0.018,
                read_txn_per_10k_price: 0.004,
                write_txn_per_10k_price: 0.05,
                private_endpoint_hour_price: 0.01,
                private_link_data_price_per_gb: 0.01,
                log_ingestion_price_per_gb: 2.76,
            },
        }
    }
}
