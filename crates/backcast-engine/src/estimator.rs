//! Year orchestrator and aggregator
//!
//! Drives the whole projection: validates the scenario once, then loops
//! over the planning horizon. Each iteration is self-contained — the only
//! state shared between years is the immutable inputs and rate table.

use tracing::{debug, instrument};

use backcast_common::{
    BackupMode, CostReport, Inputs, Rates, Result, YearBreakdown, MB_PER_GB,
};

use crate::components;
use crate::growth;

/// Round a reported GB figure to 6 decimal places. Only the report is
/// rounded; computations use the exact value.
fn round_gb(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Project the full cost breakdown over the planning horizon.
///
/// Fails fast on invalid inputs or rates; a degenerate scenario with zero
/// storage accounts is not an error and produces zero logging and backup
/// costs.
#[instrument(skip_all, fields(years = inputs.years, clients = inputs.num_clients))]
pub fn estimate(inputs: &Inputs, rates: &Rates) -> Result<CostReport> {
    inputs.validate()?;
    rates.validate()?;

    let total_accounts = inputs.total_accounts();
    let avg_state_size_gb = inputs.avg_state_size_mb / MB_PER_GB;

    let mut by_year = Vec::with_capacity(inputs.years as usize);

    for year_index in 0..inputs.years {
        let clients =
            growth::clients_in_year(inputs.num_clients, inputs.growth_rate_clients, year_index);

        // Environments are global per client, independent of region count.
        let environments_global = clients as f64 * inputs.envs_per_client;
        let total_state_gb = environments_global * avg_state_size_gb;

        let storage_cost_year = components::storage_cost_year(total_state_gb, rates);

        let volume = components::transaction_volume(inputs, environments_global);
        let transactions = components::transaction_costs(&volume, rates);

        let private_link = components::private_link_costs(
            total_accounts,
            inputs.hours_per_month,
            volume.total(),
            avg_state_size_gb,
            rates,
        );

        let logging = components::logging_costs(
            total_accounts,
            volume.total(),
            inputs.log_bytes_per_txn,
            rates,
        );

        let backup = components::backup_costs(inputs, total_accounts, total_state_gb);

        let mut year_total_cost = storage_cost_year
            + transactions.total_txn_cost
            + private_link.total_pl_cost
            + logging.ingestion_cost_year;
        // Only vaulted backup adds fee terms to the total; operational
        // backup is already billed through storage and transactions.
        if inputs.backup_mode == BackupMode::BlobsVaulted {
            year_total_cost += backup.total_cost();
        }

        debug!(
            year = year_index + 1,
            clients,
            environments = environments_global,
            total = year_total_cost,
            "projected year"
        );

        by_year.push(YearBreakdown {
            year_index: year_index + 1,
            clients,
            environments_global,
            storage_accounts: total_accounts,
            avg_state_size_gb: round_gb(avg_state_size_gb),
            storage_gb: round_gb(total_state_gb),
            transactions,
            private_link,
            logging,
            backup,
            storage_cost_year,
            year_total_cost,
        });
    }

    let grand_total = by_year.iter().map(|year| year.year_total_cost).sum();

    Ok(CostReport {
        by_year,
        grand_total,
    })
}
