//! Component cost calculators
//!
//! Independent formulas for storage, transactions, private link, log
//! ingestion, and backup. Each is a pure function of the counts derived
//! upstream; the orchestrator in [`crate::estimator`] wires them together
//! per year.

use backcast_common::{
    BackupCosts, BackupMode, Inputs, LoggingCosts, PrivateLinkCosts, Rates, TransactionCosts,
    BYTES_PER_GB, MONTHS_PER_YEAR, OPS_PER_BILLING_UNIT, READS_PER_DEPLOYMENT,
    WRITES_PER_DEPLOYMENT,
};

use crate::tier;

/// Yearly transaction volume across all environments, kept as floats
/// until reporting because `environments_global` may be fractional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionVolume {
    pub total_reads: f64,
    pub total_writes: f64,
}

impl TransactionVolume {
    pub fn total(&self) -> f64 {
        self.total_reads + self.total_writes
    }
}

/// Reads per environment per year.
///
/// Each deployment is 3 reads; PR runs add one read each. The PR-run term
/// is a per-client yearly rate applied uniformly to every environment's
/// read count, not per-environment PR activity. Kept exactly as modeled.
pub fn reads_per_env(inputs: &Inputs) -> u64 {
    READS_PER_DEPLOYMENT * inputs.deployments_per_env_per_year
        + inputs.pr_runs_per_client_per_year
}

/// Writes per environment per year (one per deployment).
pub fn writes_per_env(inputs: &Inputs) -> u64 {
    WRITES_PER_DEPLOYMENT * inputs.deployments_per_env_per_year
}

/// Total yearly read/write volume, linear in the global environment count.
pub fn transaction_volume(inputs: &Inputs, environments_global: f64) -> TransactionVolume {
    TransactionVolume {
        total_reads: reads_per_env(inputs) as f64 * environments_global,
        total_writes: writes_per_env(inputs) as f64 * environments_global,
    }
}

/// Transaction cost record; operation counts are truncated to integers
/// for reporting.
pub fn transaction_costs(volume: &TransactionVolume, rates: &Rates) -> TransactionCosts {
    let read_cost = (volume.total_reads / OPS_PER_BILLING_UNIT) * rates.read_txn_per_10k_price;
    let write_cost = (volume.total_writes / OPS_PER_BILLING_UNIT) * rates.write_txn_per_10k_price;
    TransactionCosts {
        reads: volume.total_reads as u64,
        writes: volume.total_writes as u64,
        total: volume.total() as u64,
        read_cost,
        write_cost,
        total_txn_cost: read_cost + write_cost,
    }
}

/// Yearly blob storage cost for the stored state.
pub fn storage_cost_year(total_state_gb: f64, rates: &Rates) -> f64 {
    total_state_gb * rates.storage_gb_month_price * MONTHS_PER_YEAR
}

/// Private endpoint hours plus data processed through the link.
///
/// Endpoint hours are fixed by account count and never scale with client
/// growth. Data processed assumes every transaction moves one full
/// state-file payload through the link.
pub fn private_link_costs(
    total_accounts: u64,
    hours_per_month: f64,
    total_txns: f64,
    avg_state_size_gb: f64,
    rates: &Rates,
) -> PrivateLinkCosts {
    let endpoint_hours = total_accounts as f64 * hours_per_month * MONTHS_PER_YEAR;
    let endpoint_hour_cost = endpoint_hours * rates.private_endpoint_hour_price;
    let data_processed_gb = total_txns * avg_state_size_gb;
    let data_cost = data_processed_gb * rates.private_link_data_price_per_gb;
    PrivateLinkCosts {
        endpoint_hours,
        data_processed_gb,
        endpoint_hour_cost,
        data_cost,
        total_pl_cost: endpoint_hour_cost + data_cost,
    }
}

/// Log ingestion derived from transaction volume.
///
/// Volume is spread evenly across accounts to get a per-account monthly
/// figure, then annualized. With zero accounts both volume and cost are
/// defined as zero.
pub fn logging_costs(
    total_accounts: u64,
    total_txns: f64,
    log_bytes_per_txn: f64,
    rates: &Rates,
) -> LoggingCosts {
    let (gb_per_account_per_month, ingestion_gb_year) = if total_accounts > 0 {
        let txns_per_month_per_account =
            total_txns / MONTHS_PER_YEAR / total_accounts as f64;
        let gb_per_account_per_month =
            txns_per_month_per_account * log_bytes_per_txn / BYTES_PER_GB;
        let ingestion_gb_year =
            total_accounts as f64 * gb_per_account_per_month * MONTHS_PER_YEAR;
        (gb_per_account_per_month, ingestion_gb_year)
    } else {
        (0.0, 0.0)
    };

    LoggingCosts {
        log_bytes_per_txn,
        gb_per_account_per_month,
        ingestion_gb_year,
        ingestion_cost_year: ingestion_gb_year * rates.log_ingestion_price_per_gb,
    }
}

/// Backup line items under the three-way mode policy.
///
/// With zero accounts everything stays zero regardless of mode.
pub fn backup_costs(inputs: &Inputs, total_accounts: u64, total_state_gb: f64) -> BackupCosts {
    let mut backup = BackupCosts::zeroed(inputs.backup_mode);
    if total_accounts == 0 {
        return backup;
    }

    match inputs.backup_mode {
        BackupMode::None => {}
        BackupMode::BlobsOperational => {
            // Size is reported for visibility; operational backup is
            // billed through storage and transactions, not here.
            backup.per_account_size_gb = total_state_gb / total_accounts as f64;
        }
        BackupMode::BlobsVaulted => {
            let per_account_size_gb = total_state_gb / total_accounts as f64;
            backup.per_account_size_gb = per_account_size_gb;

            let pi_monthly = tier::pi_monthly_fee(
                per_account_size_gb,
                inputs.blob_vaulted_pi_price_per_month,
                &inputs.blob_vaulted_tiers,
            );
            backup.pi_monthly_fee_per_account = pi_monthly;
            backup.instance_cost_year = pi_monthly * total_accounts as f64 * MONTHS_PER_YEAR;

            backup.vault_storage_cost_year = inputs.backup_vault_storage_gb_per_account_month
                * inputs.backup_vault_storage_price_per_gb_month
                * total_accounts as f64
                * MONTHS_PER_YEAR;

            let yearly_backup_writes = inputs.blob_vaulted_write_ops_per_month_per_account
                * total_accounts as f64
                * MONTHS_PER_YEAR;
            backup.backup_write_ops_year = yearly_backup_writes;
            backup.backup_write_ops_cost_year = (yearly_backup_writes / OPS_PER_BILLING_UNIT)
                * inputs.blob_vaulted_write_per_10k_price;
        }
    }

    backup
}
