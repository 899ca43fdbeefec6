//! Cost report records
//!
//! One `YearBreakdown` per projected year, assembled once and never
//! mutated afterwards, plus the `CostReport` wrapper carrying the grand
//! total. Field names are the serialized contract consumed by drivers.

use serde::{Deserialize, Serialize};

use crate::types::inputs::BackupMode;

/// Transaction volume and cost for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCosts {
    /// Read operations across all environments.
    pub reads: u64,
    /// Write operations across all environments.
    pub writes: u64,
    /// Reads + writes.
    pub total: u64,
    pub read_cost: f64,
    pub write_cost: f64,
    pub total_txn_cost: f64,
}

/// Private endpoint and private-link data cost for one year
///
/// Endpoint hours are fixed infrastructure (accounts x hours), while data
/// processed scales with transaction volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateLinkCosts {
    pub endpoint_hours: f64,
    pub data_processed_gb: f64,
    pub endpoint_hour_cost: f64,
    pub data_cost: f64,
    pub total_pl_cost: f64,
}

/// Diagnostic log ingestion volume and cost for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingCosts {
    /// Bytes of diagnostics emitted per transaction (echoed input).
    pub log_bytes_per_txn: f64,
    /// Monthly ingestion per storage account, in GB.
    pub gb_per_account_per_month: f64,
    pub ingestion_gb_year: f64,
    pub ingestion_cost_year: f64,
}

/// Backup line items for one year
///
/// Which fields are non-zero depends on the mode: `none` zeroes
/// everything, `blobs_operational` records only the per-account size, and
/// `blobs_vaulted` fills the three fee components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupCosts {
    pub mode: BackupMode,
    pub per_account_size_gb: f64,
    pub pi_monthly_fee_per_account: f64,
    pub instance_cost_year: f64,
    pub vault_storage_cost_year: f64,
    pub backup_write_ops_year: f64,
    pub backup_write_ops_cost_year: f64,
}

impl BackupCosts {
    /// All-zero record for the given mode.
    pub fn zeroed(mode: BackupMode) -> Self {
        Self {
            mode,
            per_account_size_gb: 0.0,
            pi_monthly_fee_per_account: 0.0,
            instance_cost_year: 0.0,
            vault_storage_cost_year: 0.0,
            backup_write_ops_year: 0.0,
            backup_write_ops_cost_year: 0.0,
        }
    }

    /// Sum of the fee components that count toward the year total.
    pub fn total_cost(&self) -> f64 {
        self.instance_cost_year + self.vault_storage_cost_year + self.backup_write_ops_cost_year
    }
}

/// Complete cost breakdown for one projected year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearBreakdown {
    /// 1-based year index within the horizon.
    pub year_index: u32,
    /// Projected client count after growth.
    pub clients: u64,
    /// Global environment count; fractional when `envs_per_client` is.
    pub environments_global: f64,
    /// Total storage accounts, constant across years.
    pub storage_accounts: u64,
    /// Average state size per environment in GB, rounded to 6 decimals.
    pub avg_state_size_gb: f64,
    /// Total stored GB across all environments, rounded to 6 decimals.
    pub storage_gb: f64,
    pub transactions: TransactionCosts,
    pub private_link: PrivateLinkCosts,
    pub logging: LoggingCosts,
    pub backup: BackupCosts,
    pub storage_cost_year: f64,
    /// Storage + transactions + private link + logging, plus backup fees
    /// in vaulted mode.
    pub year_total_cost: f64,
}

/// Ordered multi-year projection with its grand total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    /// Chronological year records, year 1 first.
    pub by_year: Vec<YearBreakdown>,
    /// Sum of every `year_total_cost`.
    pub grand_total: f64,
}

impl CostReport {
    /// Number of projected years.
    pub fn horizon(&self) -> usize {
        self.by_year.len()
    }
}
