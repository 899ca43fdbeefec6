//! Scenario scale inputs
//!
//! Everything the cost model needs besides unit prices: how many clients
//! and environments exist, how often they deploy, how the backend is laid
//! out across regions, and the growth/horizon assumptions. Values are
//! validated fail-fast before the estimator loop runs.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::types::tiers::TierSchedule;
use crate::{DEFAULT_HOURS_PER_MONTH, DEFAULT_LOG_BYTES_PER_TXN};

/// Backup policy for the state-storage accounts
///
/// Closed set: the backup calculator matches exhaustively so a new mode
/// can never silently contribute zero cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupMode {
    /// No backup configured; no backup line items at all.
    None,
    /// Storage-native versioning. Billed through storage and transaction
    /// costs, so the per-account size is reported but no fee is added.
    BlobsOperational,
    /// Vaulted backup: protected-instance fee, vault storage, and backup
    /// write operations are all billed.
    BlobsVaulted,
}

impl Default for BackupMode {
    fn default() -> Self {
        BackupMode::BlobsOperational
    }
}

/// Scale parameters and backup knobs for one projection scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Inputs {
    /// Client count in year 1, before growth.
    pub num_clients: u64,
    /// Environments per client. Global, not per region; fractional values
    /// (e.g. 3.5) are allowed and propagate as floats.
    pub envs_per_client: f64,
    /// Average on-disk state size per environment in MB, including
    /// versioning growth.
    pub avg_state_size_mb: f64,
    /// Deployments per environment per year. Each deployment is modeled
    /// as 3 reads + 1 write.
    pub deployments_per_env_per_year: u64,
    /// PR runs per client per year. Each run adds 1 read to the
    /// per-environment read count (a per-client rate, kept as-is).
    pub pr_runs_per_client_per_year: u64,
    /// Number of regions hosting backend storage.
    pub num_regions: u32,
    /// Storage accounts per region. Fixed infrastructure; does not scale
    /// with client growth.
    pub storage_accounts_per_region: u32,

    /// Diagnostic log bytes emitted per storage transaction.
    pub log_bytes_per_txn: f64,

    /// Backup policy.
    pub backup_mode: BackupMode,
    /// Base monthly protected-instance price (vaulted mode only).
    pub blob_vaulted_pi_price_per_month: f64,
    /// Size-banded fractions of the base protected-instance price. Each
    /// `Inputs` owns its schedule; the default is the documented
    /// four-band blob schedule.
    pub blob_vaulted_tiers: TierSchedule,
    /// Price per 10k backup-service write operations (vaulted mode only).
    pub blob_vaulted_write_per_10k_price: f64,
    /// Backup-service write ops per month per account; depends on churn
    /// and policy.
    pub blob_vaulted_write_ops_per_month_per_account: f64,
    /// Vault storage consumed per account per month, in GB.
    pub backup_vault_storage_gb_per_account_month: f64,
    /// Vault storage price per GB-month.
    pub backup_vault_storage_price_per_gb_month: f64,

    /// Year-over-year client growth rate (0.2 = +20%). Must be > -1.
    pub growth_rate_clients: f64,
    /// Planning horizon in whole years. Must be at least 1.
    pub years: u32,
    /// Hours per month used for private-endpoint hourly billing.
    pub hours_per_month: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            num_clients: 0,
            envs_per_client: 0.0,
            avg_state_size_mb: 0.0,
            deployments_per_env_per_year: 0,
            pr_runs_per_client_per_year: 0,
            num_regions: 0,
            storage_accounts_per_region: 0,
            log_bytes_per_txn: DEFAULT_LOG_BYTES_PER_TXN,
            backup_mode: BackupMode::default(),
            blob_vaulted_pi_price_per_month: 0.0,
            blob_vaulted_tiers: TierSchedule::default(),
            blob_vaulted_write_per_10k_price: 0.0,
            blob_vaulted_write_ops_per_month_per_account: 0.0,
            backup_vault_storage_gb_per_account_month: 0.0,
            backup_vault_storage_price_per_gb_month: 0.0,
            growth_rate_clients: 0.0,
            years: 1,
            hours_per_month: DEFAULT_HOURS_PER_MONTH,
        }
    }
}

impl Inputs {
    /// Create inputs for the core scale parameters, leaving backup and
    /// growth knobs at their defaults.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        num_clients: u64,
        envs_per_client: f64,
        avg_state_size_mb: f64,
        deployments_per_env_per_year: u64,
        pr_runs_per_client_per_year: u64,
        num_regions: u32,
        storage_accounts_per_region: u32,
    ) -> Self {
        Self {
            num_clients,
            envs_per_client,
            avg_state_size_mb,
            deployments_per_env_per_year,
            pr_runs_per_client_per_year,
            num_regions,
            storage_accounts_per_region,
            ..Self::default()
        }
    }

    /// Set growth rate and planning horizon
    pub fn with_growth(mut self, growth_rate_clients: f64, years: u32) -> Self {
        self.growth_rate_clients = growth_rate_clients;
        self.years = years;
        self
    }

    /// Set the backup mode
    pub fn with_backup_mode(mut self, mode: BackupMode) -> Self {
        self.backup_mode = mode;
        self
    }

    /// Set vaulted-backup pricing knobs
    pub fn with_vaulted_backup(
        mut self,
        pi_price_per_month: f64,
        write_per_10k_price: f64,
        write_ops_per_month_per_account: f64,
        vault_storage_gb_per_account_month: f64,
        vault_storage_price_per_gb_month: f64,
    ) -> Self {
        self.backup_mode = BackupMode::BlobsVaulted;
        self.blob_vaulted_pi_price_per_month = pi_price_per_month;
        self.blob_vaulted_write_per_10k_price = write_per_10k_price;
        self.blob_vaulted_write_ops_per_month_per_account = write_ops_per_month_per_account;
        self.backup_vault_storage_gb_per_account_month = vault_storage_gb_per_account_month;
        self.backup_vault_storage_price_per_gb_month = vault_storage_price_per_gb_month;
        self
    }

    /// Replace the protected-instance tier schedule
    pub fn with_tier_schedule(mut self, schedule: TierSchedule) -> Self {
        self.blob_vaulted_tiers = schedule;
        self
    }

    /// Total storage accounts across all regions. Constant for the whole
    /// horizon.
    pub fn total_accounts(&self) -> u64 {
        self.num_regions as u64 * self.storage_accounts_per_region as u64
    }

    /// Fail-fast validation of the whole scenario.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.years == 0 {
            return Err(InputError::ZeroHorizon);
        }
        if !self.growth_rate_clients.is_finite() || self.growth_rate_clients <= -1.0 {
            return Err(InputError::GrowthRateOutOfRange {
                rate: self.growth_rate_clients,
            });
        }

        let non_negative = [
            ("envs_per_client", self.envs_per_client),
            ("avg_state_size_mb", self.avg_state_size_mb),
            ("log_bytes_per_txn", self.log_bytes_per_txn),
            (
                "blob_vaulted_pi_price_per_month",
                self.blob_vaulted_pi_price_per_month,
            ),
            (
                "blob_vaulted_write_per_10k_price",
                self.blob_vaulted_write_per_10k_price,
            ),
            (
                "blob_vaulted_write_ops_per_month_per_account",
                self.blob_vaulted_write_ops_per_month_per_account,
            ),
            (
                "backup_vault_storage_gb_per_account_month",
                self.backup_vault_storage_gb_per_account_month,
            ),
            (
                "backup_vault_storage_price_per_gb_month",
                self.backup_vault_storage_price_per_gb_month,
            ),
            ("hours_per_month", self.hours_per_month),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(InputError::NegativeScale { field, value });
            }
        }

        self.blob_vaulted_tiers.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tiers::TierBand;

    fn example() -> Inputs {
        Inputs::new(100, 3.5, 1.0, 200, 16, 3, 2)
    }

    #[test]
    fn test_defaults_match_model() {
        let inputs = Inputs::default();
        assert_eq!(inputs.log_bytes_per_txn, 1024.0);
        assert_eq!(inputs.backup_mode, BackupMode::BlobsOperational);
        assert_eq!(inputs.years, 1);
        assert_eq!(inputs.hours_per_month, 730.0);
        assert_eq!(inputs.growth_rate_clients, 0.0);
    }

    #[test]
    fn test_total_accounts() {
        // 3 regions x 2 accounts = 6, regardless of clients
        assert_eq!(example().total_accounts(), 6);
        assert_eq!(Inputs::default().total_accounts(), 0);
    }

    #[test]
    fn test_valid_scenario_passes() {
        assert!(example().with_growth(0.25, 5).validate().is_ok());
    }

    #[test]
    fn test_zero_years_rejected() {
        let inputs = example().with_growth(0.0, 0);
        assert!(matches!(inputs.validate(), Err(InputError::ZeroHorizon)));
    }

    #[test]
    fn test_growth_rate_below_minus_one_rejected() {
        let inputs = example().with_growth(-1.0, 3);
        assert!(matches!(
            inputs.validate(),
            Err(InputError::GrowthRateOutOfRange { .. })
        ));

        let inputs = example().with_growth(f64::NAN, 3);
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_negative_scale_rejected() {
        let mut inputs = example();
        inputs.avg_state_size_mb = -1.0;
        assert!(matches!(
            inputs.validate(),
            Err(InputError::NegativeScale {
                field: "avg_state_size_mb",
                ..
            })
        ));
    }

    #[test]
    fn test_broken_tier_schedule_rejected() {
        let mut inputs = example();
        // Deserialization bypasses TierSchedule::new, so validate() must
        // still catch a schedule whose top band is bounded.
        inputs.blob_vaulted_tiers =
            serde_json::from_str(r#"[{"upper_gb": 10.0, "fraction": 0.1}]"#).unwrap();
        assert!(matches!(
            inputs.validate(),
            Err(InputError::TierSchedule(_))
        ));
    }

    #[test]
    fn test_backup_mode_serde_names() {
        assert_eq!(
            serde_json::to_string(&BackupMode::None).unwrap(),
            "\"none\""
        );
        assert_eq!(
            serde_json::to_string(&BackupMode::BlobsOperational).unwrap(),
            "\"blobs_operational\""
        );
        assert_eq!(
            serde_json::to_string(&BackupMode::BlobsVaulted).unwrap(),
            "\"blobs_vaulted\""
        );
    }

    #[test]
    fn test_instances_own_their_schedule() {
        let a = example();
        let mut b = a.clone();
        b.blob_vaulted_tiers = TierSchedule::new(vec![
            TierBand::bounded(50.0, 0.5),
            TierBand::open(1.0),
        ])
        .unwrap();
        assert_eq!(a.blob_vaulted_tiers.fraction_for(20.0), 0.30);
        assert_eq!(b.blob_vaulted_tiers.fraction_for(20.0), 0.5);
    }
}
