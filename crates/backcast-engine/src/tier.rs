//! Protected-instance fee lookup
//!
//! Computed once per year from the shared average account size, then
//! multiplied by account count — never once per account.

use backcast_common::TierSchedule;

/// Monthly protected-instance fee per storage account.
///
/// The fee is the banded fraction of the base monthly price for the
/// account's average data size.
pub fn pi_monthly_fee(per_account_size_gb: f64, base_monthly: f64, tiers: &TierSchedule) -> f64 {
    base_monthly * tiers.fraction_for(per_account_size_gb)
}
