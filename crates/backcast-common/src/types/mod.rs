//! Shared domain types

pub mod inputs;
pub mod rates;
pub mod report;
pub mod tiers;

pub use inputs::{BackupMode, Inputs};
pub use rates::Rates;
pub use report::{
    BackupCosts, CostReport, LoggingCosts, PrivateLinkCosts, TransactionCosts, YearBreakdown,
};
pub use tiers::{TierBand, TierSchedule};
