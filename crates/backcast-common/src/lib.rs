//! # Backcast Common
//!
//! Shared types, errors, and constants for the Backcast cost projector.
//!
//! ## Core Types
//!
//! - [`Inputs`]: scenario scale parameters, backup knobs, growth and horizon
//! - [`Rates`]: immutable unit-price table for the run
//! - [`TierSchedule`]: size-banded protected-instance fee fractions
//! - [`YearBreakdown`]/[`CostReport`]: per-year records and grand total
//! - [`BackcastError`]/[`InputError`]: unified error taxonomy

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BackcastError, InputError, Result};
pub use types::{
    inputs::{BackupMode, Inputs},
    rates::Rates,
    report::{
        BackupCosts, CostReport, LoggingCosts, PrivateLinkCosts, TransactionCosts, YearBreakdown,
    },
    tiers::{TierBand, TierSchedule},
};

/// Backcast version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Months in a billing year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Operations per transaction billing unit (prices are per 10k ops)
pub const OPS_PER_BILLING_UNIT: f64 = 10_000.0;

/// Reads generated by one deployment (plan + refresh + final read)
pub const READS_PER_DEPLOYMENT: u64 = 3;

/// Writes generated by one deployment
pub const WRITES_PER_DEPLOYMENT: u64 = 1;

/// Bytes per GB (binary)
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// MB per GB (binary)
pub const MB_PER_GB: f64 = 1024.0;

/// Default hours per month for endpoint-hour billing
pub const DEFAULT_HOURS_PER_MONTH: f64 = 730.0;

/// Default diagnostic log bytes per transaction (~1 KB/op)
pub const DEFAULT_LOG_BYTES_PER_TXN: f64 = 1024.0;
