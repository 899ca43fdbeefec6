//! # Backcast Engine
//!
//! Deterministic cost projection for a multi-region, cloud-hosted
//! state-storage backend: object storage holding infrastructure-as-code
//! state files for many clients and environments.
//!
//! ## Model
//!
//! ```text
//! clients(y)   = ceil(base * (1 + growth)^y)          y zero-based
//! envs(y)      = clients(y) * envs_per_client          global, not per region
//! accounts     = regions * accounts_per_region         fixed infrastructure
//!
//! year total   = storage + transactions + private link + logging
//!              [ + protected instances + vault storage + backup writes ]
//! ```
//!
//! The bracketed backup terms apply only in vaulted mode. Every year is
//! computed independently from the immutable inputs and rate table; the
//! grand total is the sum of the year totals.
//!
//! The single entry point is [`estimate`].

pub mod components;
pub mod estimator;
pub mod growth;
pub mod tier;

// Re-export the entry point and the types that form its contract
pub use estimator::estimate;

pub use backcast_common::{
    BackcastError, BackupCosts, BackupMode, CostReport, InputError, Inputs, LoggingCosts,
    PrivateLinkCosts, Rates, Result, TierBand, TierSchedule, TransactionCosts, YearBreakdown,
};
