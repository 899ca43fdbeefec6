//! Unit-price table
//!
//! All prices in USD per billing unit. Immutable for the whole run; the
//! estimator never mutates or defaults these, so a zero price means a
//! genuinely free component, not a missing one.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Unit prices for the storage backend components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    /// Blob storage, $/GB-month for the chosen tier and redundancy.
    pub storage_gb_month_price: f64,
    /// Read transactions, $/10k operations.
    pub read_txn_per_10k_price: f64,
    /// Write transactions, $/10k operations.
    pub write_txn_per_10k_price: f64,
    /// Private endpoint, $/endpoint-hour.
    pub private_endpoint_hour_price: f64,
    /// Private-link data processed, $/GB in either direction.
    pub private_link_data_price_per_gb: f64,
    /// Log ingestion, $/GB.
    pub log_ingestion_price_per_gb: f64,
}

impl Rates {
    /// Fail-fast validation: every price must be finite and non-negative.
    pub fn validate(&self) -> Result<(), InputError> {
        let prices = [
            ("storage_gb_month_price", self.storage_gb_month_price),
            ("read_txn_per_10k_price", self.read_txn_per_10k_price),
            ("write_txn_per_10k_price", self.write_txn_per_10k_price),
            (
                "private_endpoint_hour_price",
                self.private_endpoint_hour_price,
            ),
            (
                "private_link_data_price_per_gb",
                self.private_link_data_price_per_gb,
            ),
            (
                "log_ingestion_price_per_gb",
                self.log_ingestion_price_per_gb,
            ),
        ];
        for (field, value) in prices {
            if !value.is_finite() || value < 0.0 {
                return Err(InputError::NegativeScale { field, value });
            }
        }
        Ok(())
    }
}
