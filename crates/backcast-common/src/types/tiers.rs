//! Protected-instance tier schedule
//!
//! Vaulted blob backup bills a monthly protected-instance fee per storage
//! account as a fraction of a base price, with the fraction determined by
//! the average data size held in the account. Bands are half-open: the
//! lower bound is inclusive, the upper bound exclusive, and the top band
//! is open-ended.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// One size band of the protected-instance fee schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBand {
    /// Exclusive upper bound in GB. `None` marks the open-ended top band.
    pub upper_gb: Option<f64>,
    /// Fraction of the base monthly protected-instance price billed in
    /// this band.
    pub fraction: f64,
}

impl TierBand {
    pub fn bounded(upper_gb: f64, fraction: f64) -> Self {
        Self {
            upper_gb: Some(upper_gb),
            fraction,
        }
    }

    pub fn open(fraction: f64) -> Self {
        Self {
            upper_gb: None,
            fraction,
        }
    }
}

/// Ordered protected-instance fee schedule
///
/// Bands are kept sorted by ascending upper bound with the open-ended band
/// last, so lookup is a linear scan for the first band whose upper bound
/// exceeds the size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierSchedule {
    bands: Vec<TierBand>,
}

impl TierSchedule {
    /// Build a schedule from explicit bands, rejecting structural problems.
    pub fn new(bands: Vec<TierBand>) -> Result<Self, InputError> {
        let schedule = Self { bands };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Structural validation: non-empty, ascending finite bounds, exactly
    /// one open-ended band in last position, fractions within `[0, 1]`.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.bands.is_empty() {
            return Err(InputError::TierSchedule("schedule has no bands".into()));
        }

        let mut prev_upper = 0.0_f64;
        let last = self.bands.len() - 1;
        for (i, band) in self.bands.iter().enumerate() {
            if !band.fraction.is_finite() || band.fraction < 0.0 || band.fraction > 1.0 {
                return Err(InputError::TierSchedule(format!(
                    "band {} fraction {} outside [0, 1]",
                    i, band.fraction
                )));
            }
            match band.upper_gb {
                Some(upper) => {
                    if i == last {
                        return Err(InputError::TierSchedule(
                            "top band must be open-ended".into(),
                        ));
                    }
                    if !upper.is_finite() || upper <= prev_upper {
                        return Err(InputError::TierSchedule(format!(
                            "band {} upper bound {} not strictly ascending",
                            i, upper
                        )));
                    }
                    prev_upper = upper;
                }
                None => {
                    if i != last {
                        return Err(InputError::TierSchedule(format!(
                            "open-ended band at position {} is not last",
                            i
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Fraction of the base price billed for the given per-account size.
    ///
    /// Returns the first band whose exclusive upper bound exceeds
    /// `size_gb`, falling through to the open-ended top band.
    pub fn fraction_for(&self, size_gb: f64) -> f64 {
        for band in &self.bands {
            match band.upper_gb {
                Some(upper) if size_gb < upper => return band.fraction,
                Some(_) => continue,
                None => return band.fraction,
            }
        }
        // Unreachable on a validated schedule; an empty one bills nothing.
        0.0
    }

    pub fn bands(&self) -> &[TierBand] {
        &self.bands
    }
}

impl Default for TierSchedule {
    /// The documented four-band blob schedule: `[0,10)` at 10%, `[10,100)`
    /// at 30%, `[100,1024)` at 60%, and 100% from 1 TB up.
    fn default() -> Self {
        Self {
            bands: vec![
                TierBand::bounded(10.0, 0.10),
                TierBand::bounded(100.0, 0.30),
                TierBand::bounded(1024.0, 0.60),
                TierBand::open(1.00),
            ],
        }
    }
}
