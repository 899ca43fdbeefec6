//! Client growth projection
//!
//! Compounding year-over-year growth with ceiling rounding. Rounding up
//! biases the projection toward higher counts, so cost estimates err on
//! the conservative side.

/// Projected client count for a zero-based year index.
///
/// `clients_in_year(base, rate, 0)` is always `base`: year 1 of the
/// horizon sees no growth. Callers must have validated `rate > -1`.
pub fn clients_in_year(base_clients: u64, growth_rate: f64, year_index: u32) -> u64 {
    let projected = base_clients as f64 * (1.0 + growth_rate).powi(year_index as i32);
    projected.ceil() as u64
}
