//! Compound-interest maturity value
//!
//! Growth is compounded once per year. Values are returned at full precision;
//! rounding to cents is left to whoever displays them.

use crate::error::{PortalError, Result};
use serde::{Deserialize, Serialize};

/// One year of a maturity projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Policy year, 1-indexed
    pub year: u32,
    /// Accumulated value at the end of `year`
    pub value: f64,
}

/// Longest series `compute_projection_series` will build, in years
pub const MAX_SERIES_YEARS: i32 = 1_000;

/// Calculate the maturity value of `principal` after `years` of annual
/// compounding at `rate_percent` (6.0 means 6%).
///
/// Negative rates are accepted and model depreciation. `years == 0` returns
/// the principal unchanged.
///
/// # Errors
/// `Validation` if `years` is negative or `principal` is negative / NaN.
pub fn compute_maturity(principal: f64, rate_percent: f64, years: i32) -> Result<f64> {
    if years < 0 {
        return Err(PortalError::validation(
            "years",
            format!("must not be negative, got {}", years),
        ));
    }
    if !(principal >= 0.0) {
        return Err(PortalError::validation(
            "principal",
            format!("must not be negative, got {}", principal),
        ));
    }

    Ok(principal * (1.0 + rate_percent / 100.0).powi(years))
}

/// Year-by-year values for years `1..=years`; empty when `years == 0`.
///
/// Each point is computed independently so the last one is exactly
/// `compute_maturity(principal, rate_percent, years)`.
///
/// # Errors
/// `Validation` for the inputs `compute_maturity` rejects, and for terms
/// longer than [`MAX_SERIES_YEARS`].
pub fn compute_projection_series(
    principal: f64,
    rate_percent: f64,
    years: i32,
) -> Result<Vec<ProjectionPoint>> {
    // Validates inputs even when the series would be empty
    compute_maturity(principal, rate_percent, years)?;
    if years > MAX_SERIES_YEARS {
        return Err(PortalError::validation(
            "years",
            format!("series limited to {} years, got {}", MAX_SERIES_YEARS, years),
        ));
    }

    (1..=years)
        .map(|year| {
            Ok(ProjectionPoint {
                year: year as u32,
                value: compute_maturity(principal, rate_percent, year)?,
            })
        })
        .collect()
}

/// Round a currency amount to cents for display
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
