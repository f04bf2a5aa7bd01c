//! Maturity calculator with configurable defaults

use super::maturity::{compute_maturity, compute_projection_series, round_to_cents, ProjectionPoint};
use crate::error::Result;
use crate::records::CustomerRecord;
use log::debug;
use serde::{Deserialize, Serialize};

/// Default principal offered by the calculator form
pub const DEFAULT_AMOUNT: f64 = 10_000.0;

/// Default policy term in years
pub const DEFAULT_YEARS: i32 = 10;

/// Default annual interest rate in percent
pub const DEFAULT_RATE_PERCENT: f64 = 6.0;

/// Calculator defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Principal used when the caller supplies none
    pub default_amount: f64,

    /// Term applied to stored customer policies
    pub years: i32,

    /// Annual rate applied to stored customer policies (6.0 = 6%)
    pub rate_percent: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_amount: DEFAULT_AMOUNT,
            years: DEFAULT_YEARS,
            rate_percent: DEFAULT_RATE_PERCENT,
        }
    }
}

impl CalculatorConfig {
    /// Set the term in years
    pub fn with_years(mut self, years: i32) -> Self {
        self.years = years;
        self
    }

    /// Set the annual rate in percent
    pub fn with_rate(mut self, rate_percent: f64) -> Self {
        self.rate_percent = rate_percent;
        self
    }
}

/// Result of projecting one principal forward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityProjection {
    pub principal: f64,
    pub rate_percent: f64,
    pub years: i32,

    /// Value at the end of the term, full precision
    pub maturity_value: f64,

    /// End-of-year values for years 1..=years
    pub series: Vec<ProjectionPoint>,
}

impl MaturityProjection {
    /// Maturity value rounded to cents for display
    pub fn rounded_maturity(&self) -> f64 {
        round_to_cents(self.maturity_value)
    }

    /// Interest earned (negative under depreciation)
    pub fn total_growth(&self) -> f64 {
        self.maturity_value - self.principal
    }
}

/// Maturity calculator
#[derive(Debug, Clone, Default)]
pub struct MaturityCalculator {
    config: CalculatorConfig,
}

impl MaturityCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Maturity value only
    pub fn compute_maturity(&self, principal: f64, rate_percent: f64, years: i32) -> Result<f64> {
        compute_maturity(principal, rate_percent, years)
    }

    /// Year-by-year series only
    pub fn compute_projection_series(
        &self,
        principal: f64,
        rate_percent: f64,
        years: i32,
    ) -> Result<Vec<ProjectionPoint>> {
        compute_projection_series(principal, rate_percent, years)
    }

    /// Full projection for explicit inputs
    pub fn project(&self, principal: f64, rate_percent: f64, years: i32) -> Result<MaturityProjection> {
        let series = compute_projection_series(principal, rate_percent, years)?;
        let maturity_value = match series.last() {
            Some(point) => point.value,
            None => principal,
        };

        debug!(
            "projected {:.2} at {}% for {} years -> {:.2}",
            principal, rate_percent, years, maturity_value
        );

        Ok(MaturityProjection {
            principal,
            rate_percent,
            years,
            maturity_value,
            series,
        })
    }

    /// Project the configured default amount at the configured rate and term
    pub fn project_default(&self) -> Result<MaturityProjection> {
        self.project(self.config.default_amount, self.config.rate_percent, self.config.years)
    }

    /// Project a stored customer's policy amount at the configured rate and term
    pub fn project_customer(&self, record: &CustomerRecord) -> Result<MaturityProjection> {
        self.project(record.policy_amount, self.config.rate_percent, self.config.years)
    }
}
