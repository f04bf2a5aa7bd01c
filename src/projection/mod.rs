//! Policy maturity projections

mod maturity;
mod engine;

pub use maturity::{
    compute_maturity, compute_projection_series, round_to_cents, ProjectionPoint, MAX_SERIES_YEARS,
};
pub use engine::{
    CalculatorConfig, MaturityCalculator, MaturityProjection,
    DEFAULT_AMOUNT, DEFAULT_RATE_PERCENT, DEFAULT_YEARS,
};
