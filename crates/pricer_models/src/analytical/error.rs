//! Error types for analytical pricing operations.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Raised by the closed-form models when an input is outside the domain of
/// the formula. Converts into [`PricingError`]; an out-of-range expiry maps
/// to `DegenerateMaturity`, everything else to `InvalidInput`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Negative or non-finite volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Non-positive or non-finite spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Non-positive or non-finite strike.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Non-positive or non-finite barrier level.
    #[error("Invalid barrier level: H = {barrier}")]
    InvalidBarrier {
        /// The invalid barrier value
        barrier: f64,
    },

    /// Non-finite rate or rebate.
    #[error("Non-finite {name}: {value}")]
    NonFinite {
        /// Name of the parameter
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Time to expiry is zero or negative.
    #[error("Degenerate expiry: T = {expiry}")]
    DegenerateExpiry {
        /// The expiry in years
        expiry: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::DegenerateExpiry { expiry } => {
                PricingError::DegenerateMaturity { time: expiry }
            }
            other => PricingError::InvalidInput(other.to_string()),
        }
    }
}
