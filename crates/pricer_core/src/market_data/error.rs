//! Market data error types.
//!
//! Structured errors for flat curve, flat volatility and market environment
//! construction.

use crate::types::PricingError;
use thiserror::Error;

/// Market data operation errors.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Time to maturity outside the domain of the lookup.
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Spot price is not strictly positive.
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Volatility is negative.
    #[error("Negative volatility: sigma = {sigma}")]
    NegativeVolatility {
        /// The invalid volatility value
        sigma: f64,
    },

    /// A market quote is NaN or infinite.
    #[error("Non-finite {name}: {value}")]
    NonFinite {
        /// Name of the quote
        name: &'static str,
        /// The offending value
        value: f64,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::InvalidMaturity { t } => PricingError::DegenerateMaturity { time: t },
            other => PricingError::InvalidInput(other.to_string()),
        }
    }
}
