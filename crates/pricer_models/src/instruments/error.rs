//! Instrument error types.
//!
//! Domain errors for payoff and contract parameters. Construction from an
//! input record reports through [`PricingError`] directly; these convert
//! into its `InvalidInput` variant.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument parameter errors.
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert_eq!(format!("{}", err), "Invalid strike: K = -100");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Strike is not finite and positive.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Barrier level is not finite and positive.
    #[error("Invalid barrier level: H = {level}")]
    InvalidBarrierLevel {
        /// The invalid barrier level
        level: f64,
    },

    /// Rebate is not finite.
    #[error("Invalid rebate: {rebate}")]
    InvalidRebate {
        /// The invalid rebate
        rebate: f64,
    },

    /// Any other out-of-domain parameter.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the problem
        message: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
