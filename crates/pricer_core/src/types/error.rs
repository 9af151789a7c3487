//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The failure taxonomy shared by instrument construction,
//!   market environment derivation and the pricing engines
//! - `DateError`: Errors from date construction and parsing
//! - `CurrencyError`: Errors from currency parsing

use thiserror::Error;

use super::time::Date;

/// Categorised pricing errors.
///
/// Every failure a single instrument can hit, from reading its input record
/// through to evaluating a closed-form formula. All variants except
/// `DegenerateMaturity` are raised while constructing an instrument; a
/// well-formed instrument can only fail inside an engine through
/// `DegenerateMaturity`.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::MissingField { field: "barrier_level".to_string() };
/// assert_eq!(format!("{}", err), "Missing required field: barrier_level");
///
/// let err = PricingError::UnsupportedSubtype("lookback".to_string());
/// assert_eq!(err.kind(), "UnsupportedSubtype");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A required input field, including a subtype-conditional one, is absent.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field as it appears in the input record
        field: String,
    },

    /// A date string does not match `YYYY-MM-DD`.
    #[error("Invalid date format: '{value}' (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        /// The offending input
        value: String,
    },

    /// Maturity is on or before the valuation date.
    #[error("Maturity {maturity} must be after valuation date {valuation}")]
    InvalidDateOrdering {
        /// Valuation date of the run
        valuation: Date,
        /// Maturity date of the instrument
        maturity: Date,
    },

    /// Option type is not `call` or `put`.
    #[error("Unsupported option type: {0}")]
    UnsupportedOptionType(String),

    /// Subtype is unknown, or known but not priceable (lookback).
    #[error("Unsupported option subtype: {0}")]
    UnsupportedSubtype(String),

    /// Barrier type is not one of the four single-barrier variants.
    #[error("Unsupported barrier type: {0}")]
    UnsupportedBarrierType(String),

    /// Lookback type is not `long` or `short`.
    #[error("Unsupported lookback type: {0}")]
    UnsupportedLookbackType(String),

    /// Time to maturity reaching a formula is not strictly positive.
    #[error("Degenerate maturity: T = {time}")]
    DegenerateMaturity {
        /// The time to maturity in years
        time: f64,
    },

    /// Numeric input outside its domain (non-positive strike, negative
    /// volatility, non-finite values, malformed currency).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PricingError {
    /// Stable name of the failure kind, used in logs and run summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::MissingField { .. } => "MissingField",
            PricingError::InvalidDateFormat { .. } => "InvalidDateFormat",
            PricingError::InvalidDateOrdering { .. } => "InvalidDateOrdering",
            PricingError::UnsupportedOptionType(_) => "UnsupportedOptionType",
            PricingError::UnsupportedSubtype(_) => "UnsupportedSubtype",
            PricingError::UnsupportedBarrierType(_) => "UnsupportedBarrierType",
            PricingError::UnsupportedLookbackType(_) => "UnsupportedLookbackType",
            PricingError::DegenerateMaturity { .. } => "DegenerateMaturity",
            PricingError::InvalidInput(_) => "InvalidInput",
        }
    }

    /// Convenience constructor for [`PricingError::MissingField`].
    pub fn missing(field: impl Into<String>) -> Self {
        PricingError::MissingField {
            field: field.into(),
        }
    }
}

/// Date-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: '{input}'")]
    ParseError {
        /// The string that failed to parse
        input: String,
    },
}

impl From<DateError> for PricingError {
    fn from(err: DateError) -> Self {
        match err {
            DateError::ParseError { input } => PricingError::InvalidDateFormat { value: input },
            DateError::InvalidDate { year, month, day } => PricingError::InvalidDateFormat {
                value: format!("{:04}-{:02}-{:02}", year, month, day),
            },
        }
    }
}

/// Currency-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::CurrencyError;
///
/// let err = CurrencyError::InvalidCode("US".to_string());
/// assert_eq!(format!("{}", err), "Invalid currency code: 'US'");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Code is not three ASCII letters.
    #[error("Invalid currency code: '{0}'")]
    InvalidCode(String),
}

impl From<CurrencyError> for PricingError {
    fn from(err: CurrencyError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
