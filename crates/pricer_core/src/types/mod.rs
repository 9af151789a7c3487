//! Core time, currency and error types.
//!
//! This module provides:
//! - `time`: Time types (Date, DayCountConvention) for financial calculations
//! - `currency`: ISO 4217 currency codes
//! - `error`: The failure taxonomy for construction and pricing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`DayCountConvention`] from `time`
//! - [`Currency`] from `currency`
//! - [`PricingError`], [`DateError`], [`CurrencyError`] from `error`

pub mod currency;
pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use currency::Currency;
pub use error::{CurrencyError, DateError, PricingError};
pub use time::{Date, DayCountConvention};
