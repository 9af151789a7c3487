//! # Pricer Pricing (Layer 3: Engines)
//!
//! Closed-form pricing of validated [`OptionSpec`](pricer_models::instruments::OptionSpec)s:
//!
//! - [`engines`]: the [`PricingEngine`](engines::PricingEngine) trait with
//!   Black-Scholes vanilla and analytic barrier engines
//! - [`pricer`]: the [`Pricer`] facade and its [`PricingState`] machine
//! - [`batch`]: parallel pricing of many specifications with per-instrument
//!   failure isolation
//! - [`result`]: the [`PricingResult`] row handed to persistence
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::Date;
//! use pricer_models::instruments::{OptionRecord, OptionSpec};
//! use pricer_pricing::price_batch;
//!
//! let valuation = Date::from_ymd(2023, 1, 1).unwrap();
//! let record = OptionRecord {
//!     option_name: Some("UO Call".to_string()),
//!     spot: Some(100.0),
//!     strike: Some(100.0),
//!     volatility: Some(0.2),
//!     rate: Some(0.05),
//!     option_type: Some("call".to_string()),
//!     subtype: Some("barrier".to_string()),
//!     maturity_date: Some("2024-01-01".to_string()),
//!     currency: Some("usd".to_string()),
//!     barrier_type: Some("up-and-out".to_string()),
//!     barrier_level: Some(120.0),
//!     ..Default::default()
//! };
//! let spec = OptionSpec::from_record(&record, valuation).unwrap();
//!
//! let results = price_batch(&[spec], valuation);
//! let row = results[0].as_ref().unwrap();
//! assert!(row.price > 0.0 && row.price < 10.4506);
//! ```

#![deny(missing_docs)]

pub mod batch;
pub mod engines;
pub mod pricer;
pub mod result;

pub use batch::{price_batch, price_batch_sequential, BatchOutcome};
pub use pricer::{price, Pricer, PricingState};
pub use result::PricingResult;
