//! # pricer_core: Foundation Types for European Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the pricer workspace, providing:
//! - Time types: `Date`, `DayCountConvention` (`types::time`)
//! - Currency codes: `Currency` (`types::currency`)
//! - The failure taxonomy shared by every layer: `PricingError` (`types::error`)
//! - Flat Black-Scholes market data: `FlatCurve`, `FlatVol`, `MarketEnvironment`
//!   (`market_data`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::MarketEnvironment;
//! use pricer_core::types::{Currency, Date, DayCountConvention};
//!
//! let valuation = Date::from_ymd(2024, 1, 1).unwrap();
//! let maturity = Date::from_ymd(2025, 1, 1).unwrap();
//!
//! // Actual/365 Fixed year fraction (2024 is a leap year)
//! let t = DayCountConvention::Actual365Fixed.year_fraction_dates(valuation, maturity);
//! assert!((t - 366.0 / 365.0).abs() < 1e-12);
//!
//! // Flat-curve environment fixed at the valuation date
//! let env = MarketEnvironment::new(valuation, 100.0, 0.05, 0.20).unwrap();
//! assert!(env.time_to_maturity(maturity).is_ok());
//! assert!(env.time_to_maturity(valuation).is_err());
//!
//! let usd: Currency = "usd".parse().unwrap();
//! assert_eq!(usd.code(), "USD");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date and Currency

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
