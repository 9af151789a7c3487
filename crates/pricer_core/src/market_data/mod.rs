//! Flat Black-Scholes market data.
//!
//! # Components
//!
//! - [`curves`]: Yield curve trait and the flat curve
//! - [`surfaces`]: The flat volatility surface
//! - [`environment`]: `MarketEnvironment`, the single source of time to
//!   maturity and discounting for the engines
//! - [`error`]: Market data error types (MarketDataError)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
//! use pricer_core::market_data::surfaces::FlatVol;
//!
//! let curve = FlatCurve::new(0.05_f64).unwrap();
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - 0.951229).abs() < 1e-5);
//!
//! let vol_surface = FlatVol::new(0.20_f64).unwrap();
//! assert_eq!(vol_surface.sigma(), 0.20);
//! ```

pub mod curves;
pub mod environment;
pub mod error;
pub mod surfaces;

// Re-export commonly used types
pub use curves::{FlatCurve, YieldCurve};
pub use environment::MarketEnvironment;
pub use error::MarketDataError;
pub use surfaces::FlatVol;
