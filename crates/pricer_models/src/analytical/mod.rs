//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions under Black-Scholes with a
//! flat rate and no dividend yield:
//! - [`BlackScholes`]: vanilla calls and puts
//! - [`BarrierModel`]: Reiner-Rubinstein single-barrier options with rebate
//!
//! Both accept zero volatility and fall back to the deterministic forward
//! path, where the closed forms would divide by zero.

pub mod barrier;
pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use barrier::BarrierModel;
pub use black_scholes::BlackScholes;
pub use distributions::{ln_norm_cdf, norm_cdf, norm_pdf};
pub use error::AnalyticalError;
