//! Volatility surface abstraction.
//!
//! - [`FlatVol`]: a single volatility for all strikes and expiries

mod flat;

pub use flat::FlatVol;
