//! Yield curve abstraction.
//!
//! - [`YieldCurve`]: discount factors by time
//! - [`FlatCurve`]: a single continuously-compounded rate for all maturities

mod flat;
mod traits;

pub use flat::FlatCurve;
pub use traits::YieldCurve;
