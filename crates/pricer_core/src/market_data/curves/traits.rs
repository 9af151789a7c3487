//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Term structure of continuously-compounded interest rates.
pub trait YieldCurve<T: Float> {
    /// Discount factor `D(t)` for time `t` in years. Fails for `t < 0`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;
}
