//! Flat volatility surface implementation.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Flat volatility: the same sigma for every strike and expiry.
///
/// Zero volatility is valid and selects the deterministic-forward limit in
/// the engines. Negative or non-finite values are rejected.
///
/// ```
/// use pricer_core::market_data::surfaces::FlatVol;
///
/// let vol = FlatVol::new(0.20_f64).unwrap();
/// assert_eq!(vol.sigma(), 0.20);
/// assert!(FlatVol::new(-0.1_f64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatVol<T: Float> {
    sigma: T,
}

impl<T: Float> FlatVol<T> {
    /// Construct a flat surface; `sigma` must be finite and non-negative.
    pub fn new(sigma: T) -> Result<Self, MarketDataError> {
        if !sigma.is_finite() {
            return Err(MarketDataError::NonFinite {
                name: "volatility",
                value: sigma.to_f64().unwrap_or(f64::NAN),
            });
        }
        if sigma < T::zero() {
            return Err(MarketDataError::NegativeVolatility {
                sigma: sigma.to_f64().unwrap_or(0.0),
            });
        }
        Ok(Self { sigma })
    }

    /// Return the constant volatility.
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }
}
