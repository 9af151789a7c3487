//! Flat yield curve implementation.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Flat yield curve with a constant continuously-compounded rate.
///
/// The rate may be negative or zero; only non-finite rates are rejected.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.05_f64).unwrap();
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCurve<T: Float> {
    rate: T,
}

impl<T: Float> FlatCurve<T> {
    /// Construct a flat curve with the given constant rate.
    pub fn new(rate: T) -> Result<Self, MarketDataError> {
        if !rate.is_finite() {
            return Err(MarketDataError::NonFinite {
                name: "rate",
                value: rate.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { rate })
    }

    /// Return the constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Float> YieldCurve<T> for FlatCurve<T> {
    /// `D(t) = exp(-r t)`; fails for `t < 0`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok((-self.rate * t).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor() {
        let curve = FlatCurve::new(0.05_f64).unwrap();
        assert_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
        assert_relative_eq!(
            curve.discount_factor(2.0).unwrap(),
            (-0.1_f64).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_negative_and_zero_rates_allowed() {
        let curve = FlatCurve::new(-0.01_f64).unwrap();
        assert!(curve.discount_factor(1.0).unwrap() > 1.0);
        let curve = FlatCurve::new(0.0_f64).unwrap();
        assert_eq!(curve.discount_factor(3.0).unwrap(), 1.0);
    }

    #[test]
    fn test_non_finite_rate_rejected() {
        assert!(FlatCurve::new(f64::NAN).is_err());
        assert!(FlatCurve::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_negative_time_rejected() {
        let curve = FlatCurve::new(0.05_f64).unwrap();
        assert_eq!(
            curve.discount_factor(-1.0),
            Err(MarketDataError::InvalidMaturity { t: -1.0 })
        );
    }
}
