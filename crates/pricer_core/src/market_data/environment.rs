//! Market environment for a single instrument under flat Black-Scholes.
//!
//! A [`MarketEnvironment`] bundles spot, a flat rate curve, a flat volatility
//! and the valuation date of the run. It is the only place the engines get
//! time to maturity and discount factors from, so the day count and date
//! ordering rules live here and nowhere else.

use crate::market_data::curves::{FlatCurve, YieldCurve};
use crate::market_data::error::MarketDataError;
use crate::market_data::surfaces::FlatVol;
use crate::types::{Date, DayCountConvention, PricingError};

/// Flat-curve Black-Scholes inputs fixed at a valuation date.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::MarketEnvironment;
/// use pricer_core::types::Date;
///
/// let valuation = Date::from_ymd(2024, 1, 1).unwrap();
/// let env = MarketEnvironment::new(valuation, 100.0, 0.05, 0.2).unwrap();
///
/// let maturity = Date::from_ymd(2024, 12, 31).unwrap();
/// let t = env.time_to_maturity(maturity).unwrap();
/// assert!((t - 365.0 / 365.0).abs() < 1e-12);
/// assert!((env.discount_factor(maturity).unwrap() - (-0.05_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketEnvironment {
    valuation_date: Date,
    spot: f64,
    curve: FlatCurve<f64>,
    vol: FlatVol<f64>,
    day_count: DayCountConvention,
}

impl MarketEnvironment {
    /// Build an environment using Actual/365 Fixed.
    ///
    /// # Errors
    ///
    /// - `InvalidSpot` if `spot <= 0`
    /// - `NegativeVolatility` if `volatility < 0`
    /// - `NonFinite` if any quote is NaN or infinite
    pub fn new(
        valuation_date: Date,
        spot: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, MarketDataError> {
        if !spot.is_finite() {
            return Err(MarketDataError::NonFinite {
                name: "spot",
                value: spot,
            });
        }
        if spot <= 0.0 {
            return Err(MarketDataError::InvalidSpot { spot });
        }
        Ok(Self {
            valuation_date,
            spot,
            curve: FlatCurve::new(rate)?,
            vol: FlatVol::new(volatility)?,
            day_count: DayCountConvention::Actual365Fixed,
        })
    }

    /// Valuation date of the run.
    #[inline]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Spot price of the underlying.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Flat continuously-compounded rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.curve.rate()
    }

    /// Flat volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.vol.sigma()
    }

    /// The flat rate curve.
    #[inline]
    pub fn curve(&self) -> &FlatCurve<f64> {
        &self.curve
    }

    /// The flat volatility surface.
    #[inline]
    pub fn vol_surface(&self) -> &FlatVol<f64> {
        &self.vol
    }

    /// Day count convention used for year fractions.
    #[inline]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Year fraction from the valuation date to `maturity`.
    ///
    /// # Errors
    ///
    /// `InvalidDateOrdering` unless `maturity` is strictly after the
    /// valuation date.
    pub fn time_to_maturity(&self, maturity: Date) -> Result<f64, PricingError> {
        if maturity <= self.valuation_date {
            return Err(PricingError::InvalidDateOrdering {
                valuation: self.valuation_date,
                maturity,
            });
        }
        Ok(self
            .day_count
            .year_fraction_dates(self.valuation_date, maturity))
    }

    /// Discount factor from `maturity` back to the valuation date.
    pub fn discount_factor(&self, maturity: Date) -> Result<f64, PricingError> {
        let t = self.time_to_maturity(maturity)?;
        Ok(self.curve.discount_factor(t)?)
    }

    /// Forward price of the underlying for delivery at `maturity` (q = 0).
    pub fn forward(&self, maturity: Date) -> Result<f64, PricingError> {
        Ok(self.spot / self.discount_factor(maturity)?)
    }
}
