//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! With σ = 0 the underlying follows its forward deterministically and the
//! price is the discounted intrinsic value of the forward,
//! `e^(-rT)·max(φ(S·e^(rT) - K), 0)`.

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::{OptionType, Payoff, VanillaPayoff};

/// Black-Scholes model with flat rate and no dividend yield.
///
/// # Examples
///
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionType;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price(OptionType::Call, 100.0, 1.0).unwrap();
/// assert!((call - 10.4506).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

pub(crate) fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl<T: Float> BlackScholes<T> {
    /// Create a model.
    ///
    /// # Errors
    /// - `InvalidSpot` unless spot is finite and positive
    /// - `InvalidVolatility` unless volatility is finite and non-negative
    /// - `NonFinite` if the rate is NaN or infinite
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        if !spot.is_finite() || spot <= T::zero() {
            return Err(AnalyticalError::InvalidSpot {
                spot: to_f64(spot),
            });
        }
        if !volatility.is_finite() || volatility < T::zero() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: to_f64(volatility),
            });
        }
        if !rate.is_finite() {
            return Err(AnalyticalError::NonFinite {
                name: "rate",
                value: to_f64(rate),
            });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Continuously-compounded rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// `e^(-rT)`.
    #[inline]
    pub fn discount_factor(&self, expiry: T) -> T {
        (-self.rate * expiry).exp()
    }

    /// Forward price `S·e^(rT)`.
    #[inline]
    pub fn forward(&self, expiry: T) -> T {
        self.spot * (self.rate * expiry).exp()
    }

    /// d₁ for the given strike and expiry.
    ///
    /// Only meaningful for positive volatility and expiry; the pricing
    /// methods never call it otherwise.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap_or_else(T::nan);
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;
        ((self.spot / strike).ln() + drift) / vol_sqrt_t
    }

    /// d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    pub(crate) fn check_contract(strike: T, expiry: T) -> Result<(), AnalyticalError> {
        if !strike.is_finite() || strike <= T::zero() {
            return Err(AnalyticalError::InvalidStrike {
                strike: to_f64(strike),
            });
        }
        if !expiry.is_finite() || expiry <= T::zero() {
            return Err(AnalyticalError::DegenerateExpiry {
                expiry: to_f64(expiry),
            });
        }
        Ok(())
    }

    /// European call price.
    pub fn price_call(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.price(OptionType::Call, strike, expiry)
    }

    /// European put price.
    pub fn price_put(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.price(OptionType::Put, strike, expiry)
    }

    /// European option price for either option type.
    ///
    /// # Errors
    /// - `InvalidStrike` unless strike is finite and positive
    /// - `DegenerateExpiry` unless expiry is finite and positive
    pub fn price(&self, option_type: OptionType, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        Self::check_contract(strike, expiry)?;

        let discount = self.discount_factor(expiry);
        if self.volatility == T::zero() {
            let payoff = Self::payoff(option_type, strike)?;
            return Ok(discount * self.forward_intrinsic(&payoff, expiry));
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let price = match option_type {
            OptionType::Call => self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
            OptionType::Put => strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        };
        Ok(price)
    }

    /// Undiscounted payoff evaluated at the forward, the terminal spot of
    /// the zero-volatility path.
    pub fn forward_intrinsic<P: Payoff<T>>(&self, payoff: &P, expiry: T) -> T {
        payoff.intrinsic_value(self.forward(expiry))
    }

    pub(crate) fn payoff(option_type: OptionType, strike: T) -> Result<VanillaPayoff<T>, AnalyticalError> {
        VanillaPayoff::new(option_type, strike).map_err(|_| AnalyticalError::InvalidStrike {
            strike: to_f64(strike),
        })
    }
}
