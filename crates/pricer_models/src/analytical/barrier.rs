//! Single-barrier European options under Black-Scholes (Reiner-Rubinstein).
//!
//! ## Decomposition
//!
//! With φ = +1 for calls and -1 for puts, η = +1 for down and -1 for up
//! barriers, and no dividend yield:
//!
//! - μ = (r - σ²/2) / σ², λ = √(μ² + 2r/σ²)
//! - A, B: vanilla-like terms at x₁ = ln(S/K)/(σ√T) + (1+μ)σ√T and
//!   x₂ = ln(S/H)/(σ√T) + (1+μ)σ√T
//! - C, D: reflected terms at y₁ = ln(H²/(SK))/(σ√T) + (1+μ)σ√T and
//!   y₂ = ln(H/S)/(σ√T) + (1+μ)σ√T
//! - E: knock-in rebate, paid at expiry if the barrier is never touched
//! - F: knock-out rebate, paid when the barrier is touched, with
//!   z = ln(H/S)/(σ√T) + λσ√T
//!
//! The eight (call/put × up/down × in/out) prices are sums of these terms,
//! selected by whether K ≥ H.
//!
//! ## Boundary handling
//!
//! - Barrier already crossed at valuation (S < H for down, S > H for up):
//!   a knock-in is the vanilla, a knock-out is the rebate paid now.
//! - S = H goes through the closed form, which already gives in = vanilla
//!   and out = rebate there.
//! - σ = 0: the spot follows `S·e^(rt)` and the barrier is touched iff that
//!   path reaches H by expiry.
//!
//! ## Small volatility
//!
//! As σ → 0, μ grows like r/σ², so powers such as `(H/S)^(2μ)` overflow
//! while the Φ factor beside them underflows. Every `(H/S)^p · Φ(x)` product
//! is therefore evaluated as `exp(p·ln(H/S) + ln Φ(x))`. A result that is
//! still not finite is reported as an error rather than returned.

use num_traits::Float;

use super::black_scholes::{to_f64, BlackScholes};
use super::distributions::{constant, ln_norm_cdf, norm_cdf};
use super::error::AnalyticalError;
use crate::instruments::{BarrierDirection, BarrierType, OptionType};

/// Analytic barrier option model.
///
/// # Examples
///
/// ```
/// use pricer_models::analytical::BarrierModel;
/// use pricer_models::instruments::{BarrierType, OptionType};
///
/// let model = BarrierModel::new(100.0_f64, 0.05, 0.2).unwrap();
/// let up_in = model
///     .price(OptionType::Call, BarrierType::UpIn, 100.0, 120.0, 0.0, 1.0)
///     .unwrap();
/// let up_out = model
///     .price(OptionType::Call, BarrierType::UpOut, 100.0, 120.0, 0.0, 1.0)
///     .unwrap();
/// assert!((up_in + up_out - 10.4506).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarrierModel<T: Float> {
    bs: BlackScholes<T>,
}

/// The A..F building blocks for one contract.
struct Terms<T> {
    a: T,
    b: T,
    c: T,
    d: T,
    e: T,
    f: T,
}

impl<T: Float> BarrierModel<T> {
    /// Create a model; inputs are validated as for [`BlackScholes::new`].
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        Ok(Self {
            bs: BlackScholes::new(spot, rate, volatility)?,
        })
    }

    /// The underlying vanilla model.
    #[inline]
    pub fn black_scholes(&self) -> &BlackScholes<T> {
        &self.bs
    }

    /// Barrier option price.
    ///
    /// # Errors
    /// - `InvalidStrike` / `DegenerateExpiry` as for vanilla pricing
    /// - `InvalidBarrier` unless the barrier is finite and positive
    /// - `NonFinite` if the rebate is NaN or infinite, or if the closed form
    ///   does not produce a finite price
    pub fn price(
        &self,
        option_type: OptionType,
        barrier_type: BarrierType,
        strike: T,
        barrier: T,
        rebate: T,
        expiry: T,
    ) -> Result<T, AnalyticalError> {
        BlackScholes::check_contract(strike, expiry)?;
        if !barrier.is_finite() || barrier <= T::zero() {
            return Err(AnalyticalError::InvalidBarrier {
                barrier: to_f64(barrier),
            });
        }
        if !rebate.is_finite() {
            return Err(AnalyticalError::NonFinite {
                name: "rebate",
                value: to_f64(rebate),
            });
        }

        let spot = self.bs.spot();
        let breached = match barrier_type.direction() {
            BarrierDirection::Down => spot < barrier,
            BarrierDirection::Up => spot > barrier,
        };
        if breached {
            return if barrier_type.is_knock_in() {
                self.bs.price(option_type, strike, expiry)
            } else {
                Ok(rebate)
            };
        }

        if self.bs.volatility() == T::zero() {
            return self.deterministic_price(option_type, barrier_type, strike, barrier, rebate, expiry);
        }

        let t = self.terms(option_type, barrier_type, strike, barrier, rebate, expiry);
        let above = strike >= barrier;
        let price = match (barrier_type, option_type) {
            (BarrierType::DownIn, OptionType::Call) if above => t.c + t.e,
            (BarrierType::DownIn, OptionType::Call) => t.a - t.b + t.d + t.e,
            (BarrierType::DownIn, OptionType::Put) if above => t.b - t.c + t.d + t.e,
            (BarrierType::DownIn, OptionType::Put) => t.a + t.e,

            (BarrierType::UpIn, OptionType::Call) if above => t.a + t.e,
            (BarrierType::UpIn, OptionType::Call) => t.b - t.c + t.d + t.e,
            (BarrierType::UpIn, OptionType::Put) if above => t.a - t.b + t.d + t.e,
            (BarrierType::UpIn, OptionType::Put) => t.c + t.e,

            (BarrierType::DownOut, OptionType::Call) if above => t.a - t.c + t.f,
            (BarrierType::DownOut, OptionType::Call) => t.b - t.d + t.f,
            (BarrierType::DownOut, OptionType::Put) if above => t.a - t.b + t.c - t.d + t.f,
            (BarrierType::DownOut, OptionType::Put) => t.f,

            (BarrierType::UpOut, OptionType::Call) if above => t.f,
            (BarrierType::UpOut, OptionType::Call) => t.a - t.b + t.c - t.d + t.f,
            (BarrierType::UpOut, OptionType::Put) if above => t.b - t.d + t.f,
            (BarrierType::UpOut, OptionType::Put) => t.a - t.c + t.f,
        };
        if !price.is_finite() {
            return Err(AnalyticalError::NonFinite {
                name: "price",
                value: to_f64(price),
            });
        }
        Ok(price)
    }

    fn terms(
        &self,
        option_type: OptionType,
        barrier_type: BarrierType,
        strike: T,
        barrier: T,
        rebate: T,
        expiry: T,
    ) -> Terms<T> {
        let one = T::one();
        let two = constant::<T>(2.0);
        let spot = self.bs.spot();
        let r = self.bs.rate();
        let sigma = self.bs.volatility();
        let sigma2 = sigma * sigma;

        let phi = constant::<T>(option_type.sign());
        let eta = match barrier_type.direction() {
            BarrierDirection::Down => one,
            BarrierDirection::Up => -one,
        };

        let vol_sqrt_t = sigma * expiry.sqrt();
        let mu = (r - constant::<T>(0.5) * sigma2) / sigma2;
        let lambda = (mu * mu + two * r / sigma2).sqrt();
        let drift = (one + mu) * vol_sqrt_t;

        let x1 = (spot / strike).ln() / vol_sqrt_t + drift;
        let x2 = (spot / barrier).ln() / vol_sqrt_t + drift;
        let y1 = (barrier * barrier / (spot * strike)).ln() / vol_sqrt_t + drift;
        let y2 = (barrier / spot).ln() / vol_sqrt_t + drift;
        let z = (barrier / spot).ln() / vol_sqrt_t + lambda * vol_sqrt_t;

        let df = self.bs.discount_factor(expiry);
        let ln_ratio = (barrier / spot).ln();
        // (H/S)^power · Φ(x)
        let scaled_cdf = |power: T, x: T| (power * ln_ratio + ln_norm_cdf(x)).exp();

        let vanilla_like = |x: T| {
            phi * spot * norm_cdf(phi * x) - phi * strike * df * norm_cdf(phi * x - phi * vol_sqrt_t)
        };
        let reflected = |y: T| {
            phi * spot * scaled_cdf(two * (mu + one), eta * y)
                - phi * strike * df * scaled_cdf(two * mu, eta * y - eta * vol_sqrt_t)
        };

        let e = rebate
            * df
            * (norm_cdf(eta * x2 - eta * vol_sqrt_t) - scaled_cdf(two * mu, eta * y2 - eta * vol_sqrt_t));
        let f = rebate
            * (scaled_cdf(mu + lambda, eta * z)
                + scaled_cdf(mu - lambda, eta * z - two * eta * lambda * vol_sqrt_t));

        Terms {
            a: vanilla_like(x1),
            b: vanilla_like(x2),
            c: reflected(y1),
            d: reflected(y2),
            e,
            f,
        }
    }

    /// Zero-volatility price along the forward path `S·e^(rt)`.
    fn deterministic_price(
        &self,
        option_type: OptionType,
        barrier_type: BarrierType,
        strike: T,
        barrier: T,
        rebate: T,
        expiry: T,
    ) -> Result<T, AnalyticalError> {
        let spot = self.bs.spot();
        let r = self.bs.rate();
        let terminal = self.bs.forward(expiry);
        let df = self.bs.discount_factor(expiry);
        let payoff = BlackScholes::payoff(option_type, strike)?;
        let vanilla = df * self.bs.forward_intrinsic(&payoff, expiry);

        // Spot is on the live side of the barrier here
        let hit = spot == barrier
            || match barrier_type.direction() {
                BarrierDirection::Down => terminal <= barrier,
                BarrierDirection::Up => terminal >= barrier,
            };

        let price = if barrier_type.is_knock_in() {
            if hit {
                vanilla
            } else {
                rebate * df
            }
        } else if hit {
            // r != 0 whenever the path moves off the starting spot
            let hit_time = if spot == barrier {
                T::zero()
            } else {
                (barrier / spot).ln() / r
            };
            rebate * (-r * hit_time).exp()
        } else {
            vanilla
        };
        Ok(price)
    }
}
