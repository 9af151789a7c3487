//! Terminal payoffs of European options.
//!
//! [`Payoff`] maps the terminal spot to the intrinsic value; [`CallPayoff`]
//! and [`PutPayoff`] implement it, and [`VanillaPayoff`] selects between them
//! by [`OptionType`] with static dispatch.

use num_traits::Float;

use super::error::InstrumentError;
use super::kinds::OptionType;
use crate::analytical::black_scholes::to_f64;

/// Intrinsic value at expiry as a function of the terminal spot.
pub trait Payoff<T: Float> {
    /// Strike of the payoff.
    fn strike(&self) -> T;

    /// Option type of the payoff.
    fn option_type(&self) -> OptionType;

    /// Value received at expiry for terminal spot `s_t`.
    fn intrinsic_value(&self, s_t: T) -> T;
}

fn check_strike<T: Float>(strike: T) -> Result<T, InstrumentError> {
    if !strike.is_finite() || strike <= T::zero() {
        return Err(InstrumentError::InvalidStrike {
            strike: to_f64(strike),
        });
    }
    Ok(strike)
}

/// `max(S_T - K, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallPayoff<T: Float> {
    strike: T,
}

impl<T: Float> CallPayoff<T> {
    /// Create a call payoff; the strike must be finite and positive.
    pub fn new(strike: T) -> Result<Self, InstrumentError> {
        Ok(Self {
            strike: check_strike(strike)?,
        })
    }
}

impl<T: Float> Payoff<T> for CallPayoff<T> {
    #[inline]
    fn strike(&self) -> T {
        self.strike
    }

    #[inline]
    fn option_type(&self) -> OptionType {
        OptionType::Call
    }

    #[inline]
    fn intrinsic_value(&self, s_t: T) -> T {
        (s_t - self.strike).max(T::zero())
    }
}

/// `max(K - S_T, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PutPayoff<T: Float> {
    strike: T,
}

impl<T: Float> PutPayoff<T> {
    /// Create a put payoff; the strike must be finite and positive.
    pub fn new(strike: T) -> Result<Self, InstrumentError> {
        Ok(Self {
            strike: check_strike(strike)?,
        })
    }
}

impl<T: Float> Payoff<T> for PutPayoff<T> {
    #[inline]
    fn strike(&self) -> T {
        self.strike
    }

    #[inline]
    fn option_type(&self) -> OptionType {
        OptionType::Put
    }

    #[inline]
    fn intrinsic_value(&self, s_t: T) -> T {
        (self.strike - s_t).max(T::zero())
    }
}

/// Call or put payoff, dispatched statically.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::{OptionType, Payoff, VanillaPayoff};
///
/// let put = VanillaPayoff::new(OptionType::Put, 100.0_f64).unwrap();
/// assert_eq!(put.intrinsic_value(90.0), 10.0);
/// assert_eq!(put.intrinsic_value(110.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VanillaPayoff<T: Float> {
    /// Call payoff
    Call(CallPayoff<T>),
    /// Put payoff
    Put(PutPayoff<T>),
}

impl<T: Float> VanillaPayoff<T> {
    /// Build the payoff for `option_type` at `strike`.
    pub fn new(option_type: OptionType, strike: T) -> Result<Self, InstrumentError> {
        match option_type {
            OptionType::Call => CallPayoff::new(strike).map(VanillaPayoff::Call),
            OptionType::Put => PutPayoff::new(strike).map(VanillaPayoff::Put),
        }
    }
}

impl<T: Float> Payoff<T> for VanillaPayoff<T> {
    #[inline]
    fn strike(&self) -> T {
        match self {
            VanillaPayoff::Call(p) => p.strike(),
            VanillaPayoff::Put(p) => p.strike(),
        }
    }

    #[inline]
    fn option_type(&self) -> OptionType {
        match self {
            VanillaPayoff::Call(_) => OptionType::Call,
            VanillaPayoff::Put(_) => OptionType::Put,
        }
    }

    #[inline]
    fn intrinsic_value(&self, s_t: T) -> T {
        match self {
            VanillaPayoff::Call(p) => p.intrinsic_value(s_t),
            VanillaPayoff::Put(p) => p.intrinsic_value(s_t),
        }
    }
}
