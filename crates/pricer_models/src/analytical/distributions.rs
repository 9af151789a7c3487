//! Standard normal distribution functions.
//!
//! - `norm_cdf`: Φ(x), built on the Abramowitz-Stegun 7.1.26 erfc
//! - `norm_pdf`: φ(x)
//! - `ln_norm_cdf`: ln Φ(x), finite deep into the lower tail
//!
//! The erfc approximation is evaluated on |x| and reflected, with Φ(±0)
//! pinned to 1/2, so `Φ(x) + Φ(-x) = 1` holds up to floating-point rounding.
//! Put-call parity and barrier in/out parity in the engines inherit that
//! exactness.

use num_traits::Float;

const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// A&S 7.1.26 coefficients (a1..a5) and p.
const ERFC_A: [f64; 5] = [
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];
const ERFC_P: f64 = 0.327_591_1;

#[inline]
pub(crate) fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// erfc(a) for a ≥ 0, maximum absolute error 1.5e-7.
#[inline]
fn erfc_upper<T: Float>(a: T) -> T {
    let one = T::one();
    let t = one / (one + constant::<T>(ERFC_P) * a);

    // Horner, innermost coefficient first
    let poly = ERFC_A
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * t + constant(c));
    t * poly * (-a * a).exp()
}

/// Standard normal cumulative distribution function, `Φ(x) = erfc(-x/√2)/2`.
///
/// Absolute error below 1e-7 for every finite `x`; the result always lies
/// in `[0, 1]`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!((norm_cdf(1.0_f64) - 0.841_344_746).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let half = constant::<T>(0.5);
    // Also catches -0.0
    if x == T::zero() {
        return half;
    }
    let tail = half * erfc_upper(x.abs() / constant(SQRT_2));
    if x > T::zero() {
        T::one() - tail
    } else {
        tail
    }
}

/// Below this point `ln_norm_cdf` switches to the asymptotic expansion.
const LN_CDF_ASYMPTOTIC_BELOW: f64 = -5.0;

/// Natural logarithm of Φ(x).
///
/// For x < -5 the erfc approximation loses relative accuracy and then
/// underflows, so the Mills-ratio expansion
/// `ln Φ(x) ≈ -x²/2 - ln(-x) - ln√(2π) + ln(1 - 1/x² + 3/x⁴ - 15/x⁶)` is used
/// instead. The result stays finite until `x²` overflows.
#[inline]
pub fn ln_norm_cdf<T: Float>(x: T) -> T {
    if x < constant(LN_CDF_ASYMPTOTIC_BELOW) {
        let x2 = x * x;
        let inv = x2.recip();
        let series = T::one() - inv + constant::<T>(3.0) * inv * inv
            - constant::<T>(15.0) * inv * inv * inv;
        constant::<T>(-0.5) * x2 - (-x).ln() + constant::<T>(FRAC_1_SQRT_2PI).ln() + series.ln()
    } else {
        norm_cdf(x).ln()
    }
}

/// Standard normal density, `φ(x) = exp(-x²/2) / √(2π)`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.398_942_280_4).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    constant::<T>(FRAC_1_SQRT_2PI) * (constant::<T>(-0.5) * x * x).exp()
}
