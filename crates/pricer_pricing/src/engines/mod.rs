//! Closed-form pricing engines.
//!
//! An engine turns a payoff, an exercise and a market environment into an
//! NPV. Engines take time to maturity and discounting from the
//! [`MarketEnvironment`] only, never from their own date arithmetic.
//!
//! - [`VanillaEngine`]: Black-Scholes European calls and puts
//! - [`BarrierEngine`]: Reiner-Rubinstein single-barrier options

mod barrier;
mod vanilla;

pub use barrier::BarrierEngine;
pub use vanilla::VanillaEngine;

use pricer_core::market_data::MarketEnvironment;
use pricer_core::types::PricingError;
use pricer_models::instruments::{EuropeanExercise, VanillaPayoff};

/// Prices a European payoff in a market environment.
pub trait PricingEngine {
    /// Net present value at the environment's valuation date.
    ///
    /// # Errors
    ///
    /// `InvalidDateOrdering` if the exercise date is not after the valuation
    /// date, `DegenerateMaturity` if the year fraction is not positive, and
    /// `InvalidInput` for out-of-domain model inputs.
    fn npv(
        &self,
        payoff: &VanillaPayoff<f64>,
        exercise: &EuropeanExercise,
        env: &MarketEnvironment,
    ) -> Result<f64, PricingError>;
}
