use pricer_core::market_data::MarketEnvironment;
use pricer_core::types::PricingError;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{EuropeanExercise, Payoff, VanillaPayoff};

use super::PricingEngine;

/// Black-Scholes engine for European calls and puts.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketEnvironment;
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{EuropeanExercise, OptionType, VanillaPayoff};
/// use pricer_pricing::engines::{PricingEngine, VanillaEngine};
///
/// let valuation = Date::from_ymd(2023, 1, 1).unwrap();
/// let env = MarketEnvironment::new(valuation, 100.0, 0.05, 0.2).unwrap();
/// let payoff = VanillaPayoff::new(OptionType::Call, 100.0).unwrap();
/// let exercise = EuropeanExercise::new(Date::from_ymd(2024, 1, 1).unwrap());
///
/// let npv = VanillaEngine.npv(&payoff, &exercise, &env).unwrap();
/// assert!((npv - 10.4506).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VanillaEngine;

impl PricingEngine for VanillaEngine {
    fn npv(
        &self,
        payoff: &VanillaPayoff<f64>,
        exercise: &EuropeanExercise,
        env: &MarketEnvironment,
    ) -> Result<f64, PricingError> {
        let t = env.time_to_maturity(exercise.maturity())?;
        let model = BlackScholes::new(env.spot(), env.rate(), env.volatility())?;
        Ok(model.price(payoff.option_type(), payoff.strike(), t)?)
    }
}
