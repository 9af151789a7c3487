use pricer_core::market_data::MarketEnvironment;
use pricer_core::types::PricingError;
use pricer_models::analytical::BarrierModel;
use pricer_models::instruments::{BarrierTerms, EuropeanExercise, Payoff, VanillaPayoff};

use super::PricingEngine;

/// Analytic single-barrier engine.
///
/// Wraps the contract's [`BarrierTerms`]; the strike and option type come
/// from the payoff as for vanilla options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarrierEngine {
    terms: BarrierTerms,
}

impl BarrierEngine {
    /// Engine for the given barrier terms.
    pub fn new(terms: BarrierTerms) -> Self {
        Self { terms }
    }

    /// The barrier terms priced by this engine.
    #[inline]
    pub fn terms(&self) -> &BarrierTerms {
        &self.terms
    }
}

impl PricingEngine for BarrierEngine {
    fn npv(
        &self,
        payoff: &VanillaPayoff<f64>,
        exercise: &EuropeanExercise,
        env: &MarketEnvironment,
    ) -> Result<f64, PricingError> {
        let t = env.time_to_maturity(exercise.maturity())?;
        let model = BarrierModel::new(env.spot(), env.rate(), env.volatility())?;
        Ok(model.price(
            payoff.option_type(),
            self.terms.barrier_type(),
            payoff.strike(),
            self.terms.level(),
            self.terms.rebate(),
            t,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::VanillaEngine;
    use approx::assert_relative_eq;
    use pricer_core::types::Date;
    use pricer_models::instruments::{BarrierType, OptionType};

    fn setup() -> (MarketEnvironment, EuropeanExercise) {
        let valuation = Date::from_ymd(2023, 1, 1).unwrap();
        let env = MarketEnvironment::new(valuation, 100.0, 0.05, 0.2).unwrap();
        let exercise = EuropeanExercise::new(Date::from_ymd(2024, 1, 1).unwrap());
        (env, exercise)
    }

    fn engine(barrier_type: BarrierType, level: f64) -> BarrierEngine {
        BarrierEngine::new(BarrierTerms::new(barrier_type, level, 0.0).unwrap())
    }

    #[test]
    fn test_up_in_plus_up_out_is_vanilla() {
        let (env, exercise) = setup();
        let call = VanillaPayoff::new(OptionType::Call, 100.0).unwrap();
        let vanilla = VanillaEngine.npv(&call, &exercise, &env).unwrap();
        let up_in = engine(BarrierType::UpIn, 120.0).npv(&call, &exercise, &env).unwrap();
        let up_out = engine(BarrierType::UpOut, 120.0).npv(&call, &exercise, &env).unwrap();
        assert!(up_out < vanilla);
        assert_relative_eq!(up_in + up_out, vanilla, max_relative = 1e-6);
    }

    #[test]
    fn test_down_in_plus_down_out_is_vanilla() {
        let (env, exercise) = setup();
        let put = VanillaPayoff::new(OptionType::Put, 105.0).unwrap();
        let vanilla = VanillaEngine.npv(&put, &exercise, &env).unwrap();
        let down_in = engine(BarrierType::DownIn, 85.0).npv(&put, &exercise, &env).unwrap();
        let down_out = engine(BarrierType::DownOut, 85.0).npv(&put, &exercise, &env).unwrap();
        assert_relative_eq!(down_in + down_out, vanilla, max_relative = 1e-6);
    }

    #[test]
    fn test_terms_accessor() {
        let e = engine(BarrierType::DownOut, 90.0);
        assert_eq!(e.terms().barrier_type(), BarrierType::DownOut);
        assert_eq!(e.terms().level(), 90.0);
    }
}
