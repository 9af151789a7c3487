//! Pricer facade.
//!
//! [`Pricer`] selects the engine for an [`OptionSpec`] by subtype, builds
//! the payoff and market environment, and returns the NPV. Its
//! [`PricingState`] moves once from `Constructed` to either `Priced` or
//! `Failed`; both are terminal.

use pricer_core::market_data::MarketEnvironment;
use pricer_core::types::{Date, PricingError};
use pricer_models::instruments::{EuropeanExercise, OptionSpec, ProductTerms, VanillaPayoff};

use crate::engines::{BarrierEngine, PricingEngine, VanillaEngine};

/// Lifecycle of a single pricing request.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingState {
    /// Not yet priced
    Constructed,
    /// Priced successfully; holds the NPV
    Priced(f64),
    /// Pricing failed
    Failed(PricingError),
}

impl PricingState {
    /// True for `Priced` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PricingState::Constructed)
    }
}

/// Prices one option specification as of a fixed valuation date.
///
/// # Examples
///
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{OptionRecord, OptionSpec};
/// use pricer_pricing::{Pricer, PricingState};
///
/// let record = OptionRecord {
///     option_name: Some("ATM Put".to_string()),
///     spot: Some(100.0),
///     strike: Some(100.0),
///     volatility: Some(0.2),
///     rate: Some(0.05),
///     option_type: Some("put".to_string()),
///     subtype: Some("vanilla".to_string()),
///     maturity_date: Some("2024-01-01".to_string()),
///     currency: Some("EUR".to_string()),
///     ..Default::default()
/// };
/// let valuation = Date::from_ymd(2023, 1, 1).unwrap();
/// let spec = OptionSpec::from_record(&record, valuation).unwrap();
///
/// let mut pricer = Pricer::new(spec, valuation);
/// match pricer.run() {
///     PricingState::Priced(npv) => assert!((npv - 5.5735).abs() < 1e-4),
///     other => panic!("unexpected state {:?}", other),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Pricer {
    spec: OptionSpec,
    valuation_date: Date,
    state: PricingState,
}

impl Pricer {
    /// A pricer in the `Constructed` state.
    pub fn new(spec: OptionSpec, valuation_date: Date) -> Self {
        Self {
            spec,
            valuation_date,
            state: PricingState::Constructed,
        }
    }

    /// The specification being priced.
    pub fn spec(&self) -> &OptionSpec {
        &self.spec
    }

    /// Valuation date of the run.
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Current state.
    pub fn state(&self) -> &PricingState {
        &self.state
    }

    /// Compute the NPV without touching the state.
    ///
    /// # Errors
    ///
    /// `UnsupportedSubtype("lookback")` for lookback options; otherwise
    /// whatever payoff, environment or engine construction reports.
    pub fn price(&self) -> Result<f64, PricingError> {
        price(&self.spec, self.valuation_date)
    }

    /// Leave `Constructed` for a terminal state. Calling again on a
    /// terminal state returns it unchanged.
    pub fn run(&mut self) -> &PricingState {
        if !self.state.is_terminal() {
            self.state = match self.price() {
                Ok(npv) => PricingState::Priced(npv),
                Err(err) => PricingState::Failed(err),
            };
        }
        &self.state
    }
}

/// Engine chosen for a subtype.
#[derive(Debug, Clone, Copy)]
enum SelectedEngine {
    Vanilla(VanillaEngine),
    Barrier(BarrierEngine),
}

impl SelectedEngine {
    fn for_spec(spec: &OptionSpec) -> Result<Self, PricingError> {
        match spec.terms() {
            ProductTerms::Vanilla => Ok(SelectedEngine::Vanilla(VanillaEngine)),
            ProductTerms::Barrier(terms) => Ok(SelectedEngine::Barrier(BarrierEngine::new(*terms))),
            ProductTerms::Lookback(_) => Err(PricingError::UnsupportedSubtype(
                spec.subtype().as_str().to_string(),
            )),
        }
    }
}

impl PricingEngine for SelectedEngine {
    fn npv(
        &self,
        payoff: &VanillaPayoff<f64>,
        exercise: &EuropeanExercise,
        env: &MarketEnvironment,
    ) -> Result<f64, PricingError> {
        match self {
            SelectedEngine::Vanilla(engine) => engine.npv(payoff, exercise, env),
            SelectedEngine::Barrier(engine) => engine.npv(payoff, exercise, env),
        }
    }
}

/// Price `spec` as of `valuation_date`.
///
/// Dispatches on subtype first, so a lookback fails before any payoff or
/// environment is built.
pub fn price(spec: &OptionSpec, valuation_date: Date) -> Result<f64, PricingError> {
    let engine = SelectedEngine::for_spec(spec)?;
    let payoff = spec.payoff()?;
    let env = spec.market_environment(valuation_date)?;
    engine.npv(&payoff, &spec.exercise(), &env)
}
