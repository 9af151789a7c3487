//! Validated option specifications.

use pricer_core::market_data::MarketEnvironment;
use pricer_core::types::{Currency, Date, PricingError};

use super::error::InstrumentError;
use super::exercise::EuropeanExercise;
use super::kinds::{BarrierType, LookbackType, OptionType, Subtype};
use super::payoff::VanillaPayoff;
use super::record::OptionRecord;
use super::terms::{BarrierTerms, ProductTerms};

fn required<T: Clone>(value: &Option<T>, field: &str) -> Result<T, PricingError> {
    value.clone().ok_or_else(|| PricingError::missing(field))
}

fn finite(value: f64, field: &str) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InstrumentError::InvalidParameter {
            message: format!("{} must be finite, got {}", field, value),
        }
        .into())
    }
}

/// An immutable, validated European option.
///
/// Built once from an [`OptionRecord`] and a valuation date; every field is
/// checked at construction, so holding an `OptionSpec` means the contract is
/// well-formed and matures after the valuation date it was built against.
///
/// # Examples
///
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{OptionRecord, OptionSpec, Subtype};
///
/// let record = OptionRecord {
///     option_name: Some("ATM Call".to_string()),
///     spot: Some(100.0),
///     strike: Some(100.0),
///     volatility: Some(0.2),
///     rate: Some(0.05),
///     option_type: Some("Call".to_string()),
///     subtype: Some("vanilla".to_string()),
///     maturity_date: Some("2025-01-01".to_string()),
///     currency: Some("usd".to_string()),
///     ..Default::default()
/// };
/// let valuation = Date::from_ymd(2024, 1, 1).unwrap();
/// let spec = OptionSpec::from_record(&record, valuation).unwrap();
/// assert_eq!(spec.subtype(), Subtype::Vanilla);
/// assert_eq!(spec.currency().code(), "USD");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionSpec {
    name: String,
    currency: Currency,
    option_type: OptionType,
    strike: f64,
    maturity_date: Date,
    spot: f64,
    volatility: f64,
    rate: f64,
    terms: ProductTerms,
}

impl OptionSpec {
    /// Validate a raw record against `valuation_date`.
    ///
    /// Required fields are checked in record order, then the fields the
    /// subtype needs. The first problem found is returned.
    ///
    /// # Errors
    /// - `MissingField` for any absent required field
    /// - `Unsupported*` for unknown option, subtype, barrier or lookback types
    /// - `InvalidDateFormat` if the maturity does not parse
    /// - `InvalidInput` for out-of-domain numbers or a malformed currency
    /// - `InvalidDateOrdering` unless maturity is after `valuation_date`
    pub fn from_record(record: &OptionRecord, valuation_date: Date) -> Result<Self, PricingError> {
        let name = required(&record.option_name, "option_name")?;
        let spot = finite(required(&record.spot, "spot")?, "spot")?;
        let strike = finite(required(&record.strike, "strike")?, "strike")?;
        let volatility = finite(required(&record.volatility, "volatility")?, "volatility")?;
        let rate = finite(required(&record.rate, "rate")?, "rate")?;
        let option_type: OptionType = required(&record.option_type, "option_type")?.parse()?;
        let subtype: Subtype = required(&record.subtype, "subtype")?.parse()?;
        let maturity_date = Date::parse(&required(&record.maturity_date, "maturity_date")?)?;
        let currency = Currency::parse(&required(&record.currency, "currency")?)?;

        let terms = match subtype {
            Subtype::Vanilla => ProductTerms::Vanilla,
            Subtype::Barrier => {
                let barrier_type: BarrierType =
                    required(&record.barrier_type, "barrier_type")?.parse()?;
                let level = required(&record.barrier_level, "barrier_level")?;
                let rebate = record.rebate.unwrap_or(0.0);
                ProductTerms::Barrier(BarrierTerms::new(barrier_type, level, rebate)?)
            }
            Subtype::Lookback => {
                let lookback_type: LookbackType =
                    required(&record.lookback_type, "lookback_type")?.parse()?;
                ProductTerms::Lookback(lookback_type)
            }
        };

        if strike <= 0.0 {
            return Err(InstrumentError::InvalidStrike { strike }.into());
        }
        if spot <= 0.0 {
            return Err(InstrumentError::InvalidParameter {
                message: format!("spot must be positive, got {}", spot),
            }
            .into());
        }
        if volatility < 0.0 {
            return Err(InstrumentError::InvalidParameter {
                message: format!("volatility must be non-negative, got {}", volatility),
            }
            .into());
        }
        if maturity_date <= valuation_date {
            return Err(PricingError::InvalidDateOrdering {
                valuation: valuation_date,
                maturity: maturity_date,
            });
        }

        Ok(Self {
            name,
            currency,
            option_type,
            strike,
            maturity_date,
            spot,
            volatility,
            rate,
            terms,
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Settlement currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Product subtype.
    #[inline]
    pub fn subtype(&self) -> Subtype {
        self.terms.subtype()
    }

    /// Strike K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Maturity date.
    #[inline]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Spot price of the underlying.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Flat volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Continuously-compounded rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Subtype-specific terms.
    #[inline]
    pub fn terms(&self) -> &ProductTerms {
        &self.terms
    }

    /// Terminal payoff of the contract.
    pub fn payoff(&self) -> Result<VanillaPayoff<f64>, PricingError> {
        Ok(VanillaPayoff::new(self.option_type, self.strike)?)
    }

    /// European exercise at the maturity date.
    #[inline]
    pub fn exercise(&self) -> EuropeanExercise {
        EuropeanExercise::new(self.maturity_date)
    }

    /// Flat market environment for this option at `valuation_date`.
    pub fn market_environment(&self, valuation_date: Date) -> Result<MarketEnvironment, PricingError> {
        Ok(MarketEnvironment::new(
            valuation_date,
            self.spot,
            self.rate,
            self.volatility,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valuation() -> Date {
        Date::from_ymd(2024, 1, 1).unwrap()
    }

    fn vanilla_record() -> OptionRecord {
        OptionRecord {
            option_name: Some("Test Call".to_string()),
            spot: Some(100.0),
            strike: Some(100.0),
            volatility: Some(0.2),
            rate: Some(0.05),
            option_type: Some("call".to_string()),
            subtype: Some("vanilla".to_string()),
            maturity_date: Some("2025-01-01".to_string()),
            currency: Some("usd".to_string()),
            ..Default::default()
        }
    }

    fn barrier_record() -> OptionRecord {
        OptionRecord {
            subtype: Some("Barrier".to_string()),
            barrier_type: Some("Up-And-Out".to_string()),
            barrier_level: Some(120.0),
            ..vanilla_record()
        }
    }

    #[test]
    fn test_vanilla_from_record() {
        let spec = OptionSpec::from_record(&vanilla_record(), valuation()).unwrap();
        assert_eq!(spec.name(), "Test Call");
        assert_eq!(spec.option_type(), OptionType::Call);
        assert_eq!(spec.subtype(), Subtype::Vanilla);
        assert_eq!(spec.strike(), 100.0);
        assert_eq!(spec.spot(), 100.0);
        assert_eq!(spec.volatility(), 0.2);
        assert_eq!(spec.rate(), 0.05);
        assert_eq!(spec.currency(), Currency::USD);
        assert_eq!(spec.maturity_date(), Date::from_ymd(2025, 1, 1).unwrap());
        assert_eq!(spec.exercise().maturity(), spec.maturity_date());
    }

    #[test]
    fn test_barrier_from_record_defaults_rebate() {
        let spec = OptionSpec::from_record(&barrier_record(), valuation()).unwrap();
        match spec.terms() {
            ProductTerms::Barrier(terms) => {
                assert_eq!(terms.barrier_type(), BarrierType::UpOut);
                assert_eq!(terms.level(), 120.0);
                assert_eq!(terms.rebate(), 0.0);
            }
            other => panic!("Expected barrier terms, got {:?}", other),
        }
    }

    #[test]
    fn test_lookback_from_record() {
        let record = OptionRecord {
            subtype: Some("lookback".to_string()),
            lookback_type: Some("Long".to_string()),
            ..vanilla_record()
        };
        let spec = OptionSpec::from_record(&record, valuation()).unwrap();
        assert_eq!(spec.terms(), &ProductTerms::Lookback(LookbackType::Long));
    }

    #[test]
    fn test_missing_required_fields() {
        let cases: [(&str, fn(&mut OptionRecord)); 4] = [
            ("option_name", |r| r.option_name = None),
            ("spot", |r| r.spot = None),
            ("maturity_date", |r| r.maturity_date = None),
            ("currency", |r| r.currency = None),
        ];
        for (field, clear) in cases {
            let mut record = vanilla_record();
            clear(&mut record);
            assert_eq!(
                OptionSpec::from_record(&record, valuation()),
                Err(PricingError::missing(field))
            );
        }
    }

    #[test]
    fn test_missing_barrier_level() {
        let record = OptionRecord {
            barrier_level: None,
            ..barrier_record()
        };
        assert_eq!(
            OptionSpec::from_record(&record, valuation()),
            Err(PricingError::missing("barrier_level"))
        );
    }

    #[test]
    fn test_missing_lookback_type() {
        let record = OptionRecord {
            subtype: Some("lookback".to_string()),
            ..vanilla_record()
        };
        assert_eq!(
            OptionSpec::from_record(&record, valuation()),
            Err(PricingError::missing("lookback_type"))
        );
    }

    #[test]
    fn test_unsupported_strings() {
        let record = OptionRecord {
            option_type: Some("straddle".to_string()),
            ..vanilla_record()
        };
        assert_eq!(
            OptionSpec::from_record(&record, valuation()),
            Err(PricingError::UnsupportedOptionType("straddle".to_string()))
        );

        let record = OptionRecord {
            barrier_type: Some("knock-sideways".to_string()),
            ..barrier_record()
        };
        assert_eq!(
            OptionSpec::from_record(&record, valuation()),
            Err(PricingError::UnsupportedBarrierType("knock-sideways".to_string()))
        );
    }

    #[test]
    fn test_maturity_on_valuation_date() {
        let record = OptionRecord {
            maturity_date: Some("2024-01-01".to_string()),
            ..vanilla_record()
        };
        assert_eq!(
            OptionSpec::from_record(&record, valuation()),
            Err(PricingError::InvalidDateOrdering {
                valuation: valuation(),
                maturity: valuation(),
            })
        );
    }

    #[test]
    fn test_malformed_maturity() {
        let record = OptionRecord {
            maturity_date: Some("01/01/2025".to_string()),
            ..vanilla_record()
        };
        let err = OptionSpec::from_record(&record, valuation()).unwrap_err();
        assert_eq!(err.kind(), "InvalidDateFormat");
    }

    #[test]
    fn test_out_of_domain_numbers() {
        let mutations: [fn(&mut OptionRecord); 6] = [
            |r| r.strike = Some(0.0),
            |r| r.spot = Some(-1.0),
            |r| r.volatility = Some(-0.1),
            |r| r.rate = Some(f64::NAN),
            |r| r.currency = Some("US".to_string()),
            |r| r.strike = Some(f64::INFINITY),
        ];
        for mutate in mutations {
            let mut record = vanilla_record();
            mutate(&mut record);
            let err = OptionSpec::from_record(&record, valuation()).unwrap_err();
            assert_eq!(err.kind(), "InvalidInput", "{:?}", record);
        }
    }

    #[test]
    fn test_zero_volatility_accepted() {
        let record = OptionRecord {
            volatility: Some(0.0),
            ..vanilla_record()
        };
        assert!(OptionSpec::from_record(&record, valuation()).is_ok());
    }

    #[test]
    fn test_invalid_barrier_level() {
        let record = OptionRecord {
            barrier_level: Some(-5.0),
            ..barrier_record()
        };
        let err = OptionSpec::from_record(&record, valuation()).unwrap_err();
        assert_eq!(err.kind(), "InvalidInput");
    }

    #[test]
    fn test_market_environment() {
        let spec = OptionSpec::from_record(&vanilla_record(), valuation()).unwrap();
        let env = spec.market_environment(valuation()).unwrap();
        assert_eq!(env.spot(), 100.0);
        assert_eq!(env.rate(), 0.05);
        assert_eq!(env.volatility(), 0.2);
        assert_eq!(env.valuation_date(), valuation());
    }

    #[test]
    fn test_payoff() {
        let spec = OptionSpec::from_record(&vanilla_record(), valuation()).unwrap();
        let payoff = spec.payoff().unwrap();
        assert_eq!(payoff, VanillaPayoff::new(OptionType::Call, 100.0).unwrap());
    }
}
