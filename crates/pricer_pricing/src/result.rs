//! Per-instrument pricing output.

use pricer_core::types::{Currency, Date};
use pricer_models::instruments::{OptionSpec, OptionType, Subtype};

/// One priced instrument, as handed to persistence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Display name of the option
    pub option_name: String,
    /// Call or put
    pub option_type: OptionType,
    /// Product subtype
    pub subtype: Subtype,
    /// Maturity date
    pub maturity_date: Date,
    /// Valuation date the price refers to
    pub valuation_date: Date,
    /// Net present value in `currency`
    pub price: f64,
    /// Settlement currency
    pub currency: Currency,
}

impl PricingResult {
    /// Result row for `spec` priced at `price` as of `valuation_date`.
    pub fn new(spec: &OptionSpec, valuation_date: Date, price: f64) -> Self {
        Self {
            option_name: spec.name().to_string(),
            option_type: spec.option_type(),
            subtype: spec.subtype(),
            maturity_date: spec.maturity_date(),
            valuation_date,
            price,
            currency: spec.currency(),
        }
    }
}
