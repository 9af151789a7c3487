//! Parallel batch pricing.
//!
//! Specifications share nothing but the valuation date, which is fixed
//! before the batch starts, so each one is priced independently on the
//! rayon pool. Failures are returned in place and never stop the batch.

use pricer_core::types::{Date, PricingError};
use pricer_models::instruments::OptionSpec;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::pricer::price;
use crate::result::PricingResult;

/// Outcome for one specification in a batch.
pub type BatchOutcome = Result<PricingResult, PricingError>;

fn price_one(spec: &OptionSpec, valuation_date: Date) -> BatchOutcome {
    match price(spec, valuation_date) {
        Ok(npv) => {
            debug!(option = spec.name(), npv, "Priced option");
            Ok(PricingResult::new(spec, valuation_date, npv))
        }
        Err(err) => {
            warn!(option = spec.name(), error = %err, "Pricing failed");
            Err(err)
        }
    }
}

/// Price every specification in parallel, preserving input order.
///
/// # Examples
///
/// ```
/// use pricer_core::types::Date;
/// use pricer_pricing::price_batch;
///
/// let results = price_batch(&[], Date::from_ymd(2024, 1, 1).unwrap());
/// assert!(results.is_empty());
/// ```
pub fn price_batch(specs: &[OptionSpec], valuation_date: Date) -> Vec<BatchOutcome> {
    specs
        .par_iter()
        .map(|spec| price_one(spec, valuation_date))
        .collect()
}

/// Sequential counterpart of [`price_batch`].
pub fn price_batch_sequential(specs: &[OptionSpec], valuation_date: Date) -> Vec<BatchOutcome> {
    specs
        .iter()
        .map(|spec| price_one(spec, valuation_date))
        .collect()
}
