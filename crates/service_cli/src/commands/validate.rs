//! Validate command implementation
//!
//! Builds every option specification without pricing it.

use tracing::info;

use crate::config::PricerConfig;
use crate::{ingest, Result};

/// Run the validate command. Returns the number of rejected records.
pub fn run(config: &PricerConfig) -> Result<usize> {
    let valuation_date = config.resolve_valuation_date()?;
    info!(input = %config.input.display(), valuation_date = %valuation_date, "Validating records");

    let ingested = ingest::load(&config.input, valuation_date)?;
    for spec in &ingested.specs {
        println!(
            "OK      {} ({} {}, matures {})",
            spec.name(),
            spec.subtype(),
            spec.option_type(),
            spec.maturity_date()
        );
    }
    for rejected in &ingested.rejected {
        println!(
            "INVALID {} [record {}]: {}",
            rejected.name, rejected.index, rejected.error
        );
    }
    println!(
        "{} of {} records valid",
        ingested.specs.len(),
        ingested.total()
    );
    Ok(ingested.rejected.len())
}
