//! Price command implementation
//!
//! Validates the input records, prices the valid ones as one batch and
//! appends the results to the per-maturity report tables.

use pricer_pricing::{price_batch, price_batch_sequential, PricingResult};
use tracing::{info, warn};

use crate::config::PricerConfig;
use crate::{ingest, report, Result};

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub read: usize,
    pub rejected: usize,
    pub priced: usize,
    pub failed: usize,
}

/// Run the price command
pub fn run(config: &PricerConfig, write_reports: bool) -> Result<Summary> {
    let valuation_date = config.resolve_valuation_date()?;
    info!(
        input = %config.input.display(),
        valuation_date = %valuation_date,
        parallel = config.parallel,
        "Starting pricing"
    );

    let ingested = ingest::load(&config.input, valuation_date)?;
    for rejected in &ingested.rejected {
        println!("Skipping {}: {}", rejected.name, rejected.error);
    }

    let outcomes = if config.parallel {
        price_batch(&ingested.specs, valuation_date)
    } else {
        price_batch_sequential(&ingested.specs, valuation_date)
    };

    let mut priced: Vec<PricingResult> = Vec::with_capacity(outcomes.len());
    let mut failed = 0;
    for (spec, outcome) in ingested.specs.iter().zip(outcomes) {
        match outcome {
            Ok(result) => {
                println!(
                    "{}: {:.4} {}",
                    result.option_name, result.price, result.currency
                );
                priced.push(result);
            }
            Err(err) => {
                println!("Failed to price {}: {}", spec.name(), err);
                failed += 1;
            }
        }
    }

    if write_reports && !priced.is_empty() {
        let tables = report::append_results(&config.reports_dir, &priced)?;
        for table in &tables {
            info!(table = %table.display(), "Report updated");
        }
    } else if !write_reports {
        warn!("Report writing disabled");
    }

    let summary = Summary {
        read: ingested.total(),
        rejected: ingested.rejected.len(),
        priced: priced.len(),
        failed,
    };
    println!(
        "Priced {} of {} records ({} rejected, {} failed)",
        summary.priced, summary.read, summary.rejected, summary.failed
    );
    info!("Pricing complete");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::report_path;
    use pricer_core::types::Date;

    const BOOK: &str = r#"[
        {
            "option_name": "ATM Call",
            "spot": 100.0, "strike": 100.0, "volatility": 0.2, "rate": 0.05,
            "option_type": "call", "subtype": "vanilla",
            "maturity_date": "2025-01-01", "currency": "USD"
        },
        {
            "option_name": "Lookback",
            "spot": 100.0, "strike": 100.0, "volatility": 0.2, "rate": 0.05,
            "option_type": "call", "subtype": "lookback", "lookback_type": "long",
            "maturity_date": "2025-01-01", "currency": "USD"
        },
        {
            "option_name": "Expired",
            "spot": 100.0, "strike": 100.0, "volatility": 0.2, "rate": 0.05,
            "option_type": "call", "subtype": "vanilla",
            "maturity_date": "2023-06-30", "currency": "USD"
        },
        {
            "option_name": "UO Call",
            "spot": 100.0, "strike": 100.0, "volatility": 0.2, "rate": 0.05,
            "option_type": "call", "subtype": "barrier",
            "barrier_type": "up-and-out", "barrier_level": 120.0,
            "maturity_date": "2025-01-01", "currency": "USD"
        }
    ]"#;

    fn config(dir: &std::path::Path, parallel: bool) -> PricerConfig {
        let input = dir.join("book.json");
        std::fs::write(&input, BOOK).unwrap();
        PricerConfig {
            input,
            reports_dir: dir.join("reports"),
            valuation_date: Some("2024-01-01".to_string()),
            parallel,
            ..Default::default()
        }
    }

    #[test]
    fn test_run_prices_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), true);

        let summary = run(&config, true).unwrap();
        assert_eq!(
            summary,
            Summary {
                read: 4,
                rejected: 1,
                priced: 2,
                failed: 1,
            }
        );

        let table = report_path(&config.reports_dir, Date::from_ymd(2025, 1, 1).unwrap());
        let content = std::fs::read_to_string(table).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("ATM Call,call,vanilla,2025-01-01,2024-01-01,"));
        assert!(lines[2].starts_with("UO Call,call,barrier,"));
    }

    #[test]
    fn test_run_without_reports() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), false);

        let summary = run(&config, false).unwrap();
        assert_eq!(summary.priced, 2);
        assert!(!config.reports_dir.exists());
    }

    #[test]
    fn test_missing_input_is_run_level_failure() {
        let config = PricerConfig {
            input: "/nonexistent/book.json".into(),
            valuation_date: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        assert!(run(&config, false).is_err());
    }
}
