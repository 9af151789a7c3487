//! JSON ingestion of option records.
//!
//! The input is a JSON array of objects. An unreadable file or a document
//! that is not an array fails the whole run; anything wrong with a single
//! record only rejects that record.

use std::path::Path;

use pricer_core::types::{Date, PricingError};
use pricer_models::instruments::{OptionRecord, OptionSpec};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{CliError, Result};

/// A record that could not become an [`OptionSpec`].
#[derive(Debug, Clone, PartialEq)]
pub struct Rejected {
    /// Position in the input array
    pub index: usize,
    /// `option_name`, or "Unknown"
    pub name: String,
    pub error: PricingError,
}

/// Outcome of validating one input file.
#[derive(Debug, Default)]
pub struct Ingested {
    /// Valid specifications in input order
    pub specs: Vec<OptionSpec>,
    pub rejected: Vec<Rejected>,
}

impl Ingested {
    /// Number of records read.
    pub fn total(&self) -> usize {
        self.specs.len() + self.rejected.len()
    }
}

fn record_name(value: &Value) -> String {
    value
        .get("option_name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown")
        .to_string()
}

/// Validate every record of a JSON document as of `valuation_date`.
pub fn parse_records(json: &str, valuation_date: Date) -> Result<Ingested> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    let mut ingested = Ingested::default();

    for (index, value) in values.into_iter().enumerate() {
        let name = record_name(&value);
        let spec = serde_json::from_value::<OptionRecord>(value)
            .map_err(|e| PricingError::InvalidInput(e.to_string()))
            .and_then(|record| OptionSpec::from_record(&record, valuation_date));

        match spec {
            Ok(spec) => {
                debug!(index, option = spec.name(), "Validated record");
                ingested.specs.push(spec);
            }
            Err(error) => {
                warn!(index, option = %name, error = %error, "Rejected record");
                ingested.rejected.push(Rejected { index, name, error });
            }
        }
    }

    Ok(ingested)
}

/// Read and validate the records in `path`.
pub fn load(path: &Path, valuation_date: Date) -> Result<Ingested> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let json = std::fs::read_to_string(path)?;
    parse_records(&json, valuation_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valuation() -> Date {
        Date::from_ymd(2024, 1, 2).unwrap()
    }

    const BOOK: &str = r#"[
        {
            "option_name": "SPX Call",
            "spot": 4700.0, "strike": 4800.0, "volatility": 0.18, "rate": 0.045,
            "option_type": "Call", "subtype": "Vanilla",
            "maturity_date": "2024-12-20", "currency": "usd"
        },
        {
            "option_name": "Broken Barrier",
            "spot": 100.0, "strike": 100.0, "volatility": 0.2, "rate": 0.05,
            "option_type": "put", "subtype": "barrier", "barrier_type": "down-and-in",
            "maturity_date": "2024-12-20", "currency": "EUR"
        },
        {
            "spot": "not a number"
        },
        {
            "option_name": "DAX Put UO",
            "spot": 16000.0, "strike": 15500.0, "volatility": 0.22, "rate": 0.03,
            "option_type": "PUT", "subtype": "barrier", "barrier_type": "Up_Out",
            "barrier_level": 17500.0, "rebate": 25.0,
            "maturity_date": "2024-09-20", "currency": "eur"
        }
    ]"#;

    #[test]
    fn test_parse_records_isolates_failures() {
        let ingested = parse_records(BOOK, valuation()).unwrap();
        assert_eq!(ingested.total(), 4);

        let names: Vec<&str> = ingested.specs.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["SPX Call", "DAX Put UO"]);
        assert_eq!(ingested.specs[1].currency().code(), "EUR");

        assert_eq!(ingested.rejected.len(), 2);
        assert_eq!(ingested.rejected[0].index, 1);
        assert_eq!(ingested.rejected[0].name, "Broken Barrier");
        assert_eq!(
            ingested.rejected[0].error,
            PricingError::missing("barrier_level")
        );
        assert_eq!(ingested.rejected[1].name, "Unknown");
        assert_eq!(ingested.rejected[1].error.kind(), "InvalidInput");
    }

    #[test]
    fn test_non_array_document_fails_run() {
        let result = parse_records(r#"{"option_name": "solo"}"#, valuation());
        assert!(matches!(result, Err(CliError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("/nonexistent/market_data.json"), valuation());
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        std::fs::write(&path, BOOK).unwrap();
        let ingested = load(&path, valuation()).unwrap();
        assert_eq!(ingested.specs.len(), 2);
    }
}
