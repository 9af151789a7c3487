//! CSV persistence of pricing results.
//!
//! Results are appended to one table per maturity date,
//! `<reports_dir>/prices_<YYYY-MM-DD>.csv`. The header row is written only
//! when the table is created or found empty.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use pricer_core::types::Date;
use pricer_pricing::PricingResult;
use tracing::debug;

use crate::Result;

/// Column names of every report table.
pub const HEADER: [&str; 7] = [
    "Option Name",
    "Option Type",
    "Subtype",
    "Maturity Date",
    "Pricing Date",
    "Price",
    "Currency",
];

/// Table path for `maturity` under `dir`.
pub fn report_path(dir: &Path, maturity: Date) -> PathBuf {
    dir.join(format!("prices_{}.csv", maturity))
}

fn row(result: &PricingResult) -> [String; 7] {
    [
        result.option_name.clone(),
        result.option_type.as_str().to_string(),
        result.subtype.as_str().to_string(),
        result.maturity_date.to_string(),
        result.valuation_date.to_string(),
        result.price.to_string(),
        result.currency.code().to_string(),
    ]
}

/// Append rows to the table at `path`, writing the header if it is new.
pub fn append_to_table(path: &Path, results: &[&PricingResult]) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let write_header = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    if write_header {
        writer.write_record(HEADER)?;
    }
    for result in results {
        writer.write_record(row(result))?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = results.len(), write_header, "Appended rows");
    Ok(())
}

/// Append every result to its maturity's table. Returns the tables touched.
pub fn append_results(dir: &Path, results: &[PricingResult]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut by_maturity: BTreeMap<Date, Vec<&PricingResult>> = BTreeMap::new();
    for result in results {
        by_maturity
            .entry(result.maturity_date)
            .or_default()
            .push(result);
    }

    let mut paths = Vec::with_capacity(by_maturity.len());
    for (maturity, rows) in by_maturity {
        let path = report_path(dir, maturity);
        append_to_table(&path, &rows)?;
        paths.push(path);
    }
    Ok(paths)
}
