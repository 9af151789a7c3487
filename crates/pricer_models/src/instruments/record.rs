//! Raw option records as they arrive from input files.
//!
//! Every field is optional so that a malformed record still deserialises and
//! can be reported by name. [`OptionSpec::from_record`](super::OptionSpec::from_record)
//! turns a record into a validated specification.

/// One unvalidated input record.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::OptionRecord;
///
/// let record: OptionRecord = serde_json::from_str(
///     r#"{"option_name": "SPX 4500C", "spot": 4400.0, "strike": 4500.0}"#,
/// ).unwrap();
/// assert_eq!(record.option_name.as_deref(), Some("SPX 4500C"));
/// assert!(record.maturity_date.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptionRecord {
    /// Display name of the option
    pub option_name: Option<String>,
    /// Spot price of the underlying
    pub spot: Option<f64>,
    /// Strike price
    pub strike: Option<f64>,
    /// Annualised volatility
    pub volatility: Option<f64>,
    /// Continuously-compounded risk-free rate
    pub rate: Option<f64>,
    /// "call" or "put"
    pub option_type: Option<String>,
    /// "vanilla", "barrier" or "lookback"
    pub subtype: Option<String>,
    /// Maturity as `YYYY-MM-DD`
    pub maturity_date: Option<String>,
    /// ISO-4217 currency code
    pub currency: Option<String>,
    /// Barrier variant, barrier options only
    pub barrier_type: Option<String>,
    /// Barrier level, barrier options only
    pub barrier_level: Option<f64>,
    /// Barrier rebate, defaults to zero
    pub rebate: Option<f64>,
    /// "long" or "short", lookback options only
    pub lookback_type: Option<String>,
}

impl OptionRecord {
    /// The record's name, or `"Unknown"` when absent.
    pub fn display_name(&self) -> &str {
        self.option_name.as_deref().unwrap_or("Unknown")
    }
}
