//! Currency codes for reporting prices.
//!
//! Input records may carry any ISO 4217 code, so `Currency` is a validated
//! three-letter code rather than a closed enum. The majors are exposed as
//! associated constants with their minor-unit metadata.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::currency::Currency;
//!
//! let usd: Currency = "usd".parse().unwrap();
//! assert_eq!(usd, Currency::USD);
//! assert_eq!(usd.code(), "USD");
//! assert_eq!(Currency::JPY.decimal_places(), 0);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 three-letter currency code, stored upper-cased.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency([u8; 3]);

impl Currency {
    /// United States Dollar
    pub const USD: Currency = Currency(*b"USD");
    /// Euro
    pub const EUR: Currency = Currency(*b"EUR");
    /// British Pound Sterling
    pub const GBP: Currency = Currency(*b"GBP");
    /// Japanese Yen
    pub const JPY: Currency = Currency(*b"JPY");
    /// Swiss Franc
    pub const CHF: Currency = Currency(*b"CHF");

    /// Parses a code, upper-casing it.
    ///
    /// Leading and trailing whitespace is ignored; the remainder must be
    /// exactly three ASCII letters.
    pub fn parse(s: &str) -> Result<Self, CurrencyError> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(CurrencyError::InvalidCode(s.to_string()));
        }
        Ok(Currency([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    /// Returns the ISO 4217 three-letter code.
    pub fn code(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }

    /// Returns the standard number of decimal places for this currency.
    ///
    /// Zero-decimal currencies are listed explicitly; every other code
    /// reports 2.
    pub fn decimal_places(&self) -> u8 {
        match &self.0 {
            b"JPY" | b"KRW" | b"CLP" | b"ISK" | b"VND" => 0,
            _ => 2,
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        Currency::parse(s)
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Currency;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Currency {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.code())
        }
    }

    impl<'de> Deserialize<'de> for Currency {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Currency::parse(&s).map_err(de::Error::custom)
        }
    }
}
