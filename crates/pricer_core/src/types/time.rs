//! Time types and day count conventions for financial calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DayCountConvention`: Year fraction conventions
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{Date, DayCountConvention};
//!
//! let start = Date::from_ymd(2023, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 1, 1).unwrap();
//!
//! let yf = DayCountConvention::Actual365Fixed.year_fraction_dates(start, end);
//! assert!((yf - 1.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// ISO 8601 input format accepted for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// `Copy` so a valuation date fixed at the start of a run can be passed by
/// value into every pricing call without sharing.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// Surrounding whitespace is ignored; anything else that chrono rejects
    /// (including `2024-02-30`) is a `DateError::ParseError`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::parse("2024-06-15").is_ok());
    /// assert!(Date::parse("15/06/2024").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Date)
            .map_err(|_| DateError::ParseError {
                input: s.to_string(),
            })
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

/// Day Count Convention (year fraction convention).
///
/// Pricing uses Actual/365 Fixed throughout.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    #[default]
    Actual365Fixed,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// ```
    /// use pricer_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Actual365Fixed.name(), "ACT/365F");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Actual365Fixed => "ACT/365F",
        }
    }

    fn denominator(&self) -> f64 {
        match self {
            DayCountConvention::Actual365Fixed => 365.0,
        }
    }

    /// Calculates the year fraction between two dates.
    ///
    /// Returns a negative value when `start > end`; callers that require
    /// forward ordering check it themselves.
    pub fn year_fraction_dates(&self, start: Date, end: Date) -> f64 {
        (end - start) as f64 / self.denominator()
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_ymd_valid_and_invalid() {
        let date = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 29));

        let err = Date::from_ymd(2023, 2, 29).unwrap_err();
        assert_eq!(
            err,
            DateError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn test_parse_iso_and_reject_others() {
        assert_eq!(
            Date::parse("2025-03-31").unwrap(),
            Date::from_ymd(2025, 3, 31).unwrap()
        );
        assert_eq!(
            Date::parse(" 2025-03-31 ").unwrap(),
            Date::from_ymd(2025, 3, 31).unwrap()
        );

        for bad in ["31/03/2025", "2025-13-01", "2025-02-30", "", "tomorrow"] {
            match Date::parse(bad) {
                Err(DateError::ParseError { input }) => assert_eq!(input, bad),
                other => panic!("expected ParseError for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_display_round_trip() {
        let date = Date::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(date.to_string(), "2024-01-05");
        assert_eq!(date.to_string().parse::<Date>().unwrap(), date);
    }

    #[test]
    fn test_date_ordering_and_subtraction() {
        let a = Date::from_ymd(2024, 1, 1).unwrap();
        let b = Date::from_ymd(2024, 3, 1).unwrap();
        assert!(a < b);
        assert_eq!(b - a, 60);
        assert_eq!(a - b, -60);
    }

    #[test]
    fn test_act365f_ignores_leap_years() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();
        assert_relative_eq!(
            DayCountConvention::Actual365Fixed.year_fraction_dates(start, end),
            366.0 / 365.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_year_fraction_reversed_is_negative() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 7, 1).unwrap();
        let dc = DayCountConvention::Actual365Fixed;
        assert_relative_eq!(
            dc.year_fraction_dates(end, start),
            -dc.year_fraction_dates(start, end),
            epsilon = 1e-15
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (2000i32..2100i32, 1u32..13u32, 1u32..29u32)
                .prop_filter_map("valid date", |(year, month, day)| {
                    Date::from_ymd(year, month, day).ok()
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_year_fraction_sign_follows_ordering(
                start in date_strategy(),
                end in date_strategy(),
            ) {
                let yf = DayCountConvention::Actual365Fixed.year_fraction_dates(start, end);
                if start < end {
                    prop_assert!(yf > 0.0);
                } else if start == end {
                    prop_assert_eq!(yf, 0.0);
                } else {
                    prop_assert!(yf < 0.0);
                }
            }

            #[test]
            fn test_display_parse_identity(date in date_strategy()) {
                prop_assert_eq!(Date::parse(&date.to_string()).unwrap(), date);
            }
        }
    }
}
