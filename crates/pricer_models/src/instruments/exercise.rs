//! Option exercise definitions.
//!
//! Only European exercise is supported: a single exercise at the maturity
//! date, with no early-exercise right.

use pricer_core::types::Date;

/// Exercise on the maturity date only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuropeanExercise {
    maturity: Date,
}

impl EuropeanExercise {
    /// Exercise at `maturity`.
    #[inline]
    pub fn new(maturity: Date) -> Self {
        Self { maturity }
    }

    /// The single exercise date.
    #[inline]
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// European options never allow exercise before maturity.
    #[inline]
    pub fn allows_early_exercise(&self) -> bool {
        false
    }
}
