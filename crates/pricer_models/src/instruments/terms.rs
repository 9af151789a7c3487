//! Subtype-specific contract terms.

use super::error::InstrumentError;
use super::kinds::{BarrierType, LookbackType, Subtype};

/// Barrier contract terms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarrierTerms {
    barrier_type: BarrierType,
    level: f64,
    rebate: f64,
}

impl BarrierTerms {
    /// Create barrier terms.
    ///
    /// # Errors
    /// - `InvalidBarrierLevel` unless the level is finite and positive
    /// - `InvalidRebate` if the rebate is NaN or infinite
    pub fn new(barrier_type: BarrierType, level: f64, rebate: f64) -> Result<Self, InstrumentError> {
        if !level.is_finite() || level <= 0.0 {
            return Err(InstrumentError::InvalidBarrierLevel { level });
        }
        if !rebate.is_finite() {
            return Err(InstrumentError::InvalidRebate { rebate });
        }
        Ok(Self {
            barrier_type,
            level,
            rebate,
        })
    }

    /// Barrier variant.
    #[inline]
    pub fn barrier_type(&self) -> BarrierType {
        self.barrier_type
    }

    /// Barrier level H.
    #[inline]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Cash rebate; zero when the contract has none.
    #[inline]
    pub fn rebate(&self) -> f64 {
        self.rebate
    }
}

/// Contract terms tagged by subtype.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProductTerms {
    /// Plain European option
    Vanilla,
    /// Single-barrier option
    Barrier(BarrierTerms),
    /// Lookback option
    Lookback(LookbackType),
}

impl ProductTerms {
    /// The subtype these terms belong to.
    pub fn subtype(&self) -> Subtype {
        match self {
            ProductTerms::Vanilla => Subtype::Vanilla,
            ProductTerms::Barrier(_) => Subtype::Barrier,
            ProductTerms::Lookback(_) => Subtype::Lookback,
        }
    }
}
