//! Closed classifications of an option contract.
//!
//! Input strings are matched case-insensitively, ignoring `-`, `_` and
//! spaces, so `"Up-and-Out"`, `"up_out"` and `"UpOut"` all name the same
//! barrier type. Anything outside the enumerated domain fails with the
//! matching `Unsupported*` variant of [`PricingError`], carrying the
//! original input.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;

fn normalise(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike
    Call,
    /// Right to sell at the strike
    Put,
}

impl OptionType {
    /// +1 for calls, -1 for puts.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Lower-case name, as written to reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::UnsupportedOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product family of an option record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Subtype {
    /// Plain European option
    Vanilla,
    /// Single-barrier European option
    Barrier,
    /// Lookback option; accepted on input but never priced
    Lookback,
}

impl Subtype {
    /// Lower-case name, as written to reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Subtype::Vanilla => "vanilla",
            Subtype::Barrier => "barrier",
            Subtype::Lookback => "lookback",
        }
    }
}

impl FromStr for Subtype {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "vanilla" | "european" => Ok(Subtype::Vanilla),
            "barrier" => Ok(Subtype::Barrier),
            "lookback" => Ok(Subtype::Lookback),
            _ => Err(PricingError::UnsupportedSubtype(s.to_string())),
        }
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of the spot the barrier sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarrierDirection {
    /// Barrier above spot, triggered from below
    Up,
    /// Barrier below spot, triggered from above
    Down,
}

/// The four single-barrier variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierType {
    /// Activated when spot rises to the barrier
    #[cfg_attr(feature = "serde", serde(rename = "up-and-in"))]
    UpIn,
    /// Extinguished when spot rises to the barrier
    #[cfg_attr(feature = "serde", serde(rename = "up-and-out"))]
    UpOut,
    /// Activated when spot falls to the barrier
    #[cfg_attr(feature = "serde", serde(rename = "down-and-in"))]
    DownIn,
    /// Extinguished when spot falls to the barrier
    #[cfg_attr(feature = "serde", serde(rename = "down-and-out"))]
    DownOut,
}

impl BarrierType {
    /// Which side of spot the barrier is monitored from.
    #[inline]
    pub fn direction(&self) -> BarrierDirection {
        match self {
            BarrierType::UpIn | BarrierType::UpOut => BarrierDirection::Up,
            BarrierType::DownIn | BarrierType::DownOut => BarrierDirection::Down,
        }
    }

    /// True for knock-in variants.
    #[inline]
    pub fn is_knock_in(&self) -> bool {
        matches!(self, BarrierType::UpIn | BarrierType::DownIn)
    }

    /// The variant with the same direction and opposite knock.
    pub fn complement(&self) -> BarrierType {
        match self {
            BarrierType::UpIn => BarrierType::UpOut,
            BarrierType::UpOut => BarrierType::UpIn,
            BarrierType::DownIn => BarrierType::DownOut,
            BarrierType::DownOut => BarrierType::DownIn,
        }
    }

    /// Canonical input spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            BarrierType::UpIn => "up-and-in",
            BarrierType::UpOut => "up-and-out",
            BarrierType::DownIn => "down-and-in",
            BarrierType::DownOut => "down-and-out",
        }
    }
}

impl FromStr for BarrierType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "upandin" | "upin" => Ok(BarrierType::UpIn),
            "upandout" | "upout" => Ok(BarrierType::UpOut),
            "downandin" | "downin" => Ok(BarrierType::DownIn),
            "downandout" | "downout" => Ok(BarrierType::DownOut),
            _ => Err(PricingError::UnsupportedBarrierType(s.to_string())),
        }
    }
}

impl fmt::Display for BarrierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookback position, carried through validation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LookbackType {
    /// Long lookback
    Long,
    /// Short lookback
    Short,
}

impl FromStr for LookbackType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise(s).as_str() {
            "long" => Ok(LookbackType::Long),
            "short" => Ok(LookbackType::Short),
            _ => Err(PricingError::UnsupportedLookbackType(s.to_string())),
        }
    }
}

impl fmt::Display for LookbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookbackType::Long => f.write_str("long"),
            LookbackType::Short => f.write_str("short"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type_case_insensitive() {
        assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" Put ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!(
            "straddle".parse::<OptionType>(),
            Err(PricingError::UnsupportedOptionType("straddle".to_string()))
        );
    }

    #[test]
    fn test_option_type_sign_and_display() {
        assert_eq!(OptionType::Call.sign(), 1.0);
        assert_eq!(OptionType::Put.sign(), -1.0);
        assert_eq!(OptionType::Put.to_string(), "put");
    }

    #[test]
    fn test_subtype_parsing() {
        assert_eq!("Vanilla".parse::<Subtype>().unwrap(), Subtype::Vanilla);
        assert_eq!("BARRIER".parse::<Subtype>().unwrap(), Subtype::Barrier);
        assert_eq!("lookback".parse::<Subtype>().unwrap(), Subtype::Lookback);
        assert_eq!(
            "asian".parse::<Subtype>(),
            Err(PricingError::UnsupportedSubtype("asian".to_string()))
        );
    }

    #[test]
    fn test_barrier_type_spellings() {
        for s in ["up-and-in", "Up-And-In", "up_in", "UpIn", "up in"] {
            assert_eq!(s.parse::<BarrierType>().unwrap(), BarrierType::UpIn, "{}", s);
        }
        assert_eq!("up-and-out".parse::<BarrierType>().unwrap(), BarrierType::UpOut);
        assert_eq!("down-and-in".parse::<BarrierType>().unwrap(), BarrierType::DownIn);
        assert_eq!("DOWN_OUT".parse::<BarrierType>().unwrap(), BarrierType::DownOut);
        assert_eq!(
            "double-knock-out".parse::<BarrierType>(),
            Err(PricingError::UnsupportedBarrierType("double-knock-out".to_string()))
        );
    }

    #[test]
    fn test_barrier_type_properties() {
        assert_eq!(BarrierType::UpOut.direction(), BarrierDirection::Up);
        assert_eq!(BarrierType::DownIn.direction(), BarrierDirection::Down);
        assert!(BarrierType::DownIn.is_knock_in());
        assert!(!BarrierType::UpOut.is_knock_in());
        assert_eq!(BarrierType::UpIn.complement(), BarrierType::UpOut);
        assert_eq!(BarrierType::DownOut.complement(), BarrierType::DownIn);
        for bt in [
            BarrierType::UpIn,
            BarrierType::UpOut,
            BarrierType::DownIn,
            BarrierType::DownOut,
        ] {
            assert_eq!(bt.to_string().parse::<BarrierType>().unwrap(), bt);
        }
    }

    #[test]
    fn test_lookback_type_parsing() {
        assert_eq!("LONG".parse::<LookbackType>().unwrap(), LookbackType::Long);
        assert_eq!("short".parse::<LookbackType>().unwrap(), LookbackType::Short);
        assert_eq!(
            "floating".parse::<LookbackType>(),
            Err(PricingError::UnsupportedLookbackType("floating".to_string()))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&BarrierType::DownOut).unwrap(),
            "\"down-and-out\""
        );
        assert_eq!(
            serde_json::from_str::<OptionType>("\"call\"").unwrap(),
            OptionType::Call
        );
    }
}
