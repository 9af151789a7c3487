//! European option definitions.
//!
//! # Structure
//!
//! - [`kinds`]: closed classifications (`OptionType`, `Subtype`,
//!   `BarrierType`, `LookbackType`) with case-insensitive parsing
//! - [`payoff`]: the [`Payoff`] trait and call/put payoffs
//! - [`exercise`]: European exercise
//! - [`terms`]: subtype-specific terms carried as [`ProductTerms`]
//! - [`record`]: raw, unvalidated [`OptionRecord`]s
//! - [`spec`]: the validated, immutable [`OptionSpec`]
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{OptionType, Payoff, VanillaPayoff};
//!
//! let option_type: OptionType = "CALL".parse().unwrap();
//! let payoff = VanillaPayoff::new(option_type, 100.0_f64).unwrap();
//! assert_eq!(payoff.intrinsic_value(110.0), 10.0);
//! ```

pub mod error;
pub mod exercise;
pub mod kinds;
pub mod payoff;
pub mod record;
pub mod spec;
pub mod terms;

pub use error::InstrumentError;
pub use exercise::EuropeanExercise;
pub use kinds::{BarrierDirection, BarrierType, LookbackType, OptionType, Subtype};
pub use payoff::{CallPayoff, Payoff, PutPayoff, VanillaPayoff};
pub use record::OptionRecord;
pub use spec::OptionSpec;
pub use terms::{BarrierTerms, ProductTerms};
