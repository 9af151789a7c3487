//! # Pricer Models (L2: Business Logic)
//!
//! Option definitions, payoff functions, and closed-form Black-Scholes
//! formulas.
//!
//! This crate provides:
//! - Option enums (`OptionType`, `Subtype`, `BarrierType`, `LookbackType`)
//! - The `Payoff` trait with call and put implementations
//! - European exercise
//! - Raw input records and their validation into immutable `OptionSpec`s
//! - Analytical formulas: normal distribution, Black-Scholes vanilla,
//!   Reiner-Rubinstein single barrier
//!
//! ## Design Principles
//!
//! - **Closed enums** for option, subtype and barrier classification, so
//!   unsupported inputs are rejected once, when parsing
//! - **Validation at construction**: an `OptionSpec` that exists is priceable
//!   by its engine except for maturity degeneracy
//! - **Generic formulas over `T: Float`**

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
