//! Rounding with sum-invariant correction.
//!
//! This module implements the core rounding functionality:
//! - Half-away-from-zero rounding of single values and lists
//! - Competing totals (round the sum once vs sum the rounded elements)
//! - Redistribution of the rounding error across a list
//! - Error types for rounding operations

pub mod correction;
pub mod error;
pub mod round;

#[cfg(test)]
mod benchmark;


pub use correction::{CorrectionMode, CorrectionReport, CorrectionUtil};
pub use error::{MAX_DECIMALS, RoundingError};
pub use round::RoundingUtil;
