//! Core rounding logic for Roundfix.
//!
//! This crate contains pure calculation logic with ZERO web or database
//! dependencies. Rounding a list of amounts element by element loses or
//! invents sub-unit quantities against the rounded sum of the list; the
//! modules here round, measure that discrepancy and redistribute it.
//!
//! # Modules
//!
//! - `rounding` - Rounding with sum-invariant correction
//! - `allocation` - Exact-sum splitting built on the correction core

pub mod allocation;
pub mod rounding;
