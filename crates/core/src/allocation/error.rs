//! Allocation error types.

use thiserror::Error;

use crate::rounding::RoundingError;

/// Errors that can occur when splitting an amount
#[derive(Debug, Error)]
pub enum AllocationError {
    /// Weights summing to zero define no proportions to split by.
    #[error("Weights must not sum to zero")]
    ZeroWeightSum,

    /// Invalid precision, forwarded from the rounding core.
    #[error(transparent)]
    Rounding(#[from] RoundingError),
}
