//! Rounding error types.

use thiserror::Error;

/// Largest number of fractional digits a [`rust_decimal::Decimal`] can carry.
///
/// Correction passes move error around in steps of `10^-decimals`, and that
/// unit only exists as an exact decimal up to this scale.
pub const MAX_DECIMALS: u32 = 28;

/// Errors that can occur during rounding and correction
#[derive(Debug, Error)]
pub enum RoundingError {
    /// Requested precision has no exact correction unit.
    #[error("Decimals must be at most {max}, got {decimals}")]
    DecimalsOutOfRange {
        /// Number of fractional digits the caller asked for.
        decimals: u32,
        /// Largest supported number of fractional digits.
        max: u32,
    },
}
