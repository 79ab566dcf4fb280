//! Exact-sum splitting of an amount into parts.
//!
//! Parts are computed as exact shares first, then rounded and corrected in
//! one pass so that no unit of the target precision is lost or invented.

use rust_decimal::Decimal;

use super::error::AllocationError;
use crate::rounding::{CorrectionMode, CorrectionUtil, RoundingUtil};

/// Splitting utility for distributing amounts.
///
/// Both operations guarantee that the parts sum EXACTLY to the total
/// rounded to the target precision, whatever the share arithmetic loses
/// to rounding.
pub struct SplitUtil;

impl SplitUtil {
    /// Splits an amount into N equal parts.
    ///
    /// Ensures the sum of parts EXACTLY equals the rounded total. Parts
    /// never differ from one another by more than one unit of the target
    /// precision; when the division is uneven, the first parts absorb the
    /// one-unit adjustment.
    ///
    /// # Arguments
    ///
    /// * `total` - The amount to split
    /// * `parts` - Number of parts
    /// * `decimals` - Number of fractional digits for each part
    ///
    /// # Returns
    ///
    /// A vector of `parts` amounts whose sum equals the rounded total.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use roundfix_core::allocation::SplitUtil;
    ///
    /// // 100 / 3 = [33.34, 33.33, 33.33], sum = 100.00
    /// let parts = SplitUtil::split_even(dec!(100), 3, 2).unwrap();
    /// assert_eq!(parts, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
    /// ```
    pub fn split_even(
        total: Decimal,
        parts: usize,
        decimals: u32,
    ) -> Result<Vec<Decimal>, AllocationError> {
        if parts == 0 {
            return Ok(vec![]);
        }

        let share = total / Decimal::from(parts as u64);
        let mut values = vec![share; parts];

        // Correct toward the rounded original amount, not the rebuilt share
        // sum, which can sit a hair off a midpoint after the division
        let target = RoundingUtil::round_value(total, decimals);
        let report = CorrectionUtil::correct_to_total(
            &mut values,
            target,
            decimals,
            CorrectionMode::MinimalParts,
        )?;
        if !report.is_exact() {
            Self::distribute_leftover(&mut values, report.residual, decimals);
        }

        Ok(values)
    }

    /// Splits an amount proportionally to the given weights.
    ///
    /// Ensures the sum of parts EXACTLY equals the rounded total. Weights
    /// do not need to sum to anything particular, they only fix the
    /// proportions; a zero weight yields a zero part.
    ///
    /// # Arguments
    ///
    /// * `total` - The amount to split
    /// * `weights` - Relative weight of each part
    /// * `decimals` - Number of fractional digits for each part
    ///
    /// # Returns
    ///
    /// A vector of `weights.len()` amounts whose sum equals the rounded
    /// total, or [`AllocationError::ZeroWeightSum`] if the weights cancel
    /// out.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use roundfix_core::allocation::SplitUtil;
    ///
    /// let weights = vec![dec!(50), dec!(30), dec!(20)];
    /// let parts = SplitUtil::split_weighted(dec!(100), &weights, 2).unwrap();
    /// assert_eq!(parts, vec![dec!(50.00), dec!(30.00), dec!(20.00)]);
    /// ```
    pub fn split_weighted(
        total: Decimal,
        weights: &[Decimal],
        decimals: u32,
    ) -> Result<Vec<Decimal>, AllocationError> {
        if weights.is_empty() {
            return Ok(vec![]);
        }

        let weight_sum: Decimal = weights.iter().copied().sum();
        if weight_sum.is_zero() {
            return Err(AllocationError::ZeroWeightSum);
        }

        let mut values: Vec<Decimal> = weights
            .iter()
            .map(|weight| total * *weight / weight_sum)
            .collect();

        let target = RoundingUtil::round_value(total, decimals);
        let report = CorrectionUtil::correct_to_total(
            &mut values,
            target,
            decimals,
            CorrectionMode::MinimalParts,
        )?;
        if !report.is_exact() {
            Self::distribute_leftover(&mut values, report.residual, decimals);
        }

        Ok(values)
    }

    /// Hands out residual units the correction pass could not place,
    /// one unit per part starting from the first.
    fn distribute_leftover(values: &mut [Decimal], residual: Decimal, decimals: u32) {
        let unit = Decimal::new(1, decimals);
        let step = if residual > Decimal::ZERO { unit } else { -unit };

        let mut remaining = residual;
        for value in values.iter_mut() {
            if remaining.is_zero() {
                break;
            }
            *value += step;
            remaining -= step;
        }
    }
}
