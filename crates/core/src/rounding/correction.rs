//! Residual correction for rounded value lists.
//!
//! Rounding each element of a list and rounding the list's sum once do not
//! agree in general. The correction pass takes the rounded sum as the
//! authoritative total, rounds the elements in place and then redistributes
//! the difference over the elements according to a [`CorrectionMode`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{MAX_DECIMALS, RoundingError};
use super::round::RoundingUtil;

/// Strategy for redistributing the rounding error across a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionMode {
    /// Adds the whole error to the first non-zero element.
    FirstValue,
    /// Adds the whole error to the first element whose magnitude strictly
    /// exceeds the magnitude of the error.
    FirstFittingValue,
    /// Spreads the error one unit at a time over the largest elements,
    /// touching each element at most once.
    #[default]
    MinimalParts,
    /// Carries the running error from element to element while rounding,
    /// nudging the current element whenever a full unit has accumulated.
    Differential,
}

impl std::fmt::Display for CorrectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstValue => write!(f, "first_value"),
            Self::FirstFittingValue => write!(f, "first_fitting_value"),
            Self::MinimalParts => write!(f, "minimal_parts"),
            Self::Differential => write!(f, "differential"),
        }
    }
}

impl std::str::FromStr for CorrectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first_value" => Ok(Self::FirstValue),
            "first_fitting_value" => Ok(Self::FirstFittingValue),
            "minimal_parts" => Ok(Self::MinimalParts),
            "differential" => Ok(Self::Differential),
            _ => Err(format!("Unknown correction mode: {s}")),
        }
    }
}

/// Outcome of a correction pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionReport {
    /// Authoritative total the elements were corrected toward.
    pub total: Decimal,
    /// `total` minus the exact sum of the corrected elements.
    ///
    /// Zero whenever the pass placed the whole error. Non-zero means the
    /// list had no room for some of it, for example when every element
    /// rounds to zero.
    pub residual: Decimal,
}

impl CorrectionReport {
    /// Returns true if the corrected elements sum exactly to the total.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.residual.is_zero()
    }
}

/// Correction utility restoring the sum invariant of rounded lists.
///
/// The guarantee on a successful pass: the corrected elements sum exactly
/// to [`RoundingUtil::sum_and_round`] of the raw input.
pub struct CorrectionUtil;

impl CorrectionUtil {
    /// Rounds every element in place and corrects the rounding discrepancy.
    ///
    /// The total is computed first as the rounded exact sum of the raw
    /// values, then the elements are rounded and the difference between the
    /// two outcomes is redistributed according to `mode`. When a mode finds
    /// no element to place error on, the list is left as rounded and the
    /// total is still returned; use [`Self::sum_round_and_correct_report`]
    /// to observe how much error could not be placed.
    ///
    /// # Arguments
    ///
    /// * `values` - Elements to round and correct, mutated in place
    /// * `decimals` - Number of fractional digits to keep
    /// * `mode` - Redistribution strategy
    ///
    /// # Returns
    ///
    /// The authoritative total, or an error if `decimals` exceeds
    /// [`MAX_DECIMALS`]. On error the elements are untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use roundfix_core::rounding::{CorrectionMode, CorrectionUtil};
    ///
    /// let mut values = vec![dec!(10.004), dec!(10.004), dec!(10.004)];
    /// let total =
    ///     CorrectionUtil::sum_round_and_correct(&mut values, 2, CorrectionMode::MinimalParts)
    ///         .unwrap();
    ///
    /// // Rounding alone would leave the elements summing to 30.00
    /// assert_eq!(total, dec!(30.01));
    /// assert_eq!(values, vec![dec!(10.01), dec!(10.00), dec!(10.00)]);
    /// ```
    pub fn sum_round_and_correct(
        values: &mut [Decimal],
        decimals: u32,
        mode: CorrectionMode,
    ) -> Result<Decimal, RoundingError> {
        Self::sum_round_and_correct_report(values, decimals, mode).map(|report| report.total)
    }

    /// Same as [`Self::sum_round_and_correct`], but also reports the
    /// residual error left after the pass.
    ///
    /// Callers that need a hard sum guarantee check
    /// [`CorrectionReport::is_exact`] on the result. An unplaced residual
    /// is logged at warn level, except for [`CorrectionMode::Differential`]
    /// where bounded leftover carry is part of the contract.
    pub fn sum_round_and_correct_report(
        values: &mut [Decimal],
        decimals: u32,
        mode: CorrectionMode,
    ) -> Result<CorrectionReport, RoundingError> {
        // The total must come from the raw values, before any mutation
        let total = RoundingUtil::sum_and_round(values, decimals);
        let report = Self::correct_to_total(values, total, decimals, mode)?;

        if !report.is_exact() && mode != CorrectionMode::Differential {
            warn!(
                mode = %mode,
                total = %report.total,
                residual = %report.residual,
                "Correction pass could not place the whole rounding error"
            );
        }

        Ok(report)
    }

    /// Correction pass toward a caller-supplied authoritative total.
    ///
    /// The public entry points derive the total from the raw values.
    /// Exact-sum splitting supplies the rounded original amount instead, so
    /// that share reconstruction noise cannot shift the target by a unit.
    pub(crate) fn correct_to_total(
        values: &mut [Decimal],
        total: Decimal,
        decimals: u32,
        mode: CorrectionMode,
    ) -> Result<CorrectionReport, RoundingError> {
        if decimals > MAX_DECIMALS {
            return Err(RoundingError::DecimalsOutOfRange {
                decimals,
                max: MAX_DECIMALS,
            });
        }

        if mode == CorrectionMode::Differential {
            Self::correct_differential(values, decimals);
        } else {
            let error = total - RoundingUtil::round_values(values, decimals);
            if !error.is_zero() {
                match mode {
                    CorrectionMode::FirstValue => Self::correct_first_value(values, error),
                    CorrectionMode::FirstFittingValue => {
                        Self::correct_first_fitting_value(values, error);
                    }
                    CorrectionMode::MinimalParts => {
                        Self::correct_minimal_parts(values, error, decimals);
                    }
                    // Dispatched above, before the in-place rounding
                    CorrectionMode::Differential => unreachable!(),
                }
            }
        }

        let residual = total - values.iter().copied().sum::<Decimal>();
        Ok(CorrectionReport { total, residual })
    }

    /// Adds the whole error to the first non-zero element.
    fn correct_first_value(values: &mut [Decimal], error: Decimal) {
        for value in values.iter_mut() {
            if !value.is_zero() {
                *value += error;
                return;
            }
        }
    }

    /// Adds the whole error to the first element strictly larger in
    /// magnitude than the error. Elements equal in magnitude do not fit.
    fn correct_first_fitting_value(values: &mut [Decimal], error: Decimal) {
        for value in values.iter_mut() {
            if value.abs() > error.abs() {
                *value += error;
                return;
            }
        }
    }

    /// Spreads the error in steps of one unit, each step on the largest
    /// not-yet-corrected element. Zero elements are never picked, and ties
    /// go to the first occurrence.
    fn correct_minimal_parts(values: &mut [Decimal], mut error: Decimal, decimals: u32) {
        let unit = Decimal::new(1, decimals);
        let mut corrected = vec![false; values.len()];

        while !error.is_zero() {
            let mut maximum = Decimal::ZERO;
            let mut active = None;
            for (index, value) in values.iter().enumerate() {
                if !corrected[index] && value.abs() > maximum {
                    maximum = value.abs();
                    active = Some(index);
                }
            }

            // Out of eligible elements, the rest of the error stays unplaced
            let Some(index) = active else {
                return;
            };

            if error > Decimal::ZERO {
                values[index] += unit;
                error -= unit;
            } else {
                values[index] -= unit;
                error += unit;
            }
            corrected[index] = true;
        }
    }

    /// Rounds each element while carrying the running rounding error
    /// forward, nudging the current element by one unit whenever the carry
    /// reaches a full unit.
    fn correct_differential(values: &mut [Decimal], decimals: u32) {
        let unit = Decimal::new(1, decimals);
        let mut carry = Decimal::ZERO;

        for value in values.iter_mut() {
            let raw = *value;
            *value = RoundingUtil::round_value(raw, decimals);
            carry += raw - *value;

            if carry.abs() >= unit {
                if carry > Decimal::ZERO {
                    *value += unit;
                    carry -= unit;
                } else {
                    *value -= unit;
                    carry += unit;
                }
            }
        }
    }
}
