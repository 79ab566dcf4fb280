//! Rounding primitives and total computation.
//!
//! Rounding a list element by element and rounding its sum once are
//! different operations, and their results drift apart whenever individual
//! remainders cross the midpoint differently than the sum does. The
//! functions here expose both totals so callers can measure that drift.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounding utility built on exact decimal arithmetic.
///
/// All rounding is half away from zero, so midpoints move to the larger
/// absolute magnitude for both signs. No floats are involved at any point.
pub struct RoundingUtil;

impl RoundingUtil {
    /// Rounds a single value to the given number of fractional digits.
    ///
    /// Midpoints round away from zero: `0.125` becomes `0.13` and `-0.125`
    /// becomes `-0.13`. Rounding to more digits than the value carries is
    /// the identity.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to round
    /// * `decimals` - Number of fractional digits to keep
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use roundfix_core::rounding::RoundingUtil;
    ///
    /// assert_eq!(RoundingUtil::round_value(dec!(0.125), 2), dec!(0.13));
    /// assert_eq!(RoundingUtil::round_value(dec!(-0.125), 2), dec!(-0.13));
    /// ```
    #[must_use]
    pub fn round_value(value: Decimal, decimals: u32) -> Decimal {
        value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Rounds every element in place and returns the sum of the rounded
    /// elements.
    ///
    /// # Arguments
    ///
    /// * `values` - Elements to round, mutated in place
    /// * `decimals` - Number of fractional digits to keep
    ///
    /// # Returns
    ///
    /// The exact sum of the elements after rounding.
    pub fn round_values(values: &mut [Decimal], decimals: u32) -> Decimal {
        let mut sum = Decimal::ZERO;
        for value in values.iter_mut() {
            *value = Self::round_value(*value, decimals);
            sum += *value;
        }
        sum
    }

    /// Sums the raw values exactly, then rounds the single sum once.
    ///
    /// This is the authoritative total for a list: one rounding step means
    /// at most half a unit of error against the exact sum. The values
    /// themselves are not changed.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use roundfix_core::rounding::RoundingUtil;
    ///
    /// let values = vec![dec!(10.004), dec!(10.004), dec!(10.004)];
    /// assert_eq!(RoundingUtil::sum_and_round(&values, 2), dec!(30.01));
    /// ```
    #[must_use]
    pub fn sum_and_round(values: &[Decimal], decimals: u32) -> Decimal {
        Self::round_value(values.iter().copied().sum(), decimals)
    }

    /// Rounds each value and sums the rounded results, without storing the
    /// rounded elements back.
    ///
    /// Agrees with [`Self::round_values`] on the returned sum. Both can
    /// differ from [`Self::sum_and_round`] on the same input, which is the
    /// discrepancy the correction pass redistributes.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use roundfix_core::rounding::RoundingUtil;
    ///
    /// let values = vec![dec!(10.004), dec!(10.004), dec!(10.004)];
    /// // Each element loses 0.004, so the element-wise total lags behind
    /// assert_eq!(RoundingUtil::round_and_sum(&values, 2), dec!(30.00));
    /// ```
    #[must_use]
    pub fn round_and_sum(values: &[Decimal], decimals: u32) -> Decimal {
        values
            .iter()
            .map(|value| Self::round_value(*value, decimals))
            .sum()
    }
}
