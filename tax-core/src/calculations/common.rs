//! Common utility functions for tax calculations.
//!
//! This module provides the arithmetic idioms shared by every form: rounding,
//! summing lines that may be blank, and clamping amounts to the range a form
//! instruction allows ("not less than zero", "limited to").

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to whole currency units using half-up rounding.
///
/// Published tax tables and most state returns are filled in whole dollars.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_to_dollar;
///
/// assert_eq!(round_to_dollar(dec!(1711.50)), dec!(1712));
/// assert_eq!(round_to_dollar(dec!(1711.49)), dec!(1711));
/// ```
pub fn round_to_dollar(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Sums optional line values, treating blank lines as zero.
///
/// The result is always a definite amount, even if every input is blank.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::sum;
///
/// assert_eq!(sum([None, None]), dec!(0));
/// assert_eq!(sum([None, Some(dec!(5))]), dec!(5));
/// ```
pub fn sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Option<Decimal>>,
{
    values.into_iter().flatten().sum()
}

/// Sums optional line values, but stays blank if every input is blank.
///
/// Use this for a subtotal that is itself a line: it keeps "not applicable"
/// distinguishable from "applicable with value zero".
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::sum_present;
///
/// assert_eq!(sum_present([None, None]), None);
/// assert_eq!(sum_present([None, Some(dec!(0))]), Some(dec!(0)));
/// ```
pub fn sum_present<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Option<Decimal>>,
{
    values
        .into_iter()
        .flatten()
        .fold(None, |total, value| Some(total.unwrap_or(Decimal::ZERO) + value))
}

/// Clamps an amount to `[floor, ceiling]`; no ceiling means unbounded.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::cap;
///
/// assert_eq!(cap(dec!(-50), dec!(0), None), dec!(0));
/// assert_eq!(cap(dec!(50), dec!(0), Some(dec!(30))), dec!(30));
/// ```
pub fn cap(
    value: Decimal,
    floor: Decimal,
    ceiling: Option<Decimal>,
) -> Decimal {
    let floored = max(value, floor);
    match ceiling {
        Some(ceiling) => floored.min(ceiling),
        None => floored,
    }
}

/// The "if zero or less, enter -0-" rule.
pub fn not_less_than_zero(value: Decimal) -> Decimal {
    cap(value, Decimal::ZERO, None)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46)); // Away from zero
    }

    #[test]
    fn round_half_up_handles_large_values() {
        let result = round_half_up(dec!(999999.999));

        assert_eq!(result, dec!(1000000.00));
    }

    // =========================================================================
    // round_to_dollar tests
    // =========================================================================

    #[test]
    fn round_to_dollar_rounds_half_cent_amounts_up() {
        assert_eq!(round_to_dollar(dec!(4949.50)), dec!(4950));
    }

    #[test]
    fn round_to_dollar_keeps_whole_amounts() {
        assert_eq!(round_to_dollar(dec!(4950)), dec!(4950));
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_first_when_larger() {
        let result = max(dec!(200.00), dec!(100.00));

        assert_eq!(result, dec!(200.00));
    }

    #[test]
    fn max_handles_equal_values() {
        let result = max(dec!(150.00), dec!(150.00));

        assert_eq!(result, dec!(150.00));
    }

    // =========================================================================
    // sum / sum_present tests
    // =========================================================================

    #[test]
    fn sum_of_only_blank_lines_is_zero() {
        assert_eq!(sum([None, None]), dec!(0));
    }

    #[test]
    fn sum_ignores_blank_lines() {
        assert_eq!(sum([None, Some(dec!(5)), Some(dec!(2.25))]), dec!(7.25));
    }

    #[test]
    fn sum_keeps_cents() {
        assert_eq!(sum([Some(dec!(0.01)), Some(dec!(0.02))]), dec!(0.03));
    }

    #[test]
    fn sum_present_stays_blank_for_blank_inputs() {
        assert_eq!(sum_present(Vec::new()), None);
        assert_eq!(sum_present([None, None]), None);
    }

    #[test]
    fn sum_present_distinguishes_explicit_zero_from_blank() {
        assert_eq!(sum_present([None, Some(dec!(0))]), Some(dec!(0)));
    }

    // =========================================================================
    // cap tests
    // =========================================================================

    #[test]
    fn cap_floors_negative_amount() {
        assert_eq!(cap(dec!(-50), dec!(0), None), dec!(0));
    }

    #[test]
    fn cap_limits_to_ceiling() {
        assert_eq!(cap(dec!(50), dec!(0), Some(dec!(30))), dec!(30));
    }

    #[test]
    fn cap_is_idempotent() {
        for value in [dec!(-1000.55), dec!(-0.01), dec!(0), dec!(0.01), dec!(987.65)] {
            let once = cap(value, dec!(0), None);

            assert_eq!(cap(once, dec!(0), None), once);
        }
    }

    #[test]
    fn not_less_than_zero_passes_positive_amounts_through() {
        assert_eq!(not_less_than_zero(dec!(12.34)), dec!(12.34));
        assert_eq!(not_less_than_zero(dec!(-12.34)), dec!(0));
    }
}
