//! Shared arithmetic helpers for trip-cost calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Standard financial rounding: values at exactly 0.005 round away from zero.
/// Only display boundaries round — the engine carries full precision.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use trip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(7169.104)), dec!(7169.10));
/// assert_eq!(round_half_up(dec!(7169.105)), dec!(7169.11));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Division that treats a zero divisor as yielding zero.
///
/// Fuel-to-gallons conversion divides by the configured fuel density, which
/// the form layer does not validate; a zero density therefore has to have a
/// defined result for the engine to stay total.
pub fn safe_div(
    numerator: Decimal,
    denominator: Decimal,
) -> Decimal {
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(123.45)), dec!(123.45));
    }

    #[test]
    fn safe_div_divides_normally() {
        assert_eq!(safe_div(dec!(8100), dec!(6.7)).round_dp(2), dec!(1208.96));
    }

    #[test]
    fn safe_div_returns_zero_for_zero_divisor() {
        assert_eq!(safe_div(dec!(4000), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn safe_div_passes_negative_divisors_through() {
        assert_eq!(safe_div(dec!(10), dec!(-2)), dec!(-5));
    }
}
