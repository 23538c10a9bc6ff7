//! Shared helpers for money arithmetic and presentation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(38000.004)), dec!(38000.00));
/// assert_eq!(round_half_up(dec!(38000.005)), dec!(38000.01));
/// assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the smaller of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

/// Formats an amount with `,` thousands separators and two decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::format_currency;
///
/// assert_eq!(format_currency(dec!(1287000)), "1,287,000.00");
/// assert_eq!(format_currency(dec!(999.5)), "999.50");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
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
        assert_eq!(round_half_up(dec!(19300.004)), dec!(19300.00));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(19300.005)), dec!(19300.01));
    }

    #[test]
    fn round_half_up_rounds_negative_away_from_zero() {
        assert_eq!(round_half_up(dec!(-2.345)), dec!(-2.35));
    }

    #[test]
    fn round_half_up_carries_into_whole_part() {
        assert_eq!(round_half_up(dec!(999999.999)), dec!(1000000.00));
    }

    // =========================================================================
    // max / min tests
    // =========================================================================

    #[test]
    fn max_picks_larger_value() {
        assert_eq!(max(dec!(-120.50), dec!(0)), dec!(0));
        assert_eq!(max(dec!(462000), dec!(0)), dec!(462000));
    }

    #[test]
    fn min_picks_smaller_value() {
        assert_eq!(min(dec!(700000), dec!(100000)), dec!(100000));
        assert_eq!(min(dec!(350000), dec!(350000)), dec!(350000));
    }

    // =========================================================================
    // format_currency tests
    // =========================================================================

    #[test]
    fn format_currency_zero() {
        assert_eq!(format_currency(dec!(0)), "0.00");
    }

    #[test]
    fn format_currency_below_one_thousand_has_no_separator() {
        assert_eq!(format_currency(dec!(350)), "350.00");
    }

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(1000)), "1,000.00");
        assert_eq!(format_currency(dec!(462000)), "462,000.00");
        assert_eq!(format_currency(dec!(4550000.5)), "4,550,000.50");
    }

    #[test]
    fn format_currency_rounds_to_cents() {
        assert_eq!(format_currency(dec!(19300.125)), "19,300.13");
        assert_eq!(format_currency(dec!(0.004)), "0.00");
    }

    #[test]
    fn format_currency_keeps_negative_sign() {
        assert_eq!(format_currency(dec!(-1234567.8)), "-1,234,567.80");
    }
}
