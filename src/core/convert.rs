//! Numeric conversions between smallest-unit integers and whole units
//!
//! These complement the string codec for callers that already hold a
//! number: `f64` for legacy inputs, `Decimal` for exact arithmetic.
//! Decimal and string conversions into `Cents` truncate toward zero; the float
//! conversion floors.

use crate::types::{Cents, MoneyOptions};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Whole units as a float (`123` at precision 2 is `1.23`)
///
/// An absent value converts the configured `blank` instead.
pub fn cents_to_float(value: Option<Cents>, opts: &MoneyOptions) -> Option<f64> {
    value
        .or(opts.blank())
        .map(|cents| cents as f64 / opts.scale() as f64)
}

/// Smallest unit from a float
///
/// The float is scaled one digit past the precision and truncated, so
/// representation error such as `4.56 * 100 == 455.99999999999994` does not
/// lose a cent. The extra digit is then dropped with floor division, so
/// negative amounts round toward minus infinity (`-4.567` is `-457`).
/// Absent, non-finite or out-of-range input yields `blank`.
pub fn float_to_cents(value: Option<f64>, opts: &MoneyOptions) -> Option<Cents> {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return opts.blank();
    };

    let factor = opts.scale() as f64 * 10.0;
    let scaled = ((value * factor).trunc() as i128).div_euclid(10);
    match Cents::try_from(scaled) {
        Ok(cents) => Some(cents),
        Err(_) => {
            tracing::warn!(value, "float out of range, using blank value");
            opts.blank()
        }
    }
}

/// Exact whole units (`12345` at precision 2 is `123.45`)
pub fn cents_to_decimal(value: Cents, opts: &MoneyOptions) -> Decimal {
    Decimal::new(value, opts.precision())
}

/// Smallest unit from a decimal, truncated; `None` if it does not fit
pub fn decimal_to_cents(value: Decimal, opts: &MoneyOptions) -> Option<Cents> {
    value
        .checked_mul(Decimal::from(opts.scale()))?
        .trunc()
        .to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MoneyOverrides;
    use rstest::rstest;

    fn with(overrides: MoneyOverrides) -> MoneyOptions {
        MoneyOptions::from_overrides(&overrides).unwrap()
    }

    #[rstest]
    #[case::positive(Some(150), 1.5)]
    #[case::negative(Some(-225), -2.25)]
    #[case::zero(Some(0), 0.0)]
    fn test_cents_to_float(#[case] value: Option<Cents>, #[case] expected: f64) {
        assert_eq!(cents_to_float(value, &MoneyOptions::default()), Some(expected));
    }

    #[test]
    fn test_cents_to_float_absent() {
        assert_eq!(cents_to_float(None, &MoneyOptions::default()), None);
        assert_eq!(
            cents_to_float(None, &with(MoneyOverrides::new().blank(50))),
            Some(0.5)
        );
    }

    #[rstest]
    #[case::exact(Some(1.5), Some(150))]
    #[case::negative(Some(-2.25), Some(-225))]
    #[case::representation_error(Some(4.56), Some(456))]
    #[case::truncated(Some(0.019), Some(1))]
    #[case::negative_floored(Some(-4.567), Some(-457))]
    #[case::negative_small_floored(Some(-0.019), Some(-2))]
    #[case::absent(None, None)]
    #[case::nan(Some(f64::NAN), None)]
    #[case::infinite(Some(f64::INFINITY), None)]
    #[case::too_large(Some(1e300), None)]
    fn test_float_to_cents(#[case] value: Option<f64>, #[case] expected: Option<Cents>) {
        assert_eq!(float_to_cents(value, &MoneyOptions::default()), expected);
    }

    #[test]
    fn test_cents_to_decimal() {
        assert_eq!(
            cents_to_decimal(12345, &MoneyOptions::default()).to_string(),
            "123.45"
        );
        assert_eq!(
            cents_to_decimal(-5, &with(MoneyOverrides::new().precision(3))).to_string(),
            "-0.005"
        );
    }

    #[rstest]
    #[case::exact(Decimal::new(12345, 2), Some(12345))]
    #[case::truncated(Decimal::new(4567, 3), Some(456))]
    #[case::truncated_negative(Decimal::new(-4567, 3), Some(-456))]
    #[case::overflow(Decimal::MAX, None)]
    fn test_decimal_to_cents(#[case] value: Decimal, #[case] expected: Option<Cents>) {
        assert_eq!(decimal_to_cents(value, &MoneyOptions::default()), expected);
    }
}
