//! Smallest-unit integer to display string
//!
//! The formatter picks a pattern from the sign of the value, renders it with
//! the pattern engine, then applies the unit prefix, the separator and the
//! thousands delimiter, in that order.

use crate::core::pattern::render;
use crate::types::{Cents, MoneyOptions};
use std::cmp::Ordering;

/// Format a money value for display
///
/// Pattern selection:
/// - absent value: `nil` pattern (or positive), rendered as zero
/// - positive: `positive` pattern
/// - zero: `zero` pattern (or positive)
/// - negative: `negative` pattern (or positive). When a distinct negative
///   pattern is configured the value is rendered without its sign, so the
///   pattern itself decides how negatives look (e.g. `"%.2f CR"`).
///
/// The separator replaces every `.` in the composed string, unit included.
///
/// ```
/// use easy_money::{cents_to_money, MoneyOptions, MoneyOverrides};
///
/// let opts = MoneyOptions::from_overrides(
///     &MoneyOverrides::new().separator(",").delimiter("."),
/// ).unwrap();
/// assert_eq!(cents_to_money(Some(12345678900), &opts), "123.456.789,00");
/// ```
pub fn cents_to_money(value: Option<Cents>, opts: &MoneyOptions) -> String {
    let positive = opts.positive_pattern();

    let (magnitude, negative, pattern) = match value {
        None => (0, false, opts.nil().map(str::to_string).unwrap_or(positive)),
        Some(v) => match v.cmp(&0) {
            Ordering::Greater => (v.unsigned_abs(), false, positive),
            Ordering::Equal => (0, false, opts.zero().map(str::to_string).unwrap_or(positive)),
            Ordering::Less => match opts.negative() {
                Some(negative) if negative != positive => {
                    (v.unsigned_abs(), false, negative.to_string())
                }
                _ => (v.unsigned_abs(), true, positive),
            },
        },
    };

    let mut money = render(magnitude, negative, &pattern, opts);

    if let Some(unit) = opts.unit() {
        money.insert_str(0, unit);
    }

    if opts.separator() != "." {
        money = money.replace('.', opts.separator());
    }

    if let Some(delimiter) = opts.delimiter() {
        money = insert_delimiter(&money, delimiter);
    }

    money
}

/// Group the first run of digits in threes, counting from the right
///
/// Everything before that run (a unit) and after it (separator and
/// fraction) is left alone.
fn insert_delimiter(money: &str, delimiter: &str) -> String {
    let Some(start) = money.find(|c: char| c.is_ascii_digit()) else {
        return money.to_string();
    };
    let end = money[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(money.len(), |offset| start + offset);

    let digits = &money[start..end];
    let mut grouped = String::with_capacity(money.len() + digits.len() / 3 * delimiter.len());
    grouped.push_str(&money[..start]);
    for (i, digit) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(delimiter);
        }
        grouped.push(digit);
    }
    grouped.push_str(&money[end..]);
    grouped
}
