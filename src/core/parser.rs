//! Display string to smallest-unit integer
//!
//! Parsing is forgiving: currency symbols in front are dropped, the
//! configured delimiter and separator are normalised away, and an amount
//! followed by "CR" has its sign inverted. Input without any digit yields
//! the configured blank value instead of an error.

use crate::types::{Cents, MoneyOptions};
use regex::Regex;
use std::sync::LazyLock;

static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-?[0-9]*)\.?([0-9]*)").expect("amount pattern must compile"));

/// Parse a money string into the smallest unit
///
/// Steps:
/// 1. Remove the delimiter and turn the separator into `.`
/// 2. Drop any leading characters other than digits, `.`, `-` and `,`
/// 3. Return `blank` if no digit is left
/// 4. Apply credit notation: `"4.56 CR"` is negative, `"-4.56 CR"` positive
/// 5. Scale the whole part and add the fraction, truncated (never rounded)
///    to the precision, with the sign of the whole part
///
/// Values that do not fit a `Cents` are logged and yield `blank`.
///
/// ```
/// use easy_money::{money_to_cents, MoneyOptions};
///
/// let opts = MoneyOptions::default();
/// assert_eq!(money_to_cents("$1,234.56", &opts), Some(123456));
/// assert_eq!(money_to_cents("4.56CR", &opts), Some(-456));
/// assert_eq!(money_to_cents("n/a", &opts), None);
/// ```
pub fn money_to_cents(text: &str, opts: &MoneyOptions) -> Option<Cents> {
    let mut value = text.to_string();
    if let Some(delimiter) = opts.delimiter() {
        value = value.replace(delimiter, "");
    }
    if opts.separator() != "." {
        value = value.replace(opts.separator(), ".");
    }

    let value =
        value.trim_start_matches(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | ',')));
    if !value.contains(|c: char| c.is_ascii_digit()) {
        tracing::debug!(input = text, "no digits in money string, using blank value");
        return opts.blank();
    }

    let value = match opts.negative_regex().captures(value).and_then(|caps| caps.get(2)) {
        Some(body) if value.starts_with('-') => body.as_str().to_string(),
        Some(body) => format!("-{}", body.as_str()),
        None => value.to_string(),
    };

    let Some(parts) = AMOUNT.captures(&value) else {
        tracing::debug!(input = text, "no amount in money string, using zero");
        return Some(0);
    };
    let whole = parts.get(1).map_or("", |m| m.as_str());
    let fraction = parts.get(2).map_or("", |m| m.as_str());

    match to_cents(whole, fraction, opts) {
        Some(cents) => Some(cents),
        None => {
            tracing::warn!(input = text, "money string out of range, using blank value");
            opts.blank()
        }
    }
}

/// Combine a signed whole part and raw fraction digits; `None` on overflow
fn to_cents(whole: &str, fraction: &str, opts: &MoneyOptions) -> Option<Cents> {
    let negative = whole.starts_with('-');
    let digits = whole.trim_start_matches('-');
    let whole: u128 = if digits.is_empty() {
        0
    } else {
        digits.parse().ok()?
    };

    let precision = opts.precision() as usize;
    let mut fraction: String = fraction.chars().take(precision).collect();
    while fraction.len() < precision {
        fraction.push('0');
    }
    let fraction: u128 = if fraction.is_empty() {
        0
    } else {
        fraction.parse().ok()?
    };

    let magnitude = whole
        .checked_mul(u128::from(opts.scale()))?
        .checked_add(fraction)?;
    let magnitude = i128::try_from(magnitude).ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    Cents::try_from(signed).ok()
}
