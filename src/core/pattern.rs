//! printf-style pattern engine
//!
//! Renders a smallest-unit integer through a pattern of the form
//! `<prefix>%[flags][width][.fraction_width](f|m)<suffix>`. Both `f` and `m`
//! split the value into a whole part and a fractional part at the configured
//! precision, so no floating point is involved at any step.
//!
//! A pattern that does not contain a conversion is returned unchanged, which
//! lets sentinel strings such as `"free"` be used as patterns.
//!
//! ```
//! use easy_money::{format_value, MoneyOptions};
//!
//! let opts = MoneyOptions::default();
//! assert_eq!(format_value(12345, "%07.2m", &opts), "0000123.45");
//! assert_eq!(format_value(12345, "%m", &opts), "123");
//! assert_eq!(format_value(-1, "%.2m", &opts), "-0.01");
//! ```

use crate::types::{Cents, MoneyOptions};
use regex::Regex;
use std::sync::LazyLock;

static CONVERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(.*)%([-. 0-9+]*)[fm](.*)$").expect("conversion pattern must compile")
});

/// Integer conversion spec for the whole part (`%[flags][width][.digits]d`)
#[derive(Debug, Default, PartialEq)]
struct IntSpec {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    width: usize,
    min_digits: Option<usize>,
}

impl IntSpec {
    /// Parse the flags that precede the fraction width. Returns `None` when
    /// they are not in `flags, width, .digits` order.
    fn parse(spec: &str) -> Option<Self> {
        let mut out = IntSpec::default();
        let mut rest = spec;

        while let Some(c) = rest.chars().next() {
            match c {
                '-' => out.left = true,
                '+' => out.plus = true,
                ' ' => out.space = true,
                '0' => out.zero = true,
                _ => break,
            }
            rest = &rest[1..];
        }

        let (width, after_width) = split_digits(rest);
        if !width.is_empty() {
            out.width = width.parse().ok()?;
        }
        rest = after_width;

        if let Some(after_dot) = rest.strip_prefix('.') {
            let (digits, after_digits) = split_digits(after_dot);
            out.min_digits = Some(if digits.is_empty() {
                0
            } else {
                digits.parse().ok()?
            });
            rest = after_digits;
        }

        rest.is_empty().then_some(out)
    }

    fn render(&self, magnitude: u64, negative: bool) -> String {
        let sign = if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        };

        let mut digits = magnitude.to_string();
        if let Some(min) = self.min_digits {
            if digits.len() < min {
                digits = format!("{}{}", "0".repeat(min - digits.len()), digits);
            }
        }

        let len = sign.len() + digits.len();
        if len >= self.width {
            return format!("{}{}", sign, digits);
        }
        let pad = self.width - len;
        if self.left {
            format!("{}{}{}", sign, digits, " ".repeat(pad))
        } else if self.zero && self.min_digits.is_none() {
            format!("{}{}{}", sign, "0".repeat(pad), digits)
        } else {
            format!("{}{}{}", " ".repeat(pad), sign, digits)
        }
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Render `value` through `pattern`
///
/// The whole part honours the integer flags and width; the fractional part
/// is zero-padded to the precision and then cut or extended to the requested
/// fraction width. Patterns without a conversion come back unchanged.
pub fn format_value(value: Cents, pattern: &str, opts: &MoneyOptions) -> String {
    render(value.unsigned_abs(), value < 0, pattern, opts)
}

/// Sign-and-magnitude form of [`format_value`], so callers can drop the sign
/// of `i64::MIN` without overflowing.
pub(crate) fn render(magnitude: u64, negative: bool, pattern: &str, opts: &MoneyOptions) -> String {
    let Some(parts) = CONVERSION.captures(pattern) else {
        return pattern.to_string();
    };
    let prefix = parts.get(1).map_or("", |m| m.as_str());
    let flags = parts.get(2).map_or("", |m| m.as_str());
    let suffix = parts.get(3).map_or("", |m| m.as_str());

    let (whole_spec, fraction_width) = match flags.rfind('.') {
        Some(dot) => {
            let (digits, _) = split_digits(&flags[dot + 1..]);
            (&flags[..dot], digits)
        }
        None => (flags, ""),
    };
    let fraction_width: usize = if fraction_width.is_empty() {
        0
    } else {
        match fraction_width.parse() {
            Ok(width) => width,
            Err(_) => return pattern.to_string(),
        }
    };
    let Some(spec) = IntSpec::parse(whole_spec) else {
        tracing::debug!(pattern, "unsupported integer flags, using pattern literally");
        return pattern.to_string();
    };

    let scale = opts.scale();
    let whole = magnitude / scale;
    let frac = magnitude % scale;

    let mut fraction = frac.to_string();
    let precision = opts.precision() as usize;
    if fraction.len() < precision {
        fraction = format!("{}{}", "0".repeat(precision - fraction.len()), fraction);
    }
    fraction.truncate(fraction_width);
    while fraction.len() < fraction_width {
        fraction.push('0');
    }

    let mut out = String::with_capacity(prefix.len() + suffix.len() + 24);
    out.push_str(prefix);
    // A zero whole part carries no sign of its own
    if whole == 0 && negative {
        out.push('-');
    }
    out.push_str(&spec.render(whole, negative && whole != 0));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out.push_str(suffix);
    out
}
