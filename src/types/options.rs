//! Formatting and parsing options
//!
//! Options are layered in three levels:
//!
//! 1. Hard-coded defaults (`MoneyOptions::default()`)
//! 2. Declared defaults for a field, usually built once with `MoneyOptions::from_overrides`
//! 3. Call-site overrides, merged on top with [`resolve`]
//!
//! A resolved `MoneyOptions` is never mutated; every merge produces a new value.

use crate::types::error::MoneyError;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// Amount in the smallest currency unit (e.g. cents)
pub type Cents = i64;

/// Largest precision whose scale factor `10^precision` fits in a `Cents`
pub const MAX_PRECISION: u32 = 18;

/// Default number of implied decimal digits
pub const DEFAULT_PRECISION: u32 = 2;

/// Default credit notation: an optional sign, a body ending in a digit, then "CR"
pub const DEFAULT_NEGATIVE_REGEX: &str = r"(?i)^(-?)(.+[0-9])\s*cr";

static DEFAULT_NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_NEGATIVE_REGEX).expect("default credit pattern must compile")
});

/// Fully resolved options consumed by the formatter, parser and pattern engine
///
/// Only [`resolve`] builds a non-default record, so every instance has been
/// validated.
#[derive(Debug, Clone)]
pub struct MoneyOptions {
    /// Digits implied after the decimal point
    precision: u32,
    /// Rendered in place of the decimal point
    separator: String,
    /// Inserted between groups of 3 integer digits
    delimiter: Option<String>,
    /// Pattern for positive values
    positive: Option<String>,
    /// Pattern for negative values
    negative: Option<String>,
    /// Pattern for zero
    zero: Option<String>,
    /// Pattern for absent values
    nil: Option<String>,
    /// Literal prepended to the rendered value
    unit: Option<String>,
    /// Parser result for input without digits
    blank: Option<Cents>,
    /// Credit ("CR") notation detector; group 1 is the sign, group 2 the body
    negative_regex: Regex,
}

impl Default for MoneyOptions {
    fn default() -> Self {
        MoneyOptions {
            precision: DEFAULT_PRECISION,
            separator: ".".to_string(),
            delimiter: None,
            positive: None,
            negative: None,
            zero: None,
            nil: None,
            unit: None,
            blank: None,
            negative_regex: DEFAULT_NEGATIVE.clone(),
        }
    }
}

impl MoneyOptions {
    /// Resolve overrides against the hard-coded defaults
    pub fn from_overrides(overrides: &MoneyOverrides) -> Result<Self, MoneyError> {
        resolve(&MoneyOptions::default(), overrides)
    }

    /// The positive pattern, or `%.<precision>f` when none is configured
    pub fn positive_pattern(&self) -> String {
        match &self.positive {
            Some(pattern) => pattern.clone(),
            None => format!("%.{}f", self.precision),
        }
    }

    /// Scale factor between whole units and the smallest unit
    pub fn scale(&self) -> u64 {
        10u64.pow(self.precision)
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    pub fn positive(&self) -> Option<&str> {
        self.positive.as_deref()
    }

    pub fn negative(&self) -> Option<&str> {
        self.negative.as_deref()
    }

    pub fn zero(&self) -> Option<&str> {
        self.zero.as_deref()
    }

    pub fn nil(&self) -> Option<&str> {
        self.nil.as_deref()
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn blank(&self) -> Option<Cents> {
        self.blank
    }

    pub fn negative_regex(&self) -> &Regex {
        &self.negative_regex
    }
}

/// Per-call option overrides
///
/// Every field is optional; unset fields fall back to the defaults being
/// resolved against. Deserializable so declared defaults can live in
/// configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MoneyOverrides {
    pub precision: Option<u32>,
    pub separator: Option<String>,
    pub delimiter: Option<String>,
    pub positive: Option<String>,
    pub negative: Option<String>,
    pub zero: Option<String>,
    pub nil: Option<String>,
    pub unit: Option<String>,
    pub blank: Option<Cents>,
    #[serde(alias = "credit_regex")]
    pub negative_regex: Option<String>,
}

impl MoneyOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    pub fn positive(mut self, pattern: impl Into<String>) -> Self {
        self.positive = Some(pattern.into());
        self
    }

    pub fn negative(mut self, pattern: impl Into<String>) -> Self {
        self.negative = Some(pattern.into());
        self
    }

    pub fn zero(mut self, pattern: impl Into<String>) -> Self {
        self.zero = Some(pattern.into());
        self
    }

    pub fn nil(mut self, pattern: impl Into<String>) -> Self {
        self.nil = Some(pattern.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn blank(mut self, blank: Cents) -> Self {
        self.blank = Some(blank);
        self
    }

    pub fn negative_regex(mut self, pattern: impl Into<String>) -> Self {
        self.negative_regex = Some(pattern.into());
        self
    }
}

/// Merge call-site overrides on top of declared defaults
///
/// Overrides win key by key. The result is validated, so the conversion
/// functions can rely on a well-formed record.
///
/// # Errors
///
/// Returns `MoneyError::InvalidConfiguration` if:
/// - `precision` exceeds [`MAX_PRECISION`]
/// - `separator` or `delimiter` is empty
/// - `negative_regex` does not compile
pub fn resolve(
    defaults: &MoneyOptions,
    overrides: &MoneyOverrides,
) -> Result<MoneyOptions, MoneyError> {
    let precision = overrides.precision.unwrap_or(defaults.precision);
    if precision > MAX_PRECISION {
        return Err(MoneyError::invalid_configuration(
            "precision",
            format!("must be at most {}, got {}", MAX_PRECISION, precision),
        ));
    }

    let separator = overrides
        .separator
        .clone()
        .unwrap_or_else(|| defaults.separator.clone());
    if separator.is_empty() {
        return Err(MoneyError::invalid_configuration(
            "separator",
            "must not be empty",
        ));
    }

    let delimiter = overrides
        .delimiter
        .clone()
        .or_else(|| defaults.delimiter.clone());
    if delimiter.as_deref() == Some("") {
        return Err(MoneyError::invalid_configuration(
            "delimiter",
            "must not be empty",
        ));
    }

    let negative_regex = match &overrides.negative_regex {
        Some(pattern) => Regex::new(pattern)
            .map_err(|e| MoneyError::invalid_configuration("negative_regex", e.to_string()))?,
        None => defaults.negative_regex.clone(),
    };

    Ok(MoneyOptions {
        precision,
        separator,
        delimiter,
        positive: overrides
            .positive
            .clone()
            .or_else(|| defaults.positive.clone()),
        negative: overrides
            .negative
            .clone()
            .or_else(|| defaults.negative.clone()),
        zero: overrides.zero.clone().or_else(|| defaults.zero.clone()),
        nil: overrides.nil.clone().or_else(|| defaults.nil.clone()),
        unit: overrides.unit.clone().or_else(|| defaults.unit.clone()),
        blank: overrides.blank.or(defaults.blank),
        negative_regex,
    })
}
