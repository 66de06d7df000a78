//! Money codec bound to one set of options
//!
//! `MoneyCodec` holds the resolved options for a single money field, built
//! once from the field's declared defaults. Every method is a pure function
//! of those options and its arguments, so a codec can be shared freely
//! between threads.

use crate::core::convert::{cents_to_decimal, decimal_to_cents};
use crate::core::formatter::cents_to_money;
use crate::core::parser::money_to_cents;
use crate::core::pattern::format_value;
use crate::types::{resolve, Cents, MoneyError, MoneyOptions, MoneyOverrides};
use rust_decimal::Decimal;

/// Formatter and parser for one money field
#[derive(Debug, Clone, Default)]
pub struct MoneyCodec {
    options: MoneyOptions,
}

impl MoneyCodec {
    /// Create a codec from already resolved options
    pub fn new(options: MoneyOptions) -> Self {
        MoneyCodec { options }
    }

    /// Create a codec from declared defaults
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidConfiguration` if the overrides do not
    /// resolve (see [`resolve`]).
    pub fn from_overrides(overrides: &MoneyOverrides) -> Result<Self, MoneyError> {
        Ok(Self::new(MoneyOptions::from_overrides(overrides)?))
    }

    /// A codec with call-site overrides layered on top of this one
    pub fn with_overrides(&self, overrides: &MoneyOverrides) -> Result<Self, MoneyError> {
        Ok(Self::new(resolve(&self.options, overrides)?))
    }

    pub fn options(&self) -> &MoneyOptions {
        &self.options
    }

    /// Render a stored value for display
    pub fn format(&self, value: Option<Cents>) -> String {
        cents_to_money(value, &self.options)
    }

    /// Parse an edited money string back to the stored value
    pub fn parse(&self, text: &str) -> Option<Cents> {
        money_to_cents(text, &self.options)
    }

    /// Render a value through an arbitrary pattern at this codec's precision
    pub fn format_value(&self, value: Cents, pattern: &str) -> String {
        format_value(value, pattern, &self.options)
    }

    pub fn to_decimal(&self, value: Cents) -> Decimal {
        cents_to_decimal(value, &self.options)
    }

    pub fn from_decimal(&self, value: Decimal) -> Option<Cents> {
        decimal_to_cents(value, &self.options)
    }
}
