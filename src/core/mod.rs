//! Core codec module
//!
//! This module contains the conversion components:
//! - `pattern` - printf-style pattern engine (`%m` / `%f` conversions)
//! - `formatter` - Smallest-unit integer to display string
//! - `parser` - Display string to smallest-unit integer
//! - `convert` - Float and decimal conversions
//! - `codec` - Options-bound facade over the conversions

pub mod codec;
pub mod convert;
pub mod formatter;
pub mod parser;
pub mod pattern;

pub use codec::MoneyCodec;
pub use convert::{cents_to_decimal, cents_to_float, decimal_to_cents, float_to_cents};
pub use formatter::cents_to_money;
pub use parser::money_to_cents;
pub use pattern::format_value;
