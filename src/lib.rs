//! Easy Money Library
//! # Overview
//!
//! This library converts between an integer "smallest-unit" money value
//! (e.g. cents) and a human-readable string, under a configurable set of
//! formatting rules.
//!
//! # Architecture
//!
//! - [`types`] - Option records and error types
//! - [`core`] - The conversions:
//!   - [`core::pattern`] - printf-style pattern engine with the `%m` money conversion
//!   - [`core::formatter`] - Integer to display string
//!   - [`core::parser`] - Display string to integer
//!   - [`core::convert`] - Float and decimal conversions
//!   - [`core::codec`] - Facade bound to one set of options
//! - [`io`] - CSV batch conversion
//! - [`cli`] - CLI arguments parsing and dispatch
//!
//! # Options
//!
//! Every conversion takes a resolved [`MoneyOptions`]: hard-coded defaults,
//! overlaid with declared defaults, overlaid with call-site overrides (see
//! [`resolve`]). Options are immutable and no state survives a call, so all
//! conversions are safe to run concurrently.
//!
//! ```
//! use easy_money::{cents_to_money, money_to_cents, MoneyOptions, MoneyOverrides};
//!
//! let opts = MoneyOptions::from_overrides(&MoneyOverrides::new().unit("$").delimiter(",")).unwrap();
//! assert_eq!(cents_to_money(Some(123456), &opts), "$1,234.56");
//! assert_eq!(money_to_cents("$1,234.56", &opts), Some(123456));
//! assert_eq!(money_to_cents("$1,234.56 CR", &opts), Some(-123456));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use self::core::{
    cents_to_decimal, cents_to_float, cents_to_money, decimal_to_cents, float_to_cents,
    format_value, money_to_cents, MoneyCodec,
};
pub use types::{resolve, Cents, MoneyError, MoneyOptions, MoneyOverrides, MAX_PRECISION};
