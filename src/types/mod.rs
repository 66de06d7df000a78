//! Types module
//!
//! Contains the data structures shared by the codec:
//! - `options`: Option records and their resolution
//! - `error`: Error types for configuration and batch I/O

pub mod error;
pub mod options;

pub use error::MoneyError;
pub use options::{resolve, Cents, MoneyOptions, MoneyOverrides, MAX_PRECISION};
