//! CSV format handling for batch conversion
//!
//! This module centralizes the batch CSV format:
//! - `CsvRecord` for deserializing `id,amount` rows
//! - Conversion of one row in either direction through a `MoneyCodec`
//! - Output writer construction
//!
//! All functions except the writer are pure (no I/O) for easy testing.

use crate::cli::Direction;
use crate::core::MoneyCodec;
use crate::types::Cents;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Batch row, used for both input and output
///
/// `amount` is optional: an empty cell is an absent value when formatting,
/// and a blank parse result is written back as an empty cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRecord {
    pub id: String,
    #[serde(default)]
    pub amount: Option<String>,
}

/// Convert a single row in the requested direction
///
/// - `ToMoney`: the amount must be an integer in the smallest unit (or empty)
/// - `ToCents`: the amount is any money string; it never fails
///
/// # Returns
///
/// * `Ok(CsvRecord)` - The row with its amount converted
/// * `Err(String)` - The amount is not a valid integer (`ToMoney` only)
pub fn convert_csv_record(
    record: CsvRecord,
    direction: &Direction,
    codec: &MoneyCodec,
) -> Result<CsvRecord, String> {
    let amount = record.amount.as_deref().map(str::trim).unwrap_or("");

    let converted = match direction {
        Direction::ToMoney => {
            let value = if amount.is_empty() {
                None
            } else {
                Some(amount.parse::<Cents>().map_err(|_| {
                    format!("Invalid amount '{}' for id {}", amount, record.id)
                })?)
            };
            Some(codec.format(value))
        }
        Direction::ToCents => codec.parse(amount).map(|cents| cents.to_string()),
    };

    Ok(CsvRecord {
        id: record.id,
        amount: converted,
    })
}

/// Create a CSV writer with the `id,amount` header already written
pub fn batch_writer<W: Write>(output: W) -> Result<csv::Writer<W>, csv::Error> {
    // The header is written by hand so serialize() never adds a second one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);
    writer.write_record(["id", "amount"])?;
    Ok(writer)
}
