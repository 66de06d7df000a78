//! Batch conversion of a CSV file
//!
//! Streams rows from a `BatchReader`, converts each amount through a
//! `MoneyCodec` and writes the converted rows as they are produced.
//!
//! Fatal errors (missing file, failed writes) stop the batch. Malformed rows
//! are logged and skipped, and processing continues with the next row.

use crate::cli::Direction;
use crate::core::MoneyCodec;
use crate::io::csv_format::{batch_writer, convert_csv_record};
use crate::io::reader::BatchReader;
use crate::types::MoneyError;
use std::io::Write;
use std::path::Path;

/// Row counts for a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub skipped: usize,
}

/// Convert every row of `input_path` and write `id,amount` CSV to `output`
pub fn convert_file(
    input_path: &Path,
    direction: &Direction,
    codec: &MoneyCodec,
    output: &mut dyn Write,
) -> Result<BatchSummary, MoneyError> {
    let reader = BatchReader::new(input_path)?;
    let mut writer = batch_writer(output).map_err(write_error)?;
    let mut summary = BatchSummary::default();

    for result in reader {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable row");
                summary.skipped += 1;
                continue;
            }
        };

        match convert_csv_record(record, direction, codec) {
            Ok(converted) => {
                writer.serialize(converted).map_err(write_error)?;
                summary.converted += 1;
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping row");
                summary.skipped += 1;
            }
        }
    }

    writer.flush()?;
    tracing::debug!(
        converted = summary.converted,
        skipped = summary.skipped,
        "batch finished"
    );
    Ok(summary)
}

/// A failed write is an output problem, not a malformed row
fn write_error(error: csv::Error) -> MoneyError {
    MoneyError::IoError {
        message: error.to_string(),
    }
}
