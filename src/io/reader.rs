//! Streaming CSV reader for batch conversion
//!
//! Yields one `CsvRecord` per row without loading the file into memory.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, unreadable header) are returned from `new()`
//! - Individual row errors are yielded as `Err` items with their line number,
//!   so callers can skip them and keep going

use crate::io::csv_format::CsvRecord;
use crate::types::MoneyError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming reader over `id,amount` rows
#[derive(Debug)]
pub struct BatchReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    row: StringRecord,
}

impl BatchReader {
    /// Open a CSV file and read its header
    ///
    /// The reader trims whitespace from all fields and allows rows without
    /// an amount column.
    pub fn new(path: &Path) -> Result<Self, MoneyError> {
        let file = File::open(path).map_err(|e| MoneyError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            row: StringRecord::new(),
        })
    }
}

impl Iterator for BatchReader {
    type Item = Result<CsvRecord, MoneyError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.row) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.row.position().map(|pos| pos.line());
                Some(
                    self.row
                        .deserialize(Some(&self.headers))
                        .map_err(|e| MoneyError::parse_error(line, e.to_string())),
                )
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_batch_reader_fails_on_missing_file() {
        let result = BatchReader::new(Path::new("nonexistent.csv"));
        match result {
            Err(MoneyError::IoError { message }) => {
                assert!(message.contains("Failed to open file"))
            }
            other => panic!("Expected IoError, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_reader_reads_rows() {
        let file = create_temp_csv("id,amount\na,100\nb,\"$1,000.00\"\nc,\n");

        let records: Vec<_> = BatchReader::new(file.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, "a");
        assert_eq!(records[0].amount.as_deref(), Some("100"));
        assert_eq!(records[1].amount.as_deref(), Some("$1,000.00"));
        assert_eq!(records[2].amount, None);
    }

    #[test]
    fn test_batch_reader_handles_missing_amount_column() {
        let file = create_temp_csv("id,amount\nonly-id\n");

        let records: Vec<_> = BatchReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 1);
        let record = records[0].as_ref().unwrap();
        assert_eq!(record.id, "only-id");
        assert_eq!(record.amount, None);
    }

    #[test]
    fn test_batch_reader_trims_whitespace() {
        let file = create_temp_csv("id,amount\n  x  ,  12.50  \n");

        let records: Vec<_> = BatchReader::new(file.path()).unwrap().collect();

        let record = records[0].as_ref().unwrap();
        assert_eq!(record.id, "x");
        assert_eq!(record.amount.as_deref(), Some("12.50"));
    }

    #[test]
    fn test_batch_reader_empty_file_after_header() {
        let file = create_temp_csv("id,amount\n");
        assert_eq!(BatchReader::new(file.path()).unwrap().count(), 0);
    }
}
