//! I/O module
//!
//! Handles batch conversion of CSV files.
//!
//! # Components
//!
//! - `csv_format` - CSV row format and per-row conversion
//! - `reader` - Streaming CSV reader with iterator interface
//! - `batch` - File-level conversion loop

pub mod batch;
pub mod csv_format;
pub mod reader;

pub use batch::{convert_file, BatchSummary};
pub use csv_format::{convert_csv_record, CsvRecord};
pub use reader::BatchReader;
