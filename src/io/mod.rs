//! I/O module
//!
//! Handles the ledger file.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, serialization)
//! - `persistence` - Loading and saving a repository through a file

pub mod csv_format;
pub mod persistence;

pub use csv_format::{convert_csv_record, read_transactions_csv, write_transactions_csv};
pub use persistence::{CsvStore, LoadOutcome, LoadReport, SaveOutcome};
