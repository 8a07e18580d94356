//! Error types for the finance ledger
//!
//! This module defines all error types that can occur while managing and
//! persisting transactions. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: Identifier does not resolve to a stored transaction
//! - **Load Errors**: Missing file, file without data rows
//! - **Row Errors**: A single malformed row (non-fatal, counted as a skip)
//! - **I/O Errors**: Read/write failures (permissions, disk, path)
//! - **Arithmetic Errors**: Overflow while totalling amounts
//! - **Allocation Errors**: No identifier left to assign

use crate::types::TransactionId;
use thiserror::Error;

/// Main error type for the finance ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Identifier does not resolve to a stored transaction
    #[error("Transaction {id} not found")]
    NotFound {
        /// The identifier that was looked up
        id: TransactionId,
    },

    /// Load target path does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// Load target has no data rows after the header
    #[error("File {path} is empty or contains only a header")]
    EmptyOrHeaderOnly {
        /// The path that was read
        path: String,
    },

    /// A single row failed structural or type parsing
    ///
    /// This is a recoverable error - the row is skipped and loading
    /// continues with the next row.
    #[error("Malformed row{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedRow {
        /// Line number where the row starts (if available)
        line: Option<u64>,
        /// Description of the problem
        message: String,
    },

    /// Underlying read or write failure
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A total or the balance would overflow
    ///
    /// The ledger itself is unchanged; only the derived value is unavailable.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Quantity that would overflow
        operation: String,
    },

    /// Every identifier has already been assigned
    #[error("No transaction identifiers left (last assigned {last})")]
    IdsExhausted {
        /// Highest identifier that can be assigned
        last: TransactionId,
    },

    /// User-supplied value could not be converted
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the rejected value
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return LedgerError::IoError {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());
        LedgerError::MalformedRow {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create a NotFound error
    pub fn not_found(id: TransactionId) -> Self {
        LedgerError::NotFound { id }
    }

    /// Create a MalformedRow error
    pub fn malformed_row(line: Option<u64>, message: impl Into<String>) -> Self {
        LedgerError::MalformedRow {
            line,
            message: message.into(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        LedgerError::InvalidInput {
            message: message.into(),
        }
    }
}
