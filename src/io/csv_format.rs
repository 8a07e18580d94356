//! CSV format handling for the ledger file
//!
//! This module centralizes all CSV format concerns, providing:
//! - The header and column layout of the ledger file
//! - Conversion from CSV records to transactions
//! - Transaction serialization
//!
//! All functions work on readers and writers (no file handling) for easy testing.
//!
//! # Format
//!
//! ```text
//! Id,Date,Type,ExpenseCategory,IncomeCategory,Amount,Description
//! 1,2024-01-31,Income,,Salary,5000,January salary
//! 2,2024-02-01,Expense,Food,,12.50,"Coffee, cake and a ""treat"""
//! ```
//!
//! Fields containing a comma, a double quote or a newline are quoted, with
//! embedded quotes doubled. Categories are stored by name.

use crate::types::{Category, LedgerError, Transaction, TransactionId, TransactionType};
use chrono::NaiveDate;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::warn;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;
use std::io::{Read, Write};
use std::str::FromStr;

/// Column names, in file order
pub const HEADER: [&str; 7] = [
    "Id",
    "Date",
    "Type",
    "ExpenseCategory",
    "IncomeCategory",
    "Amount",
    "Description",
];

/// Minimum number of fields a data row must have
pub const FIELD_COUNT: usize = HEADER.len();

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Serialized shape of one data row
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: TransactionId,
    date: String,
    tx_type: TransactionType,
    expense_category: &'a str,
    income_category: &'a str,
    amount: String,
    description: &'a str,
}

impl<'a> From<&'a Transaction> for CsvRow<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        let tx_type = transaction.tx_type();
        let (expense_category, income_category) = match tx_type {
            TransactionType::Expense => (transaction.category_name(), ""),
            TransactionType::Income => ("", transaction.category_name()),
        };

        CsvRow {
            id: transaction.id,
            date: transaction.date.format(DATE_FORMAT).to_string(),
            tx_type,
            expense_category,
            income_category,
            amount: transaction.amount.to_string(),
            description: &transaction.description,
        }
    }
}

/// Result of decoding a ledger file
#[derive(Debug, Default)]
pub struct DecodedRows {
    /// Accepted transactions, in file order
    pub transactions: Vec<Transaction>,

    /// One `MalformedRow` error per skipped row
    pub skipped: Vec<LedgerError>,
}

impl DecodedRows {
    /// Number of data rows seen, accepted or not
    pub fn row_count(&self) -> usize {
        self.transactions.len() + self.skipped.len()
    }
}

/// Convert a CSV record into a transaction
///
/// This function:
/// - Requires at least seven fields (extra fields are ignored)
/// - Parses the identifier, date, type and amount, rejecting the row if any fails
/// - Reads the category from the column matching the type; a token naming no
///   category of that type is kept as `Category::Unrecognized`
/// - Warns about a token in the other type's category column, which is not
///   kept and is gone after the next save
///
/// # Arguments
///
/// * `record` - The raw CSV record
/// * `line` - Line number of the record, for error messages
///
/// # Returns
///
/// * `Ok(Transaction)` - Successfully converted record
/// * `Err(LedgerError::MalformedRow)` - Description of the conversion failure
pub fn convert_csv_record(
    record: &StringRecord,
    line: Option<u64>,
) -> Result<Transaction, LedgerError> {
    if record.len() < FIELD_COUNT {
        return Err(LedgerError::malformed_row(
            line,
            format!("expected {} fields, found {}", FIELD_COUNT, record.len()),
        ));
    }

    let id_field = record[0].trim();
    let id = match TransactionId::from_str(id_field) {
        Ok(id) if id != 0 => id,
        Ok(_) => {
            return Err(LedgerError::malformed_row(
                line,
                format!("identifier {} out of range", id_field),
            ))
        }
        Err(_) => {
            return Err(LedgerError::malformed_row(
                line,
                format!("invalid identifier '{}'", id_field),
            ))
        }
    };

    let date = NaiveDate::parse_from_str(record[1].trim(), DATE_FORMAT).map_err(|_| {
        LedgerError::malformed_row(line, format!("invalid date '{}' for id {}", &record[1], id))
    })?;

    let tx_type = TransactionType::from_str(&record[2])
        .map_err(|e| LedgerError::malformed_row(line, format!("{} for id {}", e, id)))?;

    let amount = Decimal::from_str(record[5].trim()).map_err(|_| {
        LedgerError::malformed_row(
            line,
            format!("invalid amount '{}' for id {}", &record[5], id),
        )
    })?;

    let (category_token, other_token) = category_columns(record, tx_type);
    if !other_token.trim().is_empty() {
        warn!(
            "Ignoring category '{}' in the wrong column for {} id {}",
            other_token, tx_type, id
        );
    }
    let category = Category::parse_for(tx_type, category_token);
    if !category.is_recognized() {
        warn!(
            "Unrecognized {} category '{}' for id {}",
            tx_type, category_token, id
        );
    }

    Ok(Transaction {
        id,
        date,
        amount,
        category,
        description: record[6].to_string(),
    })
}

/// Split the two category columns into the one matching `tx_type` and the other
fn category_columns(record: &StringRecord, tx_type: TransactionType) -> (&str, &str) {
    match tx_type {
        TransactionType::Expense => (&record[3], &record[4]),
        TransactionType::Income => (&record[4], &record[3]),
    }
}

/// Read every data row of a ledger file
///
/// The first record is treated as the header. Rows that fail conversion, and
/// rows repeating an identifier already accepted, are collected as skips.
/// Only an I/O failure aborts reading.
pub fn read_transactions_csv<R: Read>(input: R) -> Result<DecodedRows, LedgerError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(input);

    let mut decoded = DecodedRows::default();
    let mut seen_ids = HashSet::new();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let error = LedgerError::from(e);
                warn!("Skipping row: {}", error);
                decoded.skipped.push(error);
                continue;
            }
        };

        let line = record.position().map(|pos| pos.line());
        let converted = convert_csv_record(&record, line).and_then(|transaction| {
            if seen_ids.insert(transaction.id) {
                Ok(transaction)
            } else {
                Err(LedgerError::malformed_row(
                    line,
                    format!("duplicate identifier {}", transaction.id),
                ))
            }
        });

        match converted {
            Ok(transaction) => decoded.transactions.push(transaction),
            Err(error) => {
                warn!("Skipping row: {}", error);
                decoded.skipped.push(error);
            }
        }
    }

    Ok(decoded)
}

/// Write transactions in ledger format
///
/// Writes the header followed by one row per transaction, in the given order.
///
/// # Arguments
///
/// * `transactions` - Transactions to write
/// * `output` - Mutable reference to a writer for the CSV text
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(LedgerError)` if a write error occurred
pub fn write_transactions_csv(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(output);

    writer.write_record(HEADER)?;

    for transaction in transactions {
        writer.serialize(CsvRow::from(transaction))?;
    }

    writer.flush()?;

    Ok(())
}
