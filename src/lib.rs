//! Finance Ledger Library
//! # Overview
//!
//! This library provides a single-user personal finance ledger: it records
//! income and expense transactions, categorizes them, computes summaries and
//! persists everything to a CSV file.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Category, FinanceSummary, errors)
//! - [`cli`] - CLI argument parsing and command dispatch
//! - [`core`] - Business logic components:
//!   - [`core::repository`] - In-memory transaction store and identifier allocation
//!   - [`core::summary`] - Totals, balance and per-category breakdowns
//!   - [`core::ledger`] - Facade used by the command-line layer
//! - [`io`] - The ledger file:
//!   - [`io::csv_format`] - CSV dialect (quoting, row conversion)
//!   - [`io::persistence`] - Load/save orchestration
//!
//! # Ledger File
//!
//! ```text
//! Id,Date,Type,ExpenseCategory,IncomeCategory,Amount,Description
//! 1,2024-01-31,Income,,Salary,5000,January salary
//! 2,2024-02-01,Expense,Food,,12.50,"Groceries, weekly"
//! ```
//!
//! Identifiers are assigned by the repository and survive save/load cycles.
//! Malformed rows are skipped and counted when loading; they never abort a load.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{FinanceLedger, InMemoryRepository, TransactionRepository};
pub use io::{CsvStore, LoadOutcome, SaveOutcome};
pub use types::{
    Category, CategoryTotals, ExpenseCategory, FinanceSummary, IncomeCategory, LedgerError,
    NewTransaction, Transaction, TransactionId, TransactionType,
};
