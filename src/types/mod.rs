//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transaction record, type and identifier
//! - `category`: Expense and income categories
//! - `summary`: Derived aggregate totals
//! - `error`: Error types for the ledger

pub mod category;
pub mod error;
pub mod summary;
pub mod transaction;

pub use category::{Category, ExpenseCategory, IncomeCategory};
pub use error::LedgerError;
pub use summary::{CategoryTotals, FinanceSummary};
pub use transaction::{NewTransaction, Transaction, TransactionId, TransactionType};
