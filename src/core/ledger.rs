//! Ledger facade
//!
//! This module provides the `FinanceLedger`, the single entry point consumed by
//! the command-line layer. It coordinates the repository, the summary engine
//! and file persistence. A ledger is constructed once and passed explicitly to
//! every operation; there is no global instance.

use crate::core::repository::InMemoryRepository;
use crate::core::summary::summarize;
use crate::core::traits::TransactionRepository;
use crate::io::{CsvStore, LoadOutcome, SaveOutcome};
use crate::types::{
    Category, FinanceSummary, LedgerError, NewTransaction, Transaction, TransactionId,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;

/// Personal finance ledger
///
/// Generic over the repository so the same operations run against any
/// `TransactionRepository`; `InMemoryRepository` is the default.
pub struct FinanceLedger<R: TransactionRepository = InMemoryRepository> {
    repository: R,
}

impl FinanceLedger<InMemoryRepository> {
    /// Create an empty ledger backed by an in-memory repository
    pub fn new() -> Self {
        FinanceLedger {
            repository: InMemoryRepository::new(),
        }
    }
}

impl Default for FinanceLedger<InMemoryRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TransactionRepository> FinanceLedger<R> {
    pub fn with_repository(repository: R) -> Self {
        FinanceLedger { repository }
    }

    /// Record a new transaction
    ///
    /// The transaction type follows from `category`. The ledger assigns the
    /// identifier.
    ///
    /// # Returns
    ///
    /// The stored transaction, including its new identifier, or
    /// `IdsExhausted` if no identifier is left
    pub fn add(
        &mut self,
        date: NaiveDate,
        amount: Decimal,
        category: impl Into<Category>,
        description: impl Into<String>,
    ) -> Result<Transaction, LedgerError> {
        self.repository
            .add(NewTransaction::new(date, amount, category, description))
    }

    /// Snapshot of a transaction, or `None` if the id is unknown
    pub fn get(&self, id: TransactionId) -> Option<Transaction> {
        self.repository.get_by_id(id)
    }

    /// Snapshot of a transaction, failing with `NotFound` if the id is unknown
    pub fn require(&self, id: TransactionId) -> Result<Transaction, LedgerError> {
        self.get(id).ok_or_else(|| LedgerError::not_found(id))
    }

    /// All transactions in insertion order
    pub fn get_all(&self) -> &[Transaction] {
        self.repository.get_all()
    }

    /// Replace a stored transaction with a modified copy
    ///
    /// Returns `false` if no transaction has the copy's id.
    pub fn update(&mut self, transaction: Transaction) -> bool {
        self.repository.update(transaction)
    }

    /// Delete a transaction, returning whether one was removed
    pub fn delete(&mut self, id: TransactionId) -> bool {
        self.repository.delete(id)
    }

    /// Totals of the current contents; fails with `ArithmeticOverflow` if a
    /// total does not fit in a `Decimal`
    pub fn summary(&self) -> Result<FinanceSummary, LedgerError> {
        summarize(self.repository.get_all())
    }

    /// Write the ledger to `path`
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> SaveOutcome {
        CsvStore::new(path.as_ref()).save_to_file(&self.repository)
    }

    /// Replace the ledger contents with the file at `path`
    ///
    /// On failure the ledger is left unchanged.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> LoadOutcome {
        CsvStore::new(path.as_ref()).load_from_file(&mut self.repository)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }
}
