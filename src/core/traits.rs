//! Core traits for transaction storage
//!
//! `TransactionRepository` is the seam between the persistence adapter and the
//! in-memory store, so a load or save can run against any implementation.

use crate::types::{LedgerError, NewTransaction, Transaction, TransactionId};

/// Trait for storing and retrieving transactions
///
/// The repository owns identifier allocation: identifiers start at 1, increase
/// monotonically and are never reused within one repository lifetime, except
/// when a full reload re-establishes identifiers through `restore`.
///
/// The counter is wider than `TransactionId` so that it can sit one past
/// `TransactionId::MAX` once every identifier has been handed out.
pub trait TransactionRepository {
    /// Assign the next identifier to `transaction` and store it
    ///
    /// Fails with `IdsExhausted` once `TransactionId::MAX` has been assigned.
    fn add(&mut self, transaction: NewTransaction) -> Result<Transaction, LedgerError>;

    /// Replace every field of the stored transaction with the same id
    ///
    /// Returns `false` and leaves the store unchanged when the id is unknown.
    fn update(&mut self, transaction: Transaction) -> bool;

    /// Remove a transaction, returning whether one was removed
    fn delete(&mut self, id: TransactionId) -> bool;

    /// Snapshot of a stored transaction
    fn get_by_id(&self, id: TransactionId) -> Option<Transaction>;

    /// All transactions in insertion order
    fn get_all(&self) -> &[Transaction];

    /// Remove everything and reset the identifier counter to 1
    fn clear(&mut self);

    /// Force the identifier counter; used by the load path
    fn set_next_id(&mut self, next_id: u64);

    /// Identifier the next `add` will assign
    fn next_id(&self) -> u64;

    /// Store a transaction under its existing identifier; used by the load path
    fn restore(&mut self, transaction: Transaction);

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.get_all().is_empty()
    }
}
