//! In-memory transaction repository
//!
//! This module provides the `InMemoryRepository`, the authoritative store of
//! transactions for the current process.
//!
//! # Layout
//!
//! Transactions live in a `Vec` in insertion order, with a `HashMap` from
//! identifier to position for lookups. Every mutation keeps the two in step.

use crate::core::traits::TransactionRepository;
use crate::types::{LedgerError, NewTransaction, Transaction, TransactionId};
use log::debug;
use std::collections::HashMap;

/// In-memory transaction store with identifier allocation
#[derive(Debug)]
pub struct InMemoryRepository {
    /// Transactions in insertion order
    transactions: Vec<Transaction>,

    /// Map of transaction ID to position in `transactions`
    index: HashMap<TransactionId, usize>,

    /// Next identifier to assign; `TransactionId::MAX + 1` when exhausted
    next_id: u64,
}

impl InMemoryRepository {
    /// Create a new empty repository
    ///
    /// # Returns
    ///
    /// A new InMemoryRepository whose first `add` assigns identifier 1
    pub fn new() -> Self {
        InMemoryRepository {
            transactions: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
        }
    }

    fn push(&mut self, transaction: Transaction) {
        self.index.insert(transaction.id, self.transactions.len());
        self.transactions.push(transaction);
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionRepository for InMemoryRepository {
    fn add(&mut self, transaction: NewTransaction) -> Result<Transaction, LedgerError> {
        let id = TransactionId::try_from(self.next_id).map_err(|_| LedgerError::IdsExhausted {
            last: TransactionId::MAX,
        })?;
        self.next_id += 1;

        let stored = transaction.with_id(id);
        self.push(stored.clone());
        debug!("Added transaction {}", id);
        Ok(stored)
    }

    fn update(&mut self, transaction: Transaction) -> bool {
        match self.index.get(&transaction.id) {
            Some(&position) => {
                debug!("Updated transaction {}", transaction.id);
                self.transactions[position] = transaction;
                true
            }
            None => false,
        }
    }

    fn delete(&mut self, id: TransactionId) -> bool {
        let Some(position) = self.index.remove(&id) else {
            return false;
        };

        self.transactions.remove(position);
        // Everything after the removed slot shifted down by one
        for (offset, transaction) in self.transactions[position..].iter().enumerate() {
            self.index.insert(transaction.id, position + offset);
        }
        debug!("Deleted transaction {}", id);
        true
    }

    fn get_by_id(&self, id: TransactionId) -> Option<Transaction> {
        self.index
            .get(&id)
            .map(|&position| self.transactions[position].clone())
    }

    fn get_all(&self) -> &[Transaction] {
        &self.transactions
    }

    fn clear(&mut self) {
        self.transactions.clear();
        self.index.clear();
        self.next_id = 1;
    }

    fn set_next_id(&mut self, next_id: u64) {
        self.next_id = next_id;
    }

    fn next_id(&self) -> u64 {
        self.next_id
    }

    fn restore(&mut self, transaction: Transaction) {
        self.next_id = self.next_id.max(u64::from(transaction.id) + 1);

        match self.index.get(&transaction.id) {
            Some(&position) => self.transactions[position] = transaction,
            None => self.push(transaction),
        }
    }
}
