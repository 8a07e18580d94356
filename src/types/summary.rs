//! Aggregate summary types
//!
//! A `FinanceSummary` is derived on demand from repository contents and is
//! never persisted.

use super::category::{ExpenseCategory, IncomeCategory};
use rust_decimal::Decimal;

/// Per-category totals in order of first encounter
///
/// Only categories that have at least one transaction are present.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotals<K> {
    entries: Vec<(K, Decimal)>,
}

impl<K: Copy + PartialEq> CategoryTotals<K> {
    pub fn new() -> Self {
        CategoryTotals {
            entries: Vec::new(),
        }
    }

    /// Add `amount` to the total for `key`, appending the key if unseen
    ///
    /// Returns the new total, or `None` if it would overflow. The stored total
    /// is left as it was in that case.
    pub fn add(&mut self, key: K, amount: Decimal) -> Option<Decimal> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => {
                *total = total.checked_add(amount)?;
                Some(*total)
            }
            None => {
                self.entries.push((key, amount));
                Some(amount)
            }
        }
    }

    pub fn get(&self, key: K) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, Decimal)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Copy + PartialEq> Default for CategoryTotals<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Totals, balance and per-category breakdown of a ledger
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,

    /// `total_income - total_expense`
    pub balance: Decimal,

    pub income_by_category: CategoryTotals<IncomeCategory>,
    pub expense_by_category: CategoryTotals<ExpenseCategory>,

    /// Number of transactions the summary was computed from
    pub transaction_count: usize,
}

impl Default for FinanceSummary {
    fn default() -> Self {
        FinanceSummary {
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
            balance: Decimal::ZERO,
            income_by_category: CategoryTotals::new(),
            expense_by_category: CategoryTotals::new(),
            transaction_count: 0,
        }
    }
}
