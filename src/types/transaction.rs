//! Transaction-related types for the finance ledger
//!
//! This module defines the transaction type, the stored transaction record and
//! the draft used to add new transactions to a repository.

use super::category::{Category, ExpenseCategory, IncomeCategory};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Transaction identifier
///
/// Assigned by the repository, starting at 1.
pub type TransactionId = u32;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransactionType {
    /// Money coming in
    Income,

    /// Money going out
    Expense,
}

impl TransactionType {
    pub fn name(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(format!("Invalid transaction type '{}'", s)),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A recorded financial event
///
/// Values handed out by a repository are snapshots: editing one has no effect
/// until it is passed back to `update`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Identifier assigned by the repository
    pub id: TransactionId,

    pub date: NaiveDate,

    /// Exact decimal amount, no currency
    pub amount: Decimal,

    /// Category, which also determines the transaction type
    pub category: Category,

    /// Free-form text; may be empty or contain commas, quotes and newlines
    pub description: String,
}

impl Transaction {
    pub fn tx_type(&self) -> TransactionType {
        self.category.tx_type()
    }

    /// Expense category, set only for expenses with a recognized category
    pub fn expense_category(&self) -> Option<ExpenseCategory> {
        match self.category {
            Category::Expense(category) => Some(category),
            _ => None,
        }
    }

    /// Income category, set only for income with a recognized category
    pub fn income_category(&self) -> Option<IncomeCategory> {
        match self.category {
            Category::Income(category) => Some(category),
            _ => None,
        }
    }

    /// Category name as plain text, whatever the type
    pub fn category_name(&self) -> &str {
        self.category.name()
    }
}

/// Input for adding a transaction
///
/// Carries every field except the identifier, which only a repository assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
}

impl NewTransaction {
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        category: impl Into<Category>,
        description: impl Into<String>,
    ) -> Self {
        NewTransaction {
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Attach an identifier, producing the stored record
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            category: self.category,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Income", TransactionType::Income)]
    #[case("income", TransactionType::Income)]
    #[case("EXPENSE", TransactionType::Expense)]
    #[case(" Expense ", TransactionType::Expense)]
    fn test_transaction_type_from_str(#[case] input: &str, #[case] expected: TransactionType) {
        assert_eq!(input.parse::<TransactionType>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("deposit")]
    #[case("Incomes")]
    fn test_transaction_type_rejects_invalid(#[case] input: &str) {
        assert!(input.parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_category_fields_follow_type() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let expense = NewTransaction::new(date, Decimal::new(1250, 2), ExpenseCategory::Food, "")
            .with_id(1);
        assert_eq!(expense.tx_type(), TransactionType::Expense);
        assert_eq!(expense.expense_category(), Some(ExpenseCategory::Food));
        assert_eq!(expense.income_category(), None);
        assert_eq!(expense.category_name(), "Food");

        let income = NewTransaction::new(date, Decimal::new(5000, 0), IncomeCategory::Salary, "")
            .with_id(2);
        assert_eq!(income.tx_type(), TransactionType::Income);
        assert_eq!(income.expense_category(), None);
        assert_eq!(income.income_category(), Some(IncomeCategory::Salary));
        assert_eq!(income.category_name(), "Salary");
    }

    #[test]
    fn test_unrecognized_category_sets_neither_field() {
        let transaction = Transaction {
            id: 7,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            amount: Decimal::ONE,
            category: Category::Unrecognized {
                tx_type: TransactionType::Income,
                name: "Lottery".to_string(),
            },
            description: String::new(),
        };

        assert_eq!(transaction.tx_type(), TransactionType::Income);
        assert_eq!(transaction.expense_category(), None);
        assert_eq!(transaction.income_category(), None);
        assert_eq!(transaction.category_name(), "Lottery");
    }
}
