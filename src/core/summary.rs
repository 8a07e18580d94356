//! Summary engine
//!
//! Derives aggregate totals from a snapshot of transactions. Pure function of
//! its input; nothing here touches persistence.

use crate::types::{Category, FinanceSummary, LedgerError, Transaction, TransactionType};

/// Compute totals, balance and per-category breakdowns
///
/// Transactions with an unrecognized category count toward the total of their
/// type but appear in neither category breakdown.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if a total or the balance exceeds the range of
/// `Decimal`.
pub fn summarize(transactions: &[Transaction]) -> Result<FinanceSummary, LedgerError> {
    let mut summary = FinanceSummary {
        transaction_count: transactions.len(),
        ..FinanceSummary::default()
    };

    for transaction in transactions {
        let amount = transaction.amount;
        match transaction.tx_type() {
            TransactionType::Income => {
                summary.total_income = summary
                    .total_income
                    .checked_add(amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("total income"))?;
            }
            TransactionType::Expense => {
                summary.total_expense = summary
                    .total_expense
                    .checked_add(amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("total expense"))?;
            }
        }

        match transaction.category {
            Category::Income(category) => {
                summary
                    .income_by_category
                    .add(category, amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("income by category"))?;
            }
            Category::Expense(category) => {
                summary
                    .expense_by_category
                    .add(category, amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("expense by category"))?;
            }
            Category::Unrecognized { .. } => {}
        }
    }

    summary.balance = summary
        .total_income
        .checked_sub(summary.total_expense)
        .ok_or_else(|| LedgerError::arithmetic_overflow("balance"))?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExpenseCategory, IncomeCategory, NewTransaction};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn tx(id: u32, amount: i64, category: Category, description: &str) -> Transaction {
        NewTransaction::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            Decimal::new(amount, 0),
            category,
            description,
        )
        .with_id(id)
    }

    #[test]
    fn test_empty_summary_is_zero() {
        let summary = summarize(&[]).unwrap();

        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.total_expense, Decimal::ZERO);
        assert_eq!(summary.balance, Decimal::ZERO);
        assert!(summary.income_by_category.is_empty());
        assert!(summary.expense_by_category.is_empty());
        assert_eq!(summary.transaction_count, 0);
    }

    #[test]
    fn test_salary_food_transport_scenario() {
        let transactions = vec![
            tx(1, 5000, IncomeCategory::Salary.into(), "Salary"),
            tx(2, 500, IncomeCategory::Salary.into(), "Bonus"),
            tx(3, 200, ExpenseCategory::Food.into(), "Groceries"),
            tx(4, 100, ExpenseCategory::Food.into(), "Restaurant"),
            tx(5, 50, ExpenseCategory::Transport.into(), "Bus"),
        ];

        let summary = summarize(&transactions).unwrap();

        assert_eq!(summary.total_income, Decimal::new(5500, 0));
        assert_eq!(summary.total_expense, Decimal::new(350, 0));
        assert_eq!(summary.balance, Decimal::new(5150, 0));
        assert_eq!(
            summary.income_by_category.get(IncomeCategory::Salary),
            Some(Decimal::new(5500, 0))
        );
        assert_eq!(
            summary.expense_by_category.get(ExpenseCategory::Food),
            Some(Decimal::new(300, 0))
        );
        assert_eq!(
            summary.expense_by_category.get(ExpenseCategory::Transport),
            Some(Decimal::new(50, 0))
        );
        assert_eq!(summary.income_by_category.len(), 1);
        assert_eq!(summary.expense_by_category.len(), 2);
        assert_eq!(summary.expense_by_category.get(ExpenseCategory::Housing), None);
    }

    #[test]
    fn test_balance_can_go_negative() {
        let transactions = vec![
            tx(1, 100, IncomeCategory::Gift.into(), ""),
            tx(2, 250, ExpenseCategory::Housing.into(), ""),
        ];

        assert_eq!(summarize(&transactions).unwrap().balance, Decimal::new(-150, 0));
    }

    #[test]
    fn test_unrecognized_category_counts_toward_totals_only() {
        let transactions = vec![
            tx(1, 40, ExpenseCategory::Food.into(), ""),
            tx(
                2,
                60,
                Category::Unrecognized {
                    tx_type: TransactionType::Expense,
                    name: "Pets".to_string(),
                },
                "",
            ),
        ];

        let summary = summarize(&transactions).unwrap();

        assert_eq!(summary.total_expense, Decimal::new(100, 0));
        assert_eq!(summary.expense_by_category.len(), 1);
        assert_eq!(
            summary.expense_by_category.get(ExpenseCategory::Food),
            Some(Decimal::new(40, 0))
        );
    }

    #[test]
    fn test_total_overflow_is_reported() {
        let mut transactions = vec![
            tx(1, 0, IncomeCategory::Salary.into(), ""),
            tx(2, 1, IncomeCategory::Gift.into(), ""),
        ];
        transactions[0].amount = Decimal::MAX;

        assert_eq!(
            summarize(&transactions),
            Err(LedgerError::arithmetic_overflow("total income"))
        );
    }

    #[test]
    fn test_balance_overflow_is_reported() {
        let mut transactions = vec![
            tx(1, 0, IncomeCategory::Salary.into(), ""),
            tx(2, 0, ExpenseCategory::Housing.into(), ""),
        ];
        transactions[0].amount = Decimal::MAX;
        transactions[1].amount = -Decimal::MAX;

        assert_eq!(
            summarize(&transactions),
            Err(LedgerError::arithmetic_overflow("balance"))
        );
    }
}
