//! Command dispatch
//!
//! Each invocation loads the ledger file, runs one command against the ledger
//! and saves the file again if the command changed anything. A missing or
//! empty ledger file starts an empty ledger.

use crate::cli::args::{AddArgs, CliArgs, Command, UpdateArgs};
use crate::core::FinanceLedger;
use crate::io::CsvStore;
use crate::types::{Category, FinanceSummary, LedgerError, Transaction, TransactionType};
use chrono::Local;
use log::{info, warn};
use rust_decimal::Decimal;
use std::io::Write;

/// Run the command described by `args`, writing user-facing output to `out`
pub fn run(args: &CliArgs, out: &mut dyn Write) -> Result<(), LedgerError> {
    let mut ledger = FinanceLedger::new();
    open_ledger(&mut ledger, args)?;

    let changed = match &args.command {
        Command::Add(add) => {
            let transaction = add_transaction(&mut ledger, add)?;
            writeln!(out, "Added transaction {}", transaction.id)?;
            true
        }
        Command::List => {
            list_transactions(ledger.get_all(), out)?;
            false
        }
        Command::Show { id } => {
            let transaction = ledger.require(*id)?;
            print_transaction(&transaction, out)?;
            false
        }
        Command::Update(update) => {
            update_transaction(&mut ledger, update)?;
            writeln!(out, "Updated transaction {}", update.id)?;
            true
        }
        Command::Delete { id } => {
            if !ledger.delete(*id) {
                return Err(LedgerError::not_found(*id));
            }
            writeln!(out, "Deleted transaction {}", id)?;
            true
        }
        Command::Summary => {
            print_summary(&ledger.summary()?, out)?;
            false
        }
        Command::Categories => {
            print_categories(out)?;
            false
        }
    };

    if changed {
        let outcome = ledger.save_to_file(&args.file);
        if !outcome.success {
            return Err(LedgerError::IoError {
                message: outcome.message,
            });
        }
        info!("{}", outcome.message);
    }

    Ok(())
}

fn open_ledger(ledger: &mut FinanceLedger, args: &CliArgs) -> Result<(), LedgerError> {
    let store = CsvStore::new(&args.file);
    match store.load(ledger.repository_mut()) {
        Ok(report) => {
            if report.skipped > 0 {
                warn!(
                    "Skipped {} malformed row(s) in {}",
                    report.skipped,
                    store.path().display()
                );
            }
            Ok(())
        }
        Err(LedgerError::FileNotFound { .. }) | Err(LedgerError::EmptyOrHeaderOnly { .. }) => {
            info!("Starting empty ledger at {}", store.path().display());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Resolve a category given by name or by its 1-based menu number
pub fn resolve_category(tx_type: TransactionType, input: &str) -> Result<Category, LedgerError> {
    match input.trim().parse::<usize>() {
        Ok(choice) => Category::from_menu_choice(tx_type, choice).ok_or_else(|| {
            LedgerError::invalid_input(format!(
                "no {} category numbered {}",
                tx_type.name().to_lowercase(),
                choice
            ))
        }),
        Err(_) => Category::parse_known(tx_type, input).map_err(LedgerError::invalid_input),
    }
}

fn check_amount(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount.is_sign_negative() {
        return Err(LedgerError::invalid_input(format!(
            "amount must not be negative, got {}",
            amount
        )));
    }
    Ok(amount)
}

fn add_transaction(ledger: &mut FinanceLedger, add: &AddArgs) -> Result<Transaction, LedgerError> {
    let category = resolve_category(add.tx_type.into(), &add.category)?;
    let amount = check_amount(add.amount)?;
    let date = add.date.unwrap_or_else(|| Local::now().date_naive());

    ledger.add(date, amount, category, add.description.clone())
}

fn update_transaction(ledger: &mut FinanceLedger, update: &UpdateArgs) -> Result<(), LedgerError> {
    let mut transaction = ledger.require(update.id)?;

    if let Some(category) = &update.category {
        let tx_type = update
            .tx_type
            .map(TransactionType::from)
            .unwrap_or_else(|| transaction.tx_type());
        transaction.category = resolve_category(tx_type, category)?;
    }
    if let Some(amount) = update.amount {
        transaction.amount = check_amount(amount)?;
    }
    if let Some(date) = update.date {
        transaction.date = date;
    }
    if let Some(description) = &update.description {
        transaction.description = description.clone();
    }

    if ledger.update(transaction) {
        Ok(())
    } else {
        Err(LedgerError::not_found(update.id))
    }
}

fn list_transactions(transactions: &[Transaction], out: &mut dyn Write) -> Result<(), LedgerError> {
    if transactions.is_empty() {
        writeln!(out, "No transactions recorded")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:>5}  {:<10}  {:<7}  {:<13}  {:>12}  Description",
        "Id", "Date", "Type", "Category", "Amount"
    )?;
    for transaction in transactions {
        writeln!(
            out,
            "{:>5}  {:<10}  {:<7}  {:<13}  {:>12}  {}",
            transaction.id,
            transaction.date,
            transaction.tx_type().name(),
            transaction.category_name(),
            transaction.amount,
            transaction.description.replace('\n', " / ")
        )?;
    }
    Ok(())
}

fn print_transaction(transaction: &Transaction, out: &mut dyn Write) -> Result<(), LedgerError> {
    writeln!(out, "Id:          {}", transaction.id)?;
    writeln!(out, "Date:        {}", transaction.date)?;
    writeln!(out, "Type:        {}", transaction.tx_type())?;
    writeln!(out, "Category:    {}", transaction.category_name())?;
    writeln!(out, "Amount:      {}", transaction.amount)?;
    writeln!(out, "Description: {}", transaction.description)?;
    Ok(())
}

fn print_summary(summary: &FinanceSummary, out: &mut dyn Write) -> Result<(), LedgerError> {
    writeln!(out, "Transactions:  {}", summary.transaction_count)?;
    writeln!(out, "Total income:  {}", summary.total_income)?;
    writeln!(out, "Total expense: {}", summary.total_expense)?;
    writeln!(out, "Balance:       {}", summary.balance)?;

    if !summary.income_by_category.is_empty() {
        writeln!(out, "\nIncome by category:")?;
        for (category, total) in summary.income_by_category.iter() {
            writeln!(out, "  {:<13} {:>12}", category.name(), total)?;
        }
    }
    if !summary.expense_by_category.is_empty() {
        writeln!(out, "\nExpense by category:")?;
        for (category, total) in summary.expense_by_category.iter() {
            writeln!(out, "  {:<13} {:>12}", category.name(), total)?;
        }
    }
    Ok(())
}

fn print_categories(out: &mut dyn Write) -> Result<(), LedgerError> {
    for tx_type in [TransactionType::Income, TransactionType::Expense] {
        writeln!(out, "{} categories:", tx_type)?;
        for (number, name) in Category::menu_names(tx_type).iter().enumerate() {
            writeln!(out, "  {}. {}", number + 1, name)?;
        }
    }
    Ok(())
}
