use crate::types::{TransactionId, TransactionType};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Environment variable naming the ledger file loaded at startup
pub const LEDGER_FILE_ENV: &str = "FINANCE_LEDGER_FILE";

/// Record income and expenses in a CSV ledger
#[derive(Parser, Debug)]
#[command(name = "ledger")]
#[command(about = "Record income and expenses in a CSV ledger", long_about = None)]
pub struct CliArgs {
    /// Ledger file, loaded at startup and saved after changes
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        env = LEDGER_FILE_ENV,
        default_value = "transactions.csv",
        global = true
    )]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Record a new transaction
    Add(AddArgs),

    /// List all transactions
    List,

    /// Show a single transaction
    Show {
        #[arg(value_name = "ID")]
        id: TransactionId,
    },

    /// Change fields of an existing transaction
    Update(UpdateArgs),

    /// Delete a transaction
    Delete {
        #[arg(value_name = "ID")]
        id: TransactionId,
    },

    /// Show totals, balance and per-category breakdown
    Summary,

    /// List the numbered categories for each transaction type
    Categories,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct AddArgs {
    /// Transaction type
    #[arg(long = "type", value_name = "TYPE")]
    pub tx_type: TypeArg,

    /// Amount, a non-negative decimal without currency symbol
    #[arg(long, value_name = "AMOUNT")]
    pub amount: Decimal,

    /// Category name, or its number from `ledger categories`
    #[arg(long, value_name = "CATEGORY")]
    pub category: String,

    /// Date of the transaction (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    #[arg(long, value_name = "TEXT", default_value = "")]
    pub description: String,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct UpdateArgs {
    #[arg(value_name = "ID")]
    pub id: TransactionId,

    /// New type; requires --category
    #[arg(long = "type", value_name = "TYPE", requires = "category")]
    pub tx_type: Option<TypeArg>,

    #[arg(long, value_name = "AMOUNT")]
    pub amount: Option<Decimal>,

    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,
}

/// Transaction type as accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum TypeArg {
    Income,
    Expense,
}

impl From<TypeArg> for TransactionType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Income => TransactionType::Income,
            TypeArg::Expense => TransactionType::Expense,
        }
    }
}
