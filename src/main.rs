//! Finance Ledger CLI
//!
//! Command-line interface for recording income and expenses in a CSV ledger.
//!
//! # Usage
//!
//! ```bash
//! ledger add --type expense --amount 12.50 --category Food --description "Lunch"
//! ledger --file budget.csv list
//! ledger update 3 --amount 15
//! ledger summary
//! ```
//!
//! The ledger file defaults to `transactions.csv` and can be set with `--file`
//! or the `FINANCE_LEDGER_FILE` environment variable. Log verbosity follows
//! `RUST_LOG` (default: `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unknown id, invalid input, unreadable or unwritable file, etc.)

use env_logger::Env;
use finance_ledger::cli;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = cli::parse_args();

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
