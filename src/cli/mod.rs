// CLI module
// Command-line interface, argument parsing and command dispatch

mod args;
mod commands;

pub use args::{AddArgs, CliArgs, Command, TypeArg, UpdateArgs, LEDGER_FILE_ENV};
pub use commands::{resolve_category, run};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// This function parses the command-line arguments and returns a `CliArgs` struct
/// containing the parsed values. If parsing fails (e.g., invalid arguments, missing
/// required arguments, or --help flag), clap will automatically display an error
/// message or help text and exit the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
