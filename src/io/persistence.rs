//! File persistence for a transaction repository
//!
//! `CsvStore` orchestrates reading and writing the ledger file, delegating the
//! format to the `csv_format` module.
//!
//! # Loading
//!
//! The whole file is read and decoded before the repository is touched. Only a
//! successful read replaces the repository contents; malformed rows are
//! skipped and counted without aborting the load.
//!
//! # Saving
//!
//! Rows are written to a sibling temporary file which is then renamed over the
//! target, so a failed write leaves any previous file intact.

use crate::core::traits::TransactionRepository;
use crate::io::csv_format::{read_transactions_csv, write_transactions_csv};
use crate::types::LedgerError;
use log::{debug, info};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Counts reported by a successful load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,

    /// `MalformedRow` errors describing each skipped row
    pub skipped_rows: Vec<LedgerError>,
}

/// Outcome of a load, as shown to a user
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub success: bool,
    pub message: String,
    pub loaded_count: usize,
    pub skipped_count: usize,
}

/// Outcome of a save, as shown to a user
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub success: bool,
    pub message: String,
}

/// Ledger file at a fixed path
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the repository contents with the transactions in the file
    ///
    /// Accepted rows keep their file identifiers, and the repository's counter
    /// is set one past the largest of them (or to 1 when none were accepted).
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if the path does not exist
    /// * `EmptyOrHeaderOnly` if the file has no data rows
    /// * `IoError` if reading fails
    ///
    /// The repository is unchanged whenever an error is returned.
    pub fn load<R>(&self, repository: &mut R) -> Result<LoadReport, LedgerError>
    where
        R: TransactionRepository + ?Sized,
    {
        match fs::metadata(&self.path) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LedgerError::FileNotFound {
                    path: self.path.display().to_string(),
                });
            }
            Err(e) => {
                return Err(LedgerError::IoError {
                    message: format!("Failed to access {}: {}", self.path.display(), e),
                });
            }
        }

        let file = File::open(&self.path)?;
        let decoded = read_transactions_csv(BufReader::new(file))?;

        if decoded.row_count() == 0 {
            return Err(LedgerError::EmptyOrHeaderOnly {
                path: self.path.display().to_string(),
            });
        }

        let max_id = decoded.transactions.iter().map(|t| t.id).max();
        let loaded = decoded.transactions.len();

        repository.clear();
        for transaction in decoded.transactions {
            repository.restore(transaction);
        }
        repository.set_next_id(max_id.map_or(1, |id| u64::from(id) + 1));

        let report = LoadReport {
            loaded,
            skipped: decoded.skipped.len(),
            skipped_rows: decoded.skipped,
        };
        info!(
            "Loaded {} transaction(s) from {} ({} skipped)",
            report.loaded,
            self.path.display(),
            report.skipped
        );
        Ok(report)
    }

    /// Write every transaction in the repository to the file
    ///
    /// # Returns
    ///
    /// * `Ok(count)` - Number of transactions written
    /// * `Err(LedgerError::IoError)` - If the file could not be written
    pub fn save<R>(&self, repository: &R) -> Result<usize, LedgerError>
    where
        R: TransactionRepository + ?Sized,
    {
        let temp_path = self.temp_path();
        let transactions = repository.get_all();

        if let Err(e) = write_file(&temp_path, |out| write_transactions_csv(transactions, out)) {
            // Best effort; the original error is what matters
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(LedgerError::IoError {
                message: format!("Failed to replace {}: {}", self.path.display(), e),
            });
        }

        debug!(
            "Saved {} transaction(s) to {}",
            transactions.len(),
            self.path.display()
        );
        Ok(transactions.len())
    }

    /// Load, reporting the result as an outcome value instead of an error
    pub fn load_from_file<R>(&self, repository: &mut R) -> LoadOutcome
    where
        R: TransactionRepository + ?Sized,
    {
        match self.load(repository) {
            Ok(report) => {
                let message = format!(
                    "Loaded {} transaction(s) from {}, skipped {} malformed row(s)",
                    report.loaded,
                    self.path.display(),
                    report.skipped
                );
                LoadOutcome {
                    success: true,
                    message,
                    loaded_count: report.loaded,
                    skipped_count: report.skipped,
                }
            }
            Err(e) => LoadOutcome {
                success: false,
                message: e.to_string(),
                loaded_count: 0,
                skipped_count: 0,
            },
        }
    }

    /// Save, reporting the result as an outcome value instead of an error
    pub fn save_to_file<R>(&self, repository: &R) -> SaveOutcome
    where
        R: TransactionRepository + ?Sized,
    {
        match self.save(repository) {
            Ok(count) => SaveOutcome {
                success: true,
                message: format!("Saved {} transaction(s) to {}", count, self.path.display()),
            },
            Err(e) => SaveOutcome {
                success: false,
                message: format!("Failed to save {}: {}", self.path.display(), e),
            },
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

fn write_file<F>(path: &Path, write: F) -> Result<(), LedgerError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), LedgerError>,
{
    let file = File::create(path).map_err(|e| LedgerError::IoError {
        message: format!("Failed to create {}: {}", path.display(), e),
    })?;

    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}
