//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Repository trait used by persistence
//! - `repository` - In-memory transaction store and identifier allocation
//! - `summary` - Aggregate totals over a transaction snapshot
//! - `ledger` - Facade coordinating repository, summary and persistence

pub mod ledger;
pub mod repository;
pub mod summary;
pub mod traits;

pub use ledger::FinanceLedger;
pub use repository::InMemoryRepository;
pub use summary::summarize;
pub use traits::TransactionRepository;
