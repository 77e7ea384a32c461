#![doc(test(attr(deny(warnings))))]

//! Accounting Core keeps a personal book of income and expense transactions,
//! a user-managed category list, and the filtering and statement logic that
//! sits on top of them. State lives in an injected key-value store as JSON.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::{Accounting, CategoryRepository, StatementService, TransactionRepository};
pub use crate::domain::{Totals, Transaction, TransactionDraft, TransactionFilter, TransactionType};
pub use crate::errors::{AccountingError, Result};
pub use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore, PersistenceStore};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Accounting Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
