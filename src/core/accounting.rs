use std::{path::Path, sync::Arc};

use chrono::NaiveDate;

use crate::core::services::{CategoryRepository, Statement, StatementService, TransactionRepository};
use crate::domain::TransactionFilter;
use crate::errors::Result;
use crate::storage::{JsonFileStore, PersistenceStore};

/// Both repositories bound to one persistence store.
#[derive(Debug, Clone)]
pub struct Accounting {
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
}

impl Accounting {
    pub fn new(store: PersistenceStore) -> Self {
        Self {
            transactions: TransactionRepository::new(store.clone()),
            categories: CategoryRepository::new(store),
        }
    }

    /// Opens a book stored as JSON files inside `dir`.
    pub fn open_dir(dir: &Path) -> Result<Self> {
        let backend = JsonFileStore::new(dir)?;
        Ok(Self::new(PersistenceStore::new(Arc::new(backend))))
    }

    pub fn in_memory() -> Self {
        Self::new(PersistenceStore::in_memory())
    }

    pub fn statement(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        filter: &TransactionFilter,
    ) -> Result<Statement> {
        StatementService::generate(&self.transactions, start, end, filter)
    }
}
