//! Repository over the persisted transaction collection.

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::transaction::{Transaction, TransactionDraft};
use crate::errors::Result;
use crate::storage::{PersistenceStore, TRANSACTIONS_KEY};

/// CRUD access to transactions.
///
/// Every operation re-reads the whole collection and, for mutations, writes the
/// whole collection back. Lookup misses on update and delete are silent no-ops.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    store: PersistenceStore,
}

impl TransactionRepository {
    pub fn new(store: PersistenceStore) -> Self {
        Self { store }
    }

    /// Returns every stored transaction in insertion order.
    pub fn list_all(&self) -> Result<Vec<Transaction>> {
        let transactions: Vec<Transaction> =
            self.store.read(TRANSACTIONS_KEY)?.unwrap_or_default();
        debug!(count = transactions.len(), "transactions loaded");
        Ok(transactions)
    }

    /// Appends `transaction` to the collection.
    pub fn add(&self, transaction: Transaction) -> Result<()> {
        let mut transactions = self.list_all()?;
        info!(id = %transaction.id, kind = %transaction.kind, "adding transaction");
        transactions.push(transaction);
        self.store.write(TRANSACTIONS_KEY, &transactions)
    }

    /// Validates `draft`, stores the resulting transaction and returns it.
    pub fn record(&self, draft: &TransactionDraft) -> Result<Transaction> {
        let transaction = draft.validate()?;
        self.add(transaction.clone())?;
        Ok(transaction)
    }

    /// Replaces the stored entry sharing `transaction.id`.
    pub fn update(&self, transaction: Transaction) -> Result<()> {
        let mut transactions = self.list_all()?;
        let Some(slot) = transactions.iter_mut().find(|txn| txn.id == transaction.id) else {
            debug!(id = %transaction.id, "update skipped; no matching transaction");
            return Ok(());
        };
        info!(id = %transaction.id, "updating transaction");
        *slot = transaction;
        self.store.write(TRANSACTIONS_KEY, &transactions)
    }

    /// Removes the entry with `id`, if present.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut transactions = self.list_all()?;
        let before = transactions.len();
        transactions.retain(|txn| txn.id != id);
        if transactions.len() == before {
            debug!(%id, "delete skipped; no matching transaction");
            return Ok(());
        }
        info!(%id, "deleted transaction");
        self.store.write(TRANSACTIONS_KEY, &transactions)
    }

    pub fn find(&self, id: Uuid) -> Result<Option<Transaction>> {
        Ok(self.list_all()?.into_iter().find(|txn| txn.id == id))
    }

    /// Returns transactions dated within `[start, end]`, whole days inclusive.
    pub fn list_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|txn| txn.date >= start && txn.date <= end)
            .collect())
    }
}
