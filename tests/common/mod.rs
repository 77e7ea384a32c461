use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use accounting_core::{Accounting, JsonFileStore, PersistenceStore, Transaction, TransactionType};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
#[allow(dead_code)]
pub fn scratch_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Opens books backed by a JSON directory under `root`.
#[allow(dead_code)]
pub fn books_at(root: &std::path::Path) -> Accounting {
    let backend = JsonFileStore::new(root).expect("create json store");
    Accounting::new(PersistenceStore::new(Arc::new(backend)))
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[allow(dead_code)]
pub fn expense(day: NaiveDate, amount: f64, category: &str, payee: &str) -> Transaction {
    Transaction::new(day, amount, TransactionType::Expense, category, payee, "test")
}

#[allow(dead_code)]
pub fn income(day: NaiveDate, amount: f64, category: &str, payee: &str) -> Transaction {
    Transaction::new(day, amount, TransactionType::Income, category, payee, "test")
}
