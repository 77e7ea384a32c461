//! Repository over the persisted category list.

use tracing::{debug, info};

use crate::domain::category::{contains_category, default_categories};
use crate::errors::{AccountingError, Result};
use crate::storage::{PersistenceStore, CATEGORIES_KEY};

/// Manages the ordered, duplicate-free category list.
///
/// Deleting a category never touches transactions that still reference it.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    store: PersistenceStore,
}

impl CategoryRepository {
    pub fn new(store: PersistenceStore) -> Self {
        Self { store }
    }

    /// Returns the stored categories, or the seeded defaults when none are stored.
    pub fn list_all(&self) -> Result<Vec<String>> {
        match self.store.read::<Vec<String>>(CATEGORIES_KEY)? {
            Some(categories) => Ok(categories),
            None => {
                debug!("no stored categories; using defaults");
                Ok(default_categories())
            }
        }
    }

    /// Appends `name` unless an identical entry exists.
    pub fn add(&self, name: &str) -> Result<()> {
        let mut categories = self.list_all()?;
        if contains_category(&categories, name) {
            debug!(name, "category already present");
            return Ok(());
        }
        info!(name, "adding category");
        categories.push(name.to_string());
        self.store.write(CATEGORIES_KEY, &categories)
    }

    /// Validating variant of [`add`](Self::add) used by interactive front ends.
    ///
    /// Trims `name` and rejects blank names and exact duplicates.
    pub fn create(&self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AccountingError::Validation(
                "Category name cannot be empty".into(),
            ));
        }
        if contains_category(&self.list_all()?, name) {
            return Err(AccountingError::Validation(format!(
                "Category `{}` already exists",
                name
            )));
        }
        self.add(name)?;
        Ok(name.to_string())
    }

    /// Removes every entry exactly equal to `name`.
    pub fn delete(&self, name: &str) -> Result<()> {
        let mut categories = self.list_all()?;
        let before = categories.len();
        categories.retain(|existing| existing != name);
        if categories.len() == before {
            debug!(name, "delete skipped; category not present");
            return Ok(());
        }
        info!(name, "deleted category");
        self.store.write(CATEGORIES_KEY, &categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_CATEGORIES;

    fn repo() -> CategoryRepository {
        CategoryRepository::new(PersistenceStore::in_memory())
    }

    #[test]
    fn uninitialized_store_lists_defaults_in_order() {
        assert_eq!(repo().list_all().unwrap(), DEFAULT_CATEGORIES.to_vec());
    }

    #[test]
    fn add_is_idempotent_for_exact_duplicates() {
        let repo = repo();
        repo.add("Food").unwrap();
        assert_eq!(repo.list_all().unwrap().len(), 11);

        repo.add("food").unwrap();
        let categories = repo.list_all().unwrap();
        assert_eq!(categories.len(), 12);
        assert_eq!(categories.last().map(String::as_str), Some("food"));
    }

    #[test]
    fn delete_removes_all_exact_matches() {
        let repo = repo();
        repo.store
            .write(CATEGORIES_KEY, &vec!["Rent", "Food", "Rent"])
            .unwrap();

        repo.delete("Rent").unwrap();
        repo.delete("Rent").unwrap();

        assert_eq!(repo.list_all().unwrap(), vec!["Food".to_string()]);
    }

    #[test]
    fn deleting_every_category_persists_an_empty_list() {
        let repo = repo();
        for name in DEFAULT_CATEGORIES {
            repo.delete(name).unwrap();
        }
        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn create_rejects_blank_and_duplicate_names() {
        let repo = repo();
        assert!(repo.create("   ").unwrap_err().is_validation());
        assert!(repo.create(" Rent ").unwrap_err().is_validation());

        assert_eq!(repo.create(" Pets ").unwrap(), "Pets");
        assert!(repo.list_all().unwrap().contains(&"Pets".to_string()));
    }

    #[test]
    fn detached_store_lists_defaults_and_drops_adds() {
        let repo = CategoryRepository::new(PersistenceStore::detached());
        repo.add("Pets").unwrap();
        assert_eq!(repo.list_all().unwrap(), DEFAULT_CATEGORIES.to_vec());
    }
}
