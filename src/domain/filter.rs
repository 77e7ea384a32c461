//! Ephemeral filter specification applied to transaction snapshots.

use chrono::NaiveDate;

use crate::domain::common::{non_blank, parse_date, DATE_FORMAT};
use crate::domain::transaction::{Transaction, TransactionType};
use crate::errors::{AccountingError, Result};

/// Optional constraints on type, category, payee and an inclusive date range.
///
/// A `None` field places no constraint on that dimension; populated fields
/// combine with AND semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
    pub payee: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Blank values clear the constraint, matching an emptied select box.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(Some(category.into()));
        self
    }

    pub fn with_payee(mut self, payee: impl Into<String>) -> Self {
        self.payee = non_blank(Some(payee.into()));
        self
    }

    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Assigns a raw `key=value` style constraint. Blank values clear it.
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "type" => {
                self.kind = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                }
            }
            "category" => self.category = non_blank(Some(value.to_string())),
            "payee" => self.payee = non_blank(Some(value.to_string())),
            "start" | "start_date" => self.start_date = parse_optional_date(value)?,
            "end" | "end_date" => self.end_date = parse_optional_date(value)?,
            other => {
                return Err(AccountingError::InvalidInput(format!(
                    "unknown filter `{}`",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Returns true when `txn` satisfies every populated constraint.
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &txn.category != category {
                return false;
            }
        }
        if let Some(payee) = &self.payee {
            if &txn.payee != payee {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if txn.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if txn.date > end {
                return false;
            }
        }
        true
    }

    /// Human-readable summary of the active constraints.
    pub fn describe(&self) -> String {
        let kind = self
            .kind
            .map(|kind| format!("Type: {}", kind))
            .unwrap_or_else(|| "All Types".to_string());
        let category = self
            .category
            .as_ref()
            .map(|category| format!("Category: {}", category))
            .unwrap_or_else(|| "All Categories".to_string());
        let payee = self
            .payee
            .as_ref()
            .map(|payee| format!("Person: {}", payee))
            .unwrap_or_else(|| "All People".to_string());
        format!("{} | {} | {}", kind, category, payee)
    }
}

fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_date(raw).map(Some).ok_or_else(|| {
        AccountingError::InvalidInput(format!(
            "date `{}` does not match {}",
            raw, DATE_FORMAT
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(kind: TransactionType, category: &str, payee: &str, day: u32) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            10.0,
            kind,
            category,
            payee,
            "test",
        )
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = TransactionFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&txn(TransactionType::Income, "Salary", "Acme", 1)));
    }

    #[test]
    fn blank_category_clears_constraint() {
        let filter = TransactionFilter::new().with_category("  ");
        assert_eq!(filter.category, None);
        assert!(filter.is_empty());
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let filter = TransactionFilter::new().with_date_range(start, end);

        assert!(filter.matches(&txn(TransactionType::Expense, "Food", "A", 10)));
        assert!(filter.matches(&txn(TransactionType::Expense, "Food", "A", 20)));
        assert!(!filter.matches(&txn(TransactionType::Expense, "Food", "A", 9)));
        assert!(!filter.matches(&txn(TransactionType::Expense, "Food", "A", 21)));
    }

    #[test]
    fn set_field_parses_type_and_dates() {
        let mut filter = TransactionFilter::new();
        filter.set_field("type", "Expense").unwrap();
        filter.set_field("start", "2024-01-01").unwrap();
        assert_eq!(filter.kind, Some(TransactionType::Expense));
        assert_eq!(filter.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));

        filter.set_field("type", "").unwrap();
        assert_eq!(filter.kind, None);
        assert!(filter.set_field("end", "tomorrow").is_err());
        assert!(filter.set_field("amount", "3").is_err());
    }

    #[test]
    fn describe_lists_active_constraints() {
        let filter = TransactionFilter::new()
            .with_kind(TransactionType::Expense)
            .with_payee("Landlord");
        assert_eq!(
            filter.describe(),
            "Type: expense | All Categories | Person: Landlord"
        );
    }
}
