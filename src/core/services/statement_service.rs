//! Statement generation: a date range, a filter and the resulting totals.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::core::filter;
use crate::core::services::TransactionRepository;
use crate::domain::{Totals, Transaction, TransactionFilter, DATE_FORMAT};
use crate::errors::{AccountingError, Result};

/// Filtered transactions over a date range with their derived totals.
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(skip)]
    pub filter: TransactionFilter,
    pub transactions: Vec<Transaction>,
    pub totals: Totals,
    /// Transactions in the date range before categorical filtering.
    pub range_count: usize,
    #[serde(skip)]
    range_payees: Vec<String>,
}

impl Statement {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Distinct payees across the whole date range, for filter choices.
    pub fn payees(&self) -> &[String] {
        &self.range_payees
    }

    /// Dates of the first and last displayed rows.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.transactions.first()?;
        let last = self.transactions.last()?;
        Some((first.date, last.date))
    }

    /// One-line "Showing N of M" summary.
    pub fn coverage(&self) -> String {
        format!(
            "Showing {} of {} transactions",
            self.transactions.len(),
            self.range_count
        )
    }
}

/// Builds [`Statement`] values from a transaction repository.
pub struct StatementService;

impl StatementService {
    /// Generates a statement for `[start, end]` narrowed by `criteria`.
    pub fn generate(
        repo: &TransactionRepository,
        start: NaiveDate,
        end: NaiveDate,
        criteria: &TransactionFilter,
    ) -> Result<Statement> {
        if start > end {
            return Err(AccountingError::Validation(format!(
                "start date {} is after end date {}",
                start.format(DATE_FORMAT),
                end.format(DATE_FORMAT)
            )));
        }
        let in_range = repo.list_by_date_range(start, end)?;
        let transactions = filter::filter(&in_range, criteria);
        let totals = filter::totals(&transactions);
        debug!(
            range = in_range.len(),
            shown = transactions.len(),
            "statement generated"
        );
        Ok(Statement {
            start,
            end,
            filter: criteria.clone(),
            range_payees: filter::distinct_payees(&in_range),
            range_count: in_range.len(),
            transactions,
            totals,
        })
    }
}
