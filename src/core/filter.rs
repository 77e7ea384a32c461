//! Pure filtering and aggregation over transaction snapshots.
//!
//! Nothing here touches storage; callers pass in whatever snapshot they hold.

use std::collections::HashSet;

use crate::domain::{Totals, Transaction, TransactionFilter};

/// Keeps the transactions matching every populated constraint of `criteria`,
/// preserving input order.
pub fn filter(transactions: &[Transaction], criteria: &TransactionFilter) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| criteria.matches(txn))
        .cloned()
        .collect()
}

/// Sums income and expense amounts and derives the balance.
pub fn totals(transactions: &[Transaction]) -> Totals {
    Totals::from_transactions(transactions)
}

/// Distinct payees in first-seen order.
pub fn distinct_payees(transactions: &[Transaction]) -> Vec<String> {
    distinct_by(transactions, |txn| &txn.payee)
}

/// Distinct categories in first-seen order.
pub fn distinct_categories(transactions: &[Transaction]) -> Vec<String> {
    distinct_by(transactions, |txn| &txn.category)
}

fn distinct_by<F>(transactions: &[Transaction], field: F) -> Vec<String>
where
    F: Fn(&Transaction) -> &String,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for txn in transactions {
        let value = field(txn);
        if seen.insert(value.as_str()) {
            values.push(value.clone());
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionType;
    use chrono::NaiveDate;

    fn txn(kind: TransactionType, amount: f64, category: &str, payee: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            amount,
            kind,
            category,
            payee,
            "reason",
        )
    }

    fn fixture() -> Vec<Transaction> {
        vec![
            txn(TransactionType::Expense, 12.0, "Food", "Cafe"),
            txn(TransactionType::Income, 100.0, "Salary", "Employer"),
            txn(TransactionType::Expense, 30.0, "Transportation", "Cafe"),
            txn(TransactionType::Income, 50.0, "Food", "Neighbour"),
            txn(TransactionType::Expense, 8.0, "Food", "Bakery"),
        ]
    }

    #[test]
    fn totals_sum_by_type() {
        let set = vec![
            txn(TransactionType::Income, 100.0, "Salary", "A"),
            txn(TransactionType::Income, 50.0, "Gifts", "B"),
            txn(TransactionType::Expense, 30.0, "Food", "C"),
        ];
        let totals = totals(&set);
        assert_eq!(totals.income, 150.0);
        assert_eq!(totals.expense, 30.0);
        assert_eq!(totals.balance, 120.0);
    }

    #[test]
    fn totals_of_empty_set_are_zero() {
        assert_eq!(totals(&[]), Totals::default());
    }

    #[test]
    fn filter_uses_and_semantics_and_keeps_order() {
        let data = fixture();
        let criteria = TransactionFilter::new()
            .with_kind(TransactionType::Expense)
            .with_category("Food");

        let result = filter(&data, &criteria);

        let payees: Vec<&str> = result.iter().map(|t| t.payee.as_str()).collect();
        assert_eq!(payees, vec!["Cafe", "Bakery"]);
    }

    #[test]
    fn empty_filter_returns_input_unchanged() {
        let data = fixture();
        assert_eq!(filter(&data, &TransactionFilter::default()), data);
    }

    #[test]
    fn distinct_values_keep_first_seen_order() {
        let data = fixture();
        assert_eq!(
            distinct_payees(&data),
            vec!["Cafe", "Employer", "Neighbour", "Bakery"]
        );
        assert_eq!(
            distinct_categories(&data),
            vec!["Food", "Salary", "Transportation"]
        );
    }
}
