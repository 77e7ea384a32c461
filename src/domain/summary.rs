use serde::Serialize;

use crate::domain::transaction::{Transaction, TransactionType};

/// Income, expense and balance derived from a transaction set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

impl Totals {
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let (income, expense) =
            transactions
                .into_iter()
                .fold((0.0, 0.0), |(income, expense), txn| match txn.kind {
                    TransactionType::Income => (income + txn.amount, expense),
                    TransactionType::Expense => (income, expense + txn.amount),
                });
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}
