//! Domain models for recorded income and expense transactions.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::errors::{AccountingError, Result};

/// A single income or expense event.
///
/// Field order matches the persisted JSON layout:
/// `{id, date, amount, description, category, payee, type, reason}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub payee: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub reason: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        kind: TransactionType,
        category: impl Into<String>,
        payee: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            description: String::new(),
            category: category.into(),
            payee: payee.into(),
            kind,
            reason: reason.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Amount with the sign implied by the transaction type.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "{} {} {:.2} {} ({})",
            self.date.format(DATE_FORMAT),
            self.kind.sign(),
            self.amount,
            self.payee,
            self.category
        )
    }
}

/// Direction of a transaction. Amounts are always stored positive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }

    pub fn sign(&self) -> char {
        match self {
            TransactionType::Expense => '-',
            TransactionType::Income => '+',
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = AccountingError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "expense" => Ok(TransactionType::Expense),
            "income" => Ok(TransactionType::Income),
            other => Err(AccountingError::InvalidInput(format!(
                "unknown transaction type `{}` (expected expense or income)",
                other
            ))),
        }
    }
}

/// Unvalidated transaction input as captured from a form or command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDraft {
    pub kind: Option<String>,
    pub date: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub payee: Option<String>,
    pub reason: Option<String>,
    pub description: Option<String>,
}

impl TransactionDraft {
    pub const FIELDS: &'static [&'static str] = &[
        "type",
        "date",
        "amount",
        "category",
        "payee",
        "reason",
        "description",
    ];

    /// Assigns a raw value to the named field.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let value = Some(value.into());
        match key.trim().to_ascii_lowercase().as_str() {
            "type" => self.kind = value,
            "date" => self.date = value,
            "amount" => self.amount = value,
            "category" => self.category = value,
            "payee" => self.payee = value,
            "reason" => self.reason = value,
            "description" => self.description = value,
            other => {
                return Err(AccountingError::InvalidInput(format!(
                    "unknown transaction field `{}` (expected one of: {})",
                    other,
                    Self::FIELDS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Checks required fields and the amount, producing a transaction with a fresh id.
    ///
    /// Every problem found is reported in a single [`AccountingError::Validation`].
    pub fn validate(&self) -> Result<Transaction> {
        let mut problems = Vec::new();

        let kind = match non_blank(self.kind.clone()) {
            Some(raw) => raw
                .parse::<TransactionType>()
                .map_err(|err| problems.push(err.to_string()))
                .ok(),
            None => {
                problems.push("type is required".to_string());
                None
            }
        };
        let date = match non_blank(self.date.clone()) {
            Some(raw) => {
                let parsed = parse_date(&raw);
                if parsed.is_none() {
                    problems.push(format!(
                        "date `{}` is not a valid YYYY-MM-DD date",
                        raw.trim()
                    ));
                }
                parsed
            }
            None => {
                problems.push("date is required".to_string());
                None
            }
        };
        let amount = match non_blank(self.amount.clone()) {
            Some(raw) => parse_amount(&raw).map_err(|message| problems.push(message)).ok(),
            None => {
                problems.push("amount is required".to_string());
                None
            }
        };
        let category = required_text(&self.category, "category", &mut problems);
        let payee = required_text(&self.payee, "payee", &mut problems);
        let reason = required_text(&self.reason, "reason", &mut problems);

        if !problems.is_empty() {
            return Err(AccountingError::Validation(problems.join("; ")));
        }

        match (kind, date, amount, category, payee, reason) {
            (Some(kind), Some(date), Some(amount), Some(category), Some(payee), Some(reason)) => {
                let description = self
                    .description
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default();
                Ok(Transaction::new(date, amount, kind, category, payee, reason)
                    .with_description(description))
            }
            _ => Err(AccountingError::Validation(
                "transaction draft is incomplete".into(),
            )),
        }
    }

    /// Overlays the populated fields of this draft onto `existing`, keeping its id.
    pub fn apply_to(&self, existing: &Transaction) -> Result<Transaction> {
        let mut updated = existing.clone();
        if let Some(raw) = non_blank(self.kind.clone()) {
            updated.kind = raw.parse()?;
        }
        if let Some(raw) = non_blank(self.date.clone()) {
            updated.date = parse_date(&raw).ok_or_else(|| {
                AccountingError::Validation(format!(
                    "date `{}` is not a valid YYYY-MM-DD date",
                    raw.trim()
                ))
            })?;
        }
        if let Some(raw) = non_blank(self.amount.clone()) {
            updated.amount = parse_amount(&raw).map_err(AccountingError::Validation)?;
        }
        if let Some(category) = non_blank(self.category.clone()) {
            updated.category = category.trim().to_string();
        }
        if let Some(payee) = non_blank(self.payee.clone()) {
            updated.payee = payee.trim().to_string();
        }
        if let Some(reason) = non_blank(self.reason.clone()) {
            updated.reason = reason.trim().to_string();
        }
        if let Some(description) = &self.description {
            updated.description = description.trim().to_string();
        }
        Ok(updated)
    }
}

fn parse_amount(raw: &str) -> std::result::Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("amount `{}` is not a number", raw.trim()))?;
    if !value.is_finite() || value <= 0.0 {
        return Err("amount must be greater than 0".to_string());
    }
    Ok(value)
}

fn required_text(
    value: &Option<String>,
    field: &str,
    problems: &mut Vec<String>,
) -> Option<String> {
    match non_blank(value.clone()) {
        Some(text) => Some(text.trim().to_string()),
        None => {
            problems.push(format!("{} is required", field));
            None
        }
    }
}
