//! Ledger transaction types.

use chrono::NaiveDate;
use metalgest_shared::types::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a ledger transaction.
///
/// Direction is carried by the kind, never by a negative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming into the company.
    Income,
    /// Money going out of the company.
    Expense,
}

impl TransactionKind {
    /// Returns true for income transactions.
    #[must_use]
    pub fn is_income(self) -> bool {
        matches!(self, Self::Income)
    }
}

/// A ledger transaction as supplied by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Non-negative amount in the reporting currency.
    pub value: Decimal,
    /// Free-text category label (e.g. "Despesa Administrativa").
    pub category: String,
    /// Date the transaction was posted.
    pub date: NaiveDate,
}
