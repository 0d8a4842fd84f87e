//! Boundary validation for transactions entering the engine.

use metalgest_shared::types::TransactionId;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::Transaction;

/// Validation errors for transactions entering the engine.
#[derive(Debug, Error)]
pub enum TransactionValidationError {
    /// Transaction amount is negative.
    #[error("Transaction {id} has negative value {value}; direction is carried by kind")]
    NegativeAmount {
        /// Offending transaction.
        id: TransactionId,
        /// The rejected value.
        value: Decimal,
    },
}

/// Validates that every transaction satisfies the engine's input invariants.
///
/// An empty set is valid: it yields an all-zero statement downstream.
///
/// # Errors
///
/// Returns an error for the first transaction with a negative value.
pub fn validate_transactions(
    transactions: &[Transaction],
) -> Result<(), TransactionValidationError> {
    for transaction in transactions {
        if transaction.value < Decimal::ZERO {
            return Err(TransactionValidationError::NegativeAmount {
                id: transaction.id,
                value: transaction.value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionKind;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn make_transaction(value: Decimal) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            kind: TransactionKind::Expense,
            value,
            category: "Despesa Administrativa".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_empty_set_is_valid() {
        assert!(validate_transactions(&[]).is_ok());
    }

    #[test]
    fn test_non_negative_values_pass() {
        let transactions = vec![make_transaction(dec!(0)), make_transaction(dec!(199.90))];
        assert!(validate_transactions(&transactions).is_ok());
    }

    #[test]
    fn test_negative_value_is_rejected() {
        let bad = make_transaction(dec!(-1));
        let id = bad.id;
        let transactions = vec![make_transaction(dec!(10)), bad];

        match validate_transactions(&transactions) {
            Err(TransactionValidationError::NegativeAmount { id: found, value }) => {
                assert_eq!(found, id);
                assert_eq!(value, dec!(-1));
            }
            Ok(()) => panic!("negative value must be rejected"),
        }
    }
}
