//! Bucket aggregation over a transaction set.

use super::classifier;
use super::types::BucketAggregates;
use crate::transaction::Transaction;

/// Sums classified contributions per bucket and per category.
///
/// Only categories with at least one contributing transaction appear in a
/// bucket's breakdown; entries are kept in lexicographic category order so
/// output is reproducible.
pub fn aggregate<'a, I>(transactions: I) -> BucketAggregates
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut aggregates = BucketAggregates::default();
    for transaction in transactions {
        for contribution in classifier::classify(transaction) {
            aggregates
                .bucket_mut(contribution.bucket)
                .add(&transaction.category, contribution.amount);
        }
    }
    aggregates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionKind;
    use chrono::NaiveDate;
    use metalgest_shared::types::TransactionId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn make_transaction(kind: TransactionKind, category: &str, value: Decimal) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            kind,
            value,
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        }
    }

    #[test]
    fn test_same_category_sums() {
        let transactions = vec![
            make_transaction(TransactionKind::Expense, "Despesa Administrativa", dec!(100)),
            make_transaction(TransactionKind::Expense, "Despesa Administrativa", dec!(50)),
        ];

        let aggregates = aggregate(&transactions);
        assert_eq!(aggregates.operating_expenses.total, dec!(150));
        assert_eq!(
            aggregates.operating_expenses.breakdown["Despesa Administrativa"],
            dec!(150)
        );
    }

    #[test]
    fn test_breakdown_only_lists_contributing_categories() {
        let transactions = vec![
            make_transaction(TransactionKind::Income, "Venda", dec!(1000)),
            make_transaction(TransactionKind::Expense, "Ajuste de Estoque", dec!(5)),
        ];

        let aggregates = aggregate(&transactions);
        assert_eq!(aggregates.gross_revenue.breakdown.len(), 1);
        assert!(aggregates.operating_expenses.breakdown.is_empty());
        assert!(aggregates.costs.breakdown.is_empty());
    }

    #[test]
    fn test_breakdown_is_lexicographically_ordered() {
        let transactions = vec![
            make_transaction(TransactionKind::Expense, "Despesa Comercial", dec!(10)),
            make_transaction(TransactionKind::Expense, "Despesa Administrativa", dec!(20)),
            make_transaction(TransactionKind::Expense, "Despesa Bancaria", dec!(30)),
        ];

        let aggregates = aggregate(&transactions);
        let categories: Vec<&String> = aggregates.operating_expenses.breakdown.keys().collect();
        assert_eq!(
            categories,
            vec![
                "Despesa Administrativa",
                "Despesa Bancaria",
                "Despesa Comercial"
            ]
        );
    }

    #[test]
    fn test_financial_bucket_nets_income_against_expense() {
        let transactions = vec![
            make_transaction(TransactionKind::Income, "Receita Financeira", dec!(300)),
            make_transaction(TransactionKind::Expense, "Despesa Financeira", dec!(120)),
        ];

        let aggregates = aggregate(&transactions);
        assert_eq!(aggregates.financial_result.total, dec!(180));
        assert_eq!(
            aggregates.financial_result.breakdown["Despesa Financeira"],
            dec!(-120)
        );
    }

    #[test]
    fn test_empty_input_yields_default() {
        let aggregates = aggregate(&[]);
        assert_eq!(aggregates, BucketAggregates::default());
    }
}
