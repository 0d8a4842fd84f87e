//! Summary aggregation service.

use std::collections::BTreeMap;

use metalgest_shared::types::Currency;
use rust_decimal::Decimal;

use super::types::{CashFlowSummary, CategoryShare};
use crate::fiscal::ReportPeriod;
use crate::reports::ReportError;
use crate::transaction::{Transaction, validate_transactions};

/// Service for dashboard-style summaries.
pub struct SummaryService;

impl SummaryService {
    /// Builds the trailing cash-flow series ending with `last`, oldest first.
    ///
    /// Periods with no transactions appear with zero inflow and outflow; no
    /// period is skipped.
    ///
    /// # Errors
    ///
    /// Returns `EmptySeries` for a zero-length request, `PeriodOutOfRange`
    /// if stepping back `periods` months leaves the supported date range,
    /// and propagates transaction validation failures.
    pub fn cash_flow(
        transactions: &[Transaction],
        last: ReportPeriod,
        periods: usize,
        currency: Currency,
    ) -> Result<CashFlowSummary, ReportError> {
        if periods == 0 {
            return Err(ReportError::EmptySeries);
        }
        validate_transactions(transactions)?;

        let windows = last
            .trailing(periods)
            .ok_or(ReportError::PeriodOutOfRange)?;
        let mut summary = CashFlowSummary {
            currency,
            labels: Vec::with_capacity(windows.len()),
            inflow: Vec::with_capacity(windows.len()),
            outflow: Vec::with_capacity(windows.len()),
            net: Vec::with_capacity(windows.len()),
        };

        for period in windows {
            let mut inflow = Decimal::ZERO;
            let mut outflow = Decimal::ZERO;
            for transaction in transactions
                .iter()
                .filter(|transaction| period.contains(transaction.date))
            {
                if transaction.kind.is_income() {
                    inflow += transaction.value;
                } else {
                    outflow += transaction.value;
                }
            }
            summary.labels.push(period.label());
            summary.inflow.push(inflow);
            summary.outflow.push(outflow);
            summary.net.push(inflow - outflow);
        }

        Ok(summary)
    }

    /// Ranks expense categories by amount with their share of total
    /// expenses, descending; ties break lexicographically.
    ///
    /// A set with no expenses yields an empty list.
    ///
    /// # Errors
    ///
    /// Propagates transaction validation failures.
    pub fn expense_shares(transactions: &[Transaction]) -> Result<Vec<CategoryShare>, ReportError> {
        validate_transactions(transactions)?;

        let mut by_category: BTreeMap<&str, Decimal> = BTreeMap::new();
        let mut total = Decimal::ZERO;
        for transaction in transactions
            .iter()
            .filter(|transaction| !transaction.kind.is_income())
        {
            *by_category
                .entry(transaction.category.as_str())
                .or_default() += transaction.value;
            total += transaction.value;
        }

        let mut shares: Vec<CategoryShare> = by_category
            .into_iter()
            .map(|(category, amount)| {
                let percent = if total.is_zero() {
                    Decimal::ZERO
                } else {
                    (amount / total * Decimal::ONE_HUNDRED).round_dp(1)
                };
                CategoryShare {
                    category: category.to_string(),
                    amount,
                    percent,
                }
            })
            .collect();
        shares.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });

        Ok(shares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionKind;
    use chrono::NaiveDate;
    use metalgest_shared::types::TransactionId;
    use rust_decimal_macros::dec;

    fn make_transaction(
        kind: TransactionKind,
        category: &str,
        value: Decimal,
        date: NaiveDate,
    ) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            kind,
            value,
            category: category.to_string(),
            date,
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_cash_flow_over_three_months() {
        let transactions = vec![
            make_transaction(TransactionKind::Income, "Venda", dec!(1000), date(2026, 1, 5)),
            make_transaction(
                TransactionKind::Expense,
                "Despesa Administrativa",
                dec!(300),
                date(2026, 1, 20),
            ),
            make_transaction(TransactionKind::Income, "Venda", dec!(500), date(2026, 3, 2)),
        ];

        let last = ReportPeriod::month(2026, 3).unwrap();
        let summary =
            SummaryService::cash_flow(&transactions, last, 3, Currency::Brl).unwrap();

        assert_eq!(summary.labels, vec!["2026-01", "2026-02", "2026-03"]);
        assert_eq!(summary.inflow, vec![dec!(1000), dec!(0), dec!(500)]);
        assert_eq!(summary.outflow, vec![dec!(300), dec!(0), dec!(0)]);
        assert_eq!(summary.net, vec![dec!(700), dec!(0), dec!(500)]);
    }

    #[test]
    fn test_cash_flow_rejects_zero_periods() {
        let last = ReportPeriod::month(2026, 3).unwrap();
        assert!(matches!(
            SummaryService::cash_flow(&[], last, 0, Currency::Brl),
            Err(ReportError::EmptySeries)
        ));
    }

    #[test]
    fn test_expense_shares_rank_by_amount() {
        let transactions = vec![
            make_transaction(
                TransactionKind::Expense,
                "Despesa Administrativa",
                dec!(600),
                date(2026, 3, 5),
            ),
            make_transaction(TransactionKind::Expense, "CMV Material", dec!(300), date(2026, 3, 8)),
            make_transaction(
                TransactionKind::Expense,
                "Despesa Comercial",
                dec!(100),
                date(2026, 3, 9),
            ),
            // Income never appears in expense shares.
            make_transaction(TransactionKind::Income, "Venda", dec!(9999), date(2026, 3, 10)),
        ];

        let shares = SummaryService::expense_shares(&transactions).unwrap();
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].category, "Despesa Administrativa");
        assert_eq!(shares[0].percent, dec!(60.0));
        assert_eq!(shares[1].category, "CMV Material");
        assert_eq!(shares[1].percent, dec!(30.0));
        assert_eq!(shares[2].category, "Despesa Comercial");
        assert_eq!(shares[2].percent, dec!(10.0));
    }

    #[test]
    fn test_expense_shares_tie_breaks_lexicographically() {
        let transactions = vec![
            make_transaction(TransactionKind::Expense, "Despesa B", dec!(50), date(2026, 3, 1)),
            make_transaction(TransactionKind::Expense, "Despesa A", dec!(50), date(2026, 3, 2)),
        ];

        let shares = SummaryService::expense_shares(&transactions).unwrap();
        assert_eq!(shares[0].category, "Despesa A");
        assert_eq!(shares[1].category, "Despesa B");
    }

    #[test]
    fn test_no_expenses_yields_empty_list() {
        let transactions = vec![make_transaction(
            TransactionKind::Income,
            "Venda",
            dec!(100),
            date(2026, 3, 1),
        )];
        assert!(SummaryService::expense_shares(&transactions)
            .unwrap()
            .is_empty());
    }
}
