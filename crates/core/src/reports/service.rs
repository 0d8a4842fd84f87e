//! Report generation service.

use chrono::NaiveDate;
use metalgest_shared::types::Currency;
use tracing::debug;

use super::aggregate;
use super::compare;
use super::error::ReportError;
use super::statement;
use super::types::{Comparative, DreReport, DreStatement, HeadlineMetric, PeriodStatement};
use crate::fiscal::ReportPeriod;
use crate::transaction::{Transaction, validate_transactions};

/// Service for generating DRE reports.
pub struct ReportService;

impl ReportService {
    /// Builds the DRE for a transaction set.
    ///
    /// The caller guarantees the set covers exactly the reporting window;
    /// the engine never queries storage itself.
    ///
    /// # Errors
    ///
    /// Returns an error if any transaction carries a negative value.
    pub fn build_statement(transactions: &[Transaction]) -> Result<DreStatement, ReportError> {
        validate_transactions(transactions)?;
        let buckets = aggregate::aggregate(transactions);
        let statement = statement::compose(&buckets);
        debug!(
            transactions = transactions.len(),
            net_result = %statement.net_result,
            "composed DRE statement"
        );
        Ok(statement)
    }

    /// Builds a period-stamped DRE report with per-bucket breakdowns.
    ///
    /// Transactions outside the period are ignored, so a caller holding a
    /// larger window can reuse one load for several reports.
    ///
    /// # Errors
    ///
    /// Returns an error if any transaction carries a negative value.
    pub fn build_report(
        transactions: &[Transaction],
        period: ReportPeriod,
        currency: Currency,
    ) -> Result<DreReport, ReportError> {
        validate_transactions(transactions)?;
        let buckets = aggregate::aggregate(
            transactions
                .iter()
                .filter(|transaction| period.contains(transaction.date)),
        );
        let statement = statement::compose(&buckets);

        Ok(DreReport {
            period_start: period.start,
            period_end: period.end,
            currency,
            statement,
            buckets,
        })
    }

    /// Builds a report for an explicit `[start, end)` window.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateRange` unless `start < end`, and propagates
    /// transaction validation failures.
    pub fn build_report_for_range(
        transactions: &[Transaction],
        start: NaiveDate,
        end: NaiveDate,
        currency: Currency,
    ) -> Result<DreReport, ReportError> {
        let period =
            ReportPeriod::new(start, end).ok_or(ReportError::InvalidDateRange { start, end })?;
        Self::build_report(transactions, period, currency)
    }

    /// Builds statements for two adjacent periods and their headline
    /// variations.
    ///
    /// # Errors
    ///
    /// Returns an error if either set carries a negative value.
    pub fn build_comparative(
        current: &[Transaction],
        previous: &[Transaction],
    ) -> Result<Comparative, ReportError> {
        let current = Self::build_statement(current)?;
        let previous = Self::build_statement(previous)?;
        Ok(compare::compare(current, previous, &HeadlineMetric::ALL))
    }

    /// Builds a trailing monthly series ending with `last`, oldest first.
    ///
    /// Months with no transactions produce all-zero statements; no month is
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns `EmptySeries` for a zero-length request, `PeriodOutOfRange`
    /// if stepping back `periods` months leaves the supported date range,
    /// and propagates transaction validation failures.
    pub fn build_series(
        transactions: &[Transaction],
        last: ReportPeriod,
        periods: usize,
    ) -> Result<Vec<PeriodStatement>, ReportError> {
        if periods == 0 {
            return Err(ReportError::EmptySeries);
        }
        validate_transactions(transactions)?;

        let windows = last
            .trailing(periods)
            .ok_or(ReportError::PeriodOutOfRange)?;
        let series = windows
            .into_iter()
            .map(|period| {
                let buckets = aggregate::aggregate(
                    transactions
                        .iter()
                        .filter(|transaction| period.contains(transaction.date)),
                );
                PeriodStatement {
                    label: period.label(),
                    period,
                    statement: statement::compose(&buckets),
                }
            })
            .collect();
        debug!(periods, "built trailing series");
        Ok(series)
    }
}
