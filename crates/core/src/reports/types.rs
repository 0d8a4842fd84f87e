//! Report data types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use metalgest_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fiscal::ReportPeriod;

/// Semantic buckets a transaction can contribute to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Total income before tax deductions.
    GrossRevenue,
    /// Taxes on revenue, tracked as a positive magnitude.
    Taxes,
    /// Cost of goods and services sold.
    Costs,
    /// Operating expenses.
    OperatingExpenses,
    /// Net financial income and expense (signed).
    FinancialResult,
}

/// Total and per-category breakdown for one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSummary {
    /// Bucket total.
    pub total: Decimal,
    /// Summed contribution per category label, in lexicographic order.
    pub breakdown: BTreeMap<String, Decimal>,
}

impl BucketSummary {
    /// Adds a contribution under the given category label.
    pub fn add(&mut self, category: &str, amount: Decimal) {
        self.total += amount;
        *self.breakdown.entry(category.to_string()).or_default() += amount;
    }
}

/// Aggregated bucket results for one transaction set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketAggregates {
    /// Gross revenue bucket.
    pub gross_revenue: BucketSummary,
    /// Taxes bucket.
    pub taxes: BucketSummary,
    /// Costs bucket.
    pub costs: BucketSummary,
    /// Operating expenses bucket.
    pub operating_expenses: BucketSummary,
    /// Financial result bucket.
    pub financial_result: BucketSummary,
}

impl BucketAggregates {
    /// Returns the summary for the given bucket.
    #[must_use]
    pub fn bucket(&self, bucket: Bucket) -> &BucketSummary {
        match bucket {
            Bucket::GrossRevenue => &self.gross_revenue,
            Bucket::Taxes => &self.taxes,
            Bucket::Costs => &self.costs,
            Bucket::OperatingExpenses => &self.operating_expenses,
            Bucket::FinancialResult => &self.financial_result,
        }
    }

    /// Returns a mutable summary for the given bucket.
    #[must_use]
    pub fn bucket_mut(&mut self, bucket: Bucket) -> &mut BucketSummary {
        match bucket {
            Bucket::GrossRevenue => &mut self.gross_revenue,
            Bucket::Taxes => &mut self.taxes,
            Bucket::Costs => &mut self.costs,
            Bucket::OperatingExpenses => &mut self.operating_expenses,
            Bucket::FinancialResult => &mut self.financial_result,
        }
    }
}

/// The DRE: ordered chain of totals and subtotals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreStatement {
    /// Total income before deductions.
    pub gross_revenue: Decimal,
    /// Taxes on revenue (positive magnitude, subtracted below).
    pub taxes: Decimal,
    /// Gross revenue minus taxes.
    pub net_revenue: Decimal,
    /// Cost of goods and services sold.
    pub costs: Decimal,
    /// Net revenue minus costs.
    pub gross_profit: Decimal,
    /// Operating expenses.
    pub operating_expenses: Decimal,
    /// Gross profit minus operating expenses.
    pub operating_result: Decimal,
    /// Net financial income and expense (signed).
    pub financial_result: Decimal,
    /// Operating result plus financial result; negative means a loss.
    pub net_result: Decimal,
}

impl DreStatement {
    /// Returns the value of a headline metric.
    #[must_use]
    pub fn metric(&self, metric: HeadlineMetric) -> Decimal {
        match metric {
            HeadlineMetric::GrossRevenue => self.gross_revenue,
            HeadlineMetric::GrossProfit => self.gross_profit,
            HeadlineMetric::NetResult => self.net_result,
        }
    }
}

/// A DRE stamped with the period and currency it covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreReport {
    /// Period start date (inclusive).
    pub period_start: NaiveDate,
    /// Period end date (exclusive).
    pub period_end: NaiveDate,
    /// Currency code.
    pub currency: Currency,
    /// The statement itself.
    pub statement: DreStatement,
    /// Per-bucket breakdowns backing the statement.
    pub buckets: BucketAggregates,
}

/// Headline metrics tracked period over period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadlineMetric {
    /// Gross revenue.
    GrossRevenue,
    /// Gross profit.
    GrossProfit,
    /// Net result.
    NetResult,
}

impl HeadlineMetric {
    /// Every headline metric, in statement order.
    pub const ALL: [Self; 3] = [Self::GrossRevenue, Self::GrossProfit, Self::NetResult];
}

/// Period-over-period comparison of two statements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparative {
    /// Statement for the requested period.
    pub current: DreStatement,
    /// Statement for the immediately preceding period.
    pub previous: DreStatement,
    /// Signed percentage change per headline metric, one decimal place.
    pub variation_percent: BTreeMap<HeadlineMetric, Decimal>,
}

/// One entry of a trailing series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodStatement {
    /// Period label (e.g. "2026-03").
    pub label: String,
    /// The period covered.
    pub period: ReportPeriod,
    /// Statement for the period.
    pub statement: DreStatement,
}
