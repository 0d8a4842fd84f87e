//! Summary data types.

use metalgest_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cash-flow series over a trailing window.
///
/// Parallel vectors, one entry per period, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowSummary {
    /// Currency code.
    pub currency: Currency,
    /// Period labels.
    pub labels: Vec<String>,
    /// Income totals per period.
    pub inflow: Vec<Decimal>,
    /// Expense totals per period.
    pub outflow: Vec<Decimal>,
    /// Inflow minus outflow per period.
    pub net: Vec<Decimal>,
}

/// One category's share of a window's expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category label.
    pub category: String,
    /// Expense amount.
    pub amount: Decimal,
    /// Percentage of total expenses, one decimal place.
    pub percent: Decimal,
}
