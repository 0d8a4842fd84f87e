//! Statement composition from bucket totals.

use super::types::{BucketAggregates, DreStatement};

/// Composes the DRE from the five bucket totals.
///
/// The subtotal chain is fixed:
/// net revenue = gross revenue − taxes,
/// gross profit = net revenue − costs,
/// operating result = gross profit − operating expenses,
/// net result = operating result + financial result.
#[must_use]
pub fn compose(buckets: &BucketAggregates) -> DreStatement {
    let gross_revenue = buckets.gross_revenue.total;
    let taxes = buckets.taxes.total;
    let net_revenue = gross_revenue - taxes;
    let costs = buckets.costs.total;
    let gross_profit = net_revenue - costs;
    let operating_expenses = buckets.operating_expenses.total;
    let operating_result = gross_profit - operating_expenses;
    let financial_result = buckets.financial_result.total;
    let net_result = operating_result + financial_result;

    DreStatement {
        gross_revenue,
        taxes,
        net_revenue,
        costs,
        gross_profit,
        operating_expenses,
        operating_result,
        financial_result,
        net_result,
    }
}
