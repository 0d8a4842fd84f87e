//! Period-over-period comparison.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{Comparative, DreStatement, HeadlineMetric};

/// Computes the signed percentage change from `previous` to `current`,
/// rounded to one decimal place.
///
/// A zero previous value yields zero, never a division error.
#[must_use]
pub fn variation_percent(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return Decimal::ZERO;
    }
    ((current - previous) / previous * Decimal::ONE_HUNDRED).round_dp(1)
}

/// Compares two statements over the given headline metrics.
#[must_use]
pub fn compare(
    current: DreStatement,
    previous: DreStatement,
    metrics: &[HeadlineMetric],
) -> Comparative {
    let variations: BTreeMap<HeadlineMetric, Decimal> = metrics
        .iter()
        .map(|&metric| {
            (
                metric,
                variation_percent(current.metric(metric), previous.metric(metric)),
            )
        })
        .collect();

    Comparative {
        current,
        previous,
        variation_percent: variations,
    }
}
