//! Transaction classification into DRE buckets.
//!
//! Classification is a declarative rule table over `(kind, category)`,
//! matched case-insensitively against the lowercased label. The table has
//! two tiers:
//!
//! - **Exclusive rules** place the transaction's revenue/cost/expense side;
//!   the first match wins and later exclusive rules are not consulted. Tax
//!   income lands in taxes, not in gross revenue.
//! - **Additive rules** apply independently of the exclusive chain, so
//!   "Despesa Financeira" counts as an operating expense AND as a negative
//!   financial result.

use rust_decimal::Decimal;
use tracing::debug;

use super::types::Bucket;
use crate::transaction::{Transaction, TransactionKind};

/// Sign convention for a rule's contribution.
#[derive(Debug, Clone, Copy)]
enum Sign {
    /// Always `+value`.
    Positive,
    /// `+value` for income, `-value` for expense.
    Directional,
}

/// One classification rule. Predicates receive the lowercased label.
struct Rule {
    bucket: Bucket,
    sign: Sign,
    matches: fn(TransactionKind, &str) -> bool,
}

/// Exclusive rules, in priority order.
const EXCLUSIVE_RULES: [Rule; 4] = [
    Rule {
        bucket: Bucket::Taxes,
        sign: Sign::Positive,
        matches: |kind, category| kind.is_income() && category.contains("imposto"),
    },
    Rule {
        bucket: Bucket::GrossRevenue,
        sign: Sign::Positive,
        matches: |kind, _| kind.is_income(),
    },
    Rule {
        bucket: Bucket::Costs,
        sign: Sign::Positive,
        matches: |_, category| category.starts_with("cmv") || category.starts_with("custo"),
    },
    Rule {
        bucket: Bucket::OperatingExpenses,
        sign: Sign::Positive,
        matches: |_, category| category.starts_with("despesa"),
    },
];

/// Additive rules, applied regardless of the exclusive chain.
const ADDITIVE_RULES: [Rule; 1] = [Rule {
    bucket: Bucket::FinancialResult,
    sign: Sign::Directional,
    matches: |_, category| category.contains("financeira"),
}];

/// A single signed contribution to one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    /// Receiving bucket.
    pub bucket: Bucket,
    /// Signed amount.
    pub amount: Decimal,
}

fn contribution(rule: &Rule, transaction: &Transaction) -> Contribution {
    let amount = match rule.sign {
        Sign::Positive => transaction.value,
        Sign::Directional => {
            if transaction.kind.is_income() {
                transaction.value
            } else {
                -transaction.value
            }
        }
    };
    Contribution {
        bucket: rule.bucket,
        amount,
    }
}

/// Classifies one transaction into its bucket contributions.
///
/// Income always lands somewhere (taxes or gross revenue). An expense
/// matching no rule contributes nowhere and is excluded from every
/// breakdown; that is valid input, not an error.
#[must_use]
pub fn classify(transaction: &Transaction) -> Vec<Contribution> {
    let category = transaction.category.to_lowercase();
    let mut contributions = Vec::new();

    if let Some(rule) = EXCLUSIVE_RULES
        .iter()
        .find(|rule| (rule.matches)(transaction.kind, &category))
    {
        contributions.push(contribution(rule, transaction));
    }

    for rule in &ADDITIVE_RULES {
        if (rule.matches)(transaction.kind, &category) {
            contributions.push(contribution(rule, transaction));
        }
    }

    if contributions.is_empty() {
        debug!(
            id = %transaction.id,
            category = %transaction.category,
            "expense matched no classification rule"
        );
    }

    contributions
}
