//! Dashboard-style summaries over transactions.
//!
//! Pure aggregation producing chart-ready data: trailing cash-flow series
//! and expense category shares. No rendering and no storage access.

pub mod service;
pub mod types;

pub use service::SummaryService;
pub use types::{CashFlowSummary, CategoryShare};
