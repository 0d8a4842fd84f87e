//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::transaction::TransactionValidationError;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A transaction violated an input invariant.
    #[error(transparent)]
    Validation(#[from] TransactionValidationError),

    /// Invalid date range.
    #[error("Invalid date range: start {start} is not before end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// A series was requested with zero periods.
    #[error("A series needs at least one period")]
    EmptySeries,

    /// Period arithmetic left the supported date range.
    #[error("Period arithmetic left the supported date range")]
    PeriodOutOfRange,
}
