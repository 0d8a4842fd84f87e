//! Reporting period types.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A half-open reporting window `[start, end)`.
///
/// Calendar months are the only granularity the engine generates itself,
/// but any caller-supplied window works for a one-off statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// First day inside the window.
    pub start: NaiveDate,
    /// First day after the window.
    pub end: NaiveDate,
}

impl ReportPeriod {
    /// Creates a period from explicit bounds.
    ///
    /// Returns `None` unless `start < end`.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Creates the calendar-month window for the given year and month.
    #[must_use]
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = start.checked_add_months(Months::new(1))?;
        Some(Self { start, end })
    }

    /// Creates the calendar-month window containing the given date.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Option<Self> {
        Self::month(date.year(), date.month())
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Returns the immediately preceding period of the same length.
    ///
    /// Month-aligned windows step back one calendar month; arbitrary windows
    /// step back by their own length in days.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        if self.is_month_aligned() {
            let start = self.start.checked_sub_months(Months::new(1))?;
            return Some(Self {
                start,
                end: self.start,
            });
        }
        let length = self.end.signed_duration_since(self.start);
        let start = self.start.checked_sub_signed(length)?;
        Some(Self {
            start,
            end: self.start,
        })
    }

    /// Returns the trailing window of `len` periods ending with this one,
    /// ordered oldest to newest.
    #[must_use]
    pub fn trailing(&self, len: usize) -> Option<Vec<Self>> {
        let mut periods = Vec::with_capacity(len);
        if len == 0 {
            return Some(periods);
        }
        periods.push(*self);
        while periods.len() < len {
            let previous = periods.last()?.previous()?;
            periods.push(previous);
        }
        periods.reverse();
        Some(periods)
    }

    /// Label used to index series entries (e.g. "2026-03").
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.start.year(), self.start.month())
    }

    fn is_month_aligned(&self) -> bool {
        self.start.day() == 1
            && self
                .start
                .checked_add_months(Months::new(1))
                .is_some_and(|month_end| month_end == self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(ReportPeriod::new(date(2026, 3, 1), date(2026, 2, 1)).is_none());
        assert!(ReportPeriod::new(date(2026, 3, 1), date(2026, 3, 1)).is_none());
        assert!(ReportPeriod::new(date(2026, 2, 1), date(2026, 3, 1)).is_some());
    }

    #[test]
    fn test_month_window_is_half_open() {
        let period = ReportPeriod::month(2026, 3).unwrap();
        assert!(period.contains(date(2026, 3, 1)));
        assert!(period.contains(date(2026, 3, 31)));
        assert!(!period.contains(date(2026, 4, 1)));
        assert!(!period.contains(date(2026, 2, 28)));
    }

    #[test]
    fn test_leap_february() {
        let period = ReportPeriod::month(2028, 2).unwrap();
        assert!(period.contains(date(2028, 2, 29)));
        assert_eq!(period.end, date(2028, 3, 1));
    }

    #[test]
    fn test_previous_crosses_year_boundary() {
        let january = ReportPeriod::month(2026, 1).unwrap();
        let december = january.previous().unwrap();
        assert_eq!(december.start, date(2025, 12, 1));
        assert_eq!(december.end, date(2026, 1, 1));
    }

    #[test]
    fn test_previous_of_arbitrary_window_keeps_length() {
        let window = ReportPeriod::new(date(2026, 3, 10), date(2026, 3, 20)).unwrap();
        let previous = window.previous().unwrap();
        assert_eq!(previous.start, date(2026, 2, 28));
        assert_eq!(previous.end, date(2026, 3, 10));
    }

    #[test]
    fn test_trailing_is_oldest_first_and_contiguous() {
        let last = ReportPeriod::month(2026, 3).unwrap();
        let periods = last.trailing(12).unwrap();

        assert_eq!(periods.len(), 12);
        assert_eq!(periods[0].start, date(2025, 4, 1));
        assert_eq!(periods[11], last);
        for pair in periods.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_trailing_zero_is_empty() {
        let last = ReportPeriod::month(2026, 3).unwrap();
        assert_eq!(last.trailing(0).unwrap(), Vec::new());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ReportPeriod::month(2026, 3).unwrap().label(), "2026-03");
        assert_eq!(ReportPeriod::month(2025, 12).unwrap().label(), "2025-12");
    }

    #[test]
    fn test_containing_uses_posting_month() {
        let period = ReportPeriod::containing(date(2026, 7, 19)).unwrap();
        assert_eq!(period.start, date(2026, 7, 1));
        assert_eq!(period.end, date(2026, 8, 1));
    }
}
