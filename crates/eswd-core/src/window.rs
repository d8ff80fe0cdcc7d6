//! Monthly query windows.
//!
//! Each month is queried as a fixed 30-day window starting on the 1st. The
//! window is not calendar-aligned: for months shorter than 31 days it spills
//! into the following month, so consecutive windows overlap and a report near
//! a month boundary can be returned twice.

use chrono::{Duration, NaiveDate};

/// Days added to the first of the month to obtain the window end.
pub const WINDOW_SPAN_DAYS: i64 = 30;

/// Date format used by the query form: `DD-MM-YYYY`.
pub const FORM_DATE_FORMAT: &str = "%d-%m-%Y";

/// An inclusive `[start, end]` query range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Builds the window for `year`/`month`, or `None` if the month is out of range.
    #[must_use]
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = start.checked_add_signed(Duration::days(WINDOW_SPAN_DAYS))?;
        Some(Self { start, end })
    }

    #[must_use]
    pub fn start_form(&self) -> String {
        self.start.format(FORM_DATE_FORMAT).to_string()
    }

    #[must_use]
    pub fn end_form(&self) -> String {
        self.end.format(FORM_DATE_FORMAT).to_string()
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start_form(), self.end_form())
    }
}

/// Every monthly window from January of `start_year` through December of
/// `end_year`, in chronological order. Empty when `start_year > end_year`.
#[must_use]
pub fn month_windows(start_year: i32, end_year: i32) -> Vec<DateWindow> {
    (start_year..=end_year)
        .flat_map(|year| (1..=12).filter_map(move |month| DateWindow::for_month(year, month)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn january_window_stays_in_month() {
        let w = DateWindow::for_month(2010, 1).unwrap();
        assert_eq!(w.start_form(), "01-01-2010");
        assert_eq!(w.end_form(), "31-01-2010");
    }

    #[test]
    fn february_window_spills_into_march() {
        let w = DateWindow::for_month(2010, 2).unwrap();
        assert_eq!(w.end_form(), "03-03-2010");
    }

    #[test]
    fn leap_february_window_spills_one_day_less() {
        let w = DateWindow::for_month(2024, 2).unwrap();
        assert_eq!(w.end_form(), "02-03-2024");
    }

    #[test]
    fn december_window_crosses_year() {
        let w = DateWindow::for_month(2009, 12).unwrap();
        assert_eq!(w.end_form(), "31-12-2009");
        let w = DateWindow::for_month(2009, 11).unwrap();
        assert_eq!(w.end_form(), "01-12-2009");
    }

    #[test]
    fn invalid_month_has_no_window() {
        assert!(DateWindow::for_month(2010, 13).is_none());
        assert!(DateWindow::for_month(2010, 0).is_none());
    }

    #[test]
    fn month_windows_covers_inclusive_range() {
        let windows = month_windows(2000, 2024);
        assert_eq!(windows.len(), 25 * 12);
        assert_eq!(windows[0].start_form(), "01-01-2000");
        assert_eq!(windows.last().unwrap().start_form(), "01-12-2024");
    }

    #[test]
    fn month_windows_single_year() {
        let windows = month_windows(2015, 2015);
        assert_eq!(windows.len(), 12);
        assert_eq!(windows[5].start_form(), "01-06-2015");
    }

    #[test]
    fn month_windows_empty_when_range_inverted() {
        assert!(month_windows(2024, 2000).is_empty());
    }

    #[test]
    fn display_uses_form_dates() {
        let w = DateWindow::for_month(2010, 3).unwrap();
        assert_eq!(w.to_string(), "01-03-2010 -> 31-03-2010");
    }
}
