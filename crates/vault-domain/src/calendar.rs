//! Month/day helpers for milestone date pickers.
//!
//! Milestones only store a month and a day and recur yearly, so February is
//! always treated as having 29 days. Dates that have to be rendered as a full
//! ISO date use [`PLACEHOLDER_YEAR`], which is itself a leap year.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Year used when a month/day pair has to travel as a full date.
pub const PLACEHOLDER_YEAR: i32 = 2000;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Forces a month into `1..=12`.
pub fn clamp_month(month: u32) -> u32 {
    month.clamp(1, 12)
}

/// Number of selectable days in `month` (out-of-range months are clamped first).
pub fn days_in_month(month: u32) -> u32 {
    match clamp_month(month) {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Keeps `day` valid for `month`, e.g. day 31 becomes 29 in February.
pub fn clamp_day(day: u32, month: u32) -> u32 {
    day.clamp(1, days_in_month(month))
}

/// English month name for `month` (clamped).
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(clamp_month(month) - 1) as usize]
}

/// A recurring calendar position without a year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// Builds a normalized pair; the day is clamped to the month length.
    pub fn new(month: u32, day: u32) -> Self {
        let month = clamp_month(month);
        Self {
            month,
            day: clamp_day(day, month),
        }
    }

    /// Changes the month and re-clamps the current day.
    pub fn with_month(self, month: u32) -> Self {
        Self::new(month, self.day)
    }

    pub fn with_day(self, day: u32) -> Self {
        Self::new(self.month, day)
    }

    /// Full date in [`PLACEHOLDER_YEAR`].
    pub fn placeholder_date(self) -> NaiveDate {
        let normalized = Self::new(self.month, self.day);
        NaiveDate::from_ymd_opt(PLACEHOLDER_YEAR, normalized.month, normalized.day)
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(date.month(), date.day())
    }
}

impl Default for MonthDay {
    fn default() -> Self {
        Self { month: 1, day: 1 }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", month_name(self.month), self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_is_lenient() {
        assert_eq!(days_in_month(2), 29);
        assert_eq!(clamp_day(31, 2), 29);
        assert_eq!(clamp_day(29, 2), 29);
    }

    #[test]
    fn thirty_day_months_clamp() {
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(month), 30);
            assert_eq!(clamp_day(31, month), 30);
        }
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(month), 31);
        }
    }

    #[test]
    fn out_of_range_inputs_are_normalized() {
        assert_eq!(clamp_day(0, 5), 1);
        assert_eq!(days_in_month(0), 31);
        assert_eq!(days_in_month(13), 31);
        assert_eq!(month_name(13), "December");
    }

    #[test]
    fn month_change_reclamps_day() {
        let date = MonthDay::new(1, 31).with_month(2);
        assert_eq!(date, MonthDay { month: 2, day: 29 });
        assert_eq!(date.to_string(), "February 29");
    }

    #[test]
    fn placeholder_date_uses_leap_year() {
        let date = MonthDay::new(2, 29).placeholder_date();
        assert_eq!(date.to_string(), "2000-02-29");
        assert_eq!(MonthDay::from_date(date), MonthDay::new(2, 29));
    }
}
