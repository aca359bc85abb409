use crate::error::DashboardError;
use crate::types::calendar_month::CalendarMonth;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Year(pub i32);
impl Year {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// An inclusive date range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartEndDate {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StartEndDate {
    /// Builds a range from optional bounds. `start` resolves to the first day it covers and
    /// `end` to the last, so `from_bounds(Some("2005"), Some("2007"))` spans three whole years.
    /// A missing bound leaves that side open; with neither bound there is no range.
    ///
    /// Returns [`DashboardError::DateParsing`] if a given bound cannot be resolved.
    pub fn from_bounds(
        start: Option<impl AnyDate>,
        end: Option<impl AnyDate>,
    ) -> Result<Option<StartEndDate>, DashboardError> {
        if start.is_none() && end.is_none() {
            return Ok(None);
        }
        let start = match start {
            Some(start) => start.get_date_range().ok_or(DashboardError::DateParsing)?.start,
            None => NaiveDate::from_ymd_opt(1, 1, 1).ok_or(DashboardError::DateParsing)?,
        };
        let end = match end {
            Some(end) => end.get_date_range().ok_or(DashboardError::DateParsing)?.end,
            None => NaiveDate::from_ymd_opt(9999, 12, 31).ok_or(DashboardError::DateParsing)?,
        };
        Ok(Some(StartEndDate { start, end }))
    }
}

impl Display for StartEndDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Anything that can be resolved to an inclusive range of days.
pub trait AnyDate {
    fn get_date_range(self) -> Option<StartEndDate>;
}

impl AnyDate for NaiveDate {
    fn get_date_range(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: self,
            end: self,
        })
    }
}

impl AnyDate for &str {
    fn get_date_range(self) -> Option<StartEndDate> {
        if let Ok(naive_date) = NaiveDate::parse_from_str(self.trim(), "%Y-%m-%d") {
            return naive_date.get_date_range();
        }
        // A bare year ("2010") covers the whole year.
        self.trim().parse::<i32>().ok().and_then(|y| Year(y).get_date_range())
    }
}

impl AnyDate for String {
    fn get_date_range(self) -> Option<StartEndDate> {
        self.as_str().get_date_range()
    }
}

impl AnyDate for Year {
    fn get_date_range(self) -> Option<StartEndDate> {
        self.get_date_period()
    }
}

/// A named calendar period (a year, or a month of a year).
pub trait DatePeriod {
    fn get_date_period(self) -> Option<StartEndDate>;
}

impl DatePeriod for Year {
    fn get_date_period(self) -> Option<StartEndDate> {
        Some(StartEndDate {
            start: NaiveDate::from_ymd_opt(self.0, 1, 1)?,
            end: NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        })
    }
}

impl DatePeriod for (Year, CalendarMonth) {
    fn get_date_period(self) -> Option<StartEndDate> {
        let year = self.0.get();
        let month = self.1.number();
        Some(StartEndDate {
            start: NaiveDate::from_ymd_opt(year, month, 1)?,
            end: NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)?)?,
        })
    }
}

pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_month_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let first_day_of_next_month = NaiveDate::from_ymd_opt(next_month_year, next_month, 1)?;
    let last_day_of_current_month = first_day_of_next_month - Duration::days(1);
    Some(last_day_of_current_month.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2001, 2), Some(28));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn test_str_resolves_dates_and_years() {
        let day = "2010-06-15".get_date_range().unwrap();
        assert_eq!(day.start, day.end);
        assert_eq!(day.start, NaiveDate::from_ymd_opt(2010, 6, 15).unwrap());

        let year = "2012".get_date_range().unwrap();
        assert_eq!(year.start, NaiveDate::from_ymd_opt(2012, 1, 1).unwrap());
        assert_eq!(year.end, NaiveDate::from_ymd_opt(2012, 12, 31).unwrap());

        assert!("not a date".get_date_range().is_none());
    }

    #[test]
    fn test_from_bounds() -> Result<(), DashboardError> {
        assert_eq!(StartEndDate::from_bounds(None::<&str>, None::<&str>)?, None);

        let years = StartEndDate::from_bounds(Some("2005"), Some("2007"))?.unwrap();
        assert_eq!(years.start, NaiveDate::from_ymd_opt(2005, 1, 1).unwrap());
        assert_eq!(years.end, NaiveDate::from_ymd_opt(2007, 12, 31).unwrap());

        let open_end = StartEndDate::from_bounds(Some("2010-03-15"), None::<&str>)?.unwrap();
        assert_eq!(open_end.start, NaiveDate::from_ymd_opt(2010, 3, 15).unwrap());
        assert_eq!(open_end.end, NaiveDate::from_ymd_opt(9999, 12, 31).unwrap());

        let open_start = StartEndDate::from_bounds(None::<String>, Some("2001".to_string()))?.unwrap();
        assert_eq!(open_start.start, NaiveDate::from_ymd_opt(1, 1, 1).unwrap());
        assert_eq!(open_start.end, NaiveDate::from_ymd_opt(2001, 12, 31).unwrap());

        assert!(matches!(
            StartEndDate::from_bounds(Some("soon"), None::<&str>),
            Err(DashboardError::DateParsing)
        ));
        Ok(())
    }

    #[test]
    fn test_year_month_period() {
        let feb = (Year(2004), CalendarMonth::Feb).get_date_period().unwrap();
        assert_eq!(feb.start, NaiveDate::from_ymd_opt(2004, 2, 1).unwrap());
        assert_eq!(feb.end, NaiveDate::from_ymd_opt(2004, 2, 29).unwrap());
    }
}
