//! Calendar months, independent of any particular year.

use crate::DashboardError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the twelve calendar months, ordered January to December.
///
/// Used both as the row key of the month-by-year heatmaps and as the month
/// selector of the "Monthly Trends & Heatmaps" view.
///
/// # Examples
///
/// ```
/// use climate_dashboard::CalendarMonth;
///
/// let july: CalendarMonth = "Jul".parse().unwrap();
/// assert_eq!(july.number(), 7);
/// assert_eq!(CalendarMonth::from_number(12), Some(CalendarMonth::Dec));
/// assert_eq!(july.to_string(), "Jul");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CalendarMonth {
    #[default]
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl CalendarMonth {
    pub const ALL: [CalendarMonth; 12] = [
        CalendarMonth::Jan,
        CalendarMonth::Feb,
        CalendarMonth::Mar,
        CalendarMonth::Apr,
        CalendarMonth::May,
        CalendarMonth::Jun,
        CalendarMonth::Jul,
        CalendarMonth::Aug,
        CalendarMonth::Sep,
        CalendarMonth::Oct,
        CalendarMonth::Nov,
        CalendarMonth::Dec,
    ];

    /// Month number, 1 for January through 12 for December.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_number(number: u32) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize))
            .copied()
    }

    /// Three-letter English abbreviation ("Jan", "Feb", ...).
    pub fn abbreviation(self) -> &'static str {
        match self {
            CalendarMonth::Jan => "Jan",
            CalendarMonth::Feb => "Feb",
            CalendarMonth::Mar => "Mar",
            CalendarMonth::Apr => "Apr",
            CalendarMonth::May => "May",
            CalendarMonth::Jun => "Jun",
            CalendarMonth::Jul => "Jul",
            CalendarMonth::Aug => "Aug",
            CalendarMonth::Sep => "Sep",
            CalendarMonth::Oct => "Oct",
            CalendarMonth::Nov => "Nov",
            CalendarMonth::Dec => "Dec",
        }
    }

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            CalendarMonth::Jan => "January",
            CalendarMonth::Feb => "February",
            CalendarMonth::Mar => "March",
            CalendarMonth::Apr => "April",
            CalendarMonth::May => "May",
            CalendarMonth::Jun => "June",
            CalendarMonth::Jul => "July",
            CalendarMonth::Aug => "August",
            CalendarMonth::Sep => "September",
            CalendarMonth::Oct => "October",
            CalendarMonth::Nov => "November",
            CalendarMonth::Dec => "December",
        }
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Accepts the month number or any prefix of at least three letters of the English name.
impl FromStr for CalendarMonth {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Self::from_number(number)
                .ok_or_else(|| DashboardError::InvalidMonth(s.to_string()));
        }
        let lower = trimmed.to_ascii_lowercase();
        if lower.len() >= 3 {
            for month in Self::ALL {
                if month.name().to_ascii_lowercase().starts_with(&lower) {
                    return Ok(month);
                }
            }
        }
        Err(DashboardError::InvalidMonth(s.to_string()))
    }
}

impl Serialize for CalendarMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.abbreviation())
    }
}
