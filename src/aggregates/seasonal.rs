//! Across-year averages per calendar month.

use crate::aggregates::error::AggregateError;
use crate::aggregates::frame_ext::{f64_values, i32_values};
use crate::types::calendar_month::CalendarMonth;
use crate::types::climate_variable::{ClimateVariable, MONTH};
use crate::types::daily_frame::DailyLazyFrame;
use polars::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalRecord {
    pub month: CalendarMonth,
    /// Mean daily temperature over every day of this month, all years.
    pub mean_temp_c: Option<f64>,
    /// Mean daily rainfall over every day of this month, all years.
    pub mean_daily_rain_mm: Option<f64>,
    /// Rainfall summed over every day of this month, all years.
    pub total_rain_mm: Option<f64>,
}

/// Always twelve rows, January first. Months absent from the data have `None` values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SeasonalTable {
    pub records: Vec<SeasonalRecord>,
}

impl SeasonalTable {
    pub fn compute(daily: &DailyLazyFrame) -> Result<Self, AggregateError> {
        let rain = ClimateVariable::Rainfall.column();
        let df = daily
            .frame
            .clone()
            .group_by([col(MONTH)])
            .agg([
                col(ClimateVariable::MeanTemperature.column())
                    .mean()
                    .alias("mean_temp_c"),
                col(rain).mean().alias("mean_daily_rain_mm"),
                col(rain).sum().alias("total_rain_mm"),
            ])
            .collect()?;

        let months = i32_values(&df, MONTH)?;
        let temps = f64_values(&df, "mean_temp_c")?;
        let mean_rain = f64_values(&df, "mean_daily_rain_mm")?;
        let total_rain = f64_values(&df, "total_rain_mm")?;

        let by_month: HashMap<i32, usize> = months
            .iter()
            .enumerate()
            .filter_map(|(i, m)| Some(((*m)?, i)))
            .collect();

        let records = CalendarMonth::ALL
            .iter()
            .map(|month| {
                let row = by_month.get(&(month.number() as i32)).copied();
                SeasonalRecord {
                    month: *month,
                    mean_temp_c: row.and_then(|i| temps[i]),
                    mean_daily_rain_mm: row.and_then(|i| mean_rain[i]),
                    total_rain_mm: row.and_then(|i| total_rain[i]),
                }
            })
            .collect();

        Ok(Self { records })
    }

    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.month.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{load_rows, year_of_days};
    use chrono::Datelike;

    #[test]
    fn test_twelve_rows_in_calendar_order() -> Result<(), Box<dyn std::error::Error>> {
        let mut rows = year_of_days(2000, |d| (d.month() as f64, 20.0, 1.0, 5.0));
        rows.extend(year_of_days(2001, |d| (d.month() as f64 + 2.0, 20.0, 3.0, 5.0)));
        let (daily, _file) = load_rows(&rows);
        let seasonal = SeasonalTable::compute(&daily)?;

        assert_eq!(seasonal.records.len(), 12);
        assert_eq!(seasonal.labels()[0], "Jan");
        assert_eq!(seasonal.labels()[11], "Dec");
        // January: 31 days at 1.0 and 31 days at 3.0
        let jan = &seasonal.records[0];
        assert!((jan.mean_temp_c.unwrap() - 2.0).abs() < 1e-9);
        assert!((jan.mean_daily_rain_mm.unwrap() - 2.0).abs() < 1e-9);
        assert!((jan.total_rain_mm.unwrap() - 124.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_absent_months_are_undefined() -> Result<(), Box<dyn std::error::Error>> {
        let rows: Vec<_> = year_of_days(2000, |_| (10.0, 20.0, 1.0, 5.0))
            .into_iter()
            .filter(|r| r.month <= 6)
            .collect();
        let (daily, _file) = load_rows(&rows);
        let seasonal = SeasonalTable::compute(&daily)?;

        assert_eq!(seasonal.records.len(), 12);
        assert!(seasonal.records[5].mean_temp_c.is_some());
        assert!(seasonal.records[6].mean_temp_c.is_none());
        assert!(seasonal.records[11].total_rain_mm.is_none());
        Ok(())
    }
}
