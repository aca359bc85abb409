//! One row per (year, month), plus the per-month slices the monthly views draw.

use crate::aggregates::error::AggregateError;
use crate::aggregates::frame_ext::{f64_values, i32_values};
use crate::series::centered_rolling_mean;
use crate::types::calendar_month::CalendarMonth;
use crate::types::climate_variable::{ClimateVariable, MONTH, YEAR};
use crate::types::daily_frame::DailyLazyFrame;
use polars::prelude::*;
use serde::Serialize;

const MONTH_SOLAR_TREND_WINDOW: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRecord {
    pub year: i32,
    pub month: CalendarMonth,
    pub mean_temp_c: Option<f64>,
    pub total_rain_mm: f64,
    pub mean_solar_kwh_m2_day: Option<f64>,
}

/// Monthly-within-year table, ascending by (year, month).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MonthlyTable {
    pub records: Vec<MonthlyRecord>,
}

/// A single calendar month followed across the years, e.g. every July.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthAcrossYears {
    pub month: CalendarMonth,
    pub years: Vec<i32>,
    pub mean_temps: Vec<Option<f64>>,
    pub rain_totals: Vec<Option<f64>>,
    pub solar_means: Vec<Option<f64>>,
    /// 3-year centered trend of `solar_means`.
    pub solar_trend: Vec<Option<f64>>,
}

impl MonthlyTable {
    pub fn compute(daily: &DailyLazyFrame) -> Result<Self, AggregateError> {
        let df = daily
            .frame
            .clone()
            .group_by([col(YEAR), col(MONTH)])
            .agg([
                col(ClimateVariable::MeanTemperature.column())
                    .mean()
                    .alias("mean_temp_c"),
                col(ClimateVariable::Rainfall.column())
                    .sum()
                    .alias("total_rain_mm"),
                col(ClimateVariable::SolarIrradiance.column())
                    .mean()
                    .alias("mean_solar"),
            ])
            .sort([YEAR, MONTH], SortMultipleOptions::default())
            .collect()?;

        let years = i32_values(&df, YEAR)?;
        let months = i32_values(&df, MONTH)?;
        let mean_temps = f64_values(&df, "mean_temp_c")?;
        let rain_totals = f64_values(&df, "total_rain_mm")?;
        let solar_means = f64_values(&df, "mean_solar")?;

        let records = years
            .into_iter()
            .zip(months)
            .enumerate()
            .filter_map(|(i, (year, month))| {
                let month = CalendarMonth::from_number(u32::try_from(month?).ok()?)?;
                Some(MonthlyRecord {
                    year: year?,
                    month,
                    mean_temp_c: mean_temps[i],
                    total_rain_mm: rain_totals[i].unwrap_or(0.0),
                    mean_solar_kwh_m2_day: solar_means[i],
                })
            })
            .collect();

        Ok(Self { records })
    }

    /// The rows of one calendar month, ascending by year.
    pub fn for_month(&self, month: CalendarMonth) -> MonthAcrossYears {
        let rows: Vec<&MonthlyRecord> = self.records.iter().filter(|r| r.month == month).collect();
        let solar_means: Vec<Option<f64>> = rows.iter().map(|r| r.mean_solar_kwh_m2_day).collect();

        MonthAcrossYears {
            month,
            years: rows.iter().map(|r| r.year).collect(),
            mean_temps: rows.iter().map(|r| r.mean_temp_c).collect(),
            rain_totals: rows.iter().map(|r| Some(r.total_rain_mm)).collect(),
            solar_trend: centered_rolling_mean(&solar_means, MONTH_SOLAR_TREND_WINDOW),
            solar_means,
        }
    }
}
