//! One row per calendar year.

use crate::aggregates::error::AggregateError;
use crate::aggregates::frame_ext::{f64_values, i32_values, i64_values, is_zero};
use crate::series::{centered_rolling_mean, clip_to_sigma};
use crate::types::climate_variable::{ClimateVariable, YEAR};
use crate::types::daily_frame::DailyLazyFrame;
use polars::prelude::*;
use serde::Serialize;

const SOLAR_CLIP_SIGMAS: f64 = 2.0;
const SOLAR_TREND_WINDOW: usize = 3;

/// Yearly reductions of the daily table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyRecord {
    pub year: i32,
    /// Mean of the daily mean temperatures.
    pub mean_temp_c: Option<f64>,
    /// Highest daily maximum temperature of the year.
    pub max_temp_c: Option<f64>,
    /// Mean of the daily maximum temperatures.
    pub mean_max_temp_c: Option<f64>,
    /// Rainfall total over the year.
    pub total_rain_mm: f64,
    /// Mean daily solar irradiance.
    pub mean_solar_kwh_m2_day: Option<f64>,
    /// Number of days with exactly zero rainfall.
    pub zero_rain_days: u32,
}

/// Yearly table, ascending by year with one row per distinct year.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct YearlyTable {
    pub records: Vec<YearlyRecord>,
}

impl YearlyTable {
    pub fn compute(daily: &DailyLazyFrame) -> Result<Self, AggregateError> {
        let mean_temp = ClimateVariable::MeanTemperature.column();
        let max_temp = ClimateVariable::MaxTemperature.column();
        let rain = ClimateVariable::Rainfall.column();
        let solar = ClimateVariable::SolarIrradiance.column();

        let df = daily
            .frame
            .clone()
            .group_by([col(YEAR)])
            .agg([
                col(mean_temp).mean().alias("mean_temp_c"),
                col(max_temp).max().alias("max_temp_c"),
                col(max_temp).mean().alias("mean_max_temp_c"),
                col(rain).sum().alias("total_rain_mm"),
                col(solar).mean().alias("mean_solar"),
                is_zero(rain).sum().alias("zero_rain_days"),
            ])
            .sort([YEAR], SortMultipleOptions::default())
            .collect()?;

        let years = i32_values(&df, YEAR)?;
        let mean_temps = f64_values(&df, "mean_temp_c")?;
        let max_temps = f64_values(&df, "max_temp_c")?;
        let mean_max_temps = f64_values(&df, "mean_max_temp_c")?;
        let rain_totals = f64_values(&df, "total_rain_mm")?;
        let solar_means = f64_values(&df, "mean_solar")?;
        let zero_days = i64_values(&df, "zero_rain_days")?;

        let records = years
            .into_iter()
            .enumerate()
            .filter_map(|(i, year)| {
                Some(YearlyRecord {
                    year: year?,
                    mean_temp_c: mean_temps[i],
                    max_temp_c: max_temps[i],
                    mean_max_temp_c: mean_max_temps[i],
                    total_rain_mm: rain_totals[i].unwrap_or(0.0),
                    mean_solar_kwh_m2_day: solar_means[i],
                    zero_rain_days: zero_days[i].unwrap_or(0).try_into().unwrap_or(u32::MAX),
                })
            })
            .collect();

        Ok(Self { records })
    }

    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    pub fn mean_temps(&self) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.mean_temp_c).collect()
    }

    pub fn max_temps(&self) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.max_temp_c).collect()
    }

    pub fn rain_totals(&self) -> Vec<Option<f64>> {
        self.records.iter().map(|r| Some(r.total_rain_mm)).collect()
    }

    pub fn solar_means(&self) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.mean_solar_kwh_m2_day).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualSolarRecord {
    pub year: i32,
    pub mean_kwh_m2_day: Option<f64>,
    /// The yearly mean clipped to ±2σ of the yearly series.
    pub clipped: Option<f64>,
    /// 3-year centered mean of `clipped`.
    pub trend: Option<f64>,
}

/// Annual solar irradiance with outlier clipping and its trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualSolar {
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
    pub records: Vec<AnnualSolarRecord>,
}

impl AnnualSolar {
    pub fn from_yearly(yearly: &YearlyTable) -> Self {
        let means = yearly.solar_means();
        let clipped = clip_to_sigma(&means, SOLAR_CLIP_SIGMAS);
        let trend = centered_rolling_mean(&clipped.values, SOLAR_TREND_WINDOW);

        let records = yearly
            .records
            .iter()
            .zip(clipped.values.iter().zip(trend))
            .map(|(record, (clipped, trend))| AnnualSolarRecord {
                year: record.year,
                mean_kwh_m2_day: record.mean_solar_kwh_m2_day,
                clipped: *clipped,
                trend,
            })
            .collect();

        Self {
            lower_bound: clipped.lower,
            upper_bound: clipped.upper,
            records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{load_rows, year_of_days, PowerRow};

    fn three_years() -> Vec<PowerRow> {
        let mut rows = Vec::new();
        // Written out of order on purpose.
        rows.extend(year_of_days(2002, |_| (20.0, 28.0, 1.0, 5.0)));
        rows.extend(year_of_days(2000, |_| (19.0, 27.0, 2.0, 5.5)));
        rows.extend(year_of_days(2001, |d| {
            let rain = if d.format("%m-%d").to_string() == "06-01" { 0.0 } else { 0.5 };
            (21.0, 30.0, rain, 6.0)
        }));
        rows
    }

    #[test]
    fn test_one_row_per_year_ascending() -> Result<(), Box<dyn std::error::Error>> {
        let (daily, _file) = load_rows(&three_years());
        let yearly = YearlyTable::compute(&daily)?;

        assert_eq!(yearly.years(), vec![2000, 2001, 2002]);
        Ok(())
    }

    #[test]
    fn test_reductions() -> Result<(), Box<dyn std::error::Error>> {
        let (daily, _file) = load_rows(&three_years());
        let yearly = YearlyTable::compute(&daily)?;
        let y2000 = &yearly.records[0];
        let y2001 = &yearly.records[1];

        assert!((y2000.mean_temp_c.unwrap() - 19.0).abs() < 1e-9);
        assert!((y2000.total_rain_mm - 2.0 * 366.0).abs() < 1e-6);
        assert_eq!(y2000.zero_rain_days, 0);
        assert_eq!(y2001.max_temp_c, Some(30.0));
        assert!((y2001.mean_max_temp_c.unwrap() - 30.0).abs() < 1e-9);
        assert_eq!(y2001.zero_rain_days, 1);
        assert!((y2001.total_rain_mm - 0.5 * 364.0).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_annual_solar_within_bounds() -> Result<(), Box<dyn std::error::Error>> {
        let mut rows = Vec::new();
        for (year, solar) in [
            (2000, 5.0),
            (2001, 5.1),
            (2002, 4.9),
            (2003, 5.0),
            (2004, 5.2),
            (2005, 4.8),
            (2006, 9.0),
            (2007, 5.0),
        ] {
            rows.extend(year_of_days(year, move |_| (20.0, 25.0, 1.0, solar)));
        }
        let (daily, _file) = load_rows(&rows);
        let solar = AnnualSolar::from_yearly(&YearlyTable::compute(&daily)?);

        let lower = solar.lower_bound.unwrap();
        let upper = solar.upper_bound.unwrap();
        assert!(upper < 9.0, "the outlier year must be clipped");
        for record in &solar.records {
            let clipped = record.clipped.unwrap();
            assert!(clipped >= lower && clipped <= upper);
        }
        assert_eq!(solar.records[6].clipped, Some(upper));
        assert_eq!(solar.records.first().unwrap().trend, None);
        assert_eq!(solar.records.last().unwrap().trend, None);
        assert!(solar.records[1..7].iter().all(|r| r.trend.is_some()));
        Ok(())
    }
}
