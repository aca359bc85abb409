//! Whole-period summary figures shown at the top of the overview.

use crate::aggregates::error::AggregateError;
use crate::aggregates::frame_ext::{f64_values, i32_values};
use crate::types::climate_variable::{ClimateVariable, YEAR};
use crate::types::daily_frame::DailyLazyFrame;
use polars::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewStats {
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub mean_temp_c: Option<f64>,
    /// Hottest minus coldest daily mean temperature.
    pub temp_spread_c: Option<f64>,
    pub total_rain_mm: Option<f64>,
    /// Wettest minus driest single day.
    pub rain_spread_mm: Option<f64>,
    pub mean_solar_kwh_m2_day: Option<f64>,
    pub solar_spread_kwh_m2_day: Option<f64>,
}

fn spread(name: &str) -> Expr {
    col(name).max() - col(name).min()
}

impl OverviewStats {
    pub fn compute(daily: &DailyLazyFrame) -> Result<Self, AggregateError> {
        let temp = ClimateVariable::MeanTemperature.column();
        let rain = ClimateVariable::Rainfall.column();
        let solar = ClimateVariable::SolarIrradiance.column();

        let df = daily
            .frame
            .clone()
            .select([
                col(YEAR).min().alias("first_year"),
                col(YEAR).max().alias("last_year"),
                col(temp).mean().alias("mean_temp"),
                spread(temp).alias("temp_spread"),
                col(rain).sum().alias("total_rain"),
                spread(rain).alias("rain_spread"),
                col(solar).mean().alias("mean_solar"),
                spread(solar).alias("solar_spread"),
            ])
            .collect()?;

        let first = |name: &str| -> Result<Option<f64>, AggregateError> {
            Ok(f64_values(&df, name)?.first().copied().flatten())
        };
        let first_year = i32_values(&df, "first_year")?.first().copied().flatten();
        let last_year = i32_values(&df, "last_year")?.first().copied().flatten();

        Ok(Self {
            first_year,
            last_year,
            mean_temp_c: first("mean_temp")?,
            temp_spread_c: first("temp_spread")?,
            total_rain_mm: first("total_rain")?,
            rain_spread_mm: first("rain_spread")?,
            mean_solar_kwh_m2_day: first("mean_solar")?,
            solar_spread_kwh_m2_day: first("solar_spread")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{load_rows, PowerRow};

    #[test]
    fn test_whole_period_figures() -> Result<(), Box<dyn std::error::Error>> {
        let rows = vec![
            PowerRow::new(2003, 1, 1, 10.0, 15.0, 0.0, 4.0),
            PowerRow::new(2003, 1, 2, 20.0, 25.0, 6.0, 5.0),
            PowerRow::new(2004, 7, 1, 30.0, 38.0, 2.0, 6.0),
            PowerRow::new(2005, 7, 2, 20.0, 28.0, 4.0, -999.0),
        ];
        let (daily, _file) = load_rows(&rows);
        let overview = OverviewStats::compute(&daily)?;

        assert_eq!(overview.first_year, Some(2003));
        assert_eq!(overview.last_year, Some(2005));
        assert!((overview.mean_temp_c.unwrap() - 20.0).abs() < 1e-9);
        assert!((overview.temp_spread_c.unwrap() - 20.0).abs() < 1e-9);
        assert!((overview.total_rain_mm.unwrap() - 12.0).abs() < 1e-9);
        assert!((overview.rain_spread_mm.unwrap() - 6.0).abs() < 1e-9);
        // the sentinel day does not count
        assert!((overview.mean_solar_kwh_m2_day.unwrap() - 5.0).abs() < 1e-9);
        assert!((overview.solar_spread_kwh_m2_day.unwrap() - 2.0).abs() < 1e-9);
        Ok(())
    }
}
