//! The main entry point: load the daily data once, aggregate it once, then
//! describe any view from the resulting immutable bundle.

use crate::aggregates::ClimateAggregates;
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::types::daily_frame::DailyLazyFrame;
use crate::types::period::StartEndDate;
use crate::views::{render_view, View, ViewDescription, ViewParams};
use crate::weather_data::data_loader::ClimateDataLoader;
use bon::bon;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use climate_dashboard::LatLon;
///
/// let chakwal = LatLon(32.9336, 72.8530);
/// assert_eq!(chakwal.0, 32.9336); // Latitude
/// assert_eq!(chakwal.1, 72.8530); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

/// The loaded dataset together with every aggregate derived from it.
///
/// Nothing in a `ClimateDashboard` changes after construction, so a single
/// instance can serve any number of [`View`] requests.
///
/// # Examples
///
/// ```no_run
/// use climate_dashboard::{ClimateDashboard, DashboardError, View, ViewParams};
///
/// # fn main() -> Result<(), DashboardError> {
/// let dashboard = ClimateDashboard::load()
///     .data_path("POWER_Point_Daily.csv")
///     .call()?;
/// let overview = dashboard.view(View::Overview, &ViewParams::default());
/// println!("{}", overview.heading);
/// # Ok(())
/// # }
/// ```
pub struct ClimateDashboard {
    config: DashboardConfig,
    daily: DailyLazyFrame,
    aggregates: ClimateAggregates,
}

#[bon]
impl ClimateDashboard {
    /// Loads and aggregates a dataset.
    ///
    /// This method uses a builder pattern. Every setting is optional; values given
    /// directly on the builder take precedence over those in `.config(..)`, which in
    /// turn defaults to [`DashboardConfig::default`].
    ///
    /// # Arguments
    ///
    /// * `.config(DashboardConfig)`: Base settings.
    /// * `.data_path(impl Into<PathBuf>)`: The POWER daily CSV to read.
    /// * `.preamble_lines(usize)`: Lines preceding the CSV header.
    /// * `.missing_value(Option<f64>)`: The fill value to treat as missing; `None` keeps
    ///   every value as read.
    /// * `.period(StartEndDate)`: Restrict the analysis to an inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Load`] if the file cannot be read or lacks a required
    /// column, and [`DashboardError::Aggregate`] if no usable rows remain.
    #[builder]
    pub fn load(
        config: Option<DashboardConfig>,
        #[builder(into)] data_path: Option<PathBuf>,
        preamble_lines: Option<usize>,
        missing_value: Option<Option<f64>>,
        period: Option<StartEndDate>,
    ) -> Result<Self, DashboardError> {
        let mut config = config.unwrap_or_default();
        if let Some(data_path) = data_path {
            config.data_path = data_path;
        }
        if let Some(preamble_lines) = preamble_lines {
            config.preamble_lines = preamble_lines;
        }
        if let Some(missing_value) = missing_value {
            config.missing_value = missing_value;
        }
        if period.is_some() {
            config.period = period;
        }
        Self::from_config(config)
    }

    /// Loads and aggregates the dataset described by `config`.
    pub fn from_config(config: DashboardConfig) -> Result<Self, DashboardError> {
        let mut daily = ClimateDataLoader::new(&config.data_path)
            .with_preamble_lines(config.preamble_lines)
            .with_missing_value(config.missing_value)
            .load()?;

        if let Some(period) = config.period {
            info!("Restricting analysis to {}", period);
            daily = daily.get_range(period.start, period.end)?;
        }

        let aggregates = ClimateAggregates::compute(&daily)?;
        Ok(Self {
            config,
            daily,
            aggregates,
        })
    }

    /// Describes one view. Cheap: only reads the precomputed aggregates.
    pub fn view(&self, view: View, params: &ViewParams) -> ViewDescription {
        render_view(view, &self.aggregates, params, &self.config.map_marker())
    }

    pub fn aggregates(&self) -> &ClimateAggregates {
        &self.aggregates
    }

    /// The daily table, after any period restriction.
    pub fn daily(&self) -> &DailyLazyFrame {
        &self.daily
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{power_csv, write_csv, year_of_days, PowerRow, TEST_PREAMBLE_LINES};
    use crate::{CalendarMonth, ClimateVariable, LoadError, RollingWindow};
    use chrono::{Datelike, NaiveDate};
    use tempfile::NamedTempFile;

    fn decade_csv() -> NamedTempFile {
        let mut rows = Vec::new();
        for year in 2000..2010 {
            rows.extend(year_of_days(year, move |d| {
                let rain = if d.day() == 1 { 0.0 } else { 1.5 };
                (20.0 + d.month() as f64, 30.0, rain, 5.0)
            }));
        }
        write_csv(&power_csv(&rows, TEST_PREAMBLE_LINES))
    }

    #[test]
    fn test_load_then_render_every_view() -> Result<(), DashboardError> {
        let file = decade_csv();
        let dashboard = ClimateDashboard::load()
            .data_path(file.path())
            .preamble_lines(TEST_PREAMBLE_LINES)
            .call()?;

        assert_eq!(dashboard.aggregates().yearly.records.len(), 10);
        let params = ViewParams {
            rolling_window: RollingWindow::Five,
            month: CalendarMonth::Mar,
        };
        for view in View::ALL {
            let description = dashboard.view(view, &params);
            assert_eq!(description.view, view);
        }
        let highlights = dashboard.view(View::HighlightsLocation, &params);
        assert_eq!(highlights.location.unwrap().name, "Chakwal");
        assert_eq!(dashboard.aggregates().highlights.longest_dry_spell_days, 12);
        Ok(())
    }

    #[test]
    fn test_period_limits_years() -> Result<(), DashboardError> {
        let file = decade_csv();
        let dashboard = ClimateDashboard::load()
            .data_path(file.path())
            .preamble_lines(TEST_PREAMBLE_LINES)
            .period(StartEndDate {
                start: NaiveDate::from_ymd_opt(2003, 1, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2005, 12, 31).unwrap(),
            })
            .call()?;

        assert_eq!(dashboard.aggregates().yearly.years(), vec![2003, 2004, 2005]);
        assert_eq!(dashboard.aggregates().heatmap_rain.years, vec![2003, 2004, 2005]);
        assert_eq!(dashboard.aggregates().overview.last_year, Some(2005));
        Ok(())
    }

    #[test]
    fn test_config_and_builder_overrides() -> Result<(), DashboardError> {
        let file = decade_csv();
        let config = DashboardConfig {
            data_path: PathBuf::from("/nowhere/power.csv"),
            preamble_lines: TEST_PREAMBLE_LINES,
            location_name: "Elsewhere".to_string(),
            ..DashboardConfig::default()
        };

        let missing = ClimateDashboard::from_config(config.clone());
        assert!(matches!(
            missing,
            Err(DashboardError::Load(LoadError::FileNotFound(_)))
        ));

        let dashboard = ClimateDashboard::load()
            .config(config)
            .data_path(file.path())
            .call()?;
        assert_eq!(dashboard.config().location_name, "Elsewhere");
        assert_eq!(dashboard.config().data_path, file.path());
        Ok(())
    }

    #[test]
    fn test_builder_can_disable_missing_value() -> Result<(), Box<dyn std::error::Error>> {
        let rows = vec![
            PowerRow::new(2001, 1, 1, 10.0, 15.0, -999.0, 4.0),
            PowerRow::new(2001, 1, 2, 11.0, 16.0, 2.0, 4.5),
        ];
        let file = write_csv(&power_csv(&rows, TEST_PREAMBLE_LINES));
        let rain_of = |dashboard: &ClimateDashboard| -> Result<Vec<Option<f64>>, Box<dyn std::error::Error>> {
            let df = dashboard.daily().frame.clone().collect()?;
            Ok(df.column(ClimateVariable::Rainfall.column())?.f64()?.into_iter().collect())
        };

        let kept = ClimateDashboard::load()
            .data_path(file.path())
            .preamble_lines(TEST_PREAMBLE_LINES)
            .missing_value(None)
            .call()?;
        assert_eq!(kept.config().missing_value, None);
        assert_eq!(rain_of(&kept)?, vec![Some(-999.0), Some(2.0)]);

        let nulled = ClimateDashboard::load()
            .config(DashboardConfig {
                missing_value: None,
                ..DashboardConfig::default()
            })
            .data_path(file.path())
            .preamble_lines(TEST_PREAMBLE_LINES)
            .missing_value(Some(-999.0))
            .call()?;
        assert_eq!(rain_of(&nulled)?, vec![None, Some(2.0)]);
        Ok(())
    }

    #[test]
    fn test_missing_day_column_fails_before_aggregation() {
        let file = write_csv("-BEGIN HEADER-\n-END HEADER-\nYEAR,MO,T2M,T2M_MAX,PRECTOTCORR,ALLSKY_SFC_SW_DWN\n2001,1,1,1,1,1\n");
        let result = ClimateDashboard::load()
            .data_path(file.path())
            .preamble_lines(2)
            .call();
        match result {
            Err(DashboardError::Load(LoadError::MissingColumn { column })) => assert_eq!(column, "DY"),
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("loading must fail"),
        }
    }
}
