mod aggregates;
mod config;
mod dashboard;
mod error;
pub mod series;
mod types;
mod views;
mod weather_data;

#[cfg(test)]
mod test_support;

pub use config::{DashboardConfig, DEFAULT_DATA_PATH};
pub use dashboard::*;
pub use error::DashboardError;

pub use weather_data::data_loader::{ClimateDataLoader, POWER_MISSING_VALUE, POWER_PREAMBLE_LINES};
pub use weather_data::error::LoadError;

pub use types::calendar_month::CalendarMonth;
pub use types::climate_variable::{ClimateVariable, DATE, DAY, MONTH, YEAR};
pub use types::daily_frame::DailyLazyFrame;
pub use types::period::{AnyDate, DatePeriod, StartEndDate, Year};

pub use aggregates::correlation::CorrelationMatrix;
pub use aggregates::error::AggregateError;
pub use aggregates::heatmap::MonthYearMatrix;
pub use aggregates::highlights::{Extreme, Highlights};
pub use aggregates::monthly::{MonthAcrossYears, MonthlyRecord, MonthlyTable};
pub use aggregates::overview::OverviewStats;
pub use aggregates::seasonal::{SeasonalRecord, SeasonalTable};
pub use aggregates::yearly::{AnnualSolar, AnnualSolarRecord, YearlyRecord, YearlyTable};
pub use aggregates::ClimateAggregates;

pub use views::chart::{Chart, HeatmapChart, Trace, TraceMode, XValue, XyChart};
pub use views::{render_view, MapMarker, Metric, RollingWindow, View, ViewDescription, ViewParams};
