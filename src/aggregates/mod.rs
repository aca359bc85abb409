//! The derived tables every view reads from, computed once per dataset.

pub mod correlation;
pub mod error;
mod frame_ext;
pub mod heatmap;
pub mod highlights;
pub mod monthly;
pub mod overview;
pub mod seasonal;
pub mod yearly;

use crate::aggregates::correlation::CorrelationMatrix;
use crate::aggregates::error::AggregateError;
use crate::aggregates::heatmap::MonthYearMatrix;
use crate::aggregates::highlights::Highlights;
use crate::aggregates::monthly::MonthlyTable;
use crate::aggregates::overview::OverviewStats;
use crate::aggregates::seasonal::SeasonalTable;
use crate::aggregates::yearly::{AnnualSolar, YearlyTable};
use crate::types::daily_frame::DailyLazyFrame;
use log::{debug, info};
use serde::Serialize;

/// Every aggregate derived from the daily table.
///
/// Serializes as a mapping from aggregate name to its table or scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateAggregates {
    pub yearly: YearlyTable,
    pub annual_solar: AnnualSolar,
    pub monthly: MonthlyTable,
    pub heatmap_temp: MonthYearMatrix,
    pub heatmap_rain: MonthYearMatrix,
    pub seasonal: SeasonalTable,
    pub correlation: CorrelationMatrix,
    pub overview: OverviewStats,
    pub highlights: Highlights,
}

impl ClimateAggregates {
    /// Runs the whole aggregation pipeline over `daily`.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::EmptyDataset`] when the daily table has no rows, and
    /// [`AggregateError::DataFrameProcessing`] when a Polars query fails.
    pub fn compute(daily: &DailyLazyFrame) -> Result<Self, AggregateError> {
        let yearly = YearlyTable::compute(daily)?;
        if yearly.is_empty() {
            return Err(AggregateError::EmptyDataset);
        }
        debug!("Computed {} yearly rows", yearly.records.len());

        let annual_solar = AnnualSolar::from_yearly(&yearly);
        let monthly = MonthlyTable::compute(daily)?;
        let heatmap_temp = MonthYearMatrix::pivot(&monthly, |r| r.mean_temp_c);
        let heatmap_rain = MonthYearMatrix::pivot(&monthly, |r| Some(r.total_rain_mm));
        let seasonal = SeasonalTable::compute(daily)?;
        let correlation = CorrelationMatrix::compute(daily)?;
        let overview = OverviewStats::compute(daily)?;
        let highlights = Highlights::from_tables(&yearly, &seasonal);

        info!(
            "Aggregated {} years ({} year-months) of daily climate data",
            yearly.records.len(),
            monthly.records.len()
        );

        Ok(Self {
            yearly,
            annual_solar,
            monthly,
            heatmap_temp,
            heatmap_rain,
            seasonal,
            correlation,
            overview,
            highlights,
        })
    }
}
