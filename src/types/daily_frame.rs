// daily_frame.rs

//! Contains the `DailyLazyFrame` structure for lazy operations on the loaded daily climate table.

use crate::types::climate_variable::DATE;
use crate::types::period::{AnyDate, DatePeriod};
use crate::DashboardError;
use polars::prelude::{col, lit, Expr, LazyFrame};

/// A wrapper around a Polars `LazyFrame` holding the renamed daily climate records.
///
/// The frame always carries the columns `year`, `month`, `day`, `date` and the four
/// measurement columns named by [`crate::ClimateVariable::column`]. Every row has a
/// valid calendar `date`; measurements may be null where the source had its
/// missing-value sentinel.
///
/// Instances are produced by [`crate::ClimateDataLoader::load`] and held by
/// [`crate::ClimateDashboard`].
///
/// # Errors
///
/// Operations that trigger computation on the underlying `LazyFrame` (e.g. calling `.collect()`)
/// can return a [`polars::prelude::PolarsError`].
///
/// Methods that resolve dates (`get_range`, `get_at`, `get_for_period`) return
/// [`DashboardError::DateParsing`] when the input cannot be resolved to a date.
#[derive(Clone)]
pub struct DailyLazyFrame {
    /// The underlying Polars LazyFrame containing the daily data.
    pub frame: LazyFrame,
}

impl DailyLazyFrame {
    /// Creates a new `DailyLazyFrame` wrapping the given Polars `LazyFrame`.
    ///
    /// # Arguments
    ///
    /// * `frame` - A `LazyFrame` assumed to contain daily records with the renamed schema.
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Filters the daily data based on a Polars predicate expression.
    ///
    /// Returns a *new* `DailyLazyFrame`; the original is unchanged.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use climate_dashboard::ClimateDataLoader;
    /// use polars::prelude::{col, lit};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let daily = ClimateDataLoader::new("power_daily.csv").load()?;
    ///
    /// // Days with more than 20 mm of rain
    /// let downpours = daily.filter(col("total_rain_mm").gt(lit(20.0f64)));
    /// println!("{}", downpours.frame.collect()?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter(&self, predicate: Expr) -> DailyLazyFrame {
        DailyLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Filters the daily data to include only dates within the specified range (inclusive).
    ///
    /// `start` and `end` can be any [`AnyDate`]: a `NaiveDate`, a [`crate::Year`], or a
    /// `"YYYY-MM-DD"` / `"YYYY"` string. A year resolves to its first day as `start`
    /// and to its last day as `end`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::DateParsing`] if `start` or `end` cannot be resolved.
    pub fn get_range(
        &self,
        start: impl AnyDate,
        end: impl AnyDate,
    ) -> Result<DailyLazyFrame, DashboardError> {
        let start_naive = start
            .get_date_range()
            .ok_or(DashboardError::DateParsing)?
            .start;
        let end_naive = end
            .get_date_range()
            .ok_or(DashboardError::DateParsing)?
            .end;

        Ok(self.filter(
            col(DATE)
                .gt_eq(lit(start_naive))
                .and(col(DATE).lt_eq(lit(end_naive))),
        ))
    }

    /// Filters the daily data down to a single day (the start of `date`'s range).
    pub fn get_at(&self, date: impl AnyDate) -> Result<DailyLazyFrame, DashboardError> {
        let naive_date = date
            .get_date_range()
            .ok_or(DashboardError::DateParsing)?
            .start;
        Ok(self.filter(col(DATE).eq(lit(naive_date))))
    }

    /// Filters the daily data to a calendar period such as [`crate::Year`] or
    /// `(Year, CalendarMonth)`.
    pub fn get_for_period(
        &self,
        period: impl DatePeriod,
    ) -> Result<DailyLazyFrame, DashboardError> {
        let date_period = period
            .get_date_period()
            .ok_or(DashboardError::DateParsing)?;
        self.get_range(date_period.start, date_period.end)
    }
}
