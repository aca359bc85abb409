use crate::types::climate_variable::{required_source_columns, ClimateVariable, DATE, DAY, MONTH, YEAR};
use crate::types::daily_frame::DailyLazyFrame;
use crate::weather_data::error::LoadError;
use chrono::{Datelike, NaiveDate};
use log::{debug, info, warn};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Number of metadata lines a NASA POWER point export writes before the header row.
pub const POWER_PREAMBLE_LINES: usize = 32;
/// Fill value NASA POWER uses for missing measurements.
pub const POWER_MISSING_VALUE: f64 = -999.0;

// Days from 0001-01-01 (CE) to 1970-01-01, the epoch of Polars' Date type.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Reads a POWER daily point CSV into a [`DailyLazyFrame`].
///
/// The loader skips the metadata preamble, checks that every required source
/// column is present (the date columns first), renames the source short names,
/// maps the missing-value sentinel to null and derives a validated `date` column.
///
/// # Examples
///
/// ```no_run
/// use climate_dashboard::ClimateDataLoader;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let daily = ClimateDataLoader::new("POWER_Point_Daily.csv")
///     .with_preamble_lines(32)
///     .load()?;
/// println!("{}", daily.frame.collect()?.head(Some(5)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClimateDataLoader {
    path: PathBuf,
    preamble_lines: usize,
    missing_value: Option<f64>,
}

impl ClimateDataLoader {
    pub fn new(path: impl AsRef<Path>) -> ClimateDataLoader {
        ClimateDataLoader {
            path: path.as_ref().to_path_buf(),
            preamble_lines: POWER_PREAMBLE_LINES,
            missing_value: Some(POWER_MISSING_VALUE),
        }
    }

    /// Sets how many lines precede the header row.
    pub fn with_preamble_lines(mut self, preamble_lines: usize) -> Self {
        self.preamble_lines = preamble_lines;
        self
    }

    /// Sets the value treated as "missing" in measurement columns. `None` keeps every value.
    pub fn with_missing_value(mut self, missing_value: Option<f64>) -> Self {
        self.missing_value = missing_value;
        self
    }

    /// Loads, validates and normalises the daily table.
    ///
    /// # Errors
    ///
    /// * [`LoadError::FileNotFound`] if the path does not exist.
    /// * [`LoadError::CsvRead`] if the CSV body cannot be parsed.
    /// * [`LoadError::MissingColumn`] if a required column is absent. The date columns
    ///   `YEAR`, `MO` and `DY` are checked before any other work is done.
    pub fn load(&self) -> Result<DailyLazyFrame, LoadError> {
        if !self.path.exists() {
            return Err(LoadError::FileNotFound(self.path.clone()));
        }
        info!(
            "Loading daily climate data from {:?} (skipping {} preamble lines)",
            self.path, self.preamble_lines
        );

        let raw = self.read_csv()?;
        Self::check_required_columns(&raw)?;

        let normalised = self.normalise(raw)?;
        let dated = Self::attach_dates(normalised)?;

        info!(
            "Loaded {} daily records from {:?}",
            dated.height(),
            self.path
        );
        Ok(DailyLazyFrame::new(dated.lazy()))
    }

    fn read_csv(&self) -> Result<DataFrame, LoadError> {
        CsvReadOptions::default()
            .with_has_header(true)
            .with_skip_rows(self.preamble_lines)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(self.path.clone()))
            .map_err(|e| LoadError::CsvRead {
                path: self.path.clone(),
                source: e,
            })?
            .finish()
            .map_err(|e| LoadError::CsvRead {
                path: self.path.clone(),
                source: e,
            })
    }

    fn check_required_columns(df: &DataFrame) -> Result<(), LoadError> {
        let present: Vec<&str> = df
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();

        for (source, _) in required_source_columns() {
            if !present.contains(&source) {
                warn!("Required column '{}' not found, columns are {:?}", source, present);
                return Err(LoadError::MissingColumn {
                    column: source.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Renames source columns, casts to the working dtypes and nulls out sentinel values.
    fn normalise(&self, df: DataFrame) -> Result<DataFrame, LoadError> {
        let (source_names, target_names): (Vec<&str>, Vec<&str>) =
            required_source_columns().into_iter().unzip();

        let renamed = df
            .lazy()
            .select(source_names.iter().map(|name| col(*name)).collect::<Vec<_>>())
            .rename(&source_names, &target_names, true);

        // Missing month/day fall back to the first of the period.
        let mut columns = vec![
            col(YEAR).cast(DataType::Int32),
            col(MONTH).fill_null(lit(1)).cast(DataType::Int32),
            col(DAY).fill_null(lit(1)).cast(DataType::Int32),
        ];
        if let Some(sentinel) = self.missing_value {
            debug!("Treating {} as a missing measurement", sentinel);
        }

        // NaN cells are treated as missing whether or not a sentinel is set.
        columns.extend(ClimateVariable::ALL.iter().map(|variable| {
            let value = col(variable.column()).cast(DataType::Float64);
            let missing = match self.missing_value {
                Some(sentinel) => value.clone().is_nan().or(value.clone().eq(lit(sentinel))),
                None => value.clone().is_nan(),
            };
            when(missing)
                .then(lit(NULL))
                .otherwise(value)
                .alias(variable.column())
        }));

        renamed
            .with_columns(columns)
            .filter(col(YEAR).is_not_null())
            .collect()
            .map_err(LoadError::ColumnRename)
    }

    /// Adds the `date` column and drops rows whose (year, month, day) is not a real date.
    fn attach_dates(mut df: DataFrame) -> Result<DataFrame, LoadError> {
        let years = df.column(YEAR)?.i32()?;
        let months = df.column(MONTH)?.i32()?;
        let days = df.column(DAY)?.i32()?;

        let epoch_days: Vec<Option<i32>> = years
            .into_iter()
            .zip(months.into_iter())
            .zip(days.into_iter())
            .map(|((year, month), day)| {
                let date = NaiveDate::from_ymd_opt(
                    year?,
                    u32::try_from(month?).ok()?,
                    u32::try_from(day?).ok()?,
                )?;
                Some(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
            })
            .collect();

        let invalid = epoch_days.iter().filter(|d| d.is_none()).count();
        if invalid > 0 {
            warn!("Dropping {} rows without a valid calendar date", invalid);
        }

        let dates = Series::new(DATE.into(), epoch_days).cast(&DataType::Date)?;
        df.with_column(dates)?;

        Ok(df.lazy().filter(col(DATE).is_not_null()).collect()?)
    }
}
