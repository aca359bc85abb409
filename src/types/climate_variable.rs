//! Defines the measured climate variables and how they map onto the
//! short column names used by NASA POWER point CSV exports.

use serde::{Serialize, Serializer};
use std::fmt;

/// Column holding the calendar year after renaming.
pub const YEAR: &str = "year";
/// Column holding the month number (1-12) after renaming.
pub const MONTH: &str = "month";
/// Column holding the day of month after renaming.
pub const DAY: &str = "day";
/// Date column derived from `year`, `month` and `day` at load time.
pub const DATE: &str = "date";

/// The source date columns, in the order they are validated, with their renamed counterparts.
pub(crate) const DATE_COLUMNS: [(&str, &str); 3] = [("YEAR", YEAR), ("MO", MONTH), ("DY", DAY)];

/// One of the four daily measurements carried by the dataset.
///
/// Each variable knows both its semantic column name (used everywhere after
/// loading) and the short name the POWER export uses for it.
///
/// # Examples
///
/// ```
/// use climate_dashboard::ClimateVariable;
///
/// assert_eq!(ClimateVariable::Rainfall.column(), "total_rain_mm");
/// assert_eq!(ClimateVariable::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateVariable {
    /// Daily mean air temperature at 2 m, °C (`T2M`).
    MeanTemperature,
    /// Daily maximum air temperature at 2 m, °C (`T2M_MAX`).
    MaxTemperature,
    /// Bias-corrected total precipitation, mm/day (`PRECTOTCORR`).
    Rainfall,
    /// All-sky surface shortwave downward irradiance, kWh/m²/day (`ALLSKY_SFC_SW_DWN`).
    SolarIrradiance,
}

impl ClimateVariable {
    pub const ALL: [ClimateVariable; 4] = [
        ClimateVariable::MeanTemperature,
        ClimateVariable::MaxTemperature,
        ClimateVariable::Rainfall,
        ClimateVariable::SolarIrradiance,
    ];

    pub fn column(&self) -> &'static str {
        match self {
            ClimateVariable::MeanTemperature => "mean_temp_c",
            ClimateVariable::MaxTemperature => "max_temp_c",
            ClimateVariable::Rainfall => "total_rain_mm",
            ClimateVariable::SolarIrradiance => "solar_kwh_m2_day",
        }
    }

    pub(crate) fn source_column(&self) -> &'static str {
        match self {
            ClimateVariable::MeanTemperature => "T2M",
            ClimateVariable::MaxTemperature => "T2M_MAX",
            ClimateVariable::Rainfall => "PRECTOTCORR",
            ClimateVariable::SolarIrradiance => "ALLSKY_SFC_SW_DWN",
        }
    }

    /// Human readable label, used as axis and heatmap labels.
    pub fn label(&self) -> &'static str {
        match self {
            ClimateVariable::MeanTemperature => "Mean Temp (°C)",
            ClimateVariable::MaxTemperature => "Max Temp (°C)",
            ClimateVariable::Rainfall => "Rainfall (mm)",
            ClimateVariable::SolarIrradiance => "Solar Irradiance (kWh/m²/day)",
        }
    }
}

impl fmt::Display for ClimateVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

impl Serialize for ClimateVariable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.column())
    }
}

/// Source column names in the order they are checked on load: date columns first.
pub(crate) fn required_source_columns() -> Vec<(&'static str, &'static str)> {
    DATE_COLUMNS
        .iter()
        .copied()
        .chain(
            ClimateVariable::ALL
                .iter()
                .map(|v| (v.source_column(), v.column())),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_columns_start_with_dates() {
        let required = required_source_columns();
        assert_eq!(required.len(), 7);
        assert_eq!(required[0], ("YEAR", "year"));
        assert_eq!(required[1], ("MO", "month"));
        assert_eq!(required[2], ("DY", "day"));
        assert_eq!(required[5], ("PRECTOTCORR", "total_rain_mm"));
    }
}
