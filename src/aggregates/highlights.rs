//! Record years and other one-line facts about the period.

use crate::aggregates::seasonal::SeasonalTable;
use crate::aggregates::yearly::{YearlyRecord, YearlyTable};
use crate::series::{first_max, first_min};
use crate::types::calendar_month::CalendarMonth;
use serde::Serialize;

/// A year together with the value that made it stand out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extreme {
    pub year: i32,
    pub value: f64,
}

impl From<(i32, f64)> for Extreme {
    fn from((year, value): (i32, f64)) -> Self {
        Extreme { year, value }
    }
}

/// Extremes over the yearly table. Ties go to the earliest year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlights {
    /// Highest mean of daily maximum temperatures.
    pub hottest: Option<Extreme>,
    /// Lowest mean of daily mean temperatures.
    pub coolest: Option<Extreme>,
    pub wettest: Option<Extreme>,
    pub driest: Option<Extreme>,
    /// Highest annual mean solar irradiance.
    pub peak_solar: Option<Extreme>,
    /// Calendar month with the most rainfall summed over all years.
    pub rainiest_month: Option<CalendarMonth>,
    /// Largest number of zero-rain days within a single year.
    ///
    /// This is a per-year tally, not a run of consecutive days.
    pub longest_dry_spell_days: u32,
}

impl Highlights {
    pub fn from_tables(yearly: &YearlyTable, seasonal: &SeasonalTable) -> Self {
        let by_year = |value: fn(&YearlyRecord) -> Option<f64>| {
            yearly.records.iter().map(move |r| (r.year, value(r)))
        };

        Highlights {
            hottest: first_max(by_year(|r| r.mean_max_temp_c)).map(Extreme::from),
            coolest: first_min(by_year(|r| r.mean_temp_c)).map(Extreme::from),
            wettest: first_max(by_year(|r| Some(r.total_rain_mm))).map(Extreme::from),
            driest: first_min(by_year(|r| Some(r.total_rain_mm))).map(Extreme::from),
            peak_solar: first_max(by_year(|r| r.mean_solar_kwh_m2_day)).map(Extreme::from),
            // Ties go to the earlier calendar month.
            rainiest_month: first_max(seasonal.records.iter().map(|r| (r.month, r.total_rain_mm)))
                .map(|(month, _)| month),
            longest_dry_spell_days: yearly
                .records
                .iter()
                .map(|r| r.zero_rain_days)
                .max()
                .unwrap_or(0),
        }
    }

    /// Human readable lines, one per highlight that could be determined.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(e) = self.hottest {
            lines.push(format!("Hottest Year: {} (Avg Max Temp {:.1}°C)", e.year, e.value));
        }
        if let Some(e) = self.coolest {
            lines.push(format!("Coolest Year: {} (Avg Mean Temp {:.1}°C)", e.year, e.value));
        }
        if let Some(e) = self.wettest {
            lines.push(format!("Wettest Year: {} ({:.0} mm rainfall)", e.year, e.value));
        }
        if let Some(e) = self.driest {
            lines.push(format!("Driest Year: {} ({:.0} mm rainfall)", e.year, e.value));
        }
        if let Some(e) = self.peak_solar {
            lines.push(format!(
                "Highest Solar Irradiance: {} ({:.2} kWh/m²/day)",
                e.year, e.value
            ));
        }
        if let Some(month) = self.rainiest_month {
            lines.push(format!("Rainiest Month (overall): {}", month.abbreviation()));
        }
        lines.push(format!(
            "Longest Dry Spell (approx. yearly zeros): ~{} days",
            self.longest_dry_spell_days
        ));
        lines
    }
}
