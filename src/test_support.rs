//! CSV fixtures shaped like NASA POWER daily point exports.

use crate::types::daily_frame::DailyLazyFrame;
use crate::ClimateDataLoader;
use chrono::{Datelike, NaiveDate};
use std::io::Write;
use tempfile::NamedTempFile;

pub(crate) const TEST_PREAMBLE_LINES: usize = 4;

#[derive(Debug, Clone, Copy)]
pub(crate) struct PowerRow {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub t2m: f64,
    pub t2m_max: f64,
    pub rain: f64,
    pub solar: f64,
}

impl PowerRow {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        t2m: f64,
        t2m_max: f64,
        rain: f64,
        solar: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            t2m,
            t2m_max,
            rain,
            solar,
        }
    }

    pub fn on(date: NaiveDate, t2m: f64, t2m_max: f64, rain: f64, solar: f64) -> Self {
        Self::new(date.year(), date.month(), date.day(), t2m, t2m_max, rain, solar)
    }
}

/// Every day of `year`, with values produced by `values(date) -> (t2m, t2m_max, rain, solar)`.
pub(crate) fn year_of_days(
    year: i32,
    values: impl Fn(NaiveDate) -> (f64, f64, f64, f64),
) -> Vec<PowerRow> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    start
        .iter_days()
        .take_while(|d| d.year() == year)
        .map(|d| {
            let (t2m, t2m_max, rain, solar) = values(d);
            PowerRow::on(d, t2m, t2m_max, rain, solar)
        })
        .collect()
}

pub(crate) fn power_csv(rows: &[PowerRow], preamble_lines: usize) -> String {
    let mut out = String::new();
    out.push_str("-BEGIN HEADER-\n");
    for i in 1..preamble_lines.saturating_sub(1) {
        out.push_str(&format!("Preamble line {i}, with a comma\n"));
    }
    out.push_str("-END HEADER-\n");
    out.push_str("YEAR,MO,DY,T2M,T2M_MAX,PRECTOTCORR,ALLSKY_SFC_SW_DWN\n");
    for r in rows {
        out.push_str(&format!(
            "{},{},{},{:.2},{:.2},{:.2},{:.2}\n",
            r.year, r.month, r.day, r.t2m, r.t2m_max, r.rain, r.solar
        ));
    }
    out
}

pub(crate) fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Loads `rows` through the real loader. The temp file must outlive the frame's collection.
pub(crate) fn load_rows(rows: &[PowerRow]) -> (DailyLazyFrame, NamedTempFile) {
    let file = write_csv(&power_csv(rows, TEST_PREAMBLE_LINES));
    let daily = ClimateDataLoader::new(file.path())
        .with_preamble_lines(TEST_PREAMBLE_LINES)
        .load()
        .unwrap();
    (daily, file)
}
