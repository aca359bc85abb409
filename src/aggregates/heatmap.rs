//! Month-by-year matrices backing the temperature and rainfall heatmaps.

use crate::aggregates::monthly::{MonthlyRecord, MonthlyTable};
use crate::types::calendar_month::CalendarMonth;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// A pivot of one monthly value: rows are calendar months, columns are years.
///
/// Rows only cover months present in the data, in calendar order; columns are
/// ascending years. A (year, month) pair absent from the data is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthYearMatrix {
    pub months: Vec<CalendarMonth>,
    pub years: Vec<i32>,
    /// `values[row][column]`, row = month, column = year.
    pub values: Vec<Vec<Option<f64>>>,
}

impl MonthYearMatrix {
    pub fn pivot(
        monthly: &MonthlyTable,
        value: impl Fn(&MonthlyRecord) -> Option<f64>,
    ) -> Self {
        let years: Vec<i32> = monthly
            .records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let cells: BTreeMap<(CalendarMonth, i32), Option<f64>> = monthly
            .records
            .iter()
            .map(|r| ((r.month, r.year), value(r)))
            .collect();
        let months: Vec<CalendarMonth> = cells
            .keys()
            .map(|(month, _)| *month)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let values = months
            .iter()
            .map(|month| {
                years
                    .iter()
                    .map(|year| cells.get(&(*month, *year)).copied().flatten())
                    .collect()
            })
            .collect();

        Self {
            months,
            years,
            values,
        }
    }

    /// Three-letter month labels for the rows.
    pub fn row_labels(&self) -> Vec<String> {
        self.months.iter().map(|m| m.abbreviation().to_string()).collect()
    }

    pub fn column_labels(&self) -> Vec<String> {
        self.years.iter().map(|y| y.to_string()).collect()
    }

    pub fn get(&self, month: CalendarMonth, year: i32) -> Option<f64> {
        let row = self.months.iter().position(|m| *m == month)?;
        let column = self.years.iter().position(|y| *y == year)?;
        self.values[row][column]
    }
}
