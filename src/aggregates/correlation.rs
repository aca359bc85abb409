//! Pairwise Pearson correlation between the daily measurements.

use crate::aggregates::error::AggregateError;
use crate::aggregates::frame_ext::f64_values;
use crate::types::climate_variable::ClimateVariable;
use crate::types::daily_frame::DailyLazyFrame;
use log::debug;
use polars::prelude::*;
use serde::Serialize;
use statrs::statistics::Statistics;

const N: usize = ClimateVariable::ALL.len();

/// Symmetric correlation matrix over [`ClimateVariable::ALL`], in that order.
///
/// Each pair is correlated over the days where both of its measurements are defined,
/// so a gap in one variable does not drop rows from the others. The diagonal is
/// exactly `1.0`; an off-diagonal entry is `None` when either variable has no variance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub variables: [ClimateVariable; N],
    pub values: [[Option<f64>; N]; N],
}

impl CorrelationMatrix {
    pub fn compute(daily: &DailyLazyFrame) -> Result<Self, AggregateError> {
        let df = daily
            .frame
            .clone()
            .select(ClimateVariable::ALL.map(|v| col(v.column())))
            .collect()?;
        debug!("Correlating {} daily records", df.height());

        let columns: Vec<Vec<Option<f64>>> = ClimateVariable::ALL
            .iter()
            .map(|v| f64_values(&df, v.column()))
            .collect::<Result<_, _>>()?;

        let mut values = [[None; N]; N];
        for i in 0..N {
            values[i][i] = Some(1.0);
            for j in (i + 1)..N {
                let (a, b) = defined_pairs(&columns[i], &columns[j]);
                let r = pearson(&a, &b);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Ok(Self {
            variables: ClimateVariable::ALL,
            values,
        })
    }

    pub fn get(&self, a: ClimateVariable, b: ClimateVariable) -> Option<f64> {
        let i = self.variables.iter().position(|v| *v == a)?;
        let j = self.variables.iter().position(|v| *v == b)?;
        self.values[i][j]
    }

    pub fn labels(&self) -> Vec<String> {
        self.variables.iter().map(|v| v.label().to_string()).collect()
    }
}

/// The values of two aligned columns on the rows where both are defined.
fn defined_pairs(a: &[Option<f64>], b: &[Option<f64>]) -> (Vec<f64>, Vec<f64>) {
    a.iter()
        .zip(b)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .unzip()
}

fn pearson(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() < 2 || a.len() != b.len() {
        return None;
    }
    let covariance = a.iter().covariance(b.iter());
    let denominator = a.iter().std_dev() * b.iter().std_dev();
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }
    Some((covariance / denominator).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{load_rows, year_of_days};
    use chrono::Datelike;

    #[test]
    fn test_symmetric_with_unit_diagonal() -> Result<(), Box<dyn std::error::Error>> {
        let rows = year_of_days(2005, |d| {
            let x = d.ordinal() as f64;
            (x.sin() * 10.0 + 20.0, x.cos() * 5.0 + 30.0, (x * 0.3).sin().abs() * 4.0, 5.0 + x / 365.0)
        });
        let (daily, _file) = load_rows(&rows);
        let corr = CorrelationMatrix::compute(&daily)?;

        for i in 0..N {
            assert_eq!(corr.values[i][i], Some(1.0));
            for j in 0..N {
                assert_eq!(corr.values[i][j], corr.values[j][i]);
                if let Some(r) = corr.values[i][j] {
                    assert!((-1.0..=1.0).contains(&r));
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_linear_relationships() -> Result<(), Box<dyn std::error::Error>> {
        let rows = year_of_days(2006, |d| {
            let x = d.ordinal() as f64;
            (x / 10.0, x / 10.0 + 5.0, 40.0 - x / 10.0, (x * 0.7).sin())
        });
        let (daily, _file) = load_rows(&rows);
        let corr = CorrelationMatrix::compute(&daily)?;

        let temp_max = corr
            .get(ClimateVariable::MeanTemperature, ClimateVariable::MaxTemperature)
            .unwrap();
        let temp_rain = corr
            .get(ClimateVariable::MeanTemperature, ClimateVariable::Rainfall)
            .unwrap();
        assert!(temp_max > 0.999);
        assert!(temp_rain < -0.999);
        Ok(())
    }

    #[test]
    fn test_gaps_only_drop_rows_from_their_own_pairs() -> Result<(), Box<dyn std::error::Error>> {
        // Rain is missing for the first 100 days, where temperature and maximum
        // follow a different relationship than in the rest of the year.
        let cents = |v: f64| (v * 100.0).round() / 100.0;
        let rows = year_of_days(2007, |d| {
            let x = d.ordinal() as f64;
            if d.ordinal() <= 100 {
                (x, cents(50.0 - (x * 0.9).sin() * 20.0), -999.0, 5.0)
            } else {
                (x, cents(x + (x * 0.3).sin() * 40.0), cents((x * 0.5).cos() + 2.0), 5.0)
            }
        });
        let (daily, _file) = load_rows(&rows);
        let corr = CorrelationMatrix::compute(&daily)?;

        let temp: Vec<f64> = rows.iter().map(|r| r.t2m).collect();
        let max: Vec<f64> = rows.iter().map(|r| r.t2m_max).collect();
        let over_all_days = pearson(&temp, &max).unwrap();
        let over_rainy_days = pearson(&temp[100..], &max[100..]).unwrap();
        assert!((over_all_days - over_rainy_days).abs() > 0.01);

        let temp_max = corr
            .get(ClimateVariable::MeanTemperature, ClimateVariable::MaxTemperature)
            .unwrap();
        assert!((temp_max - over_all_days).abs() < 1e-6);

        let rain: Vec<f64> = rows[100..].iter().map(|r| r.rain).collect();
        let temp_rain = corr
            .get(ClimateVariable::MeanTemperature, ClimateVariable::Rainfall)
            .unwrap();
        assert!((temp_rain - pearson(&temp[100..], &rain).unwrap()).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_defined_pairs_skip_either_gap() {
        let (a, b) = defined_pairs(&[Some(1.0), None, Some(3.0), Some(4.0)], &[Some(2.0), Some(5.0), None, Some(8.0)]);
        assert_eq!(a, vec![1.0, 4.0]);
        assert_eq!(b, vec![2.0, 8.0]);
    }

    #[test]
    fn test_constant_variable_has_no_correlation() {
        assert_eq!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), None);
        assert_eq!(pearson(&[1.0], &[2.0]), None);
    }
}
