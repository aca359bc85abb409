//! Transforms over short yearly/monthly series: rolling means, sigma clipping,
//! anomaly flags and first-occurrence extrema.
//!
//! Series are `&[Option<f64>]`; `None` is an undefined point and propagates
//! through any window that contains it.

use ordered_float::OrderedFloat;
use serde::Serialize;
use statrs::statistics::Statistics;
use std::cmp::Reverse;

/// Centered moving average.
///
/// The window at index `i` spans `[i - w/2, i - w/2 + w - 1]`, which is symmetric for odd
/// `w`. Exactly `w / 2` (integer division) points at each end of the series are `None`.
///
/// # Examples
///
/// ```
/// use climate_dashboard::series::centered_rolling_mean;
///
/// let values = [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)];
/// let trend = centered_rolling_mean(&values, 3);
/// assert_eq!(trend, vec![None, Some(2.0), Some(3.0), Some(4.0), None]);
/// ```
pub fn centered_rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let half = window / 2;
    let n = values.len();
    (0..n)
        .map(|i| {
            if window == 0 || i < half || i + half >= n {
                return None;
            }
            let start = i - half;
            window_mean(values.get(start..start + window)?)
        })
        .collect()
}

/// Trailing moving average; the first `w - 1` points are `None`.
pub fn trailing_rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|i| {
            if window == 0 || i + 1 < window {
                return None;
            }
            window_mean(&values[i + 1 - window..=i])
        })
        .collect()
}

fn window_mean(window: &[Option<f64>]) -> Option<f64> {
    let defined: Option<Vec<f64>> = window.iter().copied().collect();
    Some(defined?.iter().mean())
}

/// Sample mean and standard deviation (n - 1) over the defined points.
///
/// Returns `None` for fewer than two defined points, where the deviation is undefined,
/// and when either statistic is not finite.
pub fn mean_and_std(values: &[Option<f64>]) -> Option<(f64, f64)> {
    let defined: Vec<f64> = values.iter().flatten().copied().collect();
    if defined.len() < 2 {
        return None;
    }
    let (mean, std) = (defined.iter().mean(), defined.iter().std_dev());
    (mean.is_finite() && std.is_finite()).then_some((mean, std))
}

/// A series clipped to `mean ± k·σ` of itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClippedSeries {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub values: Vec<Option<f64>>,
}

/// Clips every defined value into `[mean - k·σ, mean + k·σ]`, using the sample σ of the
/// unclipped series. Without a finite mean and σ (e.g. fewer than two defined points)
/// there are no bounds and the series is returned unchanged.
pub fn clip_to_sigma(values: &[Option<f64>], k: f64) -> ClippedSeries {
    match mean_and_std(values) {
        Some((mean, std)) => {
            let lower = mean - k * std;
            let upper = mean + k * std;
            ClippedSeries {
                lower: Some(lower),
                upper: Some(upper),
                values: values.iter().map(|v| v.map(|x| x.clamp(lower, upper))).collect(),
            }
        }
        None => ClippedSeries {
            lower: None,
            upper: None,
            values: values.to_vec(),
        },
    }
}

/// Flags values strictly greater than `mean + k·σ` of the series. Undefined points are never flagged.
pub fn flag_above_sigma(values: &[Option<f64>], k: f64) -> Vec<bool> {
    match mean_and_std(values) {
        Some((mean, std)) => {
            let threshold = mean + k * std;
            values.iter().map(|v| v.is_some_and(|x| x > threshold)).collect()
        }
        None => vec![false; values.len()],
    }
}

/// The key with the largest defined value; ties go to the first occurrence.
pub fn first_max<K>(items: impl IntoIterator<Item = (K, Option<f64>)>) -> Option<(K, f64)> {
    items
        .into_iter()
        .filter_map(|(key, value)| Some((key, value?)))
        .min_by_key(|(_, value)| Reverse(OrderedFloat(*value)))
}

/// The key with the smallest defined value; ties go to the first occurrence.
pub fn first_min<K>(items: impl IntoIterator<Item = (K, Option<f64>)>) -> Option<(K, f64)> {
    items
        .into_iter()
        .filter_map(|(key, value)| Some((key, value?)))
        .min_by_key(|(_, value)| OrderedFloat(*value))
}
