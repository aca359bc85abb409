//! The seven dashboard views and the parameters that drive them.

pub mod chart;
mod render;

use crate::aggregates::ClimateAggregates;
use crate::error::DashboardError;
use crate::types::calendar_month::CalendarMonth;
use crate::views::chart::Chart;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A dashboard page, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Overview,
    Temperature,
    RainfallSolar,
    MonthlyTrends,
    Correlation,
    Seasonal,
    HighlightsLocation,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Overview,
        View::Temperature,
        View::RainfallSolar,
        View::MonthlyTrends,
        View::Correlation,
        View::Seasonal,
        View::HighlightsLocation,
    ];

    /// Menu title.
    pub fn title(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Temperature => "Temperature",
            View::RainfallSolar => "Rainfall & Solar",
            View::MonthlyTrends => "Monthly Trends & Heatmaps",
            View::Correlation => "Correlation & Insights",
            View::Seasonal => "Seasonal Analysis",
            View::HighlightsLocation => "Highlights & Location",
        }
    }

    /// Short identifier, as accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Temperature => "temperature",
            View::RainfallSolar => "rainfall-solar",
            View::MonthlyTrends => "monthly-trends",
            View::Correlation => "correlation",
            View::Seasonal => "seasonal",
            View::HighlightsLocation => "highlights-location",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Accepts a slug, a menu title (case-insensitive) or the first word of either.
impl FromStr for View {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        View::ALL
            .into_iter()
            .find(|view| view.slug() == wanted || view.title().to_lowercase() == wanted)
            .or_else(|| {
                View::ALL.into_iter().find(|view| {
                    view.slug().split('-').next() == Some(wanted.as_str())
                })
            })
            .ok_or_else(|| DashboardError::UnknownView(s.to_string()))
    }
}

/// Length of the centered trend on the overview, in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RollingWindow {
    #[default]
    Three,
    Five,
    Ten,
}

impl RollingWindow {
    pub const ALL: [RollingWindow; 3] = [RollingWindow::Three, RollingWindow::Five, RollingWindow::Ten];

    pub fn periods(self) -> usize {
        match self {
            RollingWindow::Three => 3,
            RollingWindow::Five => 5,
            RollingWindow::Ten => 10,
        }
    }
}

impl TryFrom<usize> for RollingWindow {
    type Error = DashboardError;

    fn try_from(periods: usize) -> Result<Self, Self::Error> {
        RollingWindow::ALL
            .into_iter()
            .find(|w| w.periods() == periods)
            .ok_or(DashboardError::InvalidRollingWindow(periods))
    }
}

/// The two user controls. Each view reads only the one it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewParams {
    pub rolling_window: RollingWindow,
    pub month: CalendarMonth,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub zoom: u8,
}

/// Everything one view shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewDescription {
    pub view: View,
    pub heading: String,
    pub metrics: Vec<Metric>,
    pub charts: Vec<Chart>,
    pub highlights: Vec<String>,
    pub location: Option<MapMarker>,
}

impl ViewDescription {
    fn new(view: View, heading: impl Into<String>) -> Self {
        ViewDescription {
            view,
            heading: heading.into(),
            metrics: Vec::new(),
            charts: Vec::new(),
            highlights: Vec::new(),
            location: None,
        }
    }
}

/// Describes `view` from precomputed aggregates. Never touches the daily data.
pub fn render_view(
    view: View,
    aggregates: &ClimateAggregates,
    params: &ViewParams,
    location: &MapMarker,
) -> ViewDescription {
    match view {
        View::Overview => render::overview(aggregates, params.rolling_window),
        View::Temperature => render::temperature(aggregates),
        View::RainfallSolar => render::rainfall_solar(aggregates),
        View::MonthlyTrends => render::monthly_trends(aggregates, params.month),
        View::Correlation => render::correlation(aggregates),
        View::Seasonal => render::seasonal(aggregates),
        View::HighlightsLocation => render::highlights_location(aggregates, location),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_parse_from_slug_and_title() {
        for view in View::ALL {
            assert_eq!(view.slug().parse::<View>().unwrap(), view);
            assert_eq!(view.title().parse::<View>().unwrap(), view);
        }
        assert_eq!("monthly".parse::<View>().unwrap(), View::MonthlyTrends);
        assert_eq!("RAINFALL & SOLAR".parse::<View>().unwrap(), View::RainfallSolar);
        assert!(matches!(
            "forecast".parse::<View>(),
            Err(DashboardError::UnknownView(name)) if name == "forecast"
        ));
    }

    #[test]
    fn test_rolling_window_accepts_only_three_five_ten() {
        assert_eq!(RollingWindow::try_from(3).unwrap(), RollingWindow::Three);
        assert_eq!(RollingWindow::try_from(5).unwrap(), RollingWindow::Five);
        assert_eq!(RollingWindow::try_from(10).unwrap(), RollingWindow::Ten);
        for bad in [0, 1, 4, 7, 12] {
            assert!(matches!(
                RollingWindow::try_from(bad),
                Err(DashboardError::InvalidRollingWindow(w)) if w == bad
            ));
        }
        assert_eq!(RollingWindow::default().periods(), 3);
    }

    #[test]
    fn test_view_serializes_as_slug() -> Result<(), serde_json::Error> {
        for view in View::ALL {
            assert_eq!(serde_json::to_value(view)?, view.slug());
        }
        Ok(())
    }
}
