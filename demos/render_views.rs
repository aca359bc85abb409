//! demos/render_views.rs
//!
//! Loads a NASA POWER daily point CSV and prints a short text summary of every
//! dashboard view: its heading, metrics, chart titles and highlight lines.
//!
//! To run this example:
//! cargo run --example render_views -- path/to/POWER_Point_Daily.csv

use std::error::Error;

use climate_dashboard::{
    CalendarMonth, Chart, ClimateDashboard, RollingWindow, View, ViewParams, DEFAULT_DATA_PATH,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let data_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());

    // 1. Load and aggregate once
    let dashboard = ClimateDashboard::load().data_path(data_path).call()?;

    // 2. Choose the two view controls
    let params = ViewParams {
        rolling_window: RollingWindow::Five,
        month: CalendarMonth::Jul,
    };

    // 3. Describe every view from the same bundle
    for view in View::ALL {
        let description = dashboard.view(view, &params);
        println!("== {} ==", description.heading);
        for metric in &description.metrics {
            match &metric.delta {
                Some(delta) => println!("  {}: {} ({})", metric.label, metric.value, delta),
                None => println!("  {}: {}", metric.label, metric.value),
            }
        }
        for chart in &description.charts {
            let kind = match chart {
                Chart::Xy(xy) => format!("{} traces", xy.traces.len()),
                Chart::Heatmap(heatmap) => {
                    format!("{}x{} heatmap", heatmap.y_labels.len(), heatmap.x_labels.len())
                }
            };
            println!("  [{}] {}", kind, chart.title());
        }
        for line in &description.highlights {
            println!("  - {line}");
        }
        if let Some(marker) = &description.location {
            println!(
                "  map: {} at ({}, {}), zoom {}",
                marker.name, marker.lat, marker.lon, marker.zoom
            );
        }
    }

    Ok(())
}
