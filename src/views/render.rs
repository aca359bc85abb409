use crate::aggregates::heatmap::MonthYearMatrix;
use crate::aggregates::ClimateAggregates;
use crate::series::{centered_rolling_mean, flag_above_sigma, mean_and_std, trailing_rolling_mean};
use crate::types::calendar_month::CalendarMonth;
use crate::views::chart::{Chart, HeatmapChart, Trace, TraceMode, XValue, XyChart};
use crate::views::{MapMarker, Metric, RollingWindow, View, ViewDescription};

const RAIN_COLOR: &str = "#1f77b4";
const SOLAR_COLOR: &str = "gold";
const TREND_COLOR: &str = "orange";
const TEMPERATURE_TREND_WINDOW: usize = 3;

fn format_or_dash(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "–".to_string(),
    }
}

fn offset(series: &[Option<f64>], by: f64) -> Vec<Option<f64>> {
    series.iter().map(|v| v.map(|x| x + by)).collect()
}

pub(super) fn overview(aggregates: &ClimateAggregates, window: RollingWindow) -> ViewDescription {
    let stats = &aggregates.overview;
    let heading = match (stats.first_year, stats.last_year) {
        (Some(first), Some(last)) => format!("Climate Overview ({first}–{last})"),
        _ => "Climate Overview".to_string(),
    };
    let mut description = ViewDescription::new(View::Overview, heading);

    description.metrics = vec![
        Metric {
            label: "Avg Temperature (°C)".to_string(),
            value: format_or_dash(stats.mean_temp_c, 1),
            delta: Some(format_or_dash(stats.temp_spread_c, 1)),
        },
        Metric {
            label: "Total Rainfall (mm)".to_string(),
            value: format_or_dash(stats.total_rain_mm, 1),
            delta: Some(format_or_dash(stats.rain_spread_mm, 1)),
        },
        Metric {
            label: "Avg Solar Irradiance".to_string(),
            value: format!("{} kWh/m²/day", format_or_dash(stats.mean_solar_kwh_m2_day, 2)),
            delta: Some(format_or_dash(stats.solar_spread_kwh_m2_day, 2)),
        },
    ];

    let years = aggregates.yearly.years();
    let temps = aggregates.yearly.mean_temps();
    let periods = window.periods();
    let trend = centered_rolling_mean(&temps, periods);

    let mut chart = XyChart::new(
        "Average Annual Temperature with Rolling Trend",
        "Year",
        "Mean Temperature (°C)",
    )
    .with_trace(Trace::new(
        "Mean Temperature",
        TraceMode::LineMarkers,
        XValue::years(&years),
        temps.clone(),
    ))
    .with_trace(
        Trace::new(
            format!("{periods}-Year Trend"),
            TraceMode::Line,
            XValue::years(&years),
            trend.clone(),
        )
        .color("red")
        .dashed(),
    );

    if let Some((_, std)) = mean_and_std(&temps) {
        chart = chart
            .with_trace(
                Trace::new("Trend +1 Std Dev", TraceMode::Line, XValue::years(&years), offset(&trend, std))
                    .color("lightpink")
                    .hide_legend(),
            )
            .with_trace(
                Trace::new("Trend ±1 Std Dev", TraceMode::Line, XValue::years(&years), offset(&trend, -std))
                    .color("lightpink")
                    .fill_to_previous(),
            );
    }
    description.charts.push(Chart::Xy(chart));
    description
}

pub(super) fn temperature(aggregates: &ClimateAggregates) -> ViewDescription {
    let mut description = ViewDescription::new(View::Temperature, "Temperature Analysis");
    let years = aggregates.yearly.years();
    let maxima = aggregates.yearly.max_temps();
    let flags = flag_above_sigma(&maxima, 1.0);

    let split = |anomalous: bool| -> (Vec<i32>, Vec<Option<f64>>) {
        years
            .iter()
            .zip(&maxima)
            .zip(&flags)
            .filter(|(_, flag)| **flag == anomalous)
            .map(|((year, value), _)| (*year, *value))
            .unzip()
    };
    let (anomaly_years, anomaly_values) = split(true);
    let (normal_years, normal_values) = split(false);

    let chart = XyChart::new("Max Temperature with Anomalies", "Year", "Max Temperature (°C)")
        .with_trace(
            Trace::new("Anomaly", TraceMode::Markers, XValue::years(&anomaly_years), anomaly_values)
                .color("green"),
        )
        .with_trace(
            Trace::new("Normal", TraceMode::Markers, XValue::years(&normal_years), normal_values)
                .color("red"),
        )
        .with_trace(
            Trace::new(
                format!("{TEMPERATURE_TREND_WINDOW}-Year Avg"),
                TraceMode::Line,
                XValue::years(&years),
                trailing_rolling_mean(&maxima, TEMPERATURE_TREND_WINDOW),
            )
            .color(TREND_COLOR)
            .dashed(),
        );
    description.charts.push(Chart::Xy(chart));
    description
}

pub(super) fn rainfall_solar(aggregates: &ClimateAggregates) -> ViewDescription {
    let mut description = ViewDescription::new(View::RainfallSolar, "Rainfall & Solar");
    let years = aggregates.yearly.years();

    let rain = XyChart::new("Annual Total Rainfall (mm)", "Year", "Total Rainfall (mm)").with_trace(
        Trace::new(
            "Total Rainfall",
            TraceMode::Bar,
            XValue::years(&years),
            aggregates.yearly.rain_totals(),
        )
        .color(RAIN_COLOR),
    );

    let solar = &aggregates.annual_solar.records;
    let solar_years: Vec<i32> = solar.iter().map(|r| r.year).collect();
    let solar_chart = XyChart::new(
        "Annual Solar Irradiance (Clipped ±2σ) with 3-Year Trend",
        "Year",
        "Solar Irradiance (kWh/m²/day)",
    )
    .with_trace(
        Trace::new(
            "Solar Irradiance",
            TraceMode::LineMarkers,
            XValue::years(&solar_years),
            solar.iter().map(|r| r.clipped).collect(),
        )
        .color(SOLAR_COLOR),
    )
    .with_trace(
        Trace::new(
            "3-Year Trend",
            TraceMode::Line,
            XValue::years(&solar_years),
            solar.iter().map(|r| r.trend).collect(),
        )
        .color(TREND_COLOR)
        .dashed(),
    );

    description.charts = vec![Chart::Xy(rain), Chart::Xy(solar_chart)];
    description
}

fn month_year_heatmap(
    matrix: &MonthYearMatrix,
    title: &str,
    value_label: &str,
    color_scale: &str,
) -> Chart {
    Chart::Heatmap(HeatmapChart {
        title: title.to_string(),
        x_label: "Year".to_string(),
        y_label: "Month".to_string(),
        x_labels: matrix.column_labels(),
        y_labels: matrix.row_labels(),
        z: matrix.values.clone(),
        color_scale: color_scale.to_string(),
        value_label: value_label.to_string(),
        show_values: false,
    })
}

pub(super) fn monthly_trends(aggregates: &ClimateAggregates, month: CalendarMonth) -> ViewDescription {
    let mut description = ViewDescription::new(View::MonthlyTrends, "Monthly Trends & Heatmaps");
    let slice = aggregates.monthly.for_month(month);
    let x = XValue::years(&slice.years);

    let temperature = XyChart::new(
        format!("{month} Mean Temperature Across Years"),
        "Year",
        "Mean Temperature (°C)",
    )
    .with_trace(
        Trace::new("Mean Temperature", TraceMode::LineMarkers, x.clone(), slice.mean_temps)
            .color(TREND_COLOR),
    );

    let rain = XyChart::new(format!("{month} Rainfall Across Years"), "Year", "Total Rainfall (mm)")
        .with_trace(
            Trace::new("Total Rainfall", TraceMode::Bar, x.clone(), slice.rain_totals).color(RAIN_COLOR),
        );

    let solar = XyChart::new(
        format!("Solar Irradiance in {month} (kWh/m²/day) with 3-Year Trend"),
        "Year",
        "Solar Irradiance",
    )
    .with_trace(
        Trace::new("Solar Irradiance", TraceMode::LineMarkers, x.clone(), slice.solar_means)
            .color(SOLAR_COLOR),
    )
    .with_trace(
        Trace::new("3-Year Trend", TraceMode::Line, x, slice.solar_trend)
            .color(TREND_COLOR)
            .dashed(),
    );

    description.charts = vec![
        Chart::Xy(temperature),
        Chart::Xy(rain),
        Chart::Xy(solar),
        month_year_heatmap(
            &aggregates.heatmap_temp,
            "Monthly Mean Temperature Heatmap",
            "Temp °C",
            "Oranges",
        ),
        month_year_heatmap(
            &aggregates.heatmap_rain,
            "Monthly Rainfall Heatmap",
            "Rain (mm)",
            "Blues",
        ),
    ];
    description
}

pub(super) fn correlation(aggregates: &ClimateAggregates) -> ViewDescription {
    let mut description = ViewDescription::new(View::Correlation, "Correlation & Insights");
    let matrix = &aggregates.correlation;
    let labels = matrix.labels();

    description.charts.push(Chart::Heatmap(HeatmapChart {
        title: "Correlation Between Climate Variables".to_string(),
        x_label: String::new(),
        y_label: String::new(),
        x_labels: labels.clone(),
        y_labels: labels,
        z: matrix.values.iter().map(|row| row.to_vec()).collect(),
        color_scale: "RdBu_r".to_string(),
        value_label: "Correlation".to_string(),
        show_values: true,
    }));
    description
}

pub(super) fn seasonal(aggregates: &ClimateAggregates) -> ViewDescription {
    let mut description = ViewDescription::new(View::Seasonal, "Seasonal Trends");
    let seasonal = &aggregates.seasonal;
    let x = XValue::labels(seasonal.labels());

    let temperature = XyChart::new(
        "Average Monthly Temperature Across Years",
        "Month",
        "Mean Temperature (°C)",
    )
    .with_trace(Trace::new(
        "Mean Temperature",
        TraceMode::LineMarkers,
        x.clone(),
        seasonal.records.iter().map(|r| r.mean_temp_c).collect(),
    ));

    let rain = XyChart::new("Average Monthly Rainfall Across Years", "Month", "Daily Rainfall (mm)")
        .with_trace(
            Trace::new(
                "Daily Rainfall",
                TraceMode::Bar,
                x,
                seasonal.records.iter().map(|r| r.mean_daily_rain_mm).collect(),
            )
            .color(RAIN_COLOR),
        );

    description.charts = vec![Chart::Xy(temperature), Chart::Xy(rain)];
    description
}

pub(super) fn highlights_location(aggregates: &ClimateAggregates, location: &MapMarker) -> ViewDescription {
    let mut description = ViewDescription::new(
        View::HighlightsLocation,
        format!("Climate Highlights & {} Location", location.name),
    );
    description.highlights = aggregates.highlights.lines();
    description.location = Some(location.clone());
    description
}
