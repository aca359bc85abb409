//! Renderer-independent chart descriptions.
//!
//! A [`Chart`] holds everything a plotting front end needs to draw one figure:
//! titles, axis labels, and the data of each trace. Colours are plain CSS
//! colour names or hex strings; heatmap colour scales use the usual
//! sequential/diverging scale names (`"Oranges"`, `"Blues"`, `"RdBu_r"`).

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Xy(XyChart),
    Heatmap(HeatmapChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Xy(chart) => &chart.title,
            Chart::Heatmap(chart) => &chart.title,
        }
    }
}

/// Line, marker and bar traces sharing one pair of axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XyChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub traces: Vec<Trace>,
}

impl XyChart {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        XyChart {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            traces: Vec::new(),
        }
    }

    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.traces.push(trace);
        self
    }
}

/// A labelled matrix, drawn row by row. `z[row][column]`, `None` cells are left blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub z: Vec<Vec<Option<f64>>>,
    pub color_scale: String,
    /// Legend title of the colour bar.
    pub value_label: String,
    /// Print each cell's value on top of it.
    pub show_values: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceMode {
    Line,
    LineMarkers,
    Markers,
    Bar,
}

/// An x coordinate: a year on numeric axes, a label on categorical ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum XValue {
    Year(i32),
    Label(String),
}

impl XValue {
    pub fn years(years: &[i32]) -> Vec<XValue> {
        years.iter().copied().map(XValue::Year).collect()
    }

    pub fn labels(labels: Vec<String>) -> Vec<XValue> {
        labels.into_iter().map(XValue::Label).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub mode: TraceMode,
    pub x: Vec<XValue>,
    /// Same length as `x`; `None` is a gap.
    pub y: Vec<Option<f64>>,
    pub color: Option<String>,
    pub dash: bool,
    /// Shade the area between this trace and the one before it.
    pub fill_to_previous: bool,
    pub show_legend: bool,
}

impl Trace {
    pub fn new(name: impl Into<String>, mode: TraceMode, x: Vec<XValue>, y: Vec<Option<f64>>) -> Self {
        Trace {
            name: name.into(),
            mode,
            x,
            y,
            color: None,
            dash: false,
            fill_to_previous: false,
            show_legend: true,
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dash = true;
        self
    }

    pub fn fill_to_previous(mut self) -> Self {
        self.fill_to_previous = true;
        self
    }

    pub fn hide_legend(mut self) -> Self {
        self.show_legend = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_json_shape() -> Result<(), serde_json::Error> {
        let chart = Chart::Xy(
            XyChart::new("Rain", "Year", "mm").with_trace(
                Trace::new("Total", TraceMode::Bar, XValue::years(&[2000, 2001]), vec![Some(1.0), None])
                    .color("#1f77b4"),
            ),
        );
        let json = serde_json::to_value(&chart)?;

        assert_eq!(json["kind"], "xy");
        assert_eq!(json["traces"][0]["mode"], "bar");
        assert_eq!(json["traces"][0]["x"], serde_json::json!([2000, 2001]));
        assert_eq!(json["traces"][0]["y"], serde_json::json!([1.0, null]));
        assert_eq!(json["traces"][0]["color"], "#1f77b4");
        Ok(())
    }

    #[test]
    fn test_categorical_x_values() -> Result<(), serde_json::Error> {
        let x = XValue::labels(vec!["Jan".to_string(), "Feb".to_string()]);
        assert_eq!(serde_json::to_value(&x)?, serde_json::json!(["Jan", "Feb"]));
        Ok(())
    }
}
