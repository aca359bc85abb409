//! Dashboard settings, loadable from a JSON file.

use crate::dashboard::LatLon;
use crate::error::DashboardError;
use crate::types::period::StartEndDate;
use crate::views::MapMarker;
use crate::weather_data::data_loader::{POWER_MISSING_VALUE, POWER_PREAMBLE_LINES};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_PATH: &str =
    "projects/Chakwal_Climate_Solar_Trends/POWER_Point_Daily_20000101_20241231_032d93N_072d86E_LST.csv";

/// Where the data lives, how to read it and which place it describes.
///
/// Every field is optional in the JSON form; absent fields keep their defaults.
///
/// ```
/// use climate_dashboard::DashboardConfig;
///
/// let config: DashboardConfig = serde_json::from_str(r#"{ "preamble_lines": 10 }"#).unwrap();
/// assert_eq!(config.preamble_lines, 10);
/// assert_eq!(config.location_name, "Chakwal");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    /// Lines before the CSV header row.
    pub preamble_lines: usize,
    /// Measurement value meaning "no data". `null` disables the replacement.
    pub missing_value: Option<f64>,
    /// Inclusive date range to analyse; the whole file when absent.
    pub period: Option<StartEndDate>,
    pub location: LatLon,
    pub location_name: String,
    pub zoom: u8,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            preamble_lines: POWER_PREAMBLE_LINES,
            missing_value: Some(POWER_MISSING_VALUE),
            period: None,
            location: LatLon(32.9336, 72.8530),
            location_name: "Chakwal".to_string(),
            zoom: 9,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let path = path.as_ref();
        debug!("Reading dashboard config from {:?}", path);
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DashboardError::ConfigRead(path.to_path_buf(), e))?;
        serde_json::from_str(&contents).map_err(|e| DashboardError::ConfigParse(path.to_path_buf(), e))
    }

    pub fn map_marker(&self) -> MapMarker {
        MapMarker {
            name: self.location_name.clone(),
            lat: self.location.0,
            lon: self.location.1,
            zoom: self.zoom,
        }
    }
}
