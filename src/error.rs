use crate::aggregates::error::AggregateError;
use crate::weather_data::error::LoadError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error("Could not resolve the given value to a date")]
    DateParsing,

    #[error("Rolling window must be 3, 5 or 10 periods, got {0}")]
    InvalidRollingWindow(usize),

    #[error("'{0}' is not a calendar month")]
    InvalidMonth(String),

    #[error("Unknown view '{0}'")]
    UnknownView(String),

    #[error("Failed to read config file '{0}'")]
    ConfigRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file '{0}'")]
    ConfigParse(PathBuf, #[source] serde_json::Error),
}
