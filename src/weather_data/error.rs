use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Data file '{0}' does not exist")]
    FileNotFound(PathBuf),

    #[error("Column '{column}' is missing from the dataset")]
    MissingColumn { column: String },

    // Errors while parsing the CSV body
    #[error("Failed to read CSV data from '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Failed to rename source columns: {0}")]
    ColumnRename(#[source] PolarsError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
