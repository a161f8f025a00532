use polars::prelude::PolarsError;
use std::io;
use thiserror::Error;

/// Reasons a source table could not be turned into a grid.
#[derive(Debug, Error)]
pub enum InputReadError {
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("sheet '{0}' not found in workbook")]
    SheetNotFound(String),
    #[error("header row {header_row} is past the end of the table ({rows} rows)")]
    HeaderOutOfRange { header_row: usize, rows: usize },
    #[error("unsupported input format '{0}'")]
    UnsupportedFormat(String),
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("could not read input: {0}")]
    Read(#[from] InputReadError),
    #[error("column '{column}' not found")]
    MissingColumn { column: String },
    #[error("invalid shift '{0}': expected noche, tarde or mañana")]
    InvalidShift(String),
    #[error("dataframe error: {0}")]
    DataFrame(#[from] PolarsError),
    #[error("invalid task pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config: {0}")]
    Config(String),
}

pub type RosterResult<T> = Result<T, RosterError>;
