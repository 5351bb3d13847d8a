use std::io;
use thiserror::Error;

use crate::domain::DomainError;

/// IO-level errors for fixture loading and report writing
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV async parsing error: {0}")]
    CsvAsync(#[from] csv_async::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid record kind: {0}")]
    InvalidRecordKind(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
