use std::io;
use thiserror::Error;

use crate::collector::CollectError;
use crate::domain::DomainError;
use crate::io::IoError;
use crate::query::QueryError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Fixture error: {0}")]
    Fixture(#[from] IoError),

    #[error("Collect error: {0}")]
    Collect(#[from] CollectError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
