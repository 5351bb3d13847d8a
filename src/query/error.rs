use thiserror::Error;

use crate::collector::CollectError;

/// Query-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("No price found for listed item: {0}")]
    EmptyPriceGroup(String),

    #[error("Collect error: {0}")]
    Collect(#[from] CollectError),
}
