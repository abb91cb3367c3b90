//! Error types for mock data generation.

use thiserror::Error;

/// Message carried by [`MockDataError::InvalidArgument`] for bad row counts.
pub const ROW_COUNT_MESSAGE: &str = "rowCount must be a positive integer";

/// Mock data errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockDataError {
    /// The caller passed an argument outside the accepted domain.
    #[error("{0}")]
    InvalidArgument(String),

    /// The requested rows do not fit in memory.
    #[error("cannot allocate {rows} rows")]
    TooManyRows { rows: u64 },
}

impl MockDataError {
    pub(crate) fn invalid_row_count() -> Self {
        Self::InvalidArgument(ROW_COUNT_MESSAGE.to_string())
    }
}

/// Result type for mock data operations.
pub type MockDataResult<T> = Result<T, MockDataError>;
